//! Seller account operations

use crate::http::RequestSpec;
use crate::{ClientResult, HttpClient};
use shared::models::{SellerCreate, SellerRead};
use shared::{LoginForm, ResetPasswordForm, TokenData};

/// Seller account lifecycle: signup, login, profile, email verification,
/// password reset, logout.
pub struct SellerApi<'a> {
    http: &'a HttpClient,
}

impl<'a> SellerApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Register a new seller account (public)
    pub async fn signup(&self, data: &SellerCreate) -> ClientResult<SellerRead> {
        self.http
            .request(RequestSpec::post("/seller/signup").json(data))
            .await
    }

    /// Exchange username/password for a bearer token (public)
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<TokenData> {
        let form = LoginForm::new(username, password);
        self.http
            .request(RequestSpec::post("/seller/token").form(&form))
            .await
    }

    /// Fetch the signed-in seller's profile (secured)
    pub async fn me(&self) -> ClientResult<SellerRead> {
        self.http
            .request::<SellerRead, ()>(RequestSpec::get("/seller/me").secure())
            .await
    }

    /// Confirm the address behind an email verification link (public)
    pub async fn verify_email(&self, token: &str) -> ClientResult<()> {
        let _: serde_json::Value = self
            .http
            .request(RequestSpec::get("/seller/verify").query("token", token))
            .await?;
        Ok(())
    }

    /// Send a password-reset link to the given address (public)
    pub async fn forgot_password(&self, email: &str) -> ClientResult<()> {
        let _: serde_json::Value = self
            .http
            .request(RequestSpec::get("/seller/forgot_password").query("email", email))
            .await?;
        Ok(())
    }

    /// Set a new password using a reset-link token (public)
    pub async fn reset_password(&self, token: &str, password: &str) -> ClientResult<()> {
        let form = ResetPasswordForm {
            password: password.to_string(),
        };
        let _: serde_json::Value = self
            .http
            .request(
                RequestSpec::post("/seller/reset_password")
                    .query("token", token)
                    .form(&form),
            )
            .await?;
        Ok(())
    }

    /// Ask the server to discard the current credential (secured)
    pub async fn logout(&self) -> ClientResult<()> {
        let _: serde_json::Value = self
            .http
            .request::<serde_json::Value, ()>(RequestSpec::get("/seller/logout").secure())
            .await?;
        Ok(())
    }
}
