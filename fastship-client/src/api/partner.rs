//! Delivery partner account operations

use crate::http::RequestSpec;
use crate::{ClientResult, HttpClient};
use shared::models::{DeliveryPartnerCreate, DeliveryPartnerRead, DeliveryPartnerUpdate};
use shared::{LoginForm, ResetPasswordForm, TokenData};

/// Delivery partner account lifecycle, parallel in shape to the seller
/// group plus serviceability updates.
pub struct PartnerApi<'a> {
    http: &'a HttpClient,
}

impl<'a> PartnerApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Register a new delivery partner account (public)
    pub async fn signup(&self, data: &DeliveryPartnerCreate) -> ClientResult<DeliveryPartnerRead> {
        self.http
            .request(RequestSpec::post("/partner/signup").json(data))
            .await
    }

    /// Exchange username/password for a bearer token (public)
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<TokenData> {
        let form = LoginForm::new(username, password);
        self.http
            .request(RequestSpec::post("/partner/token").form(&form))
            .await
    }

    /// Fetch the signed-in partner's profile (secured)
    pub async fn me(&self) -> ClientResult<DeliveryPartnerRead> {
        self.http
            .request::<DeliveryPartnerRead, ()>(RequestSpec::get("/partner/me").secure())
            .await
    }

    /// Update serviceable ZIP codes or handling capacity (secured)
    pub async fn update(&self, data: &DeliveryPartnerUpdate) -> ClientResult<DeliveryPartnerRead> {
        self.http
            .request(RequestSpec::post("/partner/").secure().json(data))
            .await
    }

    /// Confirm the address behind an email verification link (public)
    pub async fn verify_email(&self, token: &str) -> ClientResult<()> {
        let _: serde_json::Value = self
            .http
            .request(RequestSpec::get("/partner/verify").query("token", token))
            .await?;
        Ok(())
    }

    /// Send a password-reset link to the given address (public)
    pub async fn forgot_password(&self, email: &str) -> ClientResult<()> {
        let _: serde_json::Value = self
            .http
            .request(RequestSpec::get("/partner/forgot_password").query("email", email))
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
                RequestSpec::post("/partner/reset_password")
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
            .request::<serde_json::Value, ()>(RequestSpec::get("/partner/logout").secure())
            .await?;
        Ok(())
    }
}
