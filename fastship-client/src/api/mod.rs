//! Resource-scoped operation groups
//!
//! Each group binds a set of operations against one resource of the
//! server contract. The `secure` markers are fixed here, at the
//! operation definition sites.

mod partner;
mod seller;
mod shipment;

pub use partner::PartnerApi;
pub use seller::SellerApi;
pub use shipment::ShipmentApi;

use crate::{ClientResult, HttpClient};
use shared::models::{DeliveryPartnerRead, SellerRead};
use shared::{Role, TokenData};

/// Account profile, role-tagged.
#[derive(Debug, Clone)]
pub enum Profile {
    Seller(SellerRead),
    Partner(DeliveryPartnerRead),
}

impl Profile {
    pub fn name(&self) -> &str {
        match self {
            Profile::Seller(seller) => &seller.name,
            Profile::Partner(partner) => &partner.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Profile::Seller(seller) => &seller.email,
            Profile::Partner(partner) => &partner.email,
        }
    }
}

/// Operations bound to one actor role.
///
/// Resolves the role tag once at the call site instead of branching on
/// role strings in every view.
pub enum RoleApi<'a> {
    Seller(SellerApi<'a>),
    Partner(PartnerApi<'a>),
}

impl<'a> RoleApi<'a> {
    pub fn new(http: &'a HttpClient, role: Role) -> Self {
        match role {
            Role::Seller => RoleApi::Seller(SellerApi::new(http)),
            Role::Partner => RoleApi::Partner(PartnerApi::new(http)),
        }
    }

    /// Exchange username/password for a bearer token (public)
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<TokenData> {
        match self {
            RoleApi::Seller(api) => api.login(username, password).await,
            RoleApi::Partner(api) => api.login(username, password).await,
        }
    }

    /// Fetch the signed-in account's profile (secured)
    pub async fn profile(&self) -> ClientResult<Profile> {
        match self {
            RoleApi::Seller(api) => Ok(Profile::Seller(api.me().await?)),
            RoleApi::Partner(api) => Ok(Profile::Partner(api.me().await?)),
        }
    }

    /// Ask the server to discard the current credential (secured)
    pub async fn logout(&self) -> ClientResult<()> {
        match self {
            RoleApi::Seller(api) => api.logout().await,
            RoleApi::Partner(api) => api.logout().await,
        }
    }

    /// Send a password-reset link to the given address (public)
    pub async fn forgot_password(&self, email: &str) -> ClientResult<()> {
        match self {
            RoleApi::Seller(api) => api.forgot_password(email).await,
            RoleApi::Partner(api) => api.forgot_password(email).await,
        }
    }
}
