//! Session flows
//!
//! High-level glue between the typed request client and the
//! authorization context, the way the dashboard pages drive them. The
//! client stays free of session semantics; the reaction to a rejected
//! credential lives here.

use fastship_client::{ClientError, ClientResult, HttpClient, Profile};
use shared::models::{ShipmentCreate, ShipmentRead};
use shared::Role;

use super::auth::AuthContext;

/// Outcome of a shipment submission, categorized for display.
#[derive(Debug)]
pub enum ShipmentSubmission {
    Submitted(ShipmentRead),
    /// 406 from the server: no delivery partner serves the destination
    /// with free capacity. Not an authorization failure; the session
    /// stays intact.
    NoPartnersAvailable,
}

/// Log in through the role's token endpoint and adopt the credential.
///
/// The token endpoint is public, so no stale bearer header rides along.
pub async fn sign_in(
    ctx: &AuthContext,
    client: &HttpClient,
    role: Role,
    username: &str,
    password: &str,
) -> ClientResult<()> {
    let token = client.for_role(role).login(username, password).await?;
    ctx.login(role, token.access_token);
    Ok(())
}

/// Log out: best-effort server-side credential discard, then clear the
/// local session. The local session is cleared even when the server
/// call fails.
pub async fn sign_out(ctx: &AuthContext, client: &HttpClient) {
    if let Some(role) = ctx.role() {
        if let Err(err) = client.for_role(role).logout().await {
            tracing::warn!(error = %err, "Server-side logout failed, clearing local session anyway");
        }
    }
    ctx.logout();
}

/// Submit a shipment, distinguishing "no fulfillment capacity" from
/// generic failure. An authorization failure invalidates the session
/// before the error surfaces.
pub async fn create_shipment(
    ctx: &AuthContext,
    client: &HttpClient,
    data: &ShipmentCreate,
) -> ClientResult<ShipmentSubmission> {
    match client.shipment().create(data).await {
        Ok(shipment) => Ok(ShipmentSubmission::Submitted(shipment)),
        Err(ClientError::NoCapacity) => Ok(ShipmentSubmission::NoPartnersAvailable),
        Err(err) => {
            ctx.invalidate_if_auth_failure(&err);
            Err(err)
        }
    }
}

/// Load the signed-in account's profile through the role-bound group.
pub async fn load_profile(ctx: &AuthContext, client: &HttpClient) -> ClientResult<Profile> {
    let role = ctx.role().ok_or(ClientError::Unauthorized)?;
    match client.for_role(role).profile().await {
        Ok(profile) => Ok(profile),
        Err(err) => {
            ctx.invalidate_if_auth_failure(&err);
            Err(err)
        }
    }
}
