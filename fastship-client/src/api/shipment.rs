//! Shipment operations

use crate::http::RequestSpec;
use crate::{ClientResult, HttpClient};
use shared::models::{ReviewCreate, ShipmentCreate, ShipmentRead, ShipmentUpdate};
use shared::TagName;
use uuid::Uuid;

/// Shipment management: tracking is public, mutation requires the
/// owning seller's (or assigned partner's) credential.
pub struct ShipmentApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ShipmentApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Fetch a shipment with its timeline (public, used by tracking links)
    pub async fn get(&self, id: Uuid) -> ClientResult<ShipmentRead> {
        self.http
            .request(RequestSpec::get("/shipment/").query("id", id))
            .await
    }

    /// Submit a new shipment (secured).
    ///
    /// A 406 response means no delivery partner serves the destination
    /// with free capacity; it surfaces as [`crate::ClientError::NoCapacity`].
    pub async fn create(&self, data: &ShipmentCreate) -> ClientResult<ShipmentRead> {
        self.http
            .request(RequestSpec::post("/shipment/").secure().json(data))
            .await
    }

    /// Update shipment status/location (secured)
    pub async fn update(&self, id: Uuid, data: &ShipmentUpdate) -> ClientResult<ShipmentRead> {
        self.http
            .request(
                RequestSpec::patch("/shipment/")
                    .query("id", id)
                    .secure()
                    .json(data),
            )
            .await
    }

    /// Cancel a shipment; only the owning seller may do this (secured)
    pub async fn cancel(&self, id: Uuid) -> ClientResult<ShipmentRead> {
        let path = format!("/shipment/{}/cancel", id);
        self.http
            .request::<ShipmentRead, ()>(RequestSpec::post(&path).secure())
            .await
    }

    /// List shipments carrying a tag (public)
    pub async fn tagged(&self, tag: TagName) -> ClientResult<Vec<ShipmentRead>> {
        self.http
            .request(RequestSpec::get("/shipment/tagged").query("tag_name", tag))
            .await
    }

    /// Attach a tag to a shipment (public)
    pub async fn add_tag(&self, id: Uuid, tag: TagName) -> ClientResult<ShipmentRead> {
        self.http
            .request(
                RequestSpec::get("/shipment/tag")
                    .query("id", id)
                    .query("tag_name", tag),
            )
            .await
    }

    /// Detach a tag from a shipment (public)
    pub async fn remove_tag(&self, id: Uuid, tag: TagName) -> ClientResult<ShipmentRead> {
        self.http
            .request(
                RequestSpec::delete("/shipment/remove_tag")
                    .query("id", id)
                    .query("tag_name", tag),
            )
            .await
    }

    /// Submit a delivery review through a review-link token (public)
    pub async fn submit_review(&self, token: &str, review: &ReviewCreate) -> ClientResult<()> {
        let _: serde_json::Value = self
            .http
            .request(
                RequestSpec::post("/shipment/review")
                    .query("token", token)
                    .form(review),
            )
            .await?;
        Ok(())
    }
}
