//! Authorized data calls behind the guarded routes.
//!
//! Every call takes the session's bearer token explicitly; nothing here reads
//! the store, so pages decide what to do when the token is missing.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::api::{Transport, decode, encode, encode_path_segment};
use crate::error::ApiError;

/// A shipment owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub tracking_number: String,
    pub status: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_city: String,
    #[serde(default)]
    pub recipient_state: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub delivered_at: Option<String>,
}

/// One scan event on a shipment's route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub location: String,
    pub description: String,
    pub event_time: String,
}

/// Reply of `GET /tracking/{number}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackingDetails {
    pub shipment: Shipment,
    #[serde(default)]
    pub events: Vec<TrackingEvent>,
}

/// Reply of `GET /reports/statistics`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    pub total_shipments: u64,
    #[serde(default)]
    pub status_counts: BTreeMap<String, u64>,
}

/// Reply of `GET /reports/shipment-report`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentReport {
    pub total_shipments: u64,
    #[serde(default)]
    pub status_counts: BTreeMap<String, u64>,
    #[serde(default)]
    pub delivery_rate: f64,
    #[serde(default)]
    pub shipments: Vec<Shipment>,
}

/// Body of `POST /tracking/create`. Every field is required by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipment {
    pub recipient_name: String,
    pub recipient_address: String,
    pub recipient_city: String,
    pub recipient_state: String,
    pub recipient_zip_code: String,
}

impl CreateShipment {
    /// Trimmed copy of the request.
    ///
    /// # Errors
    ///
    /// Returns the label of the first blank field.
    pub fn validated(&self) -> Result<Self, &'static str> {
        let fields = [
            (&self.recipient_name, "Recipient name"),
            (&self.recipient_address, "Recipient address"),
            (&self.recipient_city, "Recipient city"),
            (&self.recipient_state, "Recipient state"),
            (&self.recipient_zip_code, "Recipient zip code"),
        ];
        if let Some((_, label)) = fields.into_iter().find(|(value, _)| value.trim().is_empty()) {
            return Err(label);
        }
        Ok(Self {
            recipient_name: self.recipient_name.trim().to_owned(),
            recipient_address: self.recipient_address.trim().to_owned(),
            recipient_city: self.recipient_city.trim().to_owned(),
            recipient_state: self.recipient_state.trim().to_owned(),
            recipient_zip_code: self.recipient_zip_code.trim().to_owned(),
        })
    }
}

#[derive(Deserialize)]
struct ShipmentList {
    shipments: Vec<Shipment>,
}

/// List the user's shipments.
///
/// # Errors
///
/// Returns the transport's [`ApiError`] or `Parse` on an unexpected body.
pub async fn my_shipments<T: Transport + ?Sized>(transport: &T, token: &str) -> Result<Vec<Shipment>, ApiError> {
    let value = transport.get_json("/tracking/my-shipments", &[], Some(token)).await?;
    decode::<ShipmentList>(value).map(|list| list.shipments)
}

/// Look up one shipment and its events by tracking number.
///
/// # Errors
///
/// Returns `Serialization` without a request when the tracking number is blank.
/// Otherwise same as [`my_shipments`]; the backend answers 404/403 with an
/// `{error}` body.
pub async fn track_shipment<T: Transport + ?Sized>(
    transport: &T,
    token: &str,
    tracking_number: &str,
) -> Result<TrackingDetails, ApiError> {
    let path = tracking_path(tracking_number)
        .ok_or_else(|| ApiError::Serialization("tracking number is required".to_owned()))?;
    let value = transport.get_json(&path, &[], Some(token)).await?;
    decode(value)
}

/// Create a shipment for the user. The backend assigns the tracking number
/// and starts it as `PENDING`.
///
/// # Errors
///
/// Returns `Serialization` without a request when a field is blank.
/// Otherwise same as [`my_shipments`].
pub async fn create_shipment<T: Transport + ?Sized>(
    transport: &T,
    token: &str,
    request: &CreateShipment,
) -> Result<Shipment, ApiError> {
    let request = request
        .validated()
        .map_err(|label| ApiError::Serialization(format!("{label} is required")))?;
    let value = transport.post_json("/tracking/create", encode(&request)?, Some(token)).await?;
    decode(value)
}

/// Shipment counts per status for the user.
///
/// # Errors
///
/// Same as [`my_shipments`].
pub async fn statistics<T: Transport + ?Sized>(transport: &T, token: &str) -> Result<UserStatistics, ApiError> {
    let value = transport.get_json("/reports/statistics", &[], Some(token)).await?;
    decode(value)
}

/// Report over shipments created between two ISO-8601 date-times.
///
/// # Errors
///
/// Same as [`my_shipments`].
pub async fn shipment_report<T: Transport + ?Sized>(
    transport: &T,
    token: &str,
    start: &str,
    end: &str,
) -> Result<ShipmentReport, ApiError> {
    let query = [("startDate", start), ("endDate", end)];
    let value = transport.get_json("/reports/shipment-report", &query, Some(token)).await?;
    decode(value)
}

fn tracking_path(tracking_number: &str) -> Option<String> {
    let trimmed = tracking_number.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("/tracking/{}", encode_path_segment(trimmed)))
}
