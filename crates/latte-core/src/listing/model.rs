//! Listing domain models.
//!
//! The canonical shape is the backend's rich marketplace entity. The client
//! never computes derived listing state beyond display formatting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quantity at or below which a listing is flagged as running out.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    Product,
    Experience,
}

/// A marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: ListingCategory,
    pub price: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Price formatted for display, e.g. `$4.50`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price.max(0.0))
    }

    /// True when few units remain (but the listing is not sold out), used
    /// to render the "only N left" warning.
    pub fn is_low_stock(&self) -> bool {
        self.quantity > 0 && self.quantity <= LOW_STOCK_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateListingRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: ListingCategory,
    pub price: f64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Field patch for an existing listing; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateListingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Collection response for listing queries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingPage {
    pub listings: Vec<Listing>,
    pub count: usize,
}
