use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::batch::BatchId;
use crate::product::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Da,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub language: Language,
    pub notifications: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactTotals {
    pub co2_saved: f64,
    pub waste_diverted: f64,
}

/// Account shape. No page reads it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub favorite_products: Vec<ProductId>,
    #[serde(default)]
    pub scanned_batches: Vec<BatchId>,
    #[serde(default)]
    pub total_impact: Option<ImpactTotals>,
    pub newsletter: bool,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}
