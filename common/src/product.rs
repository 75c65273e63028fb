use serde::{Deserialize, Serialize};

use crate::batch::BatchId;

/// Catalog product identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

/// Family of fermented product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    DriedKoji,
    FreshKoji,
    Miso,
    Shoyu,
    Garum,
}

impl ProductType {
    pub fn label(self) -> &'static str {
        match self {
            ProductType::DriedKoji => "Dried Koji",
            ProductType::FreshKoji => "Fresh Koji",
            ProductType::Miso => "Miso",
            ProductType::Shoyu => "Shoyu",
            ProductType::Garum => "Garum",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

/// A product listing in the shop catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub price: f64,
    pub currency: String,
    pub unit: String,
    pub in_stock: bool,
    pub images: Vec<String>,
    #[serde(default)]
    pub current_batch_id: Option<BatchId>,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub nutritional_info: Option<NutritionalInfo>,
    #[serde(default)]
    pub usage_instructions: Option<String>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    pub shelf_life: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeDifficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: RecipeDifficulty,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub images: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    pub tags: Vec<String>,
    /// Product ids the recipe calls for.
    pub required_products: Vec<ProductId>,
}
