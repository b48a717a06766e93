use serde::{Deserialize, Serialize};

pub type CourtId = i64;
pub type PartnerId = i64;

/// Business owning one or more courts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub approved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: CourtId,
    pub partner_id: PartnerId,
    pub name: String,
    pub sport: String,
    pub surface: Option<String>,
    #[serde(default)]
    pub indoor: bool,
    pub price_per_hour: f64,
    pub image_url: Option<String>,
}

impl Court {
    /// Price for `duration` minutes at the hourly rate.
    pub fn price_for(&self, duration: u32) -> f64 {
        self.price_per_hour * f64::from(duration) / 60.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourtRequest {
    pub name: String,
    pub sport: String,
    pub surface: Option<String>,
    pub indoor: bool,
    pub price_per_hour: f64,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourtRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indoor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Row of the marketing pricing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Billing period label, e.g. "hour" or "month"
    pub period: String,
    #[serde(default)]
    pub features: Vec<String>,
}
