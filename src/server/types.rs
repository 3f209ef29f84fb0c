use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct SeoRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SeoResponse {
    pub url: String,
    pub performance_score: f64,
}

#[derive(Debug, Deserialize)]
pub struct AdCampaignRequest {
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub goal: String,
}

#[derive(Debug, Serialize)]
pub struct AdCampaignResponse {
    pub ad_copy: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatbotRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatbotResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct ClvRequest {
    #[serde(default)]
    pub customer: Option<Customer>,
}

#[derive(Debug, Deserialize)]
pub struct Customer {
    pub revenue: Option<f64>,
    pub frequency: Option<f64>,
    pub retention_rate: Option<f64>,
}

impl Customer {
    /// A customer object with no fields at all reads as missing data.
    pub fn is_empty(&self) -> bool {
        self.revenue.is_none() && self.frequency.is_none() && self.retention_rate.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct ClvResponse {
    pub clv: f64,
}

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub sentiment: f64,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
