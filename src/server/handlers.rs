use super::types::*;
use crate::llm::{CompletionClient, RetryPolicy, complete_with_retry};
use crate::pagespeed::PagespeedClient;
use crate::{clv, sentiment};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionClient>,
    pub pagespeed: Arc<PagespeedClient>,
    pub retry: RetryPolicy,
    pub max_tokens: u32,
    pub default_prompt: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn bad_request(msg: &str) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
}

fn internal_error(e: crate::Error) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to the AI Digital Marketing Tool!".to_string(),
    })
}

pub async fn generate_content(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, HandlerError> {
    let prompt = request
        .prompt
        .unwrap_or_else(|| state.default_prompt.clone());

    info!("Received content generation request");

    match complete_with_retry(state.llm.as_ref(), &state.retry, &prompt, state.max_tokens).await {
        Ok(content) => Ok(Json(GenerateResponse { content })),
        Err(e) => {
            error!("Content generation failed: {}", e);
            Err(internal_error(e))
        }
    }
}

pub async fn seo_optimization(
    State(state): State<AppState>,
    Json(request): Json<SeoRequest>,
) -> Result<Json<SeoResponse>, HandlerError> {
    if request.url.is_empty() {
        return Err(bad_request("URL is required"));
    }

    info!("Received SEO audit request for: {}", request.url);

    match state.pagespeed.performance_score(&request.url).await {
        Ok(performance_score) => Ok(Json(SeoResponse {
            url: request.url,
            performance_score,
        })),
        Err(e) => {
            error!("PageSpeed audit failed for {}: {}", request.url, e);
            Err(internal_error(e))
        }
    }
}

pub async fn generate_ad_campaign(
    State(state): State<AppState>,
    Json(request): Json<AdCampaignRequest>,
) -> Result<Json<AdCampaignResponse>, HandlerError> {
    if request.product.is_empty() || request.audience.is_empty() || request.goal.is_empty() {
        return Err(bad_request("Missing required fields"));
    }

    info!("Received ad campaign request for: {}", request.product);

    let prompt = format!(
        "Generate an ad campaign for {} targeting {} to {}.",
        request.product, request.audience, request.goal
    );

    match complete_with_retry(state.llm.as_ref(), &state.retry, &prompt, state.max_tokens).await {
        Ok(ad_copy) => Ok(Json(AdCampaignResponse { ad_copy })),
        Err(e) => {
            error!("Ad campaign generation failed: {}", e);
            Err(internal_error(e))
        }
    }
}

pub async fn chatbot(
    State(state): State<AppState>,
    Json(request): Json<ChatbotRequest>,
) -> Result<Json<ChatbotResponse>, HandlerError> {
    if request.message.is_empty() {
        return Err(bad_request("Message is required"));
    }

    info!("Received chatbot message");

    match complete_with_retry(
        state.llm.as_ref(),
        &state.retry,
        &request.message,
        state.max_tokens,
    )
    .await
    {
        Ok(reply) => Ok(Json(ChatbotResponse { reply })),
        Err(e) => {
            error!("Chatbot reply failed: {}", e);
            Err(internal_error(e))
        }
    }
}

pub async fn predict_clv(
    Json(request): Json<ClvRequest>,
) -> Result<Json<ClvResponse>, HandlerError> {
    let customer = match request.customer {
        Some(customer) if !customer.is_empty() => customer,
        _ => return Err(bad_request("Customer data is required")),
    };

    let revenue = customer.revenue.unwrap_or(0.0);
    let frequency = customer.frequency.unwrap_or(1.0);
    let retention_rate = customer.retention_rate.unwrap_or(0.8);

    match clv::project(revenue, frequency, retention_rate) {
        Ok(clv) => Ok(Json(ClvResponse { clv })),
        Err(e) => {
            error!("CLV projection failed: {}", e);
            Err(internal_error(e))
        }
    }
}

pub async fn sentiment_analysis(
    Json(request): Json<SentimentRequest>,
) -> Result<Json<SentimentResponse>, HandlerError> {
    if request.text.is_empty() {
        return Err(bad_request("Text is required"));
    }

    let sentiment = sentiment::polarity(&request.text);

    Ok(Json(SentimentResponse {
        sentiment,
        text: request.text,
    }))
}
