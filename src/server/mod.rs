pub mod handlers;
pub mod types;

use crate::llm::{OpenAiClient, RetryPolicy};
use crate::pagespeed::PagespeedClient;
use crate::{Error, Result, config::Config};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState, allowed_origin: &str) -> Result<Router> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .map_err(|_| Error::config(format!("Invalid CORS origin: {}", allowed_origin)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .route("/", get(handlers::home))
        .route("/generate", post(handlers::generate_content))
        .route("/seo", post(handlers::seo_optimization))
        .route("/ad-campaign", post(handlers::generate_ad_campaign))
        .route("/chatbot", post(handlers::chatbot))
        .route("/clv", post(handlers::predict_clv))
        .route("/sentiment", post(handlers::sentiment_analysis))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

pub async fn run(config: Config) -> Result<()> {
    // Create application state
    let app_state = AppState {
        llm: Arc::new(OpenAiClient::new(config.llm.clone())),
        pagespeed: Arc::new(PagespeedClient::new(config.pagespeed.clone())),
        retry: RetryPolicy::default(),
        max_tokens: config.llm.max_tokens,
        default_prompt: config.llm.default_prompt.clone(),
    };

    // Create router
    let app = router(app_state, &config.server.allowed_origin)?;

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
