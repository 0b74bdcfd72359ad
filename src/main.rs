use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_admin::advisor::AdvisorApi;
use advisor_admin::config::AppConfig;
use advisor_admin::routes::router;
use advisor_admin::session::{NoSessions, SessionResolver, StaticSessions};
use advisor_admin::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "advisor_admin=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;
    let api = AdvisorApi::new(&config)?;

    let sessions: Arc<dyn SessionResolver> = match &config.sessions_file {
        Some(path) => {
            let sessions = StaticSessions::from_file(path)?;
            info!("loaded {} session(s) from {}", sessions.len(), path.display());
            Arc::new(sessions)
        }
        None => {
            warn!("ADVISOR_SESSIONS_FILE is not set; every page request will be rejected");
            Arc::new(NoSessions)
        }
    };

    let state = AppState { api, sessions };
    let app = router(state);

    info!("proxying advising API at {}", config.api_url);
    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
