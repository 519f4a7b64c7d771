use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bysykkel_server::availability::Board;
use bysykkel_server::config::AppConfig;
use bysykkel_server::gbfs::{FeedSource, GbfsClient, MockFeeds};
use bysykkel_server::web::{AppState, create_router};

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("info,bysykkel_server=debug,tower_http=debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(false);
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.debug);

    // Feeds come from files when a mock directory is configured
    let provider = match &config.mock_dir {
        Some(dir) => match MockFeeds::new(dir) {
            Ok(feeds) => {
                info!(dir = %dir.display(), "serving mock feeds");
                FeedSource::Mock(feeds)
            }
            Err(e) => {
                error!(error = %e, "could not load mock feeds");
                return ExitCode::FAILURE;
            }
        },
        None => match GbfsClient::new(config.feeds.clone()) {
            Ok(client) => FeedSource::Live(client),
            Err(e) => {
                error!(error = %e, "could not create feed client");
                return ExitCode::FAILURE;
            }
        },
    };

    info!(
        count = config.targets.len(),
        stations = ?config.targets.names(),
        "board targets"
    );
    let board = Board::new(provider, config.targets);
    let state = AppState::new(board, config.widget);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind, error = %e, "could not bind");
            return ExitCode::FAILURE;
        }
    };

    info!("Bergen Bysykkel board listening on http://{}", config.bind);
    info!("  GET  /                  - Board page (?lang=en|nb)");
    info!("  GET  /widget            - Embeddable board fragment");
    info!("  GET  /api/availability  - Board as JSON");
    info!("  GET  /health            - Health check");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
