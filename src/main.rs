//! parlay-ranker — EV-ranked player-prop parlays.
//!
//! Entry point. Loads configuration, initialises structured logging,
//! loads the prop slate, prints the ranked parlays, and optionally serves
//! the dashboard until Ctrl+C.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use parlay_ranker::config::AppConfig;
use parlay_ranker::dashboard::{self, routes::DashboardState};
use parlay_ranker::report::render_report;
use parlay_ranker::slate::load_slate;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let config_path = AppConfig::path_from_env();
    let cfg = AppConfig::load_or_default(&config_path)?;
    cfg.validate()?;

    let rank_config = cfg.rank_config();
    info!(
        config = %config_path,
        max_legs = rank_config.max_legs,
        top_n = rank_config.top_n,
        bankroll = cfg.ranker.bankroll,
        "parlay-ranker starting up"
    );

    let source = cfg.prop_source();
    let slate = load_slate(source.as_ref())?;

    let ranker = cfg.build_ranker();
    let report = ranker.rank_with_report(&slate, &rank_config, None)?;
    print!("{}", render_report(&report.parlays, cfg.slate.date));

    if cfg.dashboard.enabled {
        let state = Arc::new(DashboardState::new(
            slate,
            ranker,
            rank_config,
            cfg.dashboard.max_legs_cap,
        ));
        dashboard::serve(state, cfg.dashboard.port).await?;
    }

    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("parlay_ranker=info"));

    let json_logging = std::env::var("PARLAY_LOG_JSON").is_ok();

    // Logs go to stderr so the report on stdout stays clean.
    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
