//! Dashboard API route handlers.
//!
//! All endpoints return JSON. The slate is loaded once at startup and
//! shared read-only via `Arc<DashboardState>`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::strategy::{ParlayRanker, RankConfig};
use crate::types::{PlayerProp, RankedParlay};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct DashboardState {
    pub slate: Vec<PlayerProp>,
    pub ranker: ParlayRanker,
    /// Used when a query omits `max_legs` / `top_n`.
    pub defaults: RankConfig,
    pub max_legs_cap: usize,
}

impl DashboardState {
    pub fn new(slate: Vec<PlayerProp>, ranker: ParlayRanker, defaults: RankConfig, max_legs_cap: usize) -> Self {
        Self {
            slate,
            ranker,
            defaults,
            max_legs_cap,
        }
    }

    /// Merge query overrides with the defaults, capping `max_legs`.
    pub fn rank_config(&self, query: &ParlayQuery) -> RankConfig {
        RankConfig {
            max_legs: query
                .max_legs
                .unwrap_or(self.defaults.max_legs)
                .min(self.max_legs_cap),
            top_n: query.top_n.unwrap_or(self.defaults.top_n),
        }
    }
}

pub type AppState = Arc<DashboardState>;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParlayQuery {
    pub max_legs: Option<usize>,
    pub top_n: Option<usize>,
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// GET /api/parlays
pub async fn get_parlays(
    State(state): State<AppState>,
    Query(query): Query<ParlayQuery>,
) -> Result<Json<Vec<RankedParlay>>, StatusCode> {
    let config = state.rank_config(&query);
    debug!(max_legs = config.max_legs, top_n = config.top_n, "Ranking request");

    // Enumeration is CPU-bound; keep it off the async workers.
    let ranked = tokio::task::spawn_blocking(move || state.ranker.rank(&state.slate, &config))
        .await
        .map_err(|e| {
            error!(error = %e, "Ranking task failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(ranked))
}

/// GET /api/slate
pub async fn get_slate(State(state): State<AppState>) -> Json<Vec<PlayerProp>> {
    Json(state.slate.clone())
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slate::SampleSlate;

    fn test_state() -> AppState {
        Arc::new(DashboardState::new(
            SampleSlate::props(),
            ParlayRanker::default(),
            RankConfig::default(),
            4,
        ))
    }

    #[test]
    fn test_query_overrides_and_cap() {
        let state = test_state();
        assert_eq!(state.rank_config(&ParlayQuery::default()), RankConfig::default());

        let q = ParlayQuery { max_legs: Some(9), top_n: Some(2) };
        assert_eq!(state.rank_config(&q), RankConfig { max_legs: 4, top_n: 2 });
    }

    #[tokio::test]
    async fn test_get_parlays_handler() {
        let Json(parlays) = get_parlays(State(test_state()), Query(ParlayQuery::default()))
            .await
            .unwrap();
        assert!(!parlays.is_empty());
        assert!(parlays.len() <= 8);
        assert_eq!(parlays[0].rank, 1);
    }

    #[tokio::test]
    async fn test_get_parlays_top_n_zero() {
        let q = ParlayQuery { max_legs: None, top_n: Some(0) };
        let Json(parlays) = get_parlays(State(test_state()), Query(q)).await.unwrap();
        assert!(parlays.is_empty());
    }

    #[tokio::test]
    async fn test_get_slate_handler() {
        let Json(slate) = get_slate(State(test_state())).await;
        assert_eq!(slate.len(), 11);
    }

    #[tokio::test]
    async fn test_health_handler() {
        assert_eq!(health().await, StatusCode::OK);
    }
}
