//! Built-in sample slate: eight NBA and three NHL player props with
//! plausible prices. Used when no slate file is configured.

use anyhow::Result;

use super::PropSource;
use crate::types::{PlayerProp, PropMarket, Selection, Sport};

struct SampleRow {
    id: &'static str,
    sport: Sport,
    player: &'static str,
    team: &'static str,
    opponent: &'static str,
    market: PropMarket,
    selection: Selection,
    line: f64,
    odds_american: i32,
    implied_probability: f64,
}

const SAMPLE_ROWS: &[SampleRow] = &[
    SampleRow { id: "nba1", sport: Sport::Nba, player: "Jayson Tatum", team: "BOS", opponent: "NYK", market: PropMarket::Points, selection: Selection::Over, line: 27.5, odds_american: -110, implied_probability: 0.56 },
    SampleRow { id: "nba2", sport: Sport::Nba, player: "Jalen Brunson", team: "NYK", opponent: "BOS", market: PropMarket::Assists, selection: Selection::Over, line: 5.5, odds_american: -105, implied_probability: 0.55 },
    SampleRow { id: "nba3", sport: Sport::Nba, player: "Giannis Antetokounmpo", team: "MIL", opponent: "CHI", market: PropMarket::Rebounds, selection: Selection::Over, line: 11.5, odds_american: -115, implied_probability: 0.58 },
    SampleRow { id: "nba4", sport: Sport::Nba, player: "DeMar DeRozan", team: "CHI", opponent: "MIL", market: PropMarket::Points, selection: Selection::Under, line: 22.5, odds_american: -102, implied_probability: 0.53 },
    SampleRow { id: "nba5", sport: Sport::Nba, player: "Tyrese Haliburton", team: "IND", opponent: "ORL", market: PropMarket::Assists, selection: Selection::Over, line: 10.5, odds_american: -120, implied_probability: 0.60 },
    SampleRow { id: "nba6", sport: Sport::Nba, player: "Paolo Banchero", team: "ORL", opponent: "IND", market: PropMarket::Points, selection: Selection::Over, line: 21.5, odds_american: -108, implied_probability: 0.54 },
    SampleRow { id: "nba7", sport: Sport::Nba, player: "Nikola Jokic", team: "DEN", opponent: "DAL", market: PropMarket::Assists, selection: Selection::Over, line: 8.5, odds_american: -112, implied_probability: 0.57 },
    SampleRow { id: "nba8", sport: Sport::Nba, player: "Luka Doncic", team: "DAL", opponent: "DEN", market: PropMarket::Points, selection: Selection::Over, line: 30.5, odds_american: -118, implied_probability: 0.58 },
    SampleRow { id: "nhl1", sport: Sport::Nhl, player: "Auston Matthews", team: "TOR", opponent: "BUF", market: PropMarket::Shots, selection: Selection::Over, line: 4.5, odds_american: -125, implied_probability: 0.61 },
    SampleRow { id: "nhl2", sport: Sport::Nhl, player: "Connor McDavid", team: "EDM", opponent: "VGK", market: PropMarket::Shots, selection: Selection::Over, line: 3.5, odds_american: -135, implied_probability: 0.63 },
    SampleRow { id: "nhl3", sport: Sport::Nhl, player: "Igor Shesterkin", team: "NYR", opponent: "PIT", market: PropMarket::Saves, selection: Selection::Over, line: 27.5, odds_american: -105, implied_probability: 0.55 },
];

/// The static sample slate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSlate;

impl SampleSlate {
    pub fn props() -> Vec<PlayerProp> {
        SAMPLE_ROWS
            .iter()
            .map(|r| PlayerProp {
                id: r.id.to_string(),
                sport: r.sport,
                player: r.player.to_string(),
                team: r.team.to_string(),
                opponent: r.opponent.to_string(),
                market: r.market,
                selection: r.selection,
                line: r.line,
                odds_american: r.odds_american,
                implied_probability: r.implied_probability,
            })
            .collect()
    }
}

impl PropSource for SampleSlate {
    fn name(&self) -> String {
        "sample".to_string()
    }

    fn load(&self) -> Result<Vec<PlayerProp>> {
        Ok(Self::props())
    }
}
