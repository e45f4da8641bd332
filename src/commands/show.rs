//! Show command implementation: the store's read surface.

use crate::cli::types::RecordKind;
use crate::storage::CricketDatabase;
use crate::Result;
use serde::Serialize;

/// Default row count for chart payloads, matching the dashboard's widgets.
const CHART_LIMIT: usize = 10;

/// Chart payload for the batting widget: parallel arrays indexed by player.
#[derive(Debug, Serialize)]
struct BattingChart {
    labels: Vec<String>,
    runs: Vec<u32>,
    sixes: Vec<u32>,
    strike_rates: Vec<f64>,
}

/// Chart payload for the bowling widget.
#[derive(Debug, Serialize)]
struct BowlingChart {
    labels: Vec<String>,
    wickets: Vec<u32>,
    economy: Vec<f64>,
}

/// Handle the show command.
///
/// Text mode prints readable lines; `--json` emits the chart payloads the
/// dashboard widgets consume (top-N by runs/wickets), or the full match list
/// for the match kind.
pub fn handle_show(kind: RecordKind, limit: Option<usize>, json: bool) -> Result<()> {
    let db = CricketDatabase::new()?;

    match kind {
        RecordKind::Match => {
            let mut matches = db.all_matches()?;
            if let Some(n) = limit {
                matches.truncate(n);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                for m in &matches {
                    println!(
                        "{:>3}. {} at {}: {} {} vs {} {} - {} by {} ({})",
                        m.match_no,
                        m.date,
                        m.venue,
                        m.team1,
                        m.score1,
                        m.team2,
                        m.score2,
                        m.winner,
                        m.margin,
                        m.player_of_match
                    );
                }
            }
        }
        RecordKind::Batting => {
            if json {
                let players = db.top_batting(limit.unwrap_or(CHART_LIMIT))?;
                let chart = BattingChart {
                    labels: players.iter().map(|p| p.player_name.clone()).collect(),
                    runs: players.iter().map(|p| p.runs).collect(),
                    sixes: players.iter().map(|p| p.sixes).collect(),
                    strike_rates: players.iter().map(|p| p.strike_rate).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                let mut players = db.batting_by_rank()?;
                if let Some(n) = limit {
                    players.truncate(n);
                }
                for p in &players {
                    println!(
                        "{:>3}. {} ({}) - {} runs in {} matches, avg {:.2}, SR {:.2}, HS {}",
                        p.rank, p.player_name, p.team, p.runs, p.matches, p.average,
                        p.strike_rate, p.high_score
                    );
                }
            }
        }
        RecordKind::Bowling => {
            if json {
                let players = db.top_bowling(limit.unwrap_or(CHART_LIMIT))?;
                let chart = BowlingChart {
                    labels: players.iter().map(|p| p.player_name.clone()).collect(),
                    wickets: players.iter().map(|p| p.wickets).collect(),
                    economy: players.iter().map(|p| p.economy).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                let mut players = db.bowling_by_rank()?;
                if let Some(n) = limit {
                    players.truncate(n);
                }
                for p in &players {
                    println!(
                        "{:>3}. {} ({}) - {} wickets in {} matches, best {}, econ {:.2}",
                        p.rank, p.player_name, p.team, p.wickets, p.matches, p.best_figures,
                        p.economy
                    );
                }
            }
        }
    }

    Ok(())
}
