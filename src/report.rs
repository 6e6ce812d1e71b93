//! Report model: everything the bulletin shows, computed before any rendering.

use jiff::civil::Date;
use serde::Serialize;

use crate::aggregate::Timelines;
use crate::config::Settings;
use crate::leaderboard::{Board, DepthIncidents, cautionary_tales};
use crate::model::{CharacterTimeline, Field};
use crate::store::{Direction, Query, ReportStore};

/// Dungeon-wide statistics.
///
/// Outcome counts are per report, not per character: a character whose
/// log carries two `DEATH` rows counts twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_reports: usize,
    pub total_adventurers: usize,
    /// Adventurers minus retired and dead/MIA; negative on inconsistent logs.
    pub active: i64,
    pub retired: usize,
    pub dead_or_missing: usize,
    /// Deepest depth in any report; absent for an empty log.
    pub deepest: Option<i64>,
    /// Data rows discarded as malformed.
    pub dropped_rows: usize,
}

impl Summary {
    pub fn compute(store: &ReportStore, dropped_rows: usize) -> Self {
        let outcome = |tag: &str| store.count(&Query::new().filter(Field::NextContext, tag));

        let total_reports = store.count(&Query::new());
        let total_adventurers = store.distinct_values(Field::Character).len();
        let dead_or_missing = outcome("DEATH") + outcome("QUIT");
        let retired = outcome("RETIRE");
        let deepest = store
            .find_one(Field::Depth, Direction::Descending)
            .ok()
            .map(|r| r.depth);

        Self {
            total_reports,
            total_adventurers,
            active: as_signed(total_adventurers)
                - as_signed(dead_or_missing)
                - as_signed(retired),
            retired,
            dead_or_missing,
            deepest,
            dropped_rows,
        }
    }
}

fn as_signed(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// One ranked leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard<'a> {
    pub board: Board,
    pub entries: Vec<&'a CharacterTimeline<'a>>,
}

/// The full bulletin, ready for a renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportModel<'a> {
    pub guild_name: &'a str,
    pub dungeon_name: &'a str,
    /// Date printed under the title.
    pub updated_on: Date,
    pub leaderboard_size: usize,
    pub show_empty_sections: bool,
    pub hall_of_fame_url: Option<&'a str>,
    pub contribute_url: Option<&'a str>,
    pub summary: Summary,
    /// One per [`Board`], in bulletin order.
    pub leaderboards: Vec<Leaderboard<'a>>,
    pub cautionary_tales: Vec<DepthIncidents<'a>>,
}

impl<'a> ReportModel<'a> {
    pub fn build(
        store: &'a ReportStore,
        timelines: &'a Timelines<'a>,
        settings: &'a Settings,
        updated_on: Date,
        dropped_rows: usize,
    ) -> Self {
        let leaderboards = Board::ALL
            .into_iter()
            .map(|board| Leaderboard {
                board,
                entries: board.rank(timelines, settings.leaderboard_size),
            })
            .collect();

        Self {
            guild_name: &settings.guild_name,
            dungeon_name: &settings.dungeon_name,
            updated_on,
            leaderboard_size: settings.leaderboard_size,
            show_empty_sections: settings.show_empty_sections,
            hall_of_fame_url: settings.hall_of_fame_url.as_deref(),
            contribute_url: settings.contribute_url.as_deref(),
            summary: Summary::compute(store, dropped_rows),
            leaderboards,
            cautionary_tales: cautionary_tales(
                store,
                &settings.incident_context,
                settings.incident_limit,
            ),
        }
    }

    pub fn leaderboard(&self, board: Board) -> Option<&Leaderboard<'a>> {
        self.leaderboards.iter().find(|l| l.board == board)
    }
}
