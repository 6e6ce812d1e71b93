//! Leaderboards: ranked top-N views over character timelines, plus the
//! per-depth near-death listing.

use serde::Serialize;

use crate::aggregate::Timelines;
use crate::model::{CharacterTimeline, Field, FieldValue, QuestReport};
use crate::store::{Direction, Query, ReportStore};

/// Rank timelines by `key`, highest first, keeping at most `n`.
///
/// Only timelines accepted by `filter` take part. Fewer than `n` qualifying
/// timelines are all returned. Equal keys keep their order in `timelines`.
pub fn top_n<'t, 'a, K, F>(
    timelines: &'t Timelines<'a>,
    key: impl Fn(&CharacterTimeline<'a>) -> K,
    n: usize,
    filter: F,
) -> Vec<&'t CharacterTimeline<'a>>
where
    K: Ord,
    F: Fn(&CharacterTimeline<'a>) -> bool,
{
    let mut ranked: Vec<&CharacterTimeline<'a>> =
        timelines.iter().filter(|t| filter(*t)).collect();
    // Stable sort keeps first-appearance order among equal keys.
    ranked.sort_by(|a, b| key(*b).cmp(&key(*a)));
    ranked.truncate(n);
    ranked
}

/// The character leaderboards of the bulletin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Board {
    /// Deepest dive by any character.
    DeepestDivers,
    /// Deepest dive among retired characters.
    LivingLegends,
    /// Most quest reports filed.
    LongestLived,
}

impl Board {
    pub const ALL: [Board; 3] = [
        Board::DeepestDivers,
        Board::LivingLegends,
        Board::LongestLived,
    ];

    /// The value this board ranks by.
    pub fn key(self, timeline: &CharacterTimeline<'_>) -> i64 {
        match self {
            Self::DeepestDivers | Self::LivingLegends => timeline.max_depth,
            Self::LongestLived => i64::try_from(timeline.len()).unwrap_or(i64::MAX),
        }
    }

    /// Whether a timeline may appear on this board at all.
    pub fn admits(self, timeline: &CharacterTimeline<'_>) -> bool {
        match self {
            Self::LivingLegends => timeline.is_retired(),
            Self::DeepestDivers | Self::LongestLived => true,
        }
    }

    pub fn rank<'t, 'a>(
        self,
        timelines: &'t Timelines<'a>,
        n: usize,
    ) -> Vec<&'t CharacterTimeline<'a>> {
        top_n(timelines, |t| self.key(t), n, |t| self.admits(t))
    }
}

/// Near-death reports recorded at one depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepthIncidents<'a> {
    pub depth: i64,
    /// Lowest remaining hp first.
    pub reports: Vec<&'a QuestReport>,
}

/// For every depth in the store, ascending, the `limit` reports with the
/// least hp whose previous outcome was `context`.
///
/// Depths without a matching report are left out.
pub fn cautionary_tales<'a>(
    store: &'a ReportStore,
    context: &str,
    limit: usize,
) -> Vec<DepthIncidents<'a>> {
    store
        .distinct_values(Field::Depth)
        .into_iter()
        .filter_map(FieldValue::as_int)
        .filter_map(|depth| {
            let query = Query::new()
                .filter(Field::LastContext, context)
                .filter(Field::Depth, depth)
                .order_by(Field::Hp, Direction::Ascending)
                .limit(limit);
            let reports = store.find(&query);
            (!reports.is_empty()).then_some(DepthIncidents { depth, reports })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::aggregate::aggregate;
    use crate::model::testing::report;

    fn names<'a>(ranked: &[&CharacterTimeline<'a>]) -> Vec<&'a str> {
        ranked.iter().map(|t| t.character).collect()
    }

    #[test]
    fn top_n_ranks_descending_and_truncates() {
        let store: ReportStore = [
            report("A", "p", 50, 10, "", "ALIVE"),
            report("B", "p", 80, 10, "", "ALIVE"),
            report("C", "p", 80, 10, "", "ALIVE"),
            report("D", "p", 10, 10, "", "ALIVE"),
        ]
        .into_iter()
        .collect();
        let timelines = aggregate(&store);

        let ranked = names(&Board::DeepestDivers.rank(&timelines, 3));
        assert_eq!(ranked.len(), 3);
        assert!(ranked[..2].contains(&"B"));
        assert!(ranked[..2].contains(&"C"));
        assert_eq!(ranked[2], "A");
        assert!(!ranked.contains(&"D"));
    }

    #[test]
    fn retirement_filter_excludes_the_dead() {
        let store: ReportStore = [
            report("Deep", "p", 500, 10, "", "DEATH"),
            report("Gone", "p", 400, 10, "", "QUIT"),
            report("Vet", "p", 100, 10, "", "RETIRE"),
        ]
        .into_iter()
        .collect();
        let timelines = aggregate(&store);

        assert_eq!(names(&Board::LivingLegends.rank(&timelines, 3)), vec!["Vet"]);
    }

    #[test]
    fn status_is_the_latest_outcome() {
        let store: ReportStore = [
            report("Vet", "p", 100, 10, "", "RETIRE"),
            report("Vet", "p", 120, 10, "", "DEATH"),
        ]
        .into_iter()
        .collect();
        let timelines = aggregate(&store);

        assert!(Board::LivingLegends.rank(&timelines, 3).is_empty());
    }

    #[test]
    fn longest_lived_counts_reports() {
        let store: ReportStore = [
            report("Short", "p", 900, 10, "", "ALIVE"),
            report("Long", "p", 1, 10, "", "ALIVE"),
            report("Long", "p", 2, 10, "", "ALIVE"),
            report("Long", "p", 3, 10, "", "ALIVE"),
            report("Mid", "p", 1, 10, "", "ALIVE"),
            report("Mid", "p", 1, 10, "", "ALIVE"),
        ]
        .into_iter()
        .collect();
        let timelines = aggregate(&store);

        assert_eq!(
            names(&Board::LongestLived.rank(&timelines, 3)),
            vec!["Long", "Mid", "Short"]
        );
    }

    #[test]
    fn fewer_than_n_returns_all() {
        let store: ReportStore = [report("Solo", "p", 10, 10, "", "ALIVE")]
            .into_iter()
            .collect();
        let timelines = aggregate(&store);

        assert_eq!(Board::DeepestDivers.rank(&timelines, 3).len(), 1);
        assert!(top_n(&timelines, |t| t.max_depth, 0, |_| true).is_empty());
    }

    #[test]
    fn cautionary_tales_caps_and_orders_by_hp() {
        let hps = [5, 40, 20, 33, 7, 18, 9, 61, 12, 25, 14];
        let mut store: ReportStore = hps
            .iter()
            .enumerate()
            .map(|(i, &hp)| report(&format!("Hero{i}"), "p", 100, hp, "HURT", "ALIVE"))
            .collect();
        store.insert(report("Calm", "p", 100, 1, "ALIVE", "ALIVE"));
        store.insert(report("Shallow", "p", 50, 30, "ALIVE", "ALIVE"));

        let tales = cautionary_tales(&store, "HURT", 10);
        assert_eq!(tales.len(), 1);
        assert_eq!(tales[0].depth, 100);

        let listed: Vec<i64> = tales[0].reports.iter().map(|r| r.hp).collect();
        assert_eq!(listed, vec![5, 7, 9, 12, 14, 18, 20, 25, 33, 40]);
    }

    #[test]
    fn cautionary_tales_walks_depths_ascending() {
        let store: ReportStore = [
            report("A", "p", 300, 4, "HURT", "ALIVE"),
            report("B", "p", 100, 9, "HURT", "ALIVE"),
            report("C", "p", 200, 2, "ALIVE", "ALIVE"),
        ]
        .into_iter()
        .collect();

        let depths: Vec<i64> = cautionary_tales(&store, "HURT", 10)
            .iter()
            .map(|d| d.depth)
            .collect();
        assert_eq!(depths, vec![100, 300]);
    }
}
