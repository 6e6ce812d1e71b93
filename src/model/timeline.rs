//! Character timeline: every report filed for one character, in file order.

use serde::Serialize;

use super::QuestReport;

/// A character's history, borrowed from the report store.
///
/// Never empty: a timeline only exists once its first report is seen, and
/// its reports are reachable only through [`CharacterTimeline::reports`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterTimeline<'a> {
    pub character: &'a str,
    /// Owner, taken from the first report.
    pub player: &'a str,
    /// Deepest depth over all reports.
    pub max_depth: i64,
    /// `nextContext` of the most recent report.
    pub status: &'a str,
    reports: Vec<&'a QuestReport>,
    #[serde(skip)]
    last: &'a QuestReport,
}

impl<'a> CharacterTimeline<'a> {
    /// Start a timeline from the character's first report.
    pub fn new(first: &'a QuestReport) -> Self {
        Self {
            character: &first.character,
            player: &first.player,
            max_depth: first.depth,
            status: &first.next_context,
            reports: vec![first],
            last: first,
        }
    }

    /// Append a later report. The caller guarantees file order.
    pub fn push(&mut self, report: &'a QuestReport) {
        self.max_depth = self.max_depth.max(report.depth);
        self.status = &report.next_context;
        self.reports.push(report);
        self.last = report;
    }

    /// Every report, in file order.
    pub fn reports(&self) -> &[&'a QuestReport] {
        &self.reports
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// The most recent report.
    pub fn last_report(&self) -> &'a QuestReport {
        self.last
    }

    /// Whether the character's latest outcome marks a retirement.
    pub fn is_retired(&self) -> bool {
        self.status.contains("RETIRE")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::testing::report;

    #[test]
    fn derives_fields_from_file_order() {
        let a = report("Ayla", "kim", 10, 50, "", "ALIVE");
        let b = report("Ayla", "someone-else", 30, 20, "HURT", "HURT");
        let c = report("Ayla", "kim", 20, 15, "HURT", "DEATH");

        let mut timeline = CharacterTimeline::new(&a);
        timeline.push(&b);
        timeline.push(&c);

        assert_eq!(timeline.max_depth, 30);
        assert_eq!(timeline.status, "DEATH");
        assert_eq!(timeline.player, "kim");
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.last_report().depth, 20);
        assert!(std::ptr::eq(timeline.last_report(), &c));
    }

    #[test]
    fn single_report_timeline_is_its_own_last() {
        let a = report("Cora", "max", 5, 30, "", "ALIVE");
        let timeline = CharacterTimeline::new(&a);

        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.reports(), &[&a]);
        assert_eq!(timeline.last_report().hp, 30);
    }

    #[test]
    fn retirement_matches_substring() {
        let a = report("Bram", "lee", 10, 50, "", "RETIRE (honorable)");
        assert!(CharacterTimeline::new(&a).is_retired());

        let b = report("Bram", "lee", 10, 50, "", "QUIT");
        assert!(!CharacterTimeline::new(&b).is_retired());
    }
}
