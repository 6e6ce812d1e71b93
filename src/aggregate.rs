//! Character aggregation: group the store's reports into one timeline per character.

use std::collections::HashMap;

use crate::model::CharacterTimeline;
use crate::store::ReportStore;

/// Every character's timeline, in order of first appearance in the log.
#[derive(Debug, Default)]
pub struct Timelines<'a> {
    timelines: Vec<CharacterTimeline<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> Timelines<'a> {
    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }

    pub fn get(&self, character: &str) -> Option<&CharacterTimeline<'a>> {
        self.index.get(character).map(|&i| &self.timelines[i])
    }

    /// Timelines in order of each character's first report.
    pub fn iter(&self) -> std::slice::Iter<'_, CharacterTimeline<'a>> {
        self.timelines.iter()
    }
}

impl<'s, 'a> IntoIterator for &'s Timelines<'a> {
    type Item = &'s CharacterTimeline<'a>;
    type IntoIter = std::slice::Iter<'s, CharacterTimeline<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build every character's timeline in a single pass over the store.
///
/// Reports are taken in insertion order, which the log guarantees is chronological.
pub fn aggregate(store: &ReportStore) -> Timelines<'_> {
    let mut out = Timelines::default();

    for report in store.iter() {
        match out.index.get(report.character.as_str()) {
            Some(&i) => out.timelines[i].push(report),
            None => {
                out.index
                    .insert(report.character.as_str(), out.timelines.len());
                out.timelines.push(CharacterTimeline::new(report));
            }
        }
    }

    out
}
