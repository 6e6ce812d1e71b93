//! Quest report: one line of the Dungeon Archive log.

use serde::Serialize;

use super::{Field, FieldValue};

/// A single quest report, immutable once parsed.
///
/// `hp` holds only the current hit points; the log's `cur/max` form
/// is reduced when the row is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestReport {
    pub uid: i64,
    pub version: String,
    /// Display-only; never interpreted as a date.
    pub date: String,
    pub player: String,
    pub character: String,
    pub party: String,
    /// Meters descended.
    pub depth: i64,
    pub dive: i64,
    /// Days survived this dive.
    pub days: i64,
    pub hp: i64,
    pub karma: String,
    /// Word count of the narrative post.
    pub wc: i64,
    pub url: String,
    pub last_context: String,
    pub next_roll: String,
    pub next_dmg: String,
    pub next_context: String,
}

impl QuestReport {
    /// Read one column by name.
    pub fn get(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Uid => FieldValue::Int(self.uid),
            Field::Version => FieldValue::Text(&self.version),
            Field::Date => FieldValue::Text(&self.date),
            Field::Player => FieldValue::Text(&self.player),
            Field::Character => FieldValue::Text(&self.character),
            Field::Party => FieldValue::Text(&self.party),
            Field::Depth => FieldValue::Int(self.depth),
            Field::Dive => FieldValue::Int(self.dive),
            Field::Days => FieldValue::Int(self.days),
            Field::Hp => FieldValue::Int(self.hp),
            Field::Karma => FieldValue::Text(&self.karma),
            Field::Wc => FieldValue::Int(self.wc),
            Field::Url => FieldValue::Text(&self.url),
            Field::LastContext => FieldValue::Text(&self.last_context),
            Field::NextRoll => FieldValue::Text(&self.next_roll),
            Field::NextDmg => FieldValue::Text(&self.next_dmg),
            Field::NextContext => FieldValue::Text(&self.next_context),
        }
    }
}
