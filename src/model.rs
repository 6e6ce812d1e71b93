//! Core data model for the ledger.
//!
//! Quest reports are parsed once and owned by the report store.
//! Character timelines borrow from the store and are rebuilt every run.

mod field;
mod quest_report;
mod timeline;

pub use field::{Field, FieldValue};
pub use quest_report::QuestReport;
pub use timeline::CharacterTimeline;
