//! Field addressing: name any column of a quest report and read its value.

use std::fmt;

/// One column of the quest report log, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Uid,
    Version,
    Date,
    Player,
    Character,
    Party,
    Depth,
    Dive,
    Days,
    Hp,
    Karma,
    Wc,
    Url,
    LastContext,
    NextRoll,
    NextDmg,
    NextContext,
}

impl Field {
    /// Every column, in the order they appear in a log row.
    pub const ALL: [Field; 17] = [
        Field::Uid,
        Field::Version,
        Field::Date,
        Field::Player,
        Field::Character,
        Field::Party,
        Field::Depth,
        Field::Dive,
        Field::Days,
        Field::Hp,
        Field::Karma,
        Field::Wc,
        Field::Url,
        Field::LastContext,
        Field::NextRoll,
        Field::NextDmg,
        Field::NextContext,
    ];

    /// Column name as used by the log header.
    pub fn name(self) -> &'static str {
        match self {
            Self::Uid => "uid",
            Self::Version => "version",
            Self::Date => "date",
            Self::Player => "player",
            Self::Character => "character",
            Self::Party => "party",
            Self::Depth => "depth",
            Self::Dive => "dive",
            Self::Days => "days",
            Self::Hp => "hp",
            Self::Karma => "karma",
            Self::Wc => "wc",
            Self::Url => "url",
            Self::LastContext => "lastContext",
            Self::NextRoll => "nextRoll",
            Self::NextDmg => "nextDmg",
            Self::NextContext => "nextContext",
        }
    }

    /// Zero-based position of this column within a row.
    pub fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed column value.
///
/// Integers order before text so mixed sets still have a total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldValue<'a> {
    Int(i64),
    Text(&'a str),
}

impl FieldValue<'_> {
    pub fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(n),
            Self::Text(_) => None,
        }
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
