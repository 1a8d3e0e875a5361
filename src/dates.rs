//! Best-effort date parsing for deadline and event times.
//!
//! A [`When`] keeps the text exactly as the user typed it and, alongside it,
//! the result of trying a fixed, ordered table of input patterns. The first
//! pattern that matches wins. Text that matches nothing is not an error: it
//! is shown verbatim.
//!
//! # Accepted input
//!
//! | Pattern            | Example           |
//! |--------------------|-------------------|
//! | `yyyy-mm-dd HHmm`  | `2019-12-02 1800` |
//! | `yyyy-mm-dd HH:mm` | `2019-12-02 18:00`|
//! | `yyyy-mm-dd`       | `2019-12-02`      |
//!
//! Every field is zero-padded; `2019-1-5` or `2019-12-02 9:05` stay text.
//! Parsed values render as `Dec 2 2019` or `Dec 2 2019, 6:00 PM`.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Shape shared by all input patterns. chrono alone accepts unpadded fields.
static INPUT_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(?: \d{2}:?\d{2})?$").expect("Invalid date shape regex")
});

/// Date-time input patterns, tried in order before any date pattern.
const DATE_TIME_INPUTS: &[&str] = &["%Y-%m-%d %H%M", "%Y-%m-%d %H:%M"];

/// Calendar-date input patterns.
const DATE_INPUTS: &[&str] = &["%Y-%m-%d"];

const DATE_OUTPUT: &str = "%b %-d %Y";
const DATE_TIME_OUTPUT: &str = "%b %-d %Y, %-I:%M %p";

/// A successfully parsed point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moment {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

impl Moment {
    /// Try every known pattern against `text`, date-times first.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if !INPUT_SHAPE.is_match(text) {
            return None;
        }

        let date_time = DATE_TIME_INPUTS
            .iter()
            .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())
            .map(Moment::DateTime);

        date_time.or_else(|| {
            DATE_INPUTS
                .iter()
                .find_map(|pattern| NaiveDate::parse_from_str(text, pattern).ok())
                .map(Moment::Date)
        })
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Moment::DateTime(dt) => write!(f, "{}", dt.format(DATE_TIME_OUTPUT)),
            Moment::Date(d) => write!(f, "{}", d.format(DATE_OUTPUT)),
        }
    }
}

/// A free-form date/time token together with its parsed form, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct When {
    raw: String,
    moment: Option<Moment>,
}

impl When {
    /// Parse `raw`, keeping the original text whether or not it matched.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let moment = Moment::parse(&raw);
        Self { raw, moment }
    }

    /// The text as originally entered. This is what gets persisted.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[cfg(test)]
    pub fn moment(&self) -> Option<Moment> {
        self.moment
    }

    /// Returns true when `self` is strictly earlier than `other`.
    ///
    /// Only two date-times or two dates are comparable. Mixed kinds and
    /// literal text never precede anything.
    pub fn precedes(&self, other: &When) -> bool {
        match (self.moment, other.moment) {
            (Some(Moment::DateTime(a)), Some(Moment::DateTime(b))) => a < b,
            (Some(Moment::Date(a)), Some(Moment::Date(b))) => a < b,
            _ => false,
        }
    }
}

impl fmt::Display for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.moment {
            Some(moment) => write!(f, "{}", moment),
            None => f.write_str(&self.raw),
        }
    }
}
