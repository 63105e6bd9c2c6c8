//! Timestamp scalar for Xsolla API payloads.
//!
//! Depending on the route, Xsolla renders the UTC offset either with a
//! colon (`-07:00`) or without (`-0700`).  [`Timestamp`] decodes both,
//! trying each layout in a fixed order, and treats a literal `null` as the
//! absent value.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const LAYOUT_OFFSET_COLON: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);
const LAYOUT_OFFSET_PLAIN: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
);

/// Accepted layouts, in decode order.  First successful parse wins.
const LAYOUTS: &[&[BorrowedFormatItem<'static>]] = &[LAYOUT_OFFSET_COLON, LAYOUT_OFFSET_PLAIN];

/// A point in time as Xsolla serializes it, `None` when the field was
/// `null` or absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub Option<OffsetDateTime>);

impl Timestamp {
    /// Parse a timestamp literal, trying each accepted layout in order.
    pub fn parse(text: &str) -> Result<Self, ParseTimestampError> {
        for layout in LAYOUTS.iter().copied() {
            if let Ok(parsed) = OffsetDateTime::parse(text, layout) {
                return Ok(Self(Some(parsed)));
            }
        }
        Err(ParseTimestampError {
            text: text.to_owned(),
        })
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(value: OffsetDateTime) -> Self {
        Self(Some(value))
    }
}

/// No accepted layout matched the input text.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized timestamp: {text:?}")]
pub struct ParseTimestampError {
    pub text: String,
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(Self(None));
        };
        Self::parse(&text).map_err(D::Error::custom)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(instant) => {
                let text = instant.format(LAYOUT_OFFSET_COLON).map_err(S::Error::custom)?;
                serializer.serialize_str(&text)
            }
            None => serializer.serialize_none(),
        }
    }
}
