//! Frame-range spec parsing and formatting.
//!
//! Grammar:
//!   name=start..end
//! - `name` is a non-empty identifier without whitespace
//! - `start` and `end` are 1-based frame numbers as a human writes them;
//!   both bounds are inclusive ("walk=11..20" covers frames 11 through 20)
//!
//! Parsed values hold 0-based frame indices, so "walk=11..20" becomes
//! `start=10, end=19`. An inverted window (`start > end`) is accepted here;
//! the splitter degrades it to an empty clip.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while decoding a textual range spec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("range spec '{0}' must look like name=start..end")]
    MissingEquals(String),
    #[error("range spec '{0}' has an empty name")]
    EmptyName(String),
    #[error("range name '{0}' must not contain whitespace")]
    NameWhitespace(String),
    #[error("range '{name}': bounds '{bounds}' must look like start..end")]
    MissingDots { name: String, bounds: String },
    #[error("range '{name}': '{token}' is not a frame number")]
    BadFrameNumber { name: String, token: String },
    #[error("range '{name}': frame numbers are 1-based, got 0")]
    FrameZero { name: String },
}

/// A named, inclusive window of 0-based frame indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameRange {
    pub name: String,
    /// First frame of the window, 0-based inclusive.
    pub start: u32,
    /// Last frame of the window, 0-based inclusive.
    pub end: u32,
}

impl FrameRange {
    /// Construct a FrameRange from 0-based inclusive frame bounds.
    pub fn new(name: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Parse a range spec string according to the grammar described above.
    pub fn parse(spec: &str) -> Result<Self, FormatError> {
        let (name, bounds) = spec
            .split_once('=')
            .ok_or_else(|| FormatError::MissingEquals(spec.to_string()))?;
        if name.is_empty() {
            return Err(FormatError::EmptyName(spec.to_string()));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(FormatError::NameWhitespace(name.to_string()));
        }
        let (lo, hi) = bounds
            .split_once("..")
            .ok_or_else(|| FormatError::MissingDots {
                name: name.to_string(),
                bounds: bounds.to_string(),
            })?;
        let start = parse_frame(name, lo)?;
        let end = parse_frame(name, hi)?;
        Ok(Self {
            name: name.to_string(),
            start: start - 1,
            end: end - 1,
        })
    }
}

fn parse_frame(name: &str, token: &str) -> Result<u32, FormatError> {
    let frame: u32 = token.parse().map_err(|_| FormatError::BadFrameNumber {
        name: name.to_string(),
        token: token.to_string(),
    })?;
    if frame == 0 {
        return Err(FormatError::FrameZero {
            name: name.to_string(),
        });
    }
    Ok(frame)
}

impl fmt::Display for FrameRange {
    /// Render the 1-based textual form, so `Display` round-trips `parse`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}..{}", self.name, self.start + 1, self.end + 1)
    }
}

impl FromStr for FrameRange {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrameRange::parse(s)
    }
}

impl Serialize for FrameRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FrameRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FrameRange::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips() {
        let range = FrameRange::new("walk", 10, 19);
        assert_eq!(range.to_string(), "walk=11..20");
        assert_eq!(FrameRange::parse(&range.to_string()).unwrap(), range);
    }
}
