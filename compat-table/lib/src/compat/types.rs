//! Type definitions for the compatibility module.

use serde_json::Value;
use thiserror::Error;

use super::icons::Icon;

/// Errors raised while decoding a compatibility payload.
///
/// These never escape the block processor; they are rendered in place as an
/// inline notice.
#[derive(Error, Debug)]
pub enum CompatError {
    /// The payload is not valid JSON.
    #[error("{0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The payload is valid JSON but not an object of platforms.
    #[error("expected an object mapping platform names to feature lists, found {found}")]
    NotAnObject { found: &'static str },
}

/// Result type for compatibility payload decoding.
pub type CompatResult<T> = Result<T, CompatError>;

/// How well a platform supports a feature.
///
/// ## Examples
///
/// ```
/// use compat_table::SupportLevel;
///
/// assert_eq!(SupportLevel::parse(Some("full")), SupportLevel::Full);
/// assert_eq!(SupportLevel::parse(Some("maybe")), SupportLevel::None);
/// assert_eq!(SupportLevel::parse(None).default_label(), "No");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SupportLevel {
    Full,
    Partial,
    Deprecated,
    Experimental,
    /// Unknown, absent, or no record at all.
    #[default]
    None,
}

impl SupportLevel {
    /// Maps a `support` value onto a level; anything unrecognized is [`SupportLevel::None`].
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("full") => Self::Full,
            Some("partial") => Self::Partial,
            Some("deprecated") => Self::Deprecated,
            Some("experimental") => Self::Experimental,
            _ => Self::None,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Full => Icon::Full,
            Self::Partial => Icon::Partial,
            Self::Deprecated => Icon::Deprecated,
            Self::Experimental => Icon::Experimental,
            Self::None => Icon::NoSupport,
        }
    }

    /// Label shown when the record carries no `version`.
    pub fn default_label(self) -> &'static str {
        match self {
            Self::Full => "Yes",
            Self::Partial => "Partial",
            Self::Deprecated => "Obsolete",
            Self::Experimental => "New",
            Self::None => "No",
        }
    }

    /// Status class added to the table cell.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Full => "compat-supported",
            Self::Partial => "compat-partial-support",
            Self::Deprecated => "compat-deprecated",
            Self::Experimental => "compat-experimental",
            Self::None => "compat-no-support",
        }
    }
}

/// One entry of a feature's history on a platform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineEntry {
    /// Milestones get a filled marker.
    pub milestone: bool,
    pub description: String,
    /// Bold prefix; empty when absent.
    pub label: String,
}

impl TimelineEntry {
    /// Decodes a `[milestone, description, label]` triple.
    ///
    /// Malformed entries still produce an entry so the timeline keeps its length:
    /// a non-array value becomes the description of a non-milestone entry.
    pub fn from_value(value: &Value) -> Self {
        let Some(parts) = value.as_array() else {
            return Self {
                description: scalar_to_string(value).unwrap_or_else(|| value.to_string()),
                ..Default::default()
            };
        };

        Self {
            milestone: parts.first().and_then(Value::as_bool).unwrap_or(false),
            description: parts.get(1).and_then(scalar_to_string).unwrap_or_default(),
            label: parts.get(2).and_then(scalar_to_string).unwrap_or_default(),
        }
    }
}

/// A platform's support for one feature (a record without its `feature` key).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupportEntry {
    pub support: SupportLevel,
    pub version: Option<String>,
    pub timeline: Vec<TimelineEntry>,
}

impl SupportEntry {
    /// Visible cell label: the version when present and non-empty, else the level's default.
    pub fn label(&self) -> &str {
        match self.version.as_deref() {
            Some(version) if !version.is_empty() => version,
            _ => self.support.default_label(),
        }
    }

    pub fn has_timeline(&self) -> bool {
        !self.timeline.is_empty()
    }
}

/// One element of a platform's feature list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    pub feature: String,
    pub entry: SupportEntry,
}

impl FeatureRecord {
    /// Best-effort decoding; returns `None` when the value is not an object or has no `feature`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let feature = object.get("feature").and_then(scalar_to_string)?;

        let support = SupportLevel::parse(object.get("support").and_then(Value::as_str));
        let version = object.get("version").and_then(scalar_to_string);
        let timeline = object
            .get("timeline")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(TimelineEntry::from_value).collect())
            .unwrap_or_default();

        Some(Self {
            feature,
            entry: SupportEntry {
                support,
                version,
                timeline,
            },
        })
    }
}

/// Strings pass through; numbers and booleans are stringified; everything else is `None`.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Short name of a JSON value's type for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
