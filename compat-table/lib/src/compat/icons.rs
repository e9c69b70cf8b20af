//! Icons used by the compatibility table.
//!
//! The table only knows icons by [`Icon`] name; an [`IconSet`] supplies the
//! markup. [`Octicons`] points `<img>` tags at pre-built SVG assets, while
//! [`Glyphs`] inlines Unicode characters for pages without an asset pipeline.

use strum::{Display, EnumIter};

use crate::html::Element;

/// Class carried by every icon element.
pub const ICON_CLASS: &str = "compat-table-icon";

/// Named icons referenced by the table, dialogs and legend.
///
/// ## Examples
///
/// ```
/// use compat_table::Icon;
///
/// assert_eq!(Icon::NoSupport.to_string(), "no-support");
/// assert_eq!(Icon::NoSupport.octicon_name(), "x-circle");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    Full,
    Partial,
    NoSupport,
    Deprecated,
    Experimental,
    Dots,
    Disc,
    SemiDisc,
}

impl Icon {
    /// Octicon asset name.
    pub fn octicon_name(self) -> &'static str {
        match self {
            Self::Full => "check-circle",
            Self::Partial => "skip",
            Self::NoSupport => "x-circle",
            Self::Deprecated => "no-entry",
            Self::Experimental => "issue-opened",
            Self::Dots => "kebab-horizontal",
            Self::Disc => "dot-fill",
            Self::SemiDisc => "dot",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Full => "\u{2714}",
            Self::Partial => "\u{25D0}",
            Self::NoSupport => "\u{2716}",
            Self::Deprecated => "\u{26D4}",
            Self::Experimental => "\u{26A0}",
            Self::Dots => "\u{22EF}",
            Self::Disc => "\u{25CF}",
            Self::SemiDisc => "\u{25CB}",
        }
    }
}

/// Supplies the element rendered for each [`Icon`].
pub trait IconSet: std::fmt::Debug {
    fn icon(&self, icon: Icon) -> Element;
}

/// `<img>` tags pointing at `<base_path>/<octicon>-16.svg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Octicons {
    base_path: String,
}

impl Octicons {
    pub const DEFAULT_PATH: &'static str = "assets/images/octicons";

    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn src(&self, icon: Icon) -> String {
        format!(
            "{}/{}-16.svg",
            self.base_path.trim_end_matches('/'),
            icon.octicon_name()
        )
    }
}

impl Default for Octicons {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl IconSet for Octicons {
    fn icon(&self, icon: Icon) -> Element {
        Element::new("img")
            .with_attr("src", self.src(icon))
            .with_class(ICON_CLASS)
            .with_attr("alt", "")
    }
}

/// Inline Unicode glyphs wrapped in a `<span>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Glyphs;

impl IconSet for Glyphs {
    fn icon(&self, icon: Icon) -> Element {
        let mut span = Element::new("span")
            .with_class(format!("{} compat-icon-{}", ICON_CLASS, icon))
            .with_attr("aria-hidden", "true");
        span.push_text(icon.glyph());
        span
    }
}
