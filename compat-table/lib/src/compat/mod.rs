//! The `{{{compatibility: ... }}}` block.
//!
//! A compatibility block embeds a JSON object mapping platform names to lists
//! of feature records:
//!
//! ```text
//! {{{compatibility:
//! {
//!   "Windows": [{"feature": "Named pipes", "support": "full", "version": "NT 3.1"}],
//!   "Linux": [
//!     {"feature": "Named pipes", "support": "partial",
//!      "timeline": [[true, "FIFOs only", "2.0"]]}
//!   ]
//! }
//! }}}
//! ```
//!
//! The block is rendered as a heading, a feature × platform table, one dialog
//! per cell with a timeline, and a fixed legend. A payload that fails to decode
//! renders an inline notice instead of the table; the rest of the document is
//! unaffected.

mod icons;
mod pivot;
mod render;
mod types;

pub use icons::{Glyphs, ICON_CLASS, Icon, IconSet, Octicons};
pub use pivot::{CompatDocument, PivotRow, PivotTable};
pub use render::{
    LEGEND, generate_compat_item, generate_error_notice, generate_heading, generate_legend,
    generate_table,
};
pub use types::{CompatError, CompatResult, FeatureRecord, SupportEntry, SupportLevel, TimelineEntry};

use std::collections::VecDeque;

use crate::config::CompatOptions;
use crate::html::Element;
use crate::markdown::{BlockProcessor, Extension, IdGenerator, Pipeline, RenderState};

/// Opening marker; a block belongs to this extension iff it starts with it.
pub const OPEN_MARKER: &str = "{{{compatibility:";

/// Closing marker line (compared after trimming).
pub const CLOSE_MARKER: &str = "}}}";

/// Name the processor is registered under.
pub const EXTENSION_NAME: &str = "compatibility_table";

/// Default processor priority; claims blocks before generic paragraph handling.
pub const DEFAULT_PRIORITY: u32 = 175;

/// Renders compatibility blocks.
#[derive(Debug)]
pub struct CompatibilityBlockProcessor {
    options: CompatOptions,
    icons: Box<dyn IconSet>,
}

impl Default for CompatibilityBlockProcessor {
    fn default() -> Self {
        Self::new(CompatOptions::default())
    }
}

impl CompatibilityBlockProcessor {
    pub fn new(options: CompatOptions) -> Self {
        let icons = options.icon_set();
        Self { options, icons }
    }

    /// Replaces the icon set chosen by the options.
    pub fn with_icons(mut self, icons: Box<dyn IconSet>) -> Self {
        self.icons = icons;
        self
    }

    pub fn options(&self) -> &CompatOptions {
        &self.options
    }

    /// Extracts the JSON text between the opening line and the closing `}}}`.
    ///
    /// A missing closing marker is tolerated: every remaining line is used.
    ///
    /// ## Examples
    ///
    /// ```
    /// use compat_table::CompatibilityBlockProcessor;
    ///
    /// let block = "{{{compatibility:\n{\"Linux\": []}\n}}}\nignored";
    /// assert_eq!(CompatibilityBlockProcessor::get_raw_json(block), "{\"Linux\": []}");
    /// ```
    pub fn get_raw_json(block: &str) -> String {
        block
            .lines()
            .skip(1)
            .take_while(|line| line.trim() != CLOSE_MARKER)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders one block into a `div.compat-block` element.
    ///
    /// Always starts with the heading. Followed by either the error notice, or
    /// the table and the legend.
    pub fn render(&self, block: &str, ids: &mut IdGenerator) -> Element {
        let mut container = Element::new("div").with_class("compat-block");
        container.push(generate_heading(
            &self.options.heading,
            self.options.heading_level,
        ));

        let raw_json = Self::get_raw_json(block);
        match CompatDocument::parse(&raw_json) {
            Ok(document) => {
                let pivot = document.pivot();
                container.push(generate_table(&pivot, self.icons.as_ref(), ids));
                container.push(generate_legend(self.icons.as_ref()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid compatibility JSON");
                container.push(generate_error_notice(&e.to_string()));
            }
        }

        container
    }
}

impl BlockProcessor for CompatibilityBlockProcessor {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        block.starts_with(OPEN_MARKER)
    }

    fn run(&self, parent: &mut Element, blocks: &mut VecDeque<String>, state: &mut RenderState) -> bool {
        let Some(block) = blocks.pop_front() else {
            return false;
        };
        tracing::debug!(bytes = block.len(), "Rendering compatibility block");
        parent.push(self.render(&block, state.ids_mut()));
        true
    }
}

/// Registers [`CompatibilityBlockProcessor`] with a [`Pipeline`].
///
/// ## Examples
///
/// ```
/// use compat_table::{CompatibilityExtension, EXTENSION_NAME};
/// use compat_table::markdown::Pipeline;
///
/// let pipeline = Pipeline::new().with_extension(CompatibilityExtension::default());
/// assert_eq!(pipeline.parser().processors().priority_of(EXTENSION_NAME), Some(175));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompatibilityExtension {
    options: CompatOptions,
}

impl CompatibilityExtension {
    pub fn new(options: CompatOptions) -> Self {
        Self { options }
    }
}

impl Extension for CompatibilityExtension {
    fn extend_markdown(&self, pipeline: &mut Pipeline) {
        pipeline.parser_mut().processors_mut().register(
            Box::new(CompatibilityBlockProcessor::new(self.options.clone())),
            EXTENSION_NAME,
            self.options.priority,
        );
    }
}

/// Entry point for hosts that load extensions by constructor function.
pub fn make_extension(options: CompatOptions) -> CompatibilityExtension {
    CompatibilityExtension::new(options)
}
