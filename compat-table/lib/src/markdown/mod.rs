//! A small block-processing Markdown pipeline that extensions plug into.
//!
//! The pipeline splits a document into blank-line separated blocks and offers
//! each block to the registered [`BlockProcessor`]s in priority order. Blocks no
//! processor claims are rendered with pulldown-cmark, so plain Markdown keeps
//! working around extension blocks.
//!
//! ## Examples
//!
//! ```
//! use compat_table::markdown::Pipeline;
//! use compat_table::CompatibilityExtension;
//!
//! let source = r#"# Support
//!
//! {{{compatibility:
//! {"Linux": [{"feature": "Sockets", "support": "full"}]}
//! }}}
//! "#;
//!
//! let pipeline = Pipeline::new().with_extension(CompatibilityExtension::default());
//! let html = pipeline.convert(source);
//! assert!(html.contains("<h1>Support</h1>"));
//! assert!(html.contains(r#"class="compat-table""#));
//! ```

mod blocks;
mod output;
mod registry;
mod state;

pub use blocks::{BlockParser, BlockProcessor, split_blocks};
pub use output::render_commonmark;
pub use registry::Registry;
pub use state::{IdGenerator, RenderState};

use crate::html::{Element, Node};

/// Something that installs processors into a [`Pipeline`].
pub trait Extension {
    fn extend_markdown(&self, pipeline: &mut Pipeline);
}

/// Converts Markdown documents to HTML through registered block processors.
#[derive(Default)]
pub struct Pipeline {
    parser: BlockParser,
}

impl Pipeline {
    /// Creates a pipeline with no extensions; everything renders as CommonMark.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Pipeline::register_extension`].
    pub fn with_extension<E: Extension>(mut self, extension: E) -> Self {
        self.register_extension(&extension);
        self
    }

    pub fn register_extension(&mut self, extension: &dyn Extension) {
        extension.extend_markdown(self);
    }

    pub fn parser(&self) -> &BlockParser {
        &self.parser
    }

    pub fn parser_mut(&mut self) -> &mut BlockParser {
        &mut self.parser
    }

    /// Parses `source` into a document tree rooted at a `div`.
    pub fn parse(&self, source: &str) -> Element {
        let mut root = Element::new("div");
        let mut state = RenderState::for_document(source);
        self.parser
            .parse_blocks(&mut root, split_blocks(source), &mut state);
        tracing::debug!(
            top_level_nodes = root.children().len(),
            ids_issued = state.ids().issued(),
            "Parsed markdown document"
        );
        root
    }

    /// Converts `source` to an HTML fragment (the root `div` is not emitted).
    pub fn convert(&self, source: &str) -> String {
        let root = self.parse(source);
        let mut output = String::new();

        for child in root.children() {
            match child {
                Node::Element(el) => el.write_html(&mut output),
                Node::Text(text) => output.push_str(&html_escape::encode_text(text)),
                Node::Raw(markup) => output.push_str(markup),
            }
            if !output.ends_with('\n') {
                output.push('\n');
            }
        }

        output
    }
}
