//! Compatibility tables for Markdown documents.
//!
//! This library provides a Markdown block extension that turns an embedded JSON
//! payload into an HTML compatibility table with a legend and per-cell detail
//! dialogs, along with the small block-processing pipeline it registers into.
//!
//! ## Modules
//!
//! - [`compat`] - The `{{{compatibility: ... }}}` block processor and its extension
//! - [`config`] - Extension options with YAML loading
//! - [`html`] - Owned HTML element tree and serializer
//! - [`markdown`] - Block-processing pipeline with a pulldown-cmark fallback
//!
//! ## Examples
//!
//! ```
//! use compat_table::CompatibilityExtension;
//! use compat_table::markdown::Pipeline;
//!
//! let source = "{{{compatibility:\n\
//!               {\"Windows\": [{\"feature\": \"Pipes\", \"support\": \"full\", \"version\": \"NT\"}],\n\
//!                \"Linux\": []}\n\
//!               }}}";
//!
//! let html = Pipeline::new()
//!     .with_extension(CompatibilityExtension::default())
//!     .convert(source);
//!
//! assert!(html.contains(r#"<th class="compat-table-system" scope="col">Windows</th>"#));
//! assert!(html.contains("<span>NT</span>"));
//! assert!(html.contains("compat-no-support"));
//! ```

pub mod compat;
pub mod config;
pub mod html;
pub mod markdown;

pub use compat::{
    CompatDocument, CompatError, CompatibilityBlockProcessor, CompatibilityExtension,
    EXTENSION_NAME, Icon, IconSet, SupportLevel, make_extension,
};
pub use config::{CompatOptions, ConfigError, IconStyle};
