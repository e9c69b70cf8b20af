//! # compat-table
//!
//! Renders Markdown documents containing `{{{compatibility: ... }}}` blocks to
//! HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Render a file to an HTML fragment
//! compat-table docs/filesystem.md > filesystem.html
//!
//! # Pipe content from stdin
//! cat docs/filesystem.md | compat-table
//!
//! # Wrap the output in a minimal standalone page
//! compat-table docs/filesystem.md --standalone
//!
//! # Use inline glyphs instead of octicon images
//! compat-table docs/filesystem.md --icons glyphs
//!
//! # Load options from YAML (flags override the file)
//! compat-table docs/filesystem.md --config compat.yaml
//!
//! # Verbose output for debugging
//! compat-table docs/filesystem.md -v      # blocks and tables (DEBUG)
//! compat-table docs/filesystem.md -vv     # dialog identifiers (TRACE)
//! ```

pub use cli::{Cli, IconArg};

mod cli {
    use clap::{Parser, ValueEnum};
    use compat_table::IconStyle;
    use std::path::PathBuf;

    /// Icon style selectable on the command line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum IconArg {
        /// `<img>` tags pointing at octicon SVG assets
        Octicons,
        /// Inline Unicode glyphs
        Glyphs,
    }

    impl From<IconArg> for IconStyle {
        fn from(arg: IconArg) -> Self {
            match arg {
                IconArg::Octicons => IconStyle::Octicons,
                IconArg::Glyphs => IconStyle::Glyphs,
            }
        }
    }

    /// Command-line interface for the compatibility table renderer.
    #[derive(Parser, Debug)]
    #[command(
        name = "compat-table",
        about = "Render markdown with compatibility tables to HTML",
        version
    )]
    pub struct Cli {
        /// Input file path (reads from stdin if not provided, use "-" for explicit stdin)
        pub input: Option<PathBuf>,

        /// YAML file with extension options
        #[arg(long, value_name = "FILE")]
        pub config: Option<PathBuf>,

        /// Icon style (overrides the config file)
        #[arg(long, value_enum)]
        pub icons: Option<IconArg>,

        /// Directory containing octicon SVGs (overrides the config file)
        #[arg(long, value_name = "DIR")]
        pub icon_path: Option<String>,

        /// Wrap the fragment in a minimal standalone HTML page
        #[arg(long)]
        pub standalone: bool,

        /// Increase verbosity (-v DEBUG, -vv TRACE)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        pub verbose: u8,
    }
}
