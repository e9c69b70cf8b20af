//! HTML output for blocks no extension claims.
//!
//! Runs of unclaimed blocks are handed to pulldown-cmark as a single chunk so
//! loose lists spanning blank lines render as one list. Fenced code never
//! reaches here split, since `split_blocks` keeps each fence in one block.

use pulldown_cmark::{Options, Parser, html};

/// Markdown extensions enabled for unclaimed content.
fn commonmark_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Renders CommonMark (plus GFM tables, strikethrough, task lists and footnotes) to HTML.
///
/// ## Examples
///
/// ```
/// use compat_table::markdown::render_commonmark;
///
/// let html = render_commonmark("# Hello\n\nWorld");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<p>World</p>"));
/// ```
pub fn render_commonmark(content: &str) -> String {
    let parser = Parser::new_ext(content, commonmark_options());
    let mut output = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
