//! Block splitting and dispatch.

use std::collections::VecDeque;

use crate::html::Element;

use super::output::render_commonmark;
use super::registry::Registry;
use super::state::RenderState;

/// A processor that claims whole blocks of source text.
///
/// The parser calls [`test`](BlockProcessor::test) on the block at the front of
/// the queue; the first processor (by priority) answering `true` gets
/// [`run`](BlockProcessor::run).
pub trait BlockProcessor {
    /// Returns true when the processor wants `block`. Must not have side effects.
    fn test(&self, parent: &Element, block: &str) -> bool;

    /// Consumes blocks from the front of `blocks` and appends output to `parent`.
    ///
    /// Returning `false` declines the block; in that case `blocks` must be left
    /// untouched so the next processor can try it.
    fn run(&self, parent: &mut Element, blocks: &mut VecDeque<String>, state: &mut RenderState) -> bool;
}

/// Splits `source` into blocks separated by one or more blank lines.
///
/// Line endings are normalized to `\n` and whitespace-only lines count as blank.
/// Blank lines inside a ```` ``` ```` or `~~~` fence do not split: the whole
/// fence stays in one block with its blank lines intact. An unclosed fence runs
/// to the end of the document.
///
/// ## Examples
///
/// ```
/// use compat_table::markdown::split_blocks;
///
/// let blocks = split_blocks("# Title\n\nfirst\nsecond\n  \n\nthird\n");
/// assert_eq!(blocks, vec!["# Title", "first\nsecond", "third"]);
///
/// let fenced = split_blocks("```\na\n\n\nb\n```");
/// assert_eq!(fenced, vec!["```\na\n\n\nb\n```"]);
/// ```
pub fn split_blocks(source: &str) -> VecDeque<String> {
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
    let mut blocks = VecDeque::new();
    let mut current: Vec<&str> = Vec::new();
    let mut open_fence: Option<Fence> = None;

    for line in normalized.lines() {
        if let Some(fence) = open_fence {
            current.push(line);
            if fence.is_closed_by(line) {
                open_fence = None;
            }
            continue;
        }

        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push_back(current.join("\n"));
                current.clear();
            }
            continue;
        }

        open_fence = Fence::open(line);
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push_back(current.join("\n"));
    }

    blocks
}

/// An open code fence: its marker character and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    marker: char,
    len: usize,
}

impl Fence {
    /// Recognizes an opening fence (up to three spaces of indentation).
    fn open(line: &str) -> Option<Self> {
        let (marker, len, rest) = fence_run(line)?;
        // Backtick info strings may not contain backticks.
        if marker == '`' && rest.contains('`') {
            return None;
        }
        Some(Self { marker, len })
    }

    /// A closing fence uses the same marker, at least as many times, and nothing else.
    fn is_closed_by(self, line: &str) -> bool {
        fence_run(line).is_some_and(|(marker, len, rest)| {
            marker == self.marker && len >= self.len && rest.trim().is_empty()
        })
    }
}

fn fence_run(line: &str) -> Option<(char, usize, &str)> {
    let body = line.trim_start_matches(' ');
    if line.len() - body.len() > 3 {
        return None;
    }
    let marker = body.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = body.chars().take_while(|c| *c == marker).count();
    (len >= 3).then(|| (marker, len, &body[len..]))
}

/// Dispatches blocks to registered [`BlockProcessor`]s.
#[derive(Default)]
pub struct BlockParser {
    processors: Registry<Box<dyn BlockProcessor>>,
}

impl BlockParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn processors(&self) -> &Registry<Box<dyn BlockProcessor>> {
        &self.processors
    }

    pub fn processors_mut(&mut self) -> &mut Registry<Box<dyn BlockProcessor>> {
        &mut self.processors
    }

    /// Processes every block in `blocks`, appending output to `parent`.
    ///
    /// Consecutive blocks no processor claims are re-joined and rendered as
    /// CommonMark into a single raw node.
    pub fn parse_blocks(&self, parent: &mut Element, mut blocks: VecDeque<String>, state: &mut RenderState) {
        let mut unclaimed: Vec<String> = Vec::new();

        while let Some(block) = blocks.front().cloned() {
            let mut claimed = false;

            for processor in self.processors.iter() {
                if !processor.test(parent, &block) {
                    continue;
                }
                flush_unclaimed(parent, &mut unclaimed);
                if processor.run(parent, &mut blocks, state) {
                    claimed = true;
                    break;
                }
            }

            if !claimed && let Some(block) = blocks.pop_front() {
                unclaimed.push(block);
            }
        }

        flush_unclaimed(parent, &mut unclaimed);
    }
}

fn flush_unclaimed(parent: &mut Element, unclaimed: &mut Vec<String>) {
    if unclaimed.is_empty() {
        return;
    }
    let chunk = unclaimed.join("\n\n");
    unclaimed.clear();
    parent.push_raw(render_commonmark(&chunk));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::Node;

    struct Shout;

    impl BlockProcessor for Shout {
        fn test(&self, _parent: &Element, block: &str) -> bool {
            block.starts_with('!')
        }

        fn run(&self, parent: &mut Element, blocks: &mut VecDeque<String>, _state: &mut RenderState) -> bool {
            let Some(block) = blocks.pop_front() else {
                return false;
            };
            parent.sub_element("strong").push_text(block.trim_start_matches('!').to_uppercase());
            true
        }
    }

    struct Decline;

    impl BlockProcessor for Decline {
        fn test(&self, _parent: &Element, _block: &str) -> bool {
            true
        }

        fn run(&self, _parent: &mut Element, _blocks: &mut VecDeque<String>, _state: &mut RenderState) -> bool {
            false
        }
    }

    fn parse(parser: &BlockParser, source: &str) -> Element {
        let mut root = Element::new("div");
        let mut state = RenderState::for_document(source);
        parser.parse_blocks(&mut root, split_blocks(source), &mut state);
        root
    }

    #[test]
    fn test_split_blocks_handles_crlf() {
        let blocks = split_blocks("a\r\nb\r\n\r\nc");
        assert_eq!(blocks, vec!["a\nb", "c"]);
    }

    #[test]
    fn test_split_blocks_empty() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_split_blocks_keeps_fences_whole() {
        let blocks = split_blocks("intro\n\n~~~~text\none\n\n~~~\ntwo\n~~~~\n\nafter");
        assert_eq!(blocks, vec!["intro", "~~~~text\none\n\n~~~\ntwo\n~~~~", "after"]);
    }

    #[test]
    fn test_split_blocks_unclosed_fence_runs_to_end() {
        let blocks = split_blocks("```\ncode\n\n\nmore");
        assert_eq!(blocks, vec!["```\ncode\n\n\nmore"]);
    }

    #[test]
    fn test_split_blocks_ignores_indented_and_inline_backticks() {
        let blocks = split_blocks("    ```\n\n``` a`b\n\nc");
        assert_eq!(blocks, vec!["    ```", "``` a`b", "c"]);
    }

    #[test]
    fn test_fenced_blank_lines_are_preserved() {
        let source = "```\na\n\n\nb\n```";
        let root = parse(&BlockParser::new(), source);
        let Node::Raw(html) = &root.children()[0] else {
            panic!("expected raw node");
        };
        assert_eq!(html, &render_commonmark(source));
        assert_eq!(html, "<pre><code>a\n\n\nb\n</code></pre>\n");
    }

    #[test]
    fn test_processor_never_sees_fenced_content() {
        let mut parser = BlockParser::new();
        parser.processors_mut().register(Box::new(Shout), "shout", 100);

        let root = parse(&parser, "```\nexample\n\n!hey\n```\n\n!real");
        assert_eq!(root.children().len(), 2);
        assert!(matches!(&root.children()[0], Node::Raw(html) if html.contains("!hey")));
        assert!(matches!(&root.children()[1], Node::Element(el) if el.text_content() == "REAL"));
    }

    #[test]
    fn test_unclaimed_runs_are_rendered_together() {
        let parser = BlockParser::new();
        let root = parse(&parser, "- one\n\n- two");
        assert_eq!(root.children().len(), 1);
        let Node::Raw(html) = &root.children()[0] else {
            panic!("expected raw node");
        };
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    #[test]
    fn test_claimed_block_splits_unclaimed_runs() {
        let mut parser = BlockParser::new();
        parser.processors_mut().register(Box::new(Shout), "shout", 100);

        let root = parse(&parser, "before\n\n!hey\n\nafter");
        assert_eq!(root.children().len(), 3);
        assert!(matches!(&root.children()[0], Node::Raw(html) if html.contains("before")));
        assert!(matches!(&root.children()[1], Node::Element(el) if el.text_content() == "HEY"));
        assert!(matches!(&root.children()[2], Node::Raw(html) if html.contains("after")));
    }

    #[test]
    fn test_declining_processor_falls_through() {
        let mut parser = BlockParser::new();
        parser.processors_mut().register(Box::new(Decline), "decline", 200);
        parser.processors_mut().register(Box::new(Shout), "shout", 100);

        let root = parse(&parser, "!hey\n\nplain");
        assert!(matches!(&root.children()[0], Node::Element(el) if el.text_content() == "HEY"));
        assert!(matches!(&root.children()[1], Node::Raw(html) if html.contains("plain")));
    }
}
