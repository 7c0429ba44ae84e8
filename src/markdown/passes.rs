//! Ordered text passes that make up the markdown pipeline.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::CodeStash;

/// Matches a fenced code block with an optional language word.
static FENCED_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_]+)?\n(.*?)```").expect("fenced code pattern is valid")
});

/// Matches a single-backtick code span.
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern is valid"));

/// Matches `#`, `##` or `###` plus a space at the start of a line.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,3}) (.*)$").expect("header pattern is valid"));

/// Matches a `**bold**` span without nested asterisks.
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid"));

/// Matches the blank-line boundary between blocks.
static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("blank line pattern is valid"));

/// Matches `[label](url)`.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid")
});

/// Language class used when a fence carries no tag.
const DEFAULT_LANGUAGE: &str = "text";

/// Tag prefixes that mark a block as already structural.
const BLOCK_OPENERS: [&str; 4] = ["<h", "<ul", "<pre", "<li"];

/// One transformation step of the markdown pipeline.
///
/// Passes are order dependent: each assumes the earlier ones have already
/// consumed their markup. [`Pass::PIPELINE`] lists them in the order the
/// renderer applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Escapes fenced code bodies and stashes the rendered blocks.
    FencedCode,
    /// Wraps single-backtick spans in `<code>`.
    InlineCode,
    /// Converts `#`, `##`, `###` lines to `<h1>`..`<h3>`.
    Headers,
    /// Wraps `**...**` in `<strong>`.
    Bold,
    /// Converts `- ` lines to `<li>` and wraps the first run in `<ul>`.
    ListItems,
    /// Wraps loose blocks in `<p>`.
    Paragraphs,
    /// Converts `[label](url)` to anchors opening a new browsing context.
    Links,
}

impl Pass {
    /// All passes in application order.
    pub const PIPELINE: [Pass; 7] = [
        Pass::FencedCode,
        Pass::InlineCode,
        Pass::Headers,
        Pass::Bold,
        Pass::ListItems,
        Pass::Paragraphs,
        Pass::Links,
    ];

    /// Short identifier used in trace output.
    pub fn name(self) -> &'static str {
        match self {
            Pass::FencedCode => "fenced-code",
            Pass::InlineCode => "inline-code",
            Pass::Headers => "headers",
            Pass::Bold => "bold",
            Pass::ListItems => "list-items",
            Pass::Paragraphs => "paragraphs",
            Pass::Links => "links",
        }
    }

    /// Applies this pass to `text`.
    ///
    /// Only [`Pass::FencedCode`] writes to `stash`. The other passes leave
    /// placeholders untouched so stashed code survives until the renderer
    /// restores it.
    pub fn apply(self, text: &str, stash: &mut CodeStash) -> String {
        match self {
            Pass::FencedCode => fenced_code(text, stash),
            Pass::InlineCode => INLINE_CODE_RE
                .replace_all(text, "<code>${1}</code>")
                .into_owned(),
            Pass::Headers => headers(text),
            Pass::Bold => BOLD_RE
                .replace_all(text, "<strong>${1}</strong>")
                .into_owned(),
            Pass::ListItems => list_items(text),
            Pass::Paragraphs => paragraphs(text),
            Pass::Links => LINK_RE
                .replace_all(text, r#"<a href="${2}" target="_blank">${1}</a>"#)
                .into_owned(),
        }
    }
}

fn fenced_code(text: &str, stash: &mut CodeStash) -> String {
    FENCED_CODE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let language = caps.get(1).map_or(DEFAULT_LANGUAGE, |m| m.as_str());
            let body = escape_html(caps[2].trim());
            stash.stash(format!(
                "<pre><code class=\"language-{language}\">{body}</code></pre>"
            ))
        })
        .into_owned()
}

fn headers(text: &str) -> String {
    HEADER_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", &caps[2])
        })
        .into_owned()
}

/// Converts `- ` lines and wraps only the first contiguous run.
///
/// A second list later in the document keeps bare `<li>` lines.
fn list_items(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut first_run: Option<(usize, usize)> = None;
    let mut in_first_run = false;

    for (index, line) in text.split('\n').enumerate() {
        match line.strip_prefix("- ") {
            Some(rest) => {
                lines.push(format!("<li>{rest}</li>"));
                match first_run {
                    None => {
                        first_run = Some((index, index));
                        in_first_run = true;
                    }
                    Some((start, _)) if in_first_run => first_run = Some((start, index)),
                    Some(_) => {}
                }
            }
            None => {
                lines.push(line.to_string());
                in_first_run = false;
            }
        }
    }

    if let Some((start, end)) = first_run {
        lines[start].insert_str(0, "<ul>");
        lines[end].push_str("</ul>");
    }

    lines.join("\n")
}

/// Wraps every block that does not open with a structural tag.
///
/// The tag check looks at the block exactly as split, so a block with
/// leading whitespace before its tag is still wrapped.
fn paragraphs(text: &str) -> String {
    BLANK_LINES_RE
        .split(text)
        .filter_map(|block| {
            if CodeStash::starts_with_placeholder(block)
                || BLOCK_OPENERS.iter().any(|tag| block.starts_with(tag))
            {
                return Some(block.to_string());
            }

            let trimmed = block.trim();
            (!trimmed.is_empty()).then(|| format!("<p>{trimmed}</p>"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escapes `& < > " '` for insertion into element content.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
