//! Markdown to RSX conversion.
//!
//! Chat turns are plain Markdown text. Conversion runs in two steps:
//! [`parse`] walks the pulldown-cmark event stream into a small [`MdNode`]
//! tree, keeping one stack frame per open container, and [`markdown_to_rsx`]
//! renders that tree as Dioxus elements.
//!
//! Raw HTML in the input is kept as text, never injected. Link and image
//! targets outside `http`, `https`, `mailto` and relative URLs are dropped.

use dioxus::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

#[derive(Debug, Clone, PartialEq)]
pub enum MdNode {
    Text(String),
    Code(String),
    Rule,
    HardBreak,
    /// `alt` is the flattened text of the image description.
    Image { src: Option<String>, alt: String },
    Block { kind: BlockKind, children: Vec<MdNode> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    BlockQuote,
    CodeBlock,
    OrderedList(u64),
    BulletList,
    Item,
    Table,
    TableHead,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    /// `None` when the target was rejected; rendered as a plain span.
    Link(Option<String>),
    Other,
}

/// Returns the trimmed URL if it is relative or uses an allowed scheme.
///
/// Whitespace and control characters are ignored when reading the scheme, as
/// browsers do, so `java\tscript:` is still rejected.
pub fn safe_url(url: &str) -> Option<String> {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    match cleaned.find([':', '/', '?', '#']) {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            if SAFE_SCHEMES.contains(&scheme.as_str()) {
                Some(url.trim().to_string())
            } else {
                None
            }
        }
        _ => Some(url.trim().to_string()),
    }
}

fn flatten_text(nodes: &[MdNode]) -> String {
    let mut out = String::new();
    for n in nodes {
        match n {
            MdNode::Text(t) | MdNode::Code(t) => out.push_str(t),
            MdNode::Image { alt, .. } => out.push_str(alt),
            MdNode::Block { children, .. } => out.push_str(&flatten_text(children)),
            MdNode::Rule | MdNode::HardBreak => {}
        }
    }
    out
}

fn close(tag: Tag<'_>, children: Vec<MdNode>) -> MdNode {
    let kind = match tag {
        Tag::Image { dest_url, .. } => {
            return MdNode::Image {
                src: safe_url(&dest_url),
                alt: flatten_text(&children),
            };
        }
        Tag::Paragraph => BlockKind::Paragraph,
        Tag::Heading { level, .. } => BlockKind::Heading(match level {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            _ => 6,
        }),
        Tag::BlockQuote(_) => BlockKind::BlockQuote,
        Tag::CodeBlock(_) => BlockKind::CodeBlock,
        Tag::List(Some(start)) => BlockKind::OrderedList(start),
        Tag::List(None) => BlockKind::BulletList,
        Tag::Item => BlockKind::Item,
        Tag::Table(_) => BlockKind::Table,
        Tag::TableHead => BlockKind::TableHead,
        Tag::TableRow => BlockKind::TableRow,
        Tag::TableCell => BlockKind::TableCell,
        Tag::Emphasis => BlockKind::Emphasis,
        Tag::Strong => BlockKind::Strong,
        Tag::Strikethrough => BlockKind::Strikethrough,
        Tag::Link { dest_url, .. } => BlockKind::Link(safe_url(&dest_url)),
        _ => BlockKind::Other,
    };
    MdNode::Block { kind, children }
}

/// Parses Markdown into a node tree.
pub fn parse(md: &str) -> Vec<MdNode> {
    let parser = Parser::new_ext(md, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);

    // The root frame has no tag and is never popped.
    let mut stack: Vec<(Option<Tag>, Vec<MdNode>)> = vec![(None, vec![])];

    for ev in parser {
        let node = match ev {
            Event::Start(tag) => {
                stack.push((Some(tag), vec![]));
                continue;
            }
            Event::End(_) => {
                if stack.len() < 2 {
                    continue;
                }
                let Some((Some(tag), children)) = stack.pop() else {
                    continue;
                };
                close(tag, children)
            }
            Event::Text(text) => MdNode::Text(text.to_string()),
            Event::Code(code) => MdNode::Code(code.to_string()),
            Event::Html(html) | Event::InlineHtml(html) => MdNode::Text(html.to_string()),
            Event::Rule => MdNode::Rule,
            Event::SoftBreak => MdNode::Text(" ".to_string()),
            Event::HardBreak => MdNode::HardBreak,
            _ => continue,
        };
        if let Some((_, children)) = stack.last_mut() {
            children.push(node);
        }
    }

    // Unclosed containers only happen on malformed input; keep their content.
    stack.into_iter().flat_map(|(_, c)| c).collect()
}

/// Converts a Markdown string to a Dioxus element.
pub fn markdown_to_rsx(md: &str) -> Element {
    let children = parse(md).into_iter().map(render);
    rsx! {
        div { class: "markdown", {children} }
    }
}

fn render(node: MdNode) -> Element {
    let (kind, children) = match node {
        MdNode::Text(text) => return rsx! { "{text}" },
        MdNode::Code(code) => {
            return rsx! {
                code { "{code}" }
            };
        }
        MdNode::Rule => return rsx! { hr {} },
        MdNode::HardBreak => return rsx! { br {} },
        MdNode::Image { src: Some(src), alt } => return rsx! { img { src, alt } },
        MdNode::Image { src: None, alt } => return rsx! { span { "{alt}" } },
        MdNode::Block { kind, children } => (kind, children),
    };
    let children = children.into_iter().map(render);
    match kind {
        BlockKind::Paragraph => rsx! { p { {children} } },
        BlockKind::Heading(1) => rsx! { h1 { {children} } },
        BlockKind::Heading(2) => rsx! { h2 { {children} } },
        BlockKind::Heading(3) => rsx! { h3 { {children} } },
        BlockKind::Heading(4) => rsx! { h4 { {children} } },
        BlockKind::Heading(5) => rsx! { h5 { {children} } },
        BlockKind::Heading(_) => rsx! { h6 { {children} } },
        BlockKind::BlockQuote => rsx! { blockquote { {children} } },
        BlockKind::CodeBlock => rsx! {
            pre {
                code { {children} }
            }
        },
        BlockKind::OrderedList(start) => rsx! { ol { "start": "{start}", {children} } },
        BlockKind::BulletList => rsx! { ul { {children} } },
        BlockKind::Item => rsx! { li { {children} } },
        BlockKind::Table => rsx! { table { {children} } },
        BlockKind::TableHead => rsx! { thead { {children} } },
        BlockKind::TableRow => rsx! { tr { {children} } },
        BlockKind::TableCell => rsx! { td { {children} } },
        BlockKind::Emphasis => rsx! { em { {children} } },
        BlockKind::Strong => rsx! { strong { {children} } },
        BlockKind::Strikethrough => rsx! { del { {children} } },
        BlockKind::Link(Some(href)) => rsx! {
            a {
                href,
                target: "_blank",
                rel: "noopener noreferrer",
                {children}
            }
        },
        BlockKind::Link(None) => rsx! { span { {children} } },
        BlockKind::Other => rsx! { div { {children} } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MdNode {
        MdNode::Text(s.to_string())
    }

    fn block(kind: BlockKind, children: Vec<MdNode>) -> MdNode {
        MdNode::Block { kind, children }
    }

    fn only_paragraph(md: &str) -> Vec<MdNode> {
        match parse(md).as_slice() {
            [MdNode::Block { kind: BlockKind::Paragraph, children }] => children.clone(),
            other => panic!("expected one paragraph, got {other:?}"),
        }
    }

    #[test]
    fn url_filter_allows_web_mail_and_relative() {
        for url in [
            "https://example.com/a?b=c",
            "HTTP://EXAMPLE.COM",
            "mailto:max@example.com",
            "/docs/page",
            "page.html#top",
            "?q=1",
        ] {
            assert!(safe_url(url).is_some(), "{url} should pass");
        }
    }

    #[test]
    fn url_filter_rejects_script_schemes() {
        for url in [
            "javascript:alert(document.cookie)",
            "JavaScript:alert(1)",
            " java\tscript:alert(1)",
            "data:text/html;base64,PHNjcmlwdD4=",
            "vbscript:msgbox",
        ] {
            assert_eq!(safe_url(url), None, "{url} should be rejected");
        }
    }

    #[test]
    fn raw_html_is_kept_as_text() {
        let nodes = only_paragraph("hi <script>alert(1)</script> there");
        assert!(nodes.iter().all(|n| matches!(n, MdNode::Text(_))));
        let joined = flatten_text(&nodes);
        assert_eq!(joined, "hi <script>alert(1)</script> there");
    }

    #[test]
    fn ordered_list_keeps_start_number() {
        let nodes = parse("3. three\n4. four\n");
        assert!(matches!(
            nodes.as_slice(),
            [MdNode::Block { kind: BlockKind::OrderedList(3), children }] if children.len() == 2
        ));
    }

    #[test]
    fn bullet_list_is_unordered() {
        let nodes = parse("- a\n- b\n- c\n");
        assert!(matches!(
            nodes.as_slice(),
            [MdNode::Block { kind: BlockKind::BulletList, children }] if children.len() == 3
        ));
    }

    #[test]
    fn safe_link_keeps_href() {
        assert_eq!(
            only_paragraph("[docs](https://example.com)"),
            vec![block(
                BlockKind::Link(Some("https://example.com".into())),
                vec![text("docs")]
            )]
        );
    }

    #[test]
    fn script_link_loses_href_but_keeps_label() {
        assert_eq!(
            only_paragraph("[click me](javascript:alert(document.cookie))"),
            vec![block(BlockKind::Link(None), vec![text("click me")])]
        );
    }

    #[test]
    fn image_alt_text_is_collected() {
        assert_eq!(
            only_paragraph("![a *fluffy* cat](https://example.com/cat.png)"),
            vec![MdNode::Image {
                src: Some("https://example.com/cat.png".into()),
                alt: "a fluffy cat".into(),
            }]
        );
    }

    #[test]
    fn script_image_has_no_src() {
        assert_eq!(
            only_paragraph("![x](javascript:alert(1))"),
            vec![MdNode::Image {
                src: None,
                alt: "x".into()
            }]
        );
    }

    #[test]
    fn inline_formatting_nests() {
        assert_eq!(
            only_paragraph("**bold _it_** ~~gone~~ `code`"),
            vec![
                block(
                    BlockKind::Strong,
                    vec![text("bold "), block(BlockKind::Emphasis, vec![text("it")])]
                ),
                text(" "),
                block(BlockKind::Strikethrough, vec![text("gone")]),
                text(" "),
                MdNode::Code("code".into()),
            ]
        );
    }
}
