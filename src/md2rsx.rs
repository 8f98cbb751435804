//! Markdown to RSX conversion for assistant answers.
//!
//! Model output is usually Markdown. Rather than injecting HTML, the text is
//! parsed with pulldown-cmark and rebuilt as a tree of Dioxus elements, which
//! keeps any raw HTML in the answer inert.

use dioxus::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Converts a Markdown string to an [`Element`].
///
/// Supports headings, paragraphs, emphasis, strong and struck-through text,
/// inline code and code blocks, ordered and unordered lists, tables,
/// blockquotes, links, rules and line breaks. Raw HTML is shown as text.
pub fn markdown_to_rsx(md: &str) -> Element {
    let parser = Parser::new_ext(md, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);

    // One frame per open container; links remember their target.
    let mut stack: Vec<(Vec<Element>, Option<String>)> = vec![(vec![], None)];

    for ev in parser {
        match ev {
            Event::Start(tag) => {
                let href = match tag {
                    Tag::Link { dest_url, .. } => Some(dest_url.to_string()),
                    _ => None,
                };
                stack.push((vec![], href));
            }
            Event::End(tag) => {
                if stack.len() < 2 {
                    continue;
                }
                let Some((children, href)) = stack.pop() else {
                    continue;
                };
                let children = children.into_iter();
                let node = match tag {
                    TagEnd::Paragraph => rsx! { p { {children} } },
                    TagEnd::Heading(level) => match level {
                        HeadingLevel::H1 => rsx! { h1 { {children} } },
                        HeadingLevel::H2 => rsx! { h2 { {children} } },
                        HeadingLevel::H3 => rsx! { h3 { {children} } },
                        HeadingLevel::H4 => rsx! { h4 { {children} } },
                        HeadingLevel::H5 => rsx! { h5 { {children} } },
                        _ => rsx! { h6 { {children} } },
                    },
                    TagEnd::BlockQuote(_) => rsx! { blockquote { {children} } },
                    TagEnd::CodeBlock => rsx! {
                        pre {
                            code { {children} }
                        }
                    },
                    TagEnd::List(true) => rsx! { ol { {children} } },
                    TagEnd::List(false) => rsx! { ul { {children} } },
                    TagEnd::Item => rsx! { li { {children} } },
                    TagEnd::Table => rsx! { table { {children} } },
                    TagEnd::TableHead => rsx! { thead { {children} } },
                    TagEnd::TableRow => rsx! { tr { {children} } },
                    TagEnd::TableCell => rsx! { td { {children} } },
                    TagEnd::Emphasis => rsx! { em { {children} } },
                    TagEnd::Strong => rsx! { strong { {children} } },
                    TagEnd::Strikethrough => rsx! { del { {children} } },
                    TagEnd::Link => {
                        let href = href.unwrap_or_default();
                        rsx! {
                            a { href: "{href}", target: "_blank", rel: "noopener noreferrer", {children} }
                        }
                    }
                    _ => rsx! { span { {children} } },
                };
                if let Some((parent, _)) = stack.last_mut() {
                    parent.push(node);
                }
            }
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                if let Some((parent, _)) = stack.last_mut() {
                    parent.push(rsx! { "{text}" });
                }
            }
            Event::Code(code) => {
                if let Some((parent, _)) = stack.last_mut() {
                    parent.push(rsx! { code { "{code}" } });
                }
            }
            Event::Rule => {
                if let Some((parent, _)) = stack.last_mut() {
                    parent.push(rsx! { hr {} });
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((parent, _)) = stack.last_mut() {
                    parent.push(rsx! { br {} });
                }
            }
            _ => {}
        }
    }

    let children = stack.into_iter().flat_map(|(c, _)| c);
    rsx! {
        div { class: "markdown", {children} }
    }
}
