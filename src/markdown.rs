//! Markdown Rendering
//!
//! Card descriptions are short inline Markdown snippets.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Render a one-paragraph description to HTML without the `<p>` wrapper.
/// Raw HTML in the source is escaped.
pub fn render_inline(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH)
        .filter(|event| !matches!(event, Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)))
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

    let mut out = String::with_capacity(source.len() + source.len() / 2);
    html::push_html(&mut out, parser);
    out.trim_end().to_string()
}
