use ammonia;
use pulldown_cmark::{Event, Options, Parser, html};

/// Clean HTML content using the ammonia library.
///
/// This employs a whitelist-based sanitization strategy: it preserves safe tags
/// (like <b>, <p>) while stripping dangerous tags (like <script>, <iframe>)
/// and malicious attributes (like onclick).
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}

/// Escapes plain text for interpolation into markup.
pub fn escape(input: &str) -> String {
    ammonia::clean_text(input)
}

/// Renders user-submitted markdown to safe HTML.
///
/// Supports the common subset (emphasis, headings, lists, tables,
/// strikethrough). Raw HTML in the source is shown as text, never passed
/// through, and the result is sanitized once more.
pub fn render_markdown(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(input, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(input.len() * 3 / 2);
    html::push_html(&mut out, parser);
    clean_html(&out)
}
