//! Markdown inspection.

use pulldown_cmark::{Event, Options, Parser, Tag};

/// Whether a Markdown body embeds at least one image.
///
/// The body is parsed with GitHub-flavoured extensions and every event is
/// scanned, so images nested inside links, lists, quotes or tables count.
/// Raw `<img>` tags count too, since that is what GitHub inserts for pasted
/// screenshots. An absent or blank body has no image.
#[must_use]
pub fn contains_image(body: Option<&str>) -> bool {
    let Some(body) = body.filter(|b| !b.trim().is_empty()) else {
        return false;
    };

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;

    Parser::new_ext(body, options).any(|event| match event {
        Event::Start(Tag::Image { .. }) => true,
        Event::Html(html) | Event::InlineHtml(html) => is_img_tag(&html),
        _ => false,
    })
}

fn is_img_tag(html: &str) -> bool {
    html.to_ascii_lowercase().contains("<img")
}
