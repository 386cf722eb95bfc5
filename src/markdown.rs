//! Markdown Rendering
//!
//! Renders the static page copy with pulldown-cmark. External links open in a
//! new tab; `tel:`, `mailto:` and in-page links render unchanged.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::format::escape_html;

/// Parse markdown with tables and strikethrough enabled
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Rewrite external links as raw anchors with `target="_blank"`
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // One entry per open link: was it rewritten?
    let mut open_links: Vec<bool> = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::Link { dest_url, title, link_type, id }) => {
                if is_external(&dest_url) {
                    let mut anchor = format!(
                        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"",
                        escape_html(&dest_url)
                    );
                    if !title.is_empty() {
                        anchor.push_str(&format!(" title=\"{}\"", escape_html(&title)));
                    }
                    anchor.push('>');
                    events.push(Event::Html(CowStr::from(anchor)));
                    open_links.push(true);
                } else {
                    events.push(Event::Start(Tag::Link { dest_url, title, link_type, id }));
                    open_links.push(false);
                }
            }
            Event::End(TagEnd::Link) => {
                if open_links.pop().unwrap_or(false) {
                    events.push(Event::Html(CowStr::Borrowed("</a>")));
                } else {
                    events.push(Event::End(TagEnd::Link));
                }
            }
            other => events.push(other),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_link_opens_new_tab() {
        let html = render_markdown("Find us on [the map](https://maps.example.com/?q=a&b \"Directions\").");
        assert!(html.contains(
            "<a href=\"https://maps.example.com/?q=a&amp;b\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"Directions\">the map</a>"
        ));
    }

    #[test]
    fn test_contact_links_unchanged() {
        let html = render_markdown("[Call us](tel:+6328123456) or [email](mailto:hello@clinic.test)");
        assert!(html.contains("<a href=\"tel:+6328123456\">Call us</a>"));
        assert!(html.contains("<a href=\"mailto:hello@clinic.test\">email</a>"));
        assert!(!html.contains("_blank"));
    }

    #[test]
    fn test_tables_enabled() {
        let html = render_markdown("| Day | Hours |\n|---|---|\n| Mon | 8-5 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Mon</td>"));
    }
}
