//! Inline link rendering
//!
//! Rewrites `[PageName]` occurrences in a page body into anchors pointing at
//! that page's view route. Single leftmost-first pass, non-overlapping; the
//! emitted anchors are never rescanned.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::store::Page;

static INNER_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([A-Za-z0-9]+)\]").expect("invalid inner link regex"));

/// A page body with inline links expanded, ready for the view template.
///
/// `html_body` is pre-rendered HTML and must not be escaped again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub title: String,
    pub html_body: String,
}

/// Expand every `[Name]` in the body into `<a href="/view/Name">Name</a>`.
///
/// The captured name is inserted verbatim into both the href and the link
/// text; everything outside a match passes through untouched.
pub fn render(page: &Page) -> RenderedPage {
    let html_body = INNER_LINK
        .replace_all(&page.body, |caps: &Captures| {
            let name = &caps[1];
            format!("<a href=\"/view/{}\">{}</a>", name, name)
        })
        .into_owned();

    RenderedPage {
        title: page.title.clone(),
        html_body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> Page {
        Page {
            title: "Test".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_render_expands_inline_links() {
        let rendered = render(&page("See [Home] and [Foo2]."));
        assert_eq!(
            rendered.html_body,
            "See <a href=\"/view/Home\">Home</a> and <a href=\"/view/Foo2\">Foo2</a>."
        );
    }

    #[test]
    fn test_render_is_identity_without_brackets() {
        let body = "No links here, just text with some <html> in it.";
        let rendered = render(&page(body));
        assert_eq!(rendered.html_body, body);
    }

    #[test]
    fn test_render_empty_body() {
        let rendered = render(&page(""));
        assert_eq!(rendered.html_body, "");
    }

    #[test]
    fn test_render_skips_malformed_brackets() {
        // Empty brackets and non-alphanumeric content are not links
        let rendered = render(&page("[] [1a]"));
        assert_eq!(rendered.html_body, "[] <a href=\"/view/1a\">1a</a>");

        let rendered = render(&page("unmatched [ bracket and [two words]"));
        assert_eq!(
            rendered.html_body,
            "unmatched [ bracket and [two words]"
        );
    }

    #[test]
    fn test_render_does_not_rescan_output() {
        // The outer brackets surround the emitted anchor after replacement;
        // a rescanning implementation would try to link it again
        let rendered = render(&page("[[X]]"));
        assert_eq!(rendered.html_body, "[<a href=\"/view/X\">X</a>]");

        let rendered = render(&page("[A][B]"));
        assert_eq!(
            rendered.html_body,
            "<a href=\"/view/A\">A</a><a href=\"/view/B\">B</a>"
        );
    }

    #[test]
    fn test_render_keeps_title() {
        let rendered = render(&Page {
            title: "FrontPage".to_string(),
            body: "hello".to_string(),
        });
        assert_eq!(rendered.title, "FrontPage");
    }
}
