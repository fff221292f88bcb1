//! HTML page template.
//!
//! Renders the full page around the converted markdown: breadcrumb links
//! in the header, sibling links in the nav, content in the section. The
//! template is an inline constant of the binary; no file is read at
//! runtime.

use std::fmt::Write;

use mdweb_site::{LinkPair, PageView, escape_html};

/// Page styles, shared by every rendered page.
const STYLE: &str = "\
      * {
         font-family: Helvetica, Arial, Sans-Serif;
         color: #262626;
      }
      #wrapper {
        max-width: 720px;
        margin: 0 auto;
      }
      p {
        line-height: 1.5em;
      }
      pre {
        border: 2px solid #262626;
        padding: 5px;
        background-color: #fff5e6;
        overflow-x: scroll;
      }
      code {
        font-family: monospace;
      }
      body {
        background-color: #fdfdfd;
      }
      header {
        padding: 25px;
        font-size: 2.5em;
        text-align: center;
      }
      header a {
        color: #375eab;
        font-weight: bold;
        padding-right: 10px;
        text-decoration: none;
      }
      header a:hover {
        text-decoration: underline;
      }
      nav {
        font-size: 1.2em;
        text-align: center;
      }
      nav a {
        text-decoration: none;
        padding-right: 10px;
      }
      nav a:hover {
        color: #375eab;
      }
      section {
        padding: 25px;
        font-size: 1.2em;
      }
";

/// Render a complete HTML page.
///
/// Titles and link labels are escaped; the content is rendered markdown
/// and is inserted as-is.
pub(crate) fn render_page(page: &PageView, static_url: &str) -> String {
    let mut html = String::with_capacity(4096 + page.content.len());

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&page.title));
    let _ = writeln!(
        html,
        "<link rel=\"icon\" href=\"{}/favicon.png\">",
        escape_html(static_url)
    );
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n<div id=\"wrapper\">\n");

    html.push_str("<header>\n");
    render_links(&mut html, &page.header_links);
    html.push_str("</header>\n");

    html.push_str("<nav>\n");
    render_links(&mut html, &page.nav_links);
    html.push_str("</nav>\n");

    html.push_str("<section>\n");
    html.push_str(&page.content);
    html.push_str("\n</section>\n");

    html.push_str("</div>\n</body>\n</html>");
    html
}

/// Render a link list.
fn render_links(html: &mut String, links: &[LinkPair]) {
    for link in links {
        let _ = writeln!(
            html,
            "<a href=\"{}\">{}</a>",
            escape_html(&link.target),
            escape_html(&link.label),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageView {
        PageView {
            title: "guide".to_owned(),
            header_links: vec![LinkPair::new("/", "/")],
            nav_links: vec![LinkPair::new("one", "one"), LinkPair::new("sub/", "sub")],
            content: "<p>Hello world</p>".to_owned(),
        }
    }

    #[test]
    fn render_page_contains_content_and_title() {
        let html = render_page(&page(), "/static");

        assert!(html.contains("<p>Hello world</p>"));
        assert!(html.contains("<title>guide</title>"));
    }

    #[test]
    fn render_page_links_favicon_from_static_url() {
        let html = render_page(&page(), "/static");

        assert!(html.contains("href=\"/static/favicon.png\""));
    }

    #[test]
    fn render_page_contains_header_and_nav_links() {
        let html = render_page(&page(), "/static");

        assert!(html.contains("<a href=\"/\">/</a>"));
        assert!(html.contains("<a href=\"one\">one</a>"));
        assert!(html.contains("<a href=\"sub/\">sub</a>"));
    }

    #[test]
    fn render_page_escapes_title() {
        let mut view = page();
        view.title = "<script>".to_owned();

        let html = render_page(&view, "/static");

        assert!(!html.contains("<title><script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn render_page_inserts_content_unescaped() {
        let mut view = page();
        view.content = "<h1>Raw</h1>".to_owned();

        let html = render_page(&view, "/static");

        assert!(html.contains("<h1>Raw</h1>"));
    }

    #[test]
    fn render_page_empty_nav_renders_empty_element() {
        let mut view = page();
        view.nav_links.clear();

        let html = render_page(&view, "/static");

        assert!(html.contains("<nav>\n</nav>"));
    }
}
