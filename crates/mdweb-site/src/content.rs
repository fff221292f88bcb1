//! Markdown content loading and rendering.

use std::fs;
use std::path::Path;

use pulldown_cmark::{Options, Parser, html};

use crate::error::PageError;

/// Placeholder token replaced with the static-asset base URL.
pub const STATIC_TOKEN: &str = "{{ static }}";

/// Load a markdown file and render it to HTML.
///
/// Every occurrence of [`STATIC_TOKEN`] in the rendered output is replaced
/// with `static_url`. Substitution runs on the rendered HTML, so tokens
/// inside code spans are replaced too.
///
/// # Errors
///
/// Returns [`PageError::NotMarkdown`] if the path's extension is not `md`,
/// or [`PageError::Read`] if the file cannot be read (missing, permission
/// denied, or a directory).
pub fn load_content(file_path: &Path, static_url: &str) -> Result<String, PageError> {
    if file_path.extension().and_then(|e| e.to_str()) != Some("md") {
        return Err(PageError::NotMarkdown(file_path.to_path_buf()));
    }
    let markdown = fs::read_to_string(file_path).map_err(PageError::Read)?;
    Ok(render_markdown(&markdown).replace(STATIC_TOKEN, static_url))
}

/// Render markdown to HTML with GFM extensions enabled.
fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;
    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn renders_markdown_to_html() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("page.md");
        fs::write(&path, "# Hello\n\nWorld").unwrap();

        let html = load_content(&path, "/static").unwrap();

        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn renders_gfm_tables() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("page.md");
        fs::write(&path, "| a | b |\n|---|---|\n| 1 | 2 |").unwrap();

        let html = load_content(&path, "/static").unwrap();

        assert!(html.contains("<table>"));
    }

    #[test]
    fn substitutes_every_static_token() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("page.md");
        fs::write(
            &path,
            "![a]({{ static }}/a.png)\n\n![b]({{ static }}/b.png)",
        )
        .unwrap();

        let html = load_content(&path, "/static").unwrap();

        assert!(html.contains("/static/a.png"));
        assert!(html.contains("/static/b.png"));
        assert!(!html.contains(STATIC_TOKEN));
    }

    #[test]
    fn rejects_non_markdown_extension() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("logo.png");
        fs::write(&path, [0u8; 4]).unwrap();

        let result = load_content(&path, "/static");

        assert!(matches!(result, Err(PageError::NotMarkdown(_))));
    }

    #[test]
    fn missing_file_is_read_failure() {
        let temp = tempfile::tempdir().unwrap();

        let result = load_content(&temp.path().join("nope.md"), "/static");

        assert!(matches!(result, Err(PageError::Read(_))));
    }

    #[test]
    fn directory_is_read_failure() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("page.md");
        fs::create_dir(&dir).unwrap();

        let result = load_content(&dir, "/static");

        assert!(matches!(result, Err(PageError::Read(_))));
    }
}
