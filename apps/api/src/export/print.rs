//! Print Document Assembler — wraps rendered resume markup into a standalone
//! HTML document that opens the browser print dialog.
//!
//! The print call fires after a fixed delay so images and web fonts have a
//! chance to load. There is no load-complete signal; a slow picture can still
//! miss the first print.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::export::templates::escape_html;

pub const DEFAULT_PRINT_DELAY_MS: u64 = 500;
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Emit the delayed `window.print()` script.
    pub auto_print: bool,
    pub delay_ms: u64,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            auto_print: true,
            delay_ms: DEFAULT_PRINT_DELAY_MS,
        }
    }
}

/// A finished export, ready to be sent as `text/html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    pub html: String,
    pub content_type: &'static str,
}

impl IntoResponse for PrintDocument {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, self.content_type)], self.html).into_response()
    }
}

const PRINT_STYLES: &str = r#"<style>
* { -webkit-print-color-adjust: exact !important; print-color-adjust: exact !important; color-adjust: exact !important; }
html, body { margin: 0; padding: 0; background: #fff; }
@page { size: A4; margin: 0; }
@media print {
  body { margin: 0; }
  .entry, .skill, header, h2 { break-inside: avoid; page-break-inside: avoid; }
  h2 { break-after: avoid; page-break-after: avoid; }
  a { color: inherit; text-decoration: none; }
}
</style>"#;

pub fn assemble_print_document(title: &str, body: &str, options: PrintOptions) -> PrintDocument {
    let title = if title.trim().is_empty() {
        "Resume".to_string()
    } else {
        escape_html(title.trim())
    };

    let mut html = String::with_capacity(body.len() + 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(PRINT_STYLES);
    html.push_str("\n</head>\n<body>\n");
    html.push_str(body);
    if options.auto_print {
        html.push_str(&format!(
            "\n<script>window.addEventListener('load', function () {{ setTimeout(function () {{ window.print(); }}, {}); }});</script>",
            options.delay_ms
        ));
    }
    html.push_str("\n</body>\n</html>\n");

    PrintDocument {
        html,
        content_type: HTML_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell_and_title() {
        let doc = assemble_print_document("My <CV>", "<p>body</p>", PrintOptions::default());
        assert!(doc.html.starts_with("<!DOCTYPE html>"));
        assert!(doc.html.contains("<title>My &lt;CV&gt;</title>"));
        assert!(doc.html.contains("<p>body</p>"));
        assert!(doc.html.trim_end().ends_with("</html>"));
        assert_eq!(doc.content_type, "text/html; charset=utf-8");
    }

    #[test]
    fn test_forces_exact_colours_and_avoids_breaks() {
        let doc = assemble_print_document("CV", "", PrintOptions::default());
        assert!(doc.html.contains("print-color-adjust: exact"));
        assert!(doc.html.contains("-webkit-print-color-adjust: exact"));
        assert!(doc.html.contains("page-break-inside: avoid"));
    }

    #[test]
    fn test_print_script_uses_configured_delay() {
        let doc = assemble_print_document(
            "CV",
            "",
            PrintOptions {
                auto_print: true,
                delay_ms: 1250,
            },
        );
        assert!(doc.html.contains("window.print()"));
        assert!(doc.html.contains("}, 1250);"));
    }

    #[test]
    fn test_preview_has_no_print_script() {
        let doc = assemble_print_document(
            "CV",
            "",
            PrintOptions {
                auto_print: false,
                ..Default::default()
            },
        );
        assert!(!doc.html.contains("window.print()"));
    }

    #[test]
    fn test_blank_title_falls_back() {
        let doc = assemble_print_document("  ", "", PrintOptions::default());
        assert!(doc.html.contains("<title>Resume</title>"));
    }
}
