//! Assembles the three sources into one displayable HTML document.
//!
//! Composition is plain interpolation. Nothing is escaped or rewritten, so the
//! result must only ever be shown in a surface that shares no script, style or
//! cookie scope with the application itself.

use std::ops::Range;

const HEAD: &str = "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"UTF-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
<style>";
const HEAD_TO_BODY: &str = "</style>\n</head>\n<body>\n";
const BODY_TO_SCRIPT: &str = "\n<script>";
const TAIL: &str = "</script>\n</body>\n</html>\n";

/// A composed document plus the byte ranges of its three regions.
///
/// The ranges are recorded while writing, not found by searching, so user
/// text containing `</style>` or `</script>` cannot shift them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedDocument {
    text: String,
    style: Range<usize>,
    markup: Range<usize>,
    script: Range<usize>,
}

impl ComposedDocument {
    pub fn new(html: &str, css: &str, js: &str) -> Self {
        let mut text = String::with_capacity(
            HEAD.len() + HEAD_TO_BODY.len() + BODY_TO_SCRIPT.len() + TAIL.len()
                + html.len() + css.len() + js.len(),
        );

        text.push_str(HEAD);
        let style = push_region(&mut text, css);
        text.push_str(HEAD_TO_BODY);
        let markup = push_region(&mut text, html);
        text.push_str(BODY_TO_SCRIPT);
        let script = push_region(&mut text, js);
        text.push_str(TAIL);

        Self { text, style, markup, script }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Content of the `<style>` block
    pub fn style(&self) -> &str {
        &self.text[self.style.clone()]
    }

    /// User markup at the start of the body
    pub fn markup(&self) -> &str {
        &self.text[self.markup.clone()]
    }

    /// Content of the trailing `<script>` block
    pub fn script(&self) -> &str {
        &self.text[self.script.clone()]
    }

    pub fn style_range(&self) -> Range<usize> {
        self.style.clone()
    }

    pub fn markup_range(&self) -> Range<usize> {
        self.markup.clone()
    }

    pub fn script_range(&self) -> Range<usize> {
        self.script.clone()
    }
}

fn push_region(text: &mut String, content: &str) -> Range<usize> {
    let start = text.len();
    text.push_str(content);
    start..text.len()
}

/// Compose `html`, `css` and `js` into a complete HTML document.
pub fn compose(html: &str, css: &str, js: &str) -> String {
    ComposedDocument::new(html, css, js).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_hold_inputs_verbatim() {
        let doc = ComposedDocument::new("<h1>Hi</h1>", "h1{color:red}", "console.log(1)");
        assert_eq!(doc.style(), "h1{color:red}");
        assert_eq!(doc.markup(), "<h1>Hi</h1>");
        assert_eq!(doc.script(), "console.log(1)");
        assert!(doc.as_str().starts_with("<!DOCTYPE html>"));
        assert!(doc.as_str().contains("<style>h1{color:red}</style>"));
        assert!(doc.as_str().contains("<script>console.log(1)</script>"));
    }

    #[test]
    fn test_region_order_is_style_markup_script() {
        let doc = ComposedDocument::new("M", "S", "J");
        assert!(doc.style_range().end <= doc.markup_range().start);
        assert!(doc.markup_range().end <= doc.script_range().start);

        let text = doc.as_str();
        let head_end = text.find("</head>").unwrap();
        let body_start = text.find("<body>").unwrap();
        assert!(doc.style_range().end < head_end);
        assert!(doc.markup_range().start > body_start);
    }

    #[test]
    fn test_no_escaping_of_closing_tags() {
        let css = "a::after{content:'</style>'}";
        let js = "document.write('</script>')";
        let html = "<p>&amp; <b>bold</b></p>";
        let doc = ComposedDocument::new(html, css, js);
        assert_eq!(doc.style(), css);
        assert_eq!(doc.markup(), html);
        assert_eq!(doc.script(), js);
    }

    #[test]
    fn test_empty_sources() {
        let doc = ComposedDocument::new("", "", "");
        assert_eq!(doc.style(), "");
        assert_eq!(doc.markup(), "");
        assert_eq!(doc.script(), "");
        assert!(doc.as_str().contains("<style></style>"));
        assert!(doc.as_str().contains("<script></script>"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose("<div>x</div>", "div{}", "let x = 1;");
        let b = compose("<div>x</div>", "div{}", "let x = 1;");
        assert_eq!(a, b);
    }

    #[test]
    fn test_changing_html_only_changes_markup_region() {
        let a = ComposedDocument::new("<p>one</p>", "p{margin:0}", "alert(2)");
        let b = ComposedDocument::new("<section>two</section>", "p{margin:0}", "alert(2)");

        let (ta, tb) = (a.as_str(), b.as_str());
        assert_eq!(ta[..a.markup_range().start], tb[..b.markup_range().start]);
        assert_eq!(ta[a.markup_range().end..], tb[b.markup_range().end..]);
        assert_ne!(a.markup(), b.markup());
    }

    #[test]
    fn test_compose_matches_document_text() {
        let doc = ComposedDocument::new("h", "c", "j");
        assert_eq!(compose("h", "c", "j"), doc.as_str());
    }

    #[test]
    fn test_multibyte_content() {
        let doc = ComposedDocument::new("<p>héllo 🦀</p>", "p::before{content:'→'}", "console.log('ü')");
        assert_eq!(doc.markup(), "<p>héllo 🦀</p>");
        assert_eq!(doc.style(), "p::before{content:'→'}");
        assert_eq!(doc.script(), "console.log('ü')");
    }
}
