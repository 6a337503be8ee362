use fltk::{misc::HelpView, prelude::*};

use crate::app::services::composer::ComposedDocument;

/// Elements HelpView would print as body text instead of running or applying.
const NON_RENDERED: [&str; 2] = ["script", "style"];

/// The Output panel.
///
/// HelpView has no script engine and ignores style sheets, so it gets the
/// markup region only. The full document goes to the browser preview.
pub struct OutputView {
    pub view: HelpView,
}

impl OutputView {
    pub fn new() -> Self {
        let mut view = HelpView::new(0, 0, 0, 0, "");
        view.set_text_size(16);
        view.hide();
        Self { view }
    }

    pub fn show_document(&mut self, doc: &ComposedDocument) {
        self.view.set_value(&inline_markup(doc));
        self.view.redraw();
    }
}

impl Default for OutputView {
    fn default() -> Self {
        Self::new()
    }
}

/// The user's markup wrapped in a bare page, with every `<script>` and
/// `<style>` element removed.
pub fn inline_markup(doc: &ComposedDocument) -> String {
    let mut markup = doc.markup().to_string();
    for tag in NON_RENDERED {
        markup = strip_elements(&markup, tag);
    }
    format!("<html><body>\n{}\n</body></html>", markup)
}

/// Remove `<tag ...>...</tag>` elements, case-insensitively. An unclosed
/// element is dropped up to the end of the text.
fn strip_elements(text: &str, tag: &str) -> String {
    let lower = text.to_ascii_lowercase();
    let open = format!("<{}", tag);
    let close = format!("</{}", tag);

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(found) = lower[pos..].find(&open) {
        let start = pos + found;
        // `<scripts>` or `<styleguide>` are other tags
        let after = lower.as_bytes().get(start + open.len()).copied();
        if !matches!(after, Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r')) {
            out.push_str(&text[pos..start + open.len()]);
            pos = start + open.len();
            continue;
        }

        out.push_str(&text[pos..start]);
        pos = match lower[start..].find(&close) {
            Some(c) => {
                let close_start = start + c;
                match lower[close_start..].find('>') {
                    Some(gt) => close_start + gt + 1,
                    None => text.len(),
                }
            }
            None => text.len(),
        };
    }
    out.push_str(&text[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_source_never_reaches_the_panel() {
        let doc = ComposedDocument::new("<h1>Hi</h1>", "h1{color:red}", "console.log(1)");
        let shown = inline_markup(&doc);
        assert!(shown.contains("<h1>Hi</h1>"));
        assert!(!shown.contains("console.log"));
        assert!(!shown.contains("color:red"));
    }

    #[test]
    fn test_inline_elements_in_markup_are_removed() {
        let doc = ComposedDocument::new(
            "<p>a</p><SCRIPT type=\"module\">alert(1)</Script ><style>p{}</style><p>b</p>",
            "",
            "",
        );
        let shown = inline_markup(&doc);
        assert!(shown.contains("<p>a</p><p>b</p>"));
        assert!(!shown.contains("alert"));
        assert!(!shown.contains("p{}"));
    }

    #[test]
    fn test_unclosed_script_drops_the_rest() {
        assert_eq!(strip_elements("<b>x</b><script>let y", "script"), "<b>x</b>");
    }

    #[test]
    fn test_similar_tag_names_are_kept() {
        assert_eq!(strip_elements("<scripts>ok</scripts>", "script"), "<scripts>ok</scripts>");
    }

    #[test]
    fn test_non_ascii_markup_survives() {
        assert_eq!(strip_elements("ü<style>a</style>🦀", "style"), "ü🦀");
    }
}
