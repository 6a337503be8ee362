/// Iterator that yields lines including their line endings.
///
/// syntect's `load_defaults_newlines` grammars expect the trailing `\n`.
pub(super) struct LinesWithEndings<'a> {
    text: &'a str,
}

impl<'a> LinesWithEndings<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl<'a> Iterator for LinesWithEndings<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.text.is_empty() {
            return None;
        }
        let end = self.text.find('\n').map_or(self.text.len(), |i| i + 1);
        let (line, rest) = self.text.split_at(end);
        self.text = rest;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_line_endings() {
        let lines: Vec<&str> = LinesWithEndings::new("a\nb\n\nc").collect();
        assert_eq!(lines, vec!["a\n", "b\n", "\n", "c"]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(LinesWithEndings::new("").count(), 0);
    }
}
