//! The flattened document model.

use serde::{Deserialize, Serialize};

/// One flattened file: a relative-path label and the decoded content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Path relative to the root, platform separators. Display only.
    pub label: String,
    /// Full decoded file content.
    pub content: String,
}

impl DocumentEntry {
    /// Create a new entry.
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }

    /// Render this entry: `<label>:\n<content>\n\n`.
    pub fn render(&self) -> String {
        format!("{}:\n{}\n\n", self.label, self.content)
    }
}

/// Ordered accumulator of entries, rendered into one trimmed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlattenedDocument {
    entries: Vec<DocumentEntry>,
}

impl FlattenedDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry in traversal order.
    pub fn push(&mut self, entry: DocumentEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries have been collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The collected entries, in current order.
    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    /// Sort entries lexicographically by label for reproducible output.
    pub fn sort_by_label(&mut self) {
        self.entries.sort_by(|a, b| a.label.cmp(&b.label));
    }

    /// Concatenate all entries and trim the final result.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.render());
        }
        out.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_format() {
        let entry = DocumentEntry::new("sub/b.txt", "world");
        assert_eq!(entry.render(), "sub/b.txt:\nworld\n\n");
    }

    #[test]
    fn test_render_trims_final_result() {
        let mut doc = FlattenedDocument::new();
        doc.push(DocumentEntry::new("a.txt", "hello"));
        doc.push(DocumentEntry::new("sub/b.txt", "world"));

        assert_eq!(doc.render(), "a.txt:\nhello\n\nsub/b.txt:\nworld");
    }

    #[test]
    fn test_empty_document_renders_empty() {
        let doc = FlattenedDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn test_sort_by_label() {
        let mut doc = FlattenedDocument::new();
        doc.push(DocumentEntry::new("z.txt", "last"));
        doc.push(DocumentEntry::new("a.txt", "first"));
        doc.push(DocumentEntry::new("m/n.txt", "middle"));

        doc.sort_by_label();

        let labels: Vec<&str> = doc.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["a.txt", "m/n.txt", "z.txt"]);
    }

    #[test]
    fn test_entry_content_kept_verbatim_inside_document() {
        let mut doc = FlattenedDocument::new();
        doc.push(DocumentEntry::new("a.txt", "line1\nline2\n"));
        doc.push(DocumentEntry::new("b.txt", "x"));

        // Interior whitespace survives, only the document ends are trimmed.
        assert_eq!(doc.render(), "a.txt:\nline1\nline2\n\n\nb.txt:\nx");
    }
}
