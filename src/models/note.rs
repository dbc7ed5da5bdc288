//! Shared-summary note content and its body codec.
//!
//! A note stores three logical fields in a single engagement body using a
//! line-prefix convention:
//!
//! ```text
//! Title: <title>
//! Summary: <summary>
//! Author: <author>
//! ```
//!
//! Encoding always emits all three lines in that order. Decoding tolerates
//! any subset of lines and ignores lines with no recognized prefix.

const TITLE_PREFIX: &str = "Title: ";
const SUMMARY_PREFIX: &str = "Summary: ";
const AUTHOR_PREFIX: &str = "Author: ";

/// Decoded fields of a shared-summary note.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteContent {
    /// Note title
    pub title: String,

    /// Note summary text
    pub summary: String,

    /// Author name
    pub author: String,
}

impl NoteContent {
    /// Create note content from its three fields.
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            author: author.into(),
        }
    }

    /// Encode the fields into an engagement body.
    pub fn encode(&self) -> String {
        format!(
            "{}{}\n{}{}\n{}{}",
            TITLE_PREFIX, self.title, SUMMARY_PREFIX, self.summary, AUTHOR_PREFIX, self.author
        )
    }

    /// Decode an engagement body into note fields.
    ///
    /// Missing lines yield empty strings.
    pub fn decode(body: &str) -> Self {
        let mut content = Self::default();
        for line in body.lines() {
            if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
                content.title = rest.to_string();
            } else if let Some(rest) = line.strip_prefix(SUMMARY_PREFIX) {
                content.summary = rest.to_string();
            } else if let Some(rest) = line.strip_prefix(AUTHOR_PREFIX) {
                content.author = rest.to_string();
            }
        }
        content
    }

    /// Overlay caller-supplied field values onto this content.
    ///
    /// A `None` field keeps its previous value.
    pub fn merge(
        mut self,
        title: Option<String>,
        summary: Option<String>,
        author: Option<String>,
    ) -> Self {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(summary) = summary {
            self.summary = summary;
        }
        if let Some(author) = author {
            self.author = author;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_format() {
        let content = NoteContent::new("Standup", "Discussed launch", "Ana");
        assert_eq!(
            content.encode(),
            "Title: Standup\nSummary: Discussed launch\nAuthor: Ana"
        );
    }

    #[test]
    fn test_encode_emits_all_lines_when_empty() {
        let content = NoteContent::default();
        assert_eq!(content.encode(), "Title: \nSummary: \nAuthor: ");
    }

    #[test]
    fn test_round_trip() {
        let content = NoteContent::new("Standup", "Discussed launch", "Ana");
        assert_eq!(NoteContent::decode(&content.encode()), content);
    }

    #[test]
    fn test_round_trip_empty_fields() {
        let content = NoteContent::new("", "", "");
        assert_eq!(NoteContent::decode(&content.encode()), content);

        let content = NoteContent::new("Only title", "", "");
        assert_eq!(NoteContent::decode(&content.encode()), content);
    }

    #[test]
    fn test_decode_partial_body() {
        let content = NoteContent::decode("Summary: just the middle line");
        assert_eq!(content.title, "");
        assert_eq!(content.summary, "just the middle line");
        assert_eq!(content.author, "");
    }

    #[test]
    fn test_decode_ignores_unrecognized_lines() {
        let body = "Preamble from another client\nTitle: Kept\nX-Extra: dropped\nAuthor: Ana";
        let content = NoteContent::decode(body);
        assert_eq!(content.title, "Kept");
        assert_eq!(content.summary, "");
        assert_eq!(content.author, "Ana");
    }

    #[test]
    fn test_decode_requires_prefix_space() {
        // "Title:" with no trailing space is not a recognized prefix
        let content = NoteContent::decode("Title:NoSpace");
        assert_eq!(content.title, "");
    }

    #[test]
    fn test_merge_overlays_supplied_fields() {
        let merged = NoteContent::new("Old title", "Old summary", "Old author").merge(
            Some("New title".to_string()),
            None,
            None,
        );
        assert_eq!(merged.title, "New title");
        assert_eq!(merged.summary, "Old summary");
        assert_eq!(merged.author, "Old author");
    }

    #[test]
    fn test_merge_can_clear_with_empty_string() {
        let merged = NoteContent::new("Title", "Summary", "Author").merge(
            None,
            Some(String::new()),
            None,
        );
        assert_eq!(merged.summary, "");
        assert_eq!(merged.title, "Title");
    }
}
