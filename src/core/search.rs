//! Free-text filtering of the document list

use super::document::Document;

/// The sidebar's search text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    lowered: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            lowered: text.to_lowercase(),
        }
    }

    /// Raw text as typed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Blank or whitespace-only queries match everything
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Case-insensitive substring match against title or content
    pub fn matches(&self, doc: &Document) -> bool {
        self.is_blank()
            || doc.title.to_lowercase().contains(&self.lowered)
            || doc.content.to_lowercase().contains(&self.lowered)
    }
}

/// Documents matching `query`, in their original order
pub fn filter_documents<'a>(documents: &'a [Document], query: &SearchQuery) -> Vec<&'a Document> {
    documents.iter().filter(|doc| query.matches(doc)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, content: &str) -> Document {
        let mut doc = Document::new(None);
        doc.title = title.to_string();
        doc.content = content.to_string();
        doc
    }

    fn titles<'a>(docs: &[&'a Document]) -> Vec<&'a str> {
        docs.iter().map(|d| d.title.as_str()).collect()
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let docs = vec![doc("A", ""), doc("B", "")];
        assert_eq!(filter_documents(&docs, &SearchQuery::new("")).len(), 2);
        assert_eq!(filter_documents(&docs, &SearchQuery::new("   \t")).len(), 2);
    }

    #[test]
    fn test_matches_title_or_content_case_insensitive() {
        let docs = vec![
            doc("Markdown Guide", "lists and tables"),
            doc("Welcome", "Start with MARKDOWN"),
            doc("Recipes", "pasta"),
        ];
        let found = filter_documents(&docs, &SearchQuery::new("markdown"));
        assert_eq!(titles(&found), vec!["Markdown Guide", "Welcome"]);

        let found = filter_documents(&docs, &SearchQuery::new("TABLES"));
        assert_eq!(titles(&found), vec!["Markdown Guide"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let docs = vec![doc("Guide", "content")];
        assert!(filter_documents(&docs, &SearchQuery::new("xyz123")).is_empty());
    }

    #[test]
    fn test_non_blank_query_is_not_trimmed() {
        let docs = vec![doc("Guide", "")];
        assert!(filter_documents(&docs, &SearchQuery::new(" guide")).is_empty());
        assert_eq!(filter_documents(&docs, &SearchQuery::new("uid")).len(), 1);
    }

    #[test]
    fn test_filter_matches_definition() {
        let docs = vec![
            doc("Alpha", "one two"),
            doc("beta", "Two three"),
            doc("", "ALPHA"),
            doc("Gamma", ""),
        ];
        for q in ["", " ", "alpha", "two", "a", "zzz", "Gam", "three"] {
            let query = SearchQuery::new(q);
            let found = filter_documents(&docs, &query);
            for d in &docs {
                let expected = q.trim().is_empty()
                    || d.title.to_lowercase().contains(&q.to_lowercase())
                    || d.content.to_lowercase().contains(&q.to_lowercase());
                let present = found.iter().any(|f| f.id == d.id);
                assert_eq!(present, expected, "query {:?} doc {:?}", q, d.title);
            }
        }
    }
}
