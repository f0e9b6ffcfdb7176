pub mod pdf;

use crate::ParseError;

/// Text layer of a single document page, absent when the page has none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page(pub Option<String>);

impl Page {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Page(None)
        } else {
            Page(Some(text))
        }
    }
}

pub trait Parser {
    fn parse(&self, input: &[u8]) -> Result<Vec<Page>, ParseError>;
}

/// Joins every page that has text, each followed by a newline.
pub fn resume_text(pages: &[Page]) -> String {
    pages
        .iter()
        .filter_map(|page| page.0.as_deref())
        .map(|text| format!("{text}\n"))
        .collect()
}
