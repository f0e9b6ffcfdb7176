use super::{Page, Parser};
use crate::ParseError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts the text layer of each page with `pdf-extract`. No OCR is attempted.
pub struct PdfParser;

impl Parser for PdfParser {
    fn parse(&self, input: &[u8]) -> Result<Vec<Page>, ParseError> {
        if !input.starts_with(PDF_MAGIC) {
            return Err(ParseError::UnsupportedFormatError {
                supported_formats: vec!["pdf".to_owned()],
            });
        }

        let pages = pdf_extract::extract_text_from_mem_by_pages(input)
            .map_err(|e| ParseError::OtherError(e.into()))?;

        let pages: Vec<Page> = pages.into_iter().map(Page::new).collect();
        log::debug!(
            "Extracted {} pages, {} with text",
            pages.len(),
            pages.iter().filter(|p| p.0.is_some()).count()
        );
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_pdf_input() {
        let result = PdfParser.parse(b"PK\x03\x04 not a pdf");
        match result {
            Err(ParseError::UnsupportedFormatError { supported_formats }) => {
                assert_eq!(supported_formats, vec!["pdf".to_owned()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!(PdfParser.parse(b"").is_err());
    }

    #[test]
    fn broken_pdf_yields_no_text() {
        match PdfParser.parse(b"%PDF-1.7\ngarbage") {
            Ok(pages) => assert_eq!(crate::parser::resume_text(&pages), ""),
            Err(e) => assert!(matches!(e, ParseError::OtherError(_))),
        }
    }
}
