//! PDF → plain text via `pdf-extract`, one attempt per document.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use tracing::{debug, warn};

use super::{Document, ExtractedText, ExtractionWarning};

/// Extracts the text of every page of `document` and concatenates it in page order.
///
/// Any failure, including a panic inside the PDF parser, yields an empty text
/// and a warning keyed by the document name.
pub fn extract_text(document: &Document) -> ExtractedText {
    match read_pages(&document.bytes) {
        Ok(pages) => {
            debug!(
                document = %document.name,
                pages = pages.len(),
                "Extracted PDF text"
            );
            ExtractedText {
                text: pages.concat(),
                warning: None,
            }
        }
        Err(message) => {
            let warning = ExtractionWarning {
                document: document.name.clone(),
                message,
            };
            warn!("{warning}");
            ExtractedText {
                text: String::new(),
                warning: Some(warning),
            }
        }
    }
}

fn read_pages(bytes: &[u8]) -> Result<Vec<String>, String> {
    // pdf-extract panics on some malformed streams instead of returning an error.
    match catch_parser_panic(|| pdf_extract::extract_text_from_mem_by_pages(bytes)) {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(e.to_string()),
        Err(message) => Err(message),
    }
}

thread_local! {
    static PARSER_RUNNING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wraps the current panic hook so that panics raised on a thread inside
/// [`catch_parser_panic`] are not printed; they are reported as a warning instead.
/// Panics anywhere else still reach the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !PARSER_RUNNING.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Runs `f`, turning a panic into the message carried by the extraction warning.
fn catch_parser_panic<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    install_quiet_hook();
    PARSER_RUNNING.with(|running| running.set(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    PARSER_RUNNING.with(|running| running.set(false));
    result.map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("PDF parser aborted: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("PDF parser aborted: {s}")
    } else {
        "PDF parser aborted".to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{corrupt_pdf, pdf_with_pages};
    use super::*;

    #[test]
    fn test_single_page_text_is_extracted() {
        let doc = Document::new("jane.pdf", pdf_with_pages(&["python and sql engineer"]));
        let extracted = extract_text(&doc);
        assert!(extracted.warning.is_none());
        assert!(extracted.text.contains("python"), "got {:?}", extracted.text);
        assert!(extracted.text.contains("sql"), "got {:?}", extracted.text);
    }

    #[test]
    fn test_pages_are_concatenated_in_order() {
        let doc = Document::new(
            "two-pages.pdf",
            pdf_with_pages(&["alphaword first", "betaword second"]),
        );
        let extracted = extract_text(&doc);
        let alpha = extracted.text.find("alphaword").expect("first page text");
        let beta = extracted.text.find("betaword").expect("second page text");
        assert!(alpha < beta);
    }

    #[test]
    fn test_corrupt_pdf_yields_empty_text_and_warning() {
        let doc = Document::new("broken.pdf", corrupt_pdf());
        let extracted = extract_text(&doc);
        assert_eq!(extracted.text, "");
        let warning = extracted.warning.expect("warning for unreadable document");
        assert_eq!(warning.document, "broken.pdf");
        assert!(!warning.message.is_empty());
    }

    #[test]
    fn test_empty_upload_yields_warning() {
        let doc = Document::new("empty.pdf", Vec::new());
        let extracted = extract_text(&doc);
        assert_eq!(extracted.text, "");
        assert!(extracted.warning.is_some());
    }

    #[test]
    fn test_warning_display_names_document() {
        let warning = ExtractionWarning {
            document: "cv.pdf".to_string(),
            message: "invalid xref".to_string(),
        };
        assert_eq!(warning.to_string(), "Error reading cv.pdf: invalid xref");
    }

    #[test]
    fn test_parser_panic_becomes_message() {
        let result = catch_parser_panic(|| -> u32 { panic!("bad xref stream") });
        assert_eq!(result, Err("PDF parser aborted: bad xref stream".to_string()));
        assert!(!PARSER_RUNNING.with(Cell::get));
    }

    #[test]
    fn test_parser_guard_passes_value_through() {
        assert_eq!(catch_parser_panic(|| 7), Ok(7));
        assert!(!PARSER_RUNNING.with(Cell::get));
    }

    #[test]
    fn test_panic_outside_parser_still_unwinds() {
        install_quiet_hook();
        let outcome = std::panic::catch_unwind(|| panic!("not from the parser"));
        assert!(outcome.is_err());
        assert!(!PARSER_RUNNING.with(Cell::get));
    }

    #[test]
    fn test_panic_message_handles_string_payloads() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom".to_string());
        assert_eq!(panic_message(payload.as_ref()), "PDF parser aborted: boom");
    }
}
