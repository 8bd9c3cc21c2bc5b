use std::panic::{self, AssertUnwindSafe};

/// Extracts text page by page and concatenates pages in order, without separators.
///
/// The underlying parser can panic on malformed input; that is reported as an
/// error so one bad upload cannot take the worker down.
pub fn extract(bytes: &[u8]) -> Result<String, String> {
    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }))
    .map_err(|payload| format!("PDF parser panicked: {}", panic_message(&payload)))?
    .map_err(|e| e.to_string())?;

    Ok(pages.concat())
}

fn panic_message(payload: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
