use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser. None of these are fatal to the page;
/// components log them and carry on.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("no element with id `{0}` in the document")]
    MissingSection(&'static str),
    #[error("intersection observer failed: {0}")]
    Observer(String),
    #[error("confetti burst failed: {0}")]
    Celebration(String),
    #[error("could not build effect options: {0}")]
    Options(#[from] serde_wasm_bindgen::Error),
}

/// Best-effort human readable text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_section_names_the_id() {
        let err = SiteError::MissingSection("waitlist");
        assert_eq!(err.to_string(), "no element with id `waitlist` in the document");
    }
}
