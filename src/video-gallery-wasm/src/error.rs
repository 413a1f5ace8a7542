use wasm_bindgen::JsValue;

/// Failure of a remote mutation before a usable envelope was obtained
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for MutationError {
    fn from(err: serde_json::Error) -> Self {
        MutationError::Decode(err.to_string())
    }
}

impl From<gloo_net::Error> for MutationError {
    fn from(err: gloo_net::Error) -> Self {
        MutationError::Transport(err.to_string())
    }
}

/// Errors raised while wiring the page
#[derive(thiserror::Error, Debug)]
pub enum GalleryError {
    #[error("element not found: {0}")]
    MissingElement(&'static str),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<JsValue> for GalleryError {
    fn from(value: JsValue) -> Self {
        GalleryError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for GalleryError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        GalleryError::Config(err.to_string())
    }
}

// Convert GalleryError to JsValue for JavaScript
impl From<GalleryError> for JsValue {
    fn from(err: GalleryError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
