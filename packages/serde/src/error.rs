//! Errors for the serde layer.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("form error: {0}")]
    Form(#[from] formbind_core::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
