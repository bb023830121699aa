/// Result type used across the card pipeline.
pub type CardResult<T> = Result<T, CardError>;

/// Error taxonomy for card generation.
///
/// Image and QR failures are recovered inside the renderers; every other
/// variant rejects the batch it occurs in.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Invalid input data, configuration or drawing arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Every fetch strategy failed for `url`.
    #[error("image load error: '{url}': {reason}")]
    ImageLoad { url: String, reason: String },

    /// QR payload could not be encoded or rendered.
    #[error("qr error: {0}")]
    Qr(String),

    /// Missing typeface or unreadable font data.
    #[error("font error: {0}")]
    Font(String),

    /// Surface allocation or drawing failure.
    #[error("render error: {0}")]
    Render(String),

    /// PNG encoding failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem failure while saving cards or reading inputs.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::ImageLoad`] value.
    pub fn image_load(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ImageLoad {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`CardError::Qr`] value.
    pub fn qr(msg: impl Into<String>) -> Self {
        Self::Qr(msg.into())
    }

    /// Build a [`CardError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`CardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CardError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
