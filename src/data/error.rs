use thiserror::Error;

/// Everything that can go wrong between the file dialog and an installed dataset.
///
/// All variants are recoverable: the UI reports them as a notification and the
/// session keeps whatever it had loaded before.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unsupported file type: .{0} (choose a .csv or .xlsx file)")]
    UnsupportedFileType(String),

    #[error("No file selected")]
    NoFileSelected,

    #[error("Positional rows were supplied without a header list")]
    MalformedHeader,

    #[error("Failed to decode {name}: {reason}")]
    DecodeFailure { name: String, reason: String },
}

impl LoadError {
    /// Flatten an `anyhow` chain from a decoder into [`LoadError::DecodeFailure`].
    pub fn decode(name: &str, err: anyhow::Error) -> Self {
        LoadError::DecodeFailure {
            name: name.to_string(),
            reason: format!("{err:#}"),
        }
    }
}
