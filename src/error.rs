//! Error handling for the `tex2mml` crate.
//!
//! The crate exposes a single [`Error`] enum which groups the failures that
//! can occur while converting LaTeX, driving a [`Session`](crate::Session),
//! talking to the clipboard or persisting settings. All public, fallible APIs
//! return a [`Result<T, Error>`].
//!
//! Reformatting is the exception: [`pretty`](crate::pretty) and
//! [`flatten`](crate::flatten) never return an error. Only
//! [`try_pretty`](crate::format::try_pretty) reports [`Error::Format`].

/// Error type for this crate.
#[non_exhaustive]
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The LaTeX input was rejected by the conversion engine.
    ///
    /// Typical causes are unknown commands, unbalanced braces or double
    /// scripts. The payload is the message reported by the engine.
    #[error("failed to convert LaTeX (detail: {0})")]
    Conversion(String),
    /// The conversion engine itself could not be set up or used.
    ///
    /// Unlike [`Error::Conversion`] this is not caused by the LaTeX input.
    #[error("conversion backend failure (detail: {0})")]
    Backend(String),
    /// The LaTeX input was empty after trimming.
    #[error("no LaTeX expression to convert")]
    EmptyInput,
    /// A copy was requested before anything was converted.
    #[error("no content to copy, convert LaTeX first")]
    NothingToCopy,
    /// Writing to the clipboard failed (missing program, permission denied, ...).
    #[error("failed to copy to clipboard (detail: {0})")]
    Clipboard(String),
    /// Reading or writing persisted settings failed.
    #[error("failed to access settings (detail: {0})")]
    Settings(String),
    /// Reformatting would have altered the content of the markup.
    #[error("failed to format markup (detail: {0})")]
    Format(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Settings(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Settings(e.to_string())
    }
}

/// Convenient alias used throughout the crate.
///
/// This corresponds to `core::result::Result<T, tex2mml::Error>`.
pub type Result<T, E = Error> = core::result::Result<T, E>;
