//! This crate converts LaTeX equations to [MathML](https://www.w3.org/Math/)
//! and reformats the resulting markup.
//!
//! # Usage
//!
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! tex2mml = "0.1"
//! ```
//!
//! This crate offers the following features:
//!
//! * `pulldown`: Enabled by default. Use [pulldown-latex](https://crates.io/crates/pulldown-latex)
//!    to convert LaTeX.
//! * `katex`: Use [KaTeX](https://crates.io/crates/katex) (running in an
//!    embedded JS engine) instead. Takes precedence over `pulldown`.
//!
//! # Examples
//!
//! ```
//! let mathml = tex2mml::convert("E = mc^2").unwrap();
//!
//! let opts = tex2mml::Opts::builder().display_mode(true).build().unwrap();
//! let block = tex2mml::convert_with_opts("E = mc^2", &opts).unwrap();
//!
//! println!("{}", tex2mml::pretty(&block));
//! println!("{}", tex2mml::flatten(&mathml));
//! ```
//!
//! Beyond conversion the crate models the pieces of an interactive converter:
//! a [`Session`] holding the current input and output mode, a [`Debouncer`]
//! for convert-as-you-type, a [`ClipboardSink`] and a persisted
//! [`ThemePreference`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::{Error, Result};

pub mod opts;
pub use opts::{Opts, OptsBuilder};

pub mod format;
pub use format::{flatten, pretty};

pub mod sanitize;

pub mod session;
pub use session::{OutputMode, Session, View};

pub mod settings;
pub use settings::{
    JsonFileStore, KeyValueStore, MemoryStore, Theme, ThemeChange, ThemePreference,
};

pub mod debounce;
pub use debounce::Debouncer;

pub mod clipboard;
pub use clipboard::{ClipboardSink, CommandClipboard, MemoryClipboard};

mod backend;
use backend::{Backend, Engine};

/// Something that turns LaTeX into MathML.
///
/// [`BuiltinConverter`] uses the engine compiled into this crate; other
/// implementations can be plugged into a [`Session`].
pub trait Converter {
    /// Convert `latex` to a MathML string according to `opts`.
    fn convert(&self, latex: &str, opts: &Opts) -> Result<String>;
}

/// [`Converter`] backed by the engine selected with Cargo features.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinConverter;

impl Converter for BuiltinConverter {
    fn convert(&self, latex: &str, opts: &Opts) -> Result<String> {
        convert_with_opts(latex, opts)
    }
}

/// Convert LaTeX to MathML with the given [engine](`Backend`) and [options](`Opts`).
#[inline]
fn convert_inner<E>(engine: &E, input: &str, opts: &Opts) -> Result<String>
where
    E: Backend,
{
    let escaped;
    let input = if opts.sanitize() {
        escaped = sanitize::escape_input(input);
        escaped.as_str()
    } else {
        input
    };
    log::debug!("converting {} bytes of LaTeX with {}", input.len(), E::NAME);
    let mathml = engine.to_mathml(input, opts)?;
    let mathml = if opts.xml() {
        sanitize::ensure_namespace(&mathml).into_owned()
    } else {
        sanitize::strip_namespace(&mathml).into_owned()
    };
    Ok(mathml)
}

/// Convert LaTeX to MathML with additional [options](`Opts`).
pub fn convert_with_opts(input: &str, opts: impl AsRef<Opts>) -> Result<String> {
    convert_inner(&Engine::default(), input, opts.as_ref())
}

/// Convert LaTeX to MathML.
#[inline]
pub fn convert(input: &str) -> Result<String> {
    convert_with_opts(input, Opts::default())
}

#[cfg(test)]
mod tests;
