//! Headless state of an interactive converter.
//!
//! A [`Session`] remembers the last successfully converted LaTeX and its
//! MathML, together with the selected [`OutputMode`]. Front ends read what to
//! show through [`Session::view`] and what to copy through
//! [`Session::copy_text`].
//!
//! ```
//! use tex2mml::{BuiltinConverter, OutputMode, Session, View};
//!
//! let mut session = Session::new(BuiltinConverter);
//! session.convert(r"\frac{1}{2}").unwrap();
//! session.set_mode(OutputMode::Flat);
//! if let Some(View::Markup(flat)) = session.view() {
//!     assert!(!flat.contains('\n'));
//! }
//! ```

use std::{fmt, str::FromStr};

use crate::{
    clipboard::ClipboardSink,
    error::{Error, Result},
    format::{flatten, pretty},
    opts::Opts,
    Converter,
};

/// Which representation of the converted formula is shown.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum OutputMode {
    /// Rendered math; the copyable content is the LaTeX source.
    Render,
    /// Indented MathML.
    #[default]
    Pretty,
    /// Single-line MathML.
    Flat,
}

impl OutputMode {
    /// All modes, in selector order.
    pub const ALL: [OutputMode; 3] = [OutputMode::Render, OutputMode::Pretty, OutputMode::Flat];
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::Render => "math",
            OutputMode::Pretty => "mathml",
            OutputMode::Flat => "flat",
        })
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "math" | "render" => Ok(OutputMode::Render),
            "mathml" | "pretty" => Ok(OutputMode::Pretty),
            "flat" => Ok(OutputMode::Flat),
            other => Err(format!("unknown output mode `{other}` (expected math, mathml or flat)")),
        }
    }
}

/// Content to display for the current mode.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum View {
    /// Rendered preview: the LaTeX source and its display-mode MathML.
    Render {
        /// LaTeX source as entered.
        latex: String,
        /// MathML converted in display mode.
        markup: String,
    },
    /// The preview could not be produced.
    RenderError(String),
    /// Reformatted MathML.
    Markup(String),
}

/// Current input, output and mode of a converter front end.
#[derive(Debug)]
pub struct Session<C> {
    converter: C,
    opts: Opts,
    mode: OutputMode,
    latex: String,
    mathml: String,
}

impl<C: Converter> Session<C> {
    /// Create a session with default options and [`OutputMode::Pretty`].
    pub fn new(converter: C) -> Self {
        Self::with_opts(converter, Opts::default())
    }

    /// Create a session converting with `opts`.
    pub fn with_opts(converter: C, opts: Opts) -> Self {
        Self {
            converter,
            opts,
            mode: OutputMode::default(),
            latex: String::new(),
            mathml: String::new(),
        }
    }

    /// Options used for conversion.
    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// Selected output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Select the output mode.
    pub fn set_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    /// LaTeX of the last successful conversion.
    pub fn latex(&self) -> &str {
        &self.latex
    }

    /// Unformatted MathML of the last successful conversion.
    pub fn mathml(&self) -> &str {
        &self.mathml
    }

    /// Convert `latex` and make it the current formula.
    ///
    /// Surrounding whitespace is ignored. On failure the previous formula is
    /// kept.
    pub fn convert(&mut self, latex: &str) -> Result<()> {
        let latex = latex.trim();
        if latex.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mathml = self.converter.convert(latex, &self.opts)?;
        log::debug!("converted {} bytes of LaTeX", latex.len());
        self.latex = latex.to_owned();
        self.mathml = mathml;
        Ok(())
    }

    /// What to show for the selected mode, `None` before the first conversion.
    pub fn view(&self) -> Option<View> {
        if self.mathml.is_empty() {
            return None;
        }
        Some(match self.mode {
            OutputMode::Render => {
                match self.converter.convert(&self.latex, &self.opts.as_display()) {
                    Ok(markup) => View::Render {
                        latex: self.latex.clone(),
                        markup,
                    },
                    Err(e) => {
                        log::error!("failed to render preview: {e}");
                        View::RenderError(e.to_string())
                    }
                }
            }
            OutputMode::Pretty => View::Markup(pretty(&self.mathml)),
            OutputMode::Flat => View::Markup(flatten(&self.mathml)),
        })
    }

    /// What a copy action puts on the clipboard for the selected mode.
    pub fn copy_text(&self) -> Result<String> {
        let text = match self.mode {
            OutputMode::Render => self.latex.clone(),
            OutputMode::Pretty => pretty(&self.mathml),
            OutputMode::Flat => flatten(&self.mathml),
        };
        if text.is_empty() {
            return Err(Error::NothingToCopy);
        }
        Ok(text)
    }

    /// Copy [`Session::copy_text`] to `sink`.
    pub fn copy_to(&self, sink: &mut impl ClipboardSink) -> Result<()> {
        let text = self.copy_text()?;
        sink.write_text(&text)
    }
}
