//! Internal abstraction over the TeX-to-MathML engines.
//!
//! The public API hides which engine does the conversion. Each engine
//! implements the small [`Backend`] trait and the one selected by Cargo
//! features is exported as [`Engine`]:
//! * `katex`: KaTeX through the [katex](https://crates.io/crates/katex) crate
//! * `pulldown` (default): [pulldown-latex](https://crates.io/crates/pulldown-latex)
//!
//! When both are enabled, `katex` wins.

use crate::{error::Result, opts::Opts};
use cfg_if::cfg_if;

/// Minimal interface a conversion engine must implement.
pub(crate) trait Backend: Default {
    /// Human readable engine name, used in logs.
    const NAME: &'static str;

    /// Convert LaTeX to a MathML string.
    ///
    /// Only the `display_mode`, `throw_on_error` and `trust` options are
    /// forwarded; the caller handles sanitization and namespaces.
    fn to_mathml(&self, input: &str, opts: &Opts) -> Result<String>;
}

cfg_if! {
    if #[cfg(feature = "katex")] {
        mod katex_js;

        pub(crate) type Engine = self::katex_js::Engine;
    } else if #[cfg(feature = "pulldown")] {
        mod pulldown;

        pub(crate) type Engine = self::pulldown::Engine;
    } else {
        compile_error!("Must enable one of the conversion backends.");
    }
}
