//! Options controlling how LaTeX is converted to MathML.
//!
//! The central type is [`Opts`], constructed either directly or via
//! [`Opts::builder`]. Every field is optional; an unset field falls back to the
//! default documented on its accessor, which is what the compiled-in backend
//! receives.
//!
//! # Example
//!
//! ```
//! let opts = tex2mml::Opts::builder()
//!     .display_mode(true)
//!     .xml(true)
//!     .build()
//!     .unwrap();
//! let mathml = tex2mml::convert_with_opts(r"\frac{1}{2}", &opts).unwrap();
//! assert!(mathml.contains("xmlns"));
//! ```

use derive_builder::Builder;

/// Options passed to the LaTeX-to-MathML conversion.
#[non_exhaustive]
#[derive(Clone, Builder, Debug, Default, PartialEq, Eq)]
#[builder(default)]
#[builder(setter(into, strip_option))]
pub struct Opts {
    /// Whether to convert in *display* (block) mode (`true`) or *inline* mode (`false`).
    display_mode: Option<bool>,
    /// If `true`, invalid LaTeX is reported as [`Error::Conversion`](crate::Error::Conversion);
    /// if `false` the engine renders the error inline as part of the markup.
    throw_on_error: Option<bool>,
    /// Whether to trust the input for commands that can produce links or
    /// arbitrary attributes. Only engines that support such commands honor it.
    trust: Option<bool>,
    /// Whether the `<math>` element carries the MathML XML namespace.
    xml: Option<bool>,
    /// Whether to escape `<` and `>` in the LaTeX source before conversion.
    sanitize: Option<bool>,
}

impl Opts {
    /// Return [`OptsBuilder`].
    pub fn builder() -> OptsBuilder {
        OptsBuilder::default()
    }

    /// Set whether to convert in display mode.
    pub fn set_display_mode(&mut self, flag: bool) {
        self.display_mode = Some(flag);
    }

    /// Set whether invalid LaTeX triggers a hard error.
    pub fn set_throw_on_error(&mut self, flag: bool) {
        self.throw_on_error = Some(flag);
    }

    /// Set whether to trust user input.
    pub fn set_trust(&mut self, flag: bool) {
        self.trust = Some(flag);
    }

    /// Set whether to emit the MathML namespace.
    pub fn set_xml(&mut self, flag: bool) {
        self.xml = Some(flag);
    }

    /// Set whether to escape angle brackets in the input.
    pub fn set_sanitize(&mut self, flag: bool) {
        self.sanitize = Some(flag);
    }

    /// Display mode, inline when unset.
    pub fn display_mode(&self) -> bool {
        self.display_mode.unwrap_or(false)
    }

    /// Throw on error, disabled when unset.
    pub fn throw_on_error(&self) -> bool {
        self.throw_on_error.unwrap_or(false)
    }

    /// Trust, disabled when unset.
    pub fn trust(&self) -> bool {
        self.trust.unwrap_or(false)
    }

    /// XML namespace, omitted when unset.
    pub fn xml(&self) -> bool {
        self.xml.unwrap_or(false)
    }

    /// Input sanitization, disabled when unset.
    pub fn sanitize(&self) -> bool {
        self.sanitize.unwrap_or(false)
    }

    /// Copy of these options with display mode forced on.
    ///
    /// Used for the rendered preview, which is always shown as a block.
    pub fn as_display(&self) -> Opts {
        let mut opts = self.clone();
        opts.set_display_mode(true);
        opts
    }
}

impl AsRef<Opts> for Opts {
    fn as_ref(&self) -> &Opts {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Opts::default();
        assert!(!opts.display_mode());
        assert!(!opts.throw_on_error());
        assert!(!opts.trust());
        assert!(!opts.xml());
        assert!(!opts.sanitize());
    }

    #[test]
    fn builder_sets_only_given_fields() {
        let opts = Opts::builder()
            .display_mode(true)
            .throw_on_error(true)
            .build()
            .unwrap();
        assert!(opts.display_mode());
        assert!(opts.throw_on_error());
        assert!(!opts.xml());
    }

    #[test]
    fn as_display_keeps_other_fields() {
        let mut opts = Opts::default();
        opts.set_xml(true);
        let display = opts.as_display();
        assert!(display.display_mode());
        assert!(display.xml());
        assert!(!opts.display_mode());
    }
}
