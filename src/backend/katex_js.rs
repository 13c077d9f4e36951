//! Engine implemented by [KaTeX](https://crates.io/crates/katex), MathML output only.

use crate::{
    backend::Backend,
    error::{Error, Result},
    opts::Opts,
};

#[derive(Debug, Default)]
pub(crate) struct Engine;

impl Backend for Engine {
    const NAME: &'static str = "katex";

    fn to_mathml(&self, input: &str, opts: &Opts) -> Result<String> {
        let katex_opts = katex::Opts::builder()
            .display_mode(opts.display_mode())
            .output_type(katex::OutputType::Mathml)
            .throw_on_error(opts.throw_on_error())
            .trust(opts.trust())
            .build()
            .map_err(|e| Error::Backend(e.to_string()))?;
        Ok(katex::render_with_opts(input, &katex_opts)?)
    }
}

impl From<katex::Error> for Error {
    fn from(e: katex::Error) -> Self {
        match e {
            katex::Error::JsExecError(detail) => Error::Conversion(detail),
            _ => Error::Backend(e.to_string()),
        }
    }
}
