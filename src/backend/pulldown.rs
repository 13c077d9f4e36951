//! Engine implemented by [pulldown-latex](https://crates.io/crates/pulldown-latex).

use pulldown_latex::{config::DisplayMode, push_mathml, Parser, RenderConfig, Storage};

use crate::{
    backend::Backend,
    error::{Error, Result},
    opts::Opts,
};

#[derive(Debug, Default)]
pub(crate) struct Engine;

impl Backend for Engine {
    const NAME: &'static str = "pulldown-latex";

    fn to_mathml(&self, input: &str, opts: &Opts) -> Result<String> {
        // push_mathml renders parse errors inline, so look for them first
        if opts.throw_on_error() {
            let storage = Storage::new();
            if let Some(e) = Parser::new(input, &storage).find_map(|event| event.err()) {
                return Err(Error::Conversion(e.to_string()));
            }
        }

        let storage = Storage::new();
        let parser = Parser::new(input, &storage);
        let mut config = RenderConfig::default();
        config.display_mode = if opts.display_mode() {
            DisplayMode::Block
        } else {
            DisplayMode::Inline
        };

        let mut mathml = String::new();
        push_mathml(&mut mathml, parser, config).map_err(|e| Error::Backend(e.to_string()))?;
        Ok(mathml)
    }
}
