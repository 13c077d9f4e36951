use std::{
    io::{self, BufRead, IsTerminal, Read},
    path::PathBuf,
    time::Duration,
};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use tex2mml::{
    debounce::DEFAULT_DELAY,
    BuiltinConverter, ClipboardSink, CommandClipboard, Debouncer, JsonFileStore, Opts,
    OutputMode, Session, Theme, ThemeChange, ThemePreference, View,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Parameters {
    /// LaTeX expression (read from stdin when absent)
    latex: Option<String>,

    /// Input file (tex)
    #[clap(short, long, conflicts_with = "latex")]
    file: Option<PathBuf>,

    /// Output mode: math, mathml or flat
    #[clap(short, long, default_value_t = OutputMode::Pretty)]
    mode: OutputMode,

    /// Convert in display (block) mode
    #[clap(short, long)]
    display: bool,

    /// Trust the input
    #[clap(long)]
    trust: bool,

    /// Keep the MathML namespace on <math>
    #[clap(long)]
    xml: bool,

    /// Escape < and > in the input before converting
    #[clap(long)]
    sanitize: bool,

    /// Fail on invalid LaTeX instead of rendering the error inline
    #[clap(long)]
    strict: bool,

    /// Copy the output to the clipboard
    #[clap(short, long)]
    copy: bool,

    /// Convert each line read from stdin once typing pauses
    #[clap(short, long, conflicts_with_all = ["latex", "file"])]
    watch: bool,

    /// Pause in milliseconds before converting in watch mode
    #[clap(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Set the colour theme
    #[clap(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Print the colour theme
    #[clap(long)]
    show_theme: bool,

    /// Settings file
    #[clap(long)]
    settings: Option<PathBuf>,

    /// verbose
    #[clap(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

impl Parameters {
    fn opts(&self) -> Opts {
        let mut opts = Opts::default();
        opts.set_display_mode(self.display);
        opts.set_throw_on_error(self.strict);
        opts.set_trust(self.trust);
        opts.set_xml(self.xml);
        opts.set_sanitize(self.sanitize);
        opts
    }

    fn has_input(&self) -> bool {
        self.latex.is_some() || self.file.is_some() || self.watch || !io::stdin().is_terminal()
    }
}

fn main() -> anyhow::Result<()> {
    let params = Parameters::parse();
    env_logger::builder()
        .filter_level(if params.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    if params.theme.is_some() || params.show_theme {
        theme(&params)?;
        if !params.has_input() {
            return Ok(());
        }
    }

    if params.watch {
        return watch(&params);
    }

    let latex = match (&params.latex, &params.file) {
        (Some(latex), _) => latex.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };

    let mut session = Session::with_opts(BuiltinConverter, params.opts());
    session.set_mode(params.mode);
    session.convert(&latex)?;
    show(&session)?;
    if params.copy {
        session.copy_to(&mut CommandClipboard::system())?;
        info!("copied {} output to clipboard", session.mode());
    }
    Ok(())
}

fn show(session: &Session<BuiltinConverter>) -> anyhow::Result<()> {
    match session.view() {
        Some(View::Render { markup, .. }) | Some(View::Markup(markup)) => println!("{markup}"),
        Some(View::RenderError(message)) => bail!("error rendering math: {message}"),
        None => warn!("nothing converted"),
    }
    Ok(())
}

fn watch(params: &Parameters) -> anyhow::Result<()> {
    let mut session = Session::with_opts(BuiltinConverter, params.opts());
    session.set_mode(params.mode);
    let copy = params.copy;
    let mut clipboard = CommandClipboard::system();

    let debouncer = Debouncer::new(Duration::from_millis(params.delay_ms), move |latex: String| {
        if let Err(e) = session.convert(&latex) {
            warn!("{e}");
            return;
        }
        if let Err(e) = show(&session) {
            warn!("{e}");
        }
        if copy {
            if let Err(e) = session.copy_text().and_then(|text| clipboard.write_text(&text)) {
                warn!("{e}");
            }
        }
    });

    for line in io::stdin().lock().lines() {
        debouncer.trigger(line.context("failed to read stdin")?);
    }
    debouncer.flush();
    Ok(())
}

fn settings_path(params: &Parameters) -> anyhow::Result<PathBuf> {
    if let Some(path) = &params.settings {
        return Ok(path.clone());
    }
    let config = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));
    match config {
        Some(dir) => Ok(dir.join("tex2mml").join("settings.json")),
        None => bail!("no settings location found, pass --settings"),
    }
}

fn theme(params: &Parameters) -> anyhow::Result<()> {
    let path = settings_path(params)?;
    let mut prefs = ThemePreference::new(JsonFileStore::open(&path)?);
    let change = params.theme.map(|arg| match arg {
        ThemeArg::Light => ThemeChange::Set(Theme::Light),
        ThemeArg::Dark => ThemeChange::Set(Theme::Dark),
        ThemeArg::Toggle => ThemeChange::Toggle,
    });
    if let Some(change) = change {
        let theme = prefs.apply(change)?;
        info!("theme set to {theme} in {}", path.display());
    }
    if params.show_theme {
        println!("{}", prefs.theme()?);
    }
    Ok(())
}
