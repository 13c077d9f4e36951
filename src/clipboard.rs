//! Destinations for the copy action.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use crate::error::{Error, Result};

/// Something that accepts text for the platform clipboard.
pub trait ClipboardSink {
    /// Make `text` available on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard that only remembers the last text written.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    /// Last text written, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_owned());
        Ok(())
    }
}

/// Clipboard reached by piping text into a system program.
#[derive(Clone, Debug)]
pub struct CommandClipboard {
    candidates: Vec<Vec<String>>,
}

impl CommandClipboard {
    /// Programs tried in order for the current platform.
    pub fn system() -> Self {
        const PBCOPY: &[&str] = &["pbcopy"];
        const CLIP: &[&str] = &["clip"];
        const WL_COPY: &[&str] = &["wl-copy"];
        const XCLIP: &[&str] = &["xclip", "-selection", "clipboard"];
        const XSEL: &[&str] = &["xsel", "--clipboard", "--input"];

        let candidates: &[&[&str]] = if cfg!(target_os = "macos") {
            &[PBCOPY]
        } else if cfg!(windows) {
            &[CLIP]
        } else {
            &[WL_COPY, XCLIP, XSEL]
        };
        Self {
            candidates: candidates
                .iter()
                .map(|argv| argv.iter().map(|arg| (*arg).to_owned()).collect())
                .collect(),
        }
    }

    /// Use a single program, given as program name followed by arguments.
    pub fn with_command<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: vec![argv.into_iter().map(Into::into).collect()],
        }
    }

    fn run(argv: &[String], text: &str) -> std::io::Result<bool> {
        let Some((program, args)) = argv.split_first() else {
            return Ok(false);
        };
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        // reap the child even when it stopped reading
        let status = child.wait()?;
        written?;
        Ok(status.success())
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::system()
    }
}

impl ClipboardSink for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut failures = Vec::new();
        for argv in &self.candidates {
            let name = argv.join(" ");
            match Self::run(argv, text) {
                Ok(true) => {
                    log::debug!("copied {} bytes with `{name}`", text.len());
                    return Ok(());
                }
                Ok(false) => failures.push(format!("`{name}` failed")),
                Err(e) => failures.push(format!("`{name}`: {e}")),
            }
        }
        Err(Error::Clipboard(if failures.is_empty() {
            "no clipboard program configured".to_owned()
        } else {
            failures.join(", ")
        }))
    }
}
