//! Persisted user preferences.
//!
//! Preferences are plain string values behind a [`KeyValueStore`], so the
//! same accessors work against memory in tests and a JSON file on disk.
//! The only preference today is the colour [`Theme`], read and written
//! through [`ThemePreference`].

use std::{
    collections::{BTreeMap, HashMap},
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::error::{Error, Result};

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

/// A string-to-string persistence capability.
pub trait KeyValueStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store that keeps values for the lifetime of the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store backed by a JSON object in a file.
///
/// A missing file reads as an empty store. Every [`set`](KeyValueStore::set)
/// rewrites the whole file, creating parent directories as needed.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing values.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        log::debug!("loaded {} settings from {}", values.len(), path.display());
        Ok(Self { path, values })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.save()
    }
}

/// Colour theme of the user interface.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Theme {
    /// Dark background.
    #[default]
    Dark,
    /// Light background.
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        })
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(Error::Settings(format!("unknown theme `{other}`"))),
        }
    }
}

/// A requested change of the stored theme.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ThemeChange {
    /// Store this theme.
    Set(Theme),
    /// Store the theme opposite to the current one.
    Toggle,
}

/// Theme accessors over a [`KeyValueStore`].
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Read and write the theme through `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme; the default when nothing valid is stored.
    pub fn theme(&self) -> Result<Theme> {
        Ok(match self.store.get(THEME_KEY)? {
            Some(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("{e}, using {}", Theme::default());
                Theme::default()
            }),
            None => Theme::default(),
        })
    }

    /// Persist `theme`.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, &theme.to_string())
    }

    /// Switch to the other theme and persist it.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.apply(ThemeChange::Toggle)
    }

    /// Resolve `change` against the stored theme and persist the result with
    /// a single write.
    pub fn apply(&mut self, change: ThemeChange) -> Result<Theme> {
        let theme = match change {
            ThemeChange::Set(theme) => theme,
            ThemeChange::Toggle => self.theme()?.toggled(),
        };
        self.set_theme(theme)?;
        Ok(theme)
    }

    /// Underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}
