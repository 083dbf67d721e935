//! User preferences: the theme choice and the Pro subscription flag.
//!
//! Stored as a single `prefs.json` in the OS config directory, loaded
//! once at startup and passed down explicitly; nothing reads preferences
//! through globals. A missing file means defaults, and saving creates
//! the directory.

use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILENAME: &str = "prefs.json";

/// Color scheme preference. Applying the styling is the client's
/// concern; the core only round-trips the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme, for toggle-style switches.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub pro: bool,
}

impl Preferences {
    /// Load preferences from the given directory, or return defaults if
    /// no file exists yet.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(PREFS_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save preferences to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(PREFS_FILENAME), content)?;
        Ok(())
    }

    /// The OS-appropriate config directory for this app.
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("pe", "educonnect", "educonnect")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ads are shown to everyone except Pro subscribers.
    pub fn show_ads(&self) -> bool {
        !self.pro
    }
}
