use anyhow::{
  Context,
  anyhow
};
use serde::Deserialize;
use tracing::{
  error,
  info,
  warn
};

use crate::datetime::{
  DEFAULT_TIME_FORMAT,
  is_valid_time_format
};
use crate::theme::{
  ThemeCatalog,
  ThemeDef
};

pub const DEFAULT_TASKS_KEY: &str =
  "todo-tasks-v1";
pub const DEFAULT_THEME_KEY: &str =
  "todo-theme-v1";

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Deserialize,
)]
#[serde(default)]
pub struct AppConfig {
  pub storage: StorageConfig,
  pub display: DisplayConfig,
  pub themes:  ThemesConfig
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct StorageConfig {
  pub tasks_key: String,
  pub theme_key: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct DisplayConfig {
  pub time_format: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct ThemesConfig {
  pub default:   String,
  pub available: Vec<ThemeDef>
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      tasks_key: DEFAULT_TASKS_KEY
        .to_string(),
      theme_key: DEFAULT_THEME_KEY
        .to_string()
    }
  }
}

impl Default for DisplayConfig {
  fn default() -> Self {
    Self {
      time_format: DEFAULT_TIME_FORMAT
        .to_string()
    }
  }
}

impl Default for ThemesConfig {
  fn default() -> Self {
    Self {
      default:   "water".to_string(),
      available: vec![
        ThemeDef::new("water", "Water"),
        ThemeDef::new("forest", "Forest"),
        ThemeDef::new("sunset", "Sunset"),
        ThemeDef::new(
          "midnight", "Midnight"
        ),
      ]
    }
  }
}

impl AppConfig {
  /// Parses and validates a TOML document. Missing tables and keys take
  /// their defaults.
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut cfg =
      toml::from_str::<Self>(raw)
        .context(
          "failed to parse tasklist \
           config"
        )?;
    cfg.validate()?;
    Ok(cfg)
  }

  /// Like [`AppConfig::from_toml_str`], but never fails: problems are logged
  /// and the built-in defaults are used instead.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(cfg) => {
        info!(
          tasks_key = %cfg.storage.tasks_key,
          theme_key = %cfg.storage.theme_key,
          theme_count = cfg.themes.available.len(),
          "loaded tasklist config"
        );
        cfg
      }
      | Err(error) => {
        error!(error = %format!("{error:#}"), "invalid tasklist config; using defaults");
        Self::default()
      }
    }
  }

  pub fn theme_catalog(
    &self
  ) -> ThemeCatalog {
    ThemeCatalog::new(
      self.themes.available.clone(),
      &self.themes.default
    )
  }

  fn validate(
    &mut self
  ) -> anyhow::Result<()> {
    self.storage.tasks_key =
      self.storage.tasks_key.trim().to_string();
    self.storage.theme_key =
      self.storage.theme_key.trim().to_string();

    if self.storage.tasks_key.is_empty()
      || self.storage.theme_key.is_empty()
    {
      return Err(anyhow!(
        "storage keys must not be empty"
      ));
    }
    if self.storage.tasks_key
      == self.storage.theme_key
    {
      return Err(anyhow!(
        "tasks_key and theme_key must \
         differ (both `{}`)",
        self.storage.tasks_key
      ));
    }

    if !is_valid_time_format(
      &self.display.time_format
    ) {
      return Err(anyhow!(
        "invalid display.time_format \
         `{}`",
        self.display.time_format
      ));
    }

    self.themes.available.retain(
      |theme| {
        let keep = theme.is_valid();
        if !keep {
          warn!(theme = %theme.id, "dropping theme with invalid id");
        }
        keep
      }
    );
    if self.themes.available.is_empty() {
      warn!(
        "config listed no usable \
         themes; using built-in set"
      );
      self.themes.available =
        ThemesConfig::default().available;
    }

    let default_listed = self
      .themes
      .available
      .iter()
      .any(|theme| {
        theme.id == self.themes.default
      });
    if !default_listed
      && let Some(first) =
        self.themes.available.first()
    {
      warn!(
        default = %self.themes.default,
        replacement = %first.id,
        "default theme is not in the \
         available list"
      );
      self.themes.default =
        first.id.clone();
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_uses_defaults() {
    let cfg = AppConfig::from_toml_str("")
      .expect("parse");
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(
      cfg.storage.tasks_key,
      "todo-tasks-v1"
    );
    assert_eq!(cfg.themes.default, "water");
  }

  #[test]
  fn partial_document_overrides_keys() {
    let cfg = AppConfig::from_toml_str(
      r#"
[storage]
tasks_key = "tasks"

[themes]
default = "paper"
available = [
  { id = "paper", label = "Paper" },
  { id = "ink", label = "Ink" },
]
"#
    )
    .expect("parse");

    assert_eq!(cfg.storage.tasks_key, "tasks");
    assert_eq!(
      cfg.storage.theme_key,
      DEFAULT_THEME_KEY
    );
    assert_eq!(cfg.themes.default, "paper");
    assert_eq!(
      cfg.themes.available.len(),
      2
    );
  }

  #[test]
  fn unknown_default_theme_is_replaced() {
    let cfg = AppConfig::from_toml_str(
      r#"
[themes]
default = "neon"
available = [{ id = "ink", label = "Ink" }]
"#
    )
    .expect("parse");
    assert_eq!(cfg.themes.default, "ink");
  }

  #[test]
  fn colliding_keys_are_rejected() {
    let err = AppConfig::from_toml_str(
      r#"
[storage]
tasks_key = "same"
theme_key = "same"
"#
    )
    .expect_err("must fail");
    assert!(
      err.to_string().contains("differ")
    );
  }

  #[test]
  fn load_or_default_survives_garbage() {
    let cfg = AppConfig::load_or_default(
      "this is = = not toml"
    );
    assert_eq!(cfg, AppConfig::default());

    let cfg = AppConfig::load_or_default(
      "[display]\ntime_format = \"%H:%\"\n"
    );
    assert_eq!(
      cfg.display.time_format,
      DEFAULT_TIME_FORMAT
    );
  }
}
