use serde::{
  Deserialize,
  Serialize
};
use tracing::warn;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct ThemeDef {
  pub id:    String,
  #[serde(default)]
  pub label: String
}

impl ThemeDef {
  pub fn new(
    id: &str,
    label: &str
  ) -> Self {
    Self {
      id:    id.to_string(),
      label: label.to_string()
    }
  }

  /// Ids end up in a CSS class name, so only `[a-z0-9-]` is accepted.
  pub fn is_valid(&self) -> bool {
    !self.id.is_empty()
      && self.id.chars().all(|ch| {
        ch.is_ascii_lowercase()
          || ch.is_ascii_digit()
          || ch == '-'
      })
  }

  pub fn as_class(&self) -> String {
    format!("theme-{}", self.id)
  }

  pub fn display_label(&self) -> &str {
    if self.label.trim().is_empty() {
      &self.id
    } else {
      &self.label
    }
  }
}

/// The fixed set of themes offered by the selector.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeCatalog {
  themes:  Vec<ThemeDef>,
  default: usize
}

impl ThemeCatalog {
  /// `themes` must not be empty; [`crate::config::AppConfig`] guarantees
  /// that for configured catalogs.
  pub fn new(
    themes: Vec<ThemeDef>,
    default_id: &str
  ) -> Self {
    let default = themes
      .iter()
      .position(|theme| theme.id == default_id)
      .unwrap_or(0);
    Self { themes, default }
  }

  pub fn themes(&self) -> &[ThemeDef] {
    &self.themes
  }

  pub fn default_theme(
    &self
  ) -> Option<&ThemeDef> {
    self.themes.get(self.default)
  }

  pub fn get(
    &self,
    id: &str
  ) -> Option<&ThemeDef> {
    self
      .themes
      .iter()
      .find(|theme| theme.id == id)
  }

  /// Maps a stored theme name onto the catalog. Absent or unknown names
  /// resolve to the default theme.
  pub fn resolve(
    &self,
    stored: Option<&str>
  ) -> Option<&ThemeDef> {
    match stored {
      | Some(id) => match self.get(id) {
        | Some(theme) => Some(theme),
        | None => {
          warn!(
            theme = %id,
            "stored theme is not \
             available; using default"
          );
          self.default_theme()
        }
      },
      | None => self.default_theme()
    }
  }
}
