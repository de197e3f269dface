use chrono::{
  DateTime,
  FixedOffset,
  Utc
};
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::config::AppConfig;
use crate::filter::FilterMode;
use crate::repository::{
  Change,
  TaskRepository
};
use crate::storage::{
  KeyValueStore,
  StoreAdapter
};
use crate::task::TaskId;
use crate::theme::{
  ThemeCatalog,
  ThemeDef
};
use crate::view::{
  TaskListView,
  TimeDisplay,
  render
};

/// Every state transition the UI can request. Each user event maps to
/// exactly one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Add(String),
  Toggle(TaskId),
  Remove(TaskId),
  SelectFilter(FilterMode),
  SelectTheme(String)
}

impl Action {
  fn name(&self) -> &'static str {
    match self {
      | Self::Add(_) => "add",
      | Self::Toggle(_) => "toggle",
      | Self::Remove(_) => "remove",
      | Self::SelectFilter(_) => {
        "select_filter"
      }
      | Self::SelectTheme(_) => {
        "select_theme"
      }
    }
  }
}

/// Single owner of the page state: the task repository, the filter tab and
/// the theme.
#[derive(Debug, Clone)]
pub struct AppState<S> {
  repo:        TaskRepository<S>,
  filter:      FilterMode,
  theme:       Option<ThemeDef>,
  catalog:     ThemeCatalog,
  time_format: String
}

impl<S: KeyValueStore> AppState<S> {
  #[tracing::instrument(skip_all)]
  pub fn load(
    store: S,
    cfg: &AppConfig
  ) -> Self {
    let adapter =
      StoreAdapter::new(store, &cfg.storage);
    let catalog = cfg.theme_catalog();
    let theme = adapter.load_theme(&catalog);
    let repo = TaskRepository::load(adapter);

    info!(
      tasks = repo.tasks().len(),
      theme = ?theme.as_ref().map(|t| t.id.as_str()),
      "app state loaded"
    );

    Self {
      repo,
      filter: FilterMode::default(),
      theme,
      catalog,
      time_format: cfg
        .display
        .time_format
        .clone()
    }
  }

  pub fn repository(
    &self
  ) -> &TaskRepository<S> {
    &self.repo
  }

  pub fn filter(&self) -> FilterMode {
    self.filter
  }

  pub fn theme(
    &self
  ) -> Option<&ThemeDef> {
    self.theme.as_ref()
  }

  pub fn catalog(&self) -> &ThemeCatalog {
    &self.catalog
  }

  #[tracing::instrument(skip_all, fields(action = action.name()))]
  pub fn dispatch(
    &mut self,
    action: Action,
    now: DateTime<Utc>
  ) -> Change {
    let change = match action {
      | Action::Add(text) => {
        self.repo.add(&text, now)
      }
      | Action::Toggle(id) => {
        self.repo.toggle(&id, now)
      }
      | Action::Remove(id) => {
        self.repo.remove(&id)
      }
      | Action::SelectFilter(mode) => {
        self.select_filter(mode)
      }
      | Action::SelectTheme(id) => {
        self.select_theme(&id)
      }
    };
    debug!(?change, "dispatched action");
    change
  }

  /// Applies `action` to a copy of this state. Returns the copy when the
  /// action changed something, `None` when the current state still holds.
  pub fn apply(
    &self,
    action: Action,
    now: DateTime<Utc>
  ) -> Option<Self>
  where
    S: Clone
  {
    let mut next = self.clone();
    next
      .dispatch(action, now)
      .is_changed()
      .then_some(next)
  }

  /// Describes the screen for the current state, with timestamps shown in
  /// `offset`.
  pub fn view(
    &self,
    offset: FixedOffset
  ) -> TaskListView {
    render(
      self.repo.tasks(),
      self.filter,
      &TimeDisplay {
        offset,
        format: &self.time_format
      }
    )
  }

  fn select_filter(
    &mut self,
    mode: FilterMode
  ) -> Change {
    if self.filter == mode {
      return Change::Unchanged;
    }
    self.filter = mode;
    Change::Changed
  }

  fn select_theme(
    &mut self,
    id: &str
  ) -> Change {
    let Some(theme) =
      self.catalog.get(id).cloned()
    else {
      warn!(theme = %id, "ignoring unknown theme selection");
      return Change::Unchanged;
    };

    if let Err(error) = self
      .repo
      .adapter()
      .save_theme(&theme.id)
    {
      error!(error = %format!("{error:#}"), "failed persisting theme");
    }

    if self.theme.as_ref() == Some(&theme) {
      return Change::Unchanged;
    }
    info!(theme = %theme.id, "theme selected");
    self.theme = Some(theme);
    Change::Changed
  }
}
