use std::cell::{
  Cell,
  RefCell
};
use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::{
  Context,
  anyhow
};
use tracing::{
  debug,
  error,
  warn
};

use crate::config::StorageConfig;
use crate::task::Task;
use crate::theme::{
  ThemeCatalog,
  ThemeDef
};

/// String key-value storage with the shape of the browser's `Storage`
/// object.
pub trait KeyValueStore {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

/// In-memory [`KeyValueStore`]. Clones share the same map, so a clone can
/// stand in for "the same storage after a page reload".
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  inner: Rc<MemoryInner>
}

#[derive(Debug, Default)]
struct MemoryInner {
  items:       RefCell<BTreeMap<String, String>>,
  writes:      Cell<usize>,
  fail_reads:  Cell<bool>,
  fail_writes: Cell<bool>
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_item(
    self,
    key: &str,
    value: &str
  ) -> Self {
    self
      .inner
      .items
      .borrow_mut()
      .insert(
        key.to_string(),
        value.to_string()
      );
    self
  }

  pub fn raw(
    &self,
    key: &str
  ) -> Option<String> {
    self
      .inner
      .items
      .borrow()
      .get(key)
      .cloned()
  }

  /// Number of successful `set_item` calls.
  pub fn write_count(&self) -> usize {
    self.inner.writes.get()
  }

  /// Makes every following `set_item` fail, like a full or disabled
  /// `localStorage`.
  pub fn set_fail_writes(
    &self,
    fail: bool
  ) {
    self.inner.fail_writes.set(fail);
  }

  /// Makes every following `get_item` fail, like storage blocked by the
  /// browser's privacy settings.
  pub fn set_fail_reads(
    &self,
    fail: bool
  ) {
    self.inner.fail_reads.set(fail);
  }
}

impl KeyValueStore for MemoryStore {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    if self.inner.fail_reads.get() {
      return Err(anyhow!(
        "access denied while reading \
         `{key}`"
      ));
    }
    Ok(self.raw(key))
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    if self.inner.fail_writes.get() {
      return Err(anyhow!(
        "storage quota exceeded while \
         writing `{key}`"
      ));
    }
    self
      .inner
      .items
      .borrow_mut()
      .insert(
        key.to_string(),
        value.to_string()
      );
    self
      .inner
      .writes
      .set(self.inner.writes.get() + 1);
    Ok(())
  }
}

/// Reads and writes the task list and the theme name under their fixed
/// keys.
#[derive(Debug, Clone)]
pub struct StoreAdapter<S> {
  store:     S,
  tasks_key: String,
  theme_key: String
}

impl<S: KeyValueStore> StoreAdapter<S> {
  pub fn new(
    store: S,
    cfg: &StorageConfig
  ) -> Self {
    Self {
      store,
      tasks_key: cfg.tasks_key.clone(),
      theme_key: cfg.theme_key.clone()
    }
  }

  /// Loads the persisted task list. Missing, unreadable or malformed data
  /// yields an empty list.
  #[tracing::instrument(skip(self), fields(key = %self.tasks_key))]
  pub fn load_tasks(&self) -> Vec<Task> {
    let raw = match self
      .store
      .get_item(&self.tasks_key)
    {
      | Ok(Some(raw)) => raw,
      | Ok(None) => {
        debug!("no stored tasks");
        return vec![];
      }
      | Err(error) => {
        error!(error = %format!("{error:#}"), "failed reading stored tasks");
        return vec![];
      }
    };

    match decode_tasks(&raw) {
      | Ok(tasks) => {
        debug!(
          count = tasks.len(),
          "loaded stored tasks"
        );
        tasks
      }
      | Err(error) => {
        warn!(error = %format!("{error:#}"), "stored tasks are malformed; starting empty");
        vec![]
      }
    }
  }

  #[tracing::instrument(skip(self, tasks), fields(key = %self.tasks_key, count = tasks.len()))]
  pub fn save_tasks(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()> {
    let json = serde_json::to_string(
      tasks
    )
    .context("failed to encode tasks")?;
    self
      .store
      .set_item(&self.tasks_key, &json)
      .with_context(|| {
        format!(
          "failed to write `{}`",
          self.tasks_key
        )
      })?;
    debug!("saved tasks");
    Ok(())
  }

  pub fn load_theme_name(
    &self
  ) -> Option<String> {
    match self
      .store
      .get_item(&self.theme_key)
    {
      | Ok(value) => value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty()),
      | Err(error) => {
        error!(error = %format!("{error:#}"), "failed reading stored theme");
        None
      }
    }
  }

  /// Stored theme resolved against the catalog, or the catalog default.
  pub fn load_theme(
    &self,
    catalog: &ThemeCatalog
  ) -> Option<ThemeDef> {
    catalog
      .resolve(
        self.load_theme_name().as_deref()
      )
      .cloned()
  }

  #[tracing::instrument(skip(self), fields(key = %self.theme_key))]
  pub fn save_theme(
    &self,
    theme_id: &str
  ) -> anyhow::Result<()> {
    self
      .store
      .set_item(&self.theme_key, theme_id)
      .with_context(|| {
        format!(
          "failed to write `{}`",
          self.theme_key
        )
      })
  }
}

/// Decodes a stored task array. Text is trimmed and records left blank are
/// dropped; records whose completion timestamp disagrees with their `done`
/// flag are repaired.
pub fn decode_tasks(
  raw: &str
) -> anyhow::Result<Vec<Task>> {
  let mut tasks =
    serde_json::from_str::<Vec<Task>>(
      raw
    )
    .context(
      "stored tasks are not a JSON task \
       array"
    )?;

  tasks.retain_mut(|task| {
    let keep = task.normalize_text();
    if !keep {
      warn!(
        task_id = %task.id,
        "dropped stored task with blank \
         text"
      );
    }
    keep
  });

  for task in &mut tasks {
    if task.repair_completion() {
      warn!(
        task_id = %task.id,
        done = task.done,
        "repaired completion timestamp \
         of stored task"
      );
    }
  }

  Ok(tasks)
}
