use chrono::{
  DateTime,
  Utc
};
use tracing::{
  debug,
  error,
  info
};

use crate::storage::{
  KeyValueStore,
  StoreAdapter
};
use crate::task::{
  Task,
  TaskId
};

/// Whether an operation changed state. Callers re-render on
/// [`Change::Changed`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
#[must_use]
pub enum Change {
  Changed,
  Unchanged
}

impl Change {
  pub fn is_changed(self) -> bool {
    self == Self::Changed
  }
}

/// Ordered, in-memory task list that writes itself back to storage after
/// every mutation.
#[derive(Debug, Clone)]
pub struct TaskRepository<S> {
  tasks:   Vec<Task>,
  adapter: StoreAdapter<S>
}

impl<S: KeyValueStore> TaskRepository<S> {
  #[tracing::instrument(skip_all)]
  pub fn load(
    adapter: StoreAdapter<S>
  ) -> Self {
    let tasks = adapter.load_tasks();
    info!(
      count = tasks.len(),
      "task repository ready"
    );
    Self { tasks, adapter }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn get(
    &self,
    id: &TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| &task.id == id)
  }

  pub fn adapter(
    &self
  ) -> &StoreAdapter<S> {
    &self.adapter
  }

  #[tracing::instrument(skip_all, fields(len = text.len()))]
  pub fn add(
    &mut self,
    text: &str,
    now: DateTime<Utc>
  ) -> Change {
    let Some(task) =
      Task::new_active(text, now)
    else {
      debug!("ignoring blank task text");
      return Change::Unchanged;
    };

    debug!(task_id = %task.id, "adding task");
    self.tasks.push(task);
    self.persist();
    Change::Changed
  }

  #[tracing::instrument(skip_all, fields(task_id = %id))]
  pub fn toggle(
    &mut self,
    id: &TaskId,
    now: DateTime<Utc>
  ) -> Change {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| &task.id == id)
    else {
      debug!("toggle of unknown task ignored");
      return Change::Unchanged;
    };

    task.toggle(now);
    debug!(done = task.done, "toggled task");
    self.persist();
    Change::Changed
  }

  #[tracing::instrument(skip_all, fields(task_id = %id))]
  pub fn remove(
    &mut self,
    id: &TaskId
  ) -> Change {
    let before = self.tasks.len();
    self
      .tasks
      .retain(|task| &task.id != id);

    if self.tasks.len() == before {
      debug!("remove of unknown task ignored");
      return Change::Unchanged;
    }

    debug!("removed task");
    self.persist();
    Change::Changed
  }

  /// Write failures are logged; the in-memory list stays authoritative so
  /// the page keeps working.
  fn persist(&self) {
    if let Err(error) =
      self.adapter.save_tasks(&self.tasks)
    {
      error!(error = %format!("{error:#}"), "failed persisting tasks; keeping in-memory state");
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;
  use crate::config::StorageConfig;
  use crate::storage::MemoryStore;

  fn at(min: u32) -> DateTime<Utc> {
    Utc
      .with_ymd_and_hms(
        2026, 10, 17, 8, min, 0
      )
      .single()
      .expect("valid timestamp")
  }

  fn repo(
    store: &MemoryStore
  ) -> TaskRepository<MemoryStore> {
    TaskRepository::load(
      StoreAdapter::new(
        store.clone(),
        &StorageConfig::default()
      )
    )
  }

  #[test]
  fn add_appends_in_order() {
    let store = MemoryStore::new();
    let mut repo = repo(&store);

    assert!(
      repo.add("first", at(0)).is_changed()
    );
    assert!(
      repo.add("second", at(1)).is_changed()
    );

    let texts = repo
      .tasks()
      .iter()
      .map(|t| t.text.as_str())
      .collect::<Vec<_>>();
    assert_eq!(texts, ["first", "second"]);
    assert_eq!(store.write_count(), 2);
  }

  #[test]
  fn noops_do_not_write() {
    let store = MemoryStore::new();
    let mut repo = repo(&store);

    assert_eq!(
      repo.add(" \n ", at(0)),
      Change::Unchanged
    );
    assert_eq!(
      repo.toggle(
        &TaskId::from("missing"),
        at(0)
      ),
      Change::Unchanged
    );
    assert_eq!(
      repo.remove(&TaskId::from("missing")),
      Change::Unchanged
    );
    assert_eq!(store.write_count(), 0);
    assert!(store.raw("todo-tasks-v1").is_none());
  }

  #[test]
  fn toggle_sets_and_clears_completion() {
    let store = MemoryStore::new();
    let mut repo = repo(&store);
    let _ = repo.add("Buy milk", at(0));
    let id = repo.tasks()[0].id.clone();

    let _ = repo.toggle(&id, at(5));
    let task = repo.get(&id).expect("task");
    assert!(task.done);
    assert_eq!(task.completed_at, Some(at(5)));

    let _ = repo.toggle(&id, at(6));
    let task = repo.get(&id).expect("task");
    assert!(!task.done);
    assert_eq!(task.completed_at, None);
  }

  #[test]
  fn remove_deletes_only_match() {
    let store = MemoryStore::new();
    let mut repo = repo(&store);
    let _ = repo.add("keep", at(0));
    let _ = repo.add("drop", at(1));
    let drop_id = repo.tasks()[1].id.clone();

    assert!(
      repo.remove(&drop_id).is_changed()
    );
    assert_eq!(repo.tasks().len(), 1);
    assert_eq!(repo.tasks()[0].text, "keep");
    assert!(repo.get(&drop_id).is_none());
  }

  #[test]
  fn write_failure_keeps_memory_state() {
    let store = MemoryStore::new();
    let mut repo = repo(&store);
    store.set_fail_writes(true);

    assert!(
      repo.add("offline", at(0)).is_changed()
    );
    assert_eq!(repo.tasks().len(), 1);
    assert!(store.raw("todo-tasks-v1").is_none());
  }
}
