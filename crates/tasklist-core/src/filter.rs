use std::fmt;

use crate::task::Task;

/// Which subset of tasks the list shows.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
)]
pub enum FilterMode {
  #[default]
  Active,
  Completed
}

impl FilterMode {
  pub const ALL: [FilterMode; 2] = [
    FilterMode::Active,
    FilterMode::Completed
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Active => "active",
      | Self::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Active => "Active",
      | Self::Completed => "Completed"
    }
  }

  pub fn empty_message(
    self
  ) -> &'static str {
    match self {
      | Self::Active => "No active tasks.",
      | Self::Completed => {
        "No completed tasks yet."
      }
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Self::Active => !task.done,
      | Self::Completed => task.done
    }
  }

  /// Tasks passing the filter, in list order.
  pub fn apply<'a>(
    self,
    tasks: &'a [Task]
  ) -> impl Iterator<Item = &'a Task> + 'a
  {
    tasks
      .iter()
      .filter(move |task| {
        self.matches(task)
      })
  }

  pub fn count(
    self,
    tasks: &[Task]
  ) -> usize {
    self.apply(tasks).count()
  }
}

impl fmt::Display for FilterMode {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}
