//! Declarative description of the task list screen.
//!
//! [`render`] turns data into plain values; the UI crate maps those values
//! onto DOM elements. Nothing here keeps state between calls.

use chrono::FixedOffset;

use crate::datetime::format_in_offset;
use crate::filter::FilterMode;
use crate::task::{
  Task,
  TaskId
};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskListView {
  pub tabs: Vec<FilterTabView>,
  pub body: ListBody
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterTabView {
  pub mode:     FilterMode,
  pub label:    String,
  pub count:    usize,
  pub selected: bool
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
  Empty { message: String },
  Rows(Vec<TaskRowView>)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRowView {
  pub id:              TaskId,
  pub text:            String,
  pub done:            bool,
  pub created_label:   String,
  pub completed_label: Option<String>
}

impl TaskRowView {
  fn from_task(
    task: &Task,
    fmt: &TimeDisplay<'_>
  ) -> Self {
    Self {
      id:              task.id.clone(),
      text:            task.text.clone(),
      done:            task.done,
      created_label:   format!(
        "Created: {}",
        fmt.format(task.created_at)
      ),
      completed_label: task
        .completed_at
        .map(|ts| {
          format!(
            "Completed: {}",
            fmt.format(ts)
          )
        })
    }
  }

  /// Rows for completed tasks render their text struck through.
  pub fn struck_through(&self) -> bool {
    self.done
  }
}

/// How timestamps are shown to the viewer.
#[derive(Debug, Clone, Copy)]
pub struct TimeDisplay<'a> {
  pub offset: FixedOffset,
  pub format: &'a str
}

impl TimeDisplay<'_> {
  fn format(
    &self,
    ts: chrono::DateTime<chrono::Utc>
  ) -> String {
    format_in_offset(
      ts,
      self.offset,
      self.format
    )
  }
}

pub fn render(
  tasks: &[Task],
  filter: FilterMode,
  time: &TimeDisplay<'_>
) -> TaskListView {
  let tabs = FilterMode::ALL
    .iter()
    .map(|mode| FilterTabView {
      mode:     *mode,
      label:    mode.label().to_string(),
      count:    mode.count(tasks),
      selected: *mode == filter
    })
    .collect();

  let rows = filter
    .apply(tasks)
    .map(|task| {
      TaskRowView::from_task(task, time)
    })
    .collect::<Vec<_>>();

  let body = if rows.is_empty() {
    ListBody::Empty {
      message: filter
        .empty_message()
        .to_string()
    }
  } else {
    ListBody::Rows(rows)
  };

  TaskListView { tabs, body }
}
