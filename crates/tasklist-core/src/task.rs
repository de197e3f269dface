use std::fmt;

use chrono::{
  DateTime,
  SubsecRound,
  Utc
};
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

use crate::datetime::iso_millis_serde;

/// Identifier of a stored task.
///
/// New ids are UUID v4 strings, but anything read back from storage is kept
/// verbatim: older data used millisecond timestamps.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
  pub fn generate() -> Self {
    Self(Uuid::new_v4().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for TaskId {
  fn from(value: &str) -> Self {
    Self(value.to_string())
  }
}

impl From<String> for TaskId {
  fn from(value: String) -> Self {
    Self(value)
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  pub id:           TaskId,
  pub text:         String,
  #[serde(with = "iso_millis_serde")]
  pub created_at:   DateTime<Utc>,
  #[serde(
    default,
    with = "iso_millis_serde::option"
  )]
  pub completed_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub done:         bool
}

impl Task {
  /// Builds an active task from user input. Returns `None` when the text is
  /// empty after trimming.
  ///
  /// Stored timestamps carry millisecond precision, so `now` is truncated
  /// to match what a reload will read back.
  pub fn new_active(
    text: &str,
    now: DateTime<Utc>
  ) -> Option<Self> {
    let text = text.trim();
    if text.is_empty() {
      return None;
    }

    Some(Self {
      id:           TaskId::generate(),
      text:         text.to_string(),
      created_at:   now.trunc_subsecs(3),
      completed_at: None,
      done:         false
    })
  }

  pub fn toggle(
    &mut self,
    now: DateTime<Utc>
  ) {
    self.done = !self.done;
    self.completed_at = self
      .done
      .then(|| now.trunc_subsecs(3));
  }

  /// Trims stored text in place. Returns false when nothing is left, in
  /// which case the record should be discarded.
  pub fn normalize_text(
    &mut self
  ) -> bool {
    let trimmed = self.text.trim();
    if trimmed.len() != self.text.len() {
      self.text = trimmed.to_string();
    }
    !self.text.is_empty()
  }

  /// Restores `completed_at.is_some() == done` on a record read from
  /// storage. Returns true when the record was changed.
  pub fn repair_completion(
    &mut self
  ) -> bool {
    match (self.done, self.completed_at) {
      | (false, Some(_)) => {
        self.completed_at = None;
        true
      }
      | (true, None) => {
        self.completed_at =
          Some(self.created_at);
        true
      }
      | _ => false
    }
  }
}
