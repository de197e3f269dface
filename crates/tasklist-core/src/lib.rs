//! Task list state, persistence and view description, independent of the
//! DOM.

pub mod app;
pub mod config;
pub mod datetime;
pub mod filter;
pub mod repository;
pub mod storage;
pub mod task;
pub mod theme;
pub mod view;

pub use app::{
  Action,
  AppState
};
pub use config::AppConfig;
pub use filter::FilterMode;
pub use repository::{
  Change,
  TaskRepository
};
pub use storage::{
  KeyValueStore,
  MemoryStore,
  StoreAdapter
};
pub use task::{
  Task,
  TaskId
};
pub use theme::{
  ThemeCatalog,
  ThemeDef
};
pub use view::{
  FilterTabView,
  ListBody,
  TaskListView,
  TaskRowView
};
