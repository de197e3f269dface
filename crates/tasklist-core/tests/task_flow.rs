use chrono::{
  DateTime,
  Duration,
  TimeZone,
  Utc
};
use tasklist_core::datetime::utc_offset;
use tasklist_core::{
  Action,
  AppConfig,
  AppState,
  FilterMode,
  ListBody,
  MemoryStore,
  StoreAdapter,
  TaskId,
  TaskRepository
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
          EnvFilter::new("warn")
        })
    )
    .with_test_writer()
    .try_init();
}

fn t0() -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(2026, 10, 17, 8, 30, 0)
    .single()
    .expect("valid timestamp")
}

fn load(
  store: &MemoryStore
) -> TaskRepository<MemoryStore> {
  TaskRepository::load(StoreAdapter::new(
    store.clone(),
    &AppConfig::default().storage
  ))
}

#[test]
fn blank_input_leaves_list_unchanged() {
  init_tracing();
  let store = MemoryStore::new();
  let mut repo = load(&store);
  let _ = repo.add("Existing", t0());
  let before = repo.tasks().to_vec();

  for blank in ["", "   ", "\t\n"] {
    let _ = repo.add(blank, t0());
  }

  assert_eq!(repo.tasks(), before.as_slice());
}

#[test]
fn adding_creates_one_open_task() {
  init_tracing();
  let store = MemoryStore::new();
  let mut repo = load(&store);

  let _ = repo.add("Buy milk", t0());

  assert_eq!(repo.tasks().len(), 1);
  let task = &repo.tasks()[0];
  assert_eq!(task.text, "Buy milk");
  assert!(!task.done);
  assert_eq!(task.completed_at, None);
  assert_eq!(task.created_at, t0());
}

#[test]
fn double_toggle_restores_state() {
  init_tracing();
  let store = MemoryStore::new();
  let mut repo = load(&store);
  let _ = repo.add("Buy milk", t0());
  let original = repo.tasks()[0].clone();

  let _ =
    repo.toggle(&original.id, t0() + Duration::minutes(1));
  let _ =
    repo.toggle(&original.id, t0() + Duration::minutes(2));

  let task = &repo.tasks()[0];
  assert_eq!(task.done, original.done);
  assert_eq!(task.completed_at, None);
  assert_eq!(task, &original);
}

#[test]
fn removing_unknown_id_is_noop() {
  init_tracing();
  let store = MemoryStore::new();
  let mut repo = load(&store);
  let _ = repo.add("a", t0());
  let _ = repo.add("b", t0());
  let before = repo.tasks().to_vec();

  let change = repo.remove(&TaskId::from("nope"));

  assert!(!change.is_changed());
  assert_eq!(repo.tasks(), before.as_slice());
}

#[test]
fn save_then_load_round_trips() {
  init_tracing();
  let store = MemoryStore::new();
  let mut repo = load(&store);
  let _ = repo.add("Buy milk", t0());
  let _ = repo.add(
    "Call plumber",
    t0() + Duration::milliseconds(1_250)
  );
  let id = repo.tasks()[1].id.clone();
  let _ = repo
    .toggle(&id, t0() + Duration::hours(3));

  let reloaded = load(&store);

  assert_eq!(reloaded.tasks(), repo.tasks());
}

#[test]
fn sub_millisecond_clock_round_trips() {
  init_tracing();
  let store = MemoryStore::new();
  let mut repo = load(&store);
  let now =
    t0() + Duration::nanoseconds(714_494_047);

  let _ = repo.add("Buy milk", now);
  let id = repo.tasks()[0].id.clone();
  let _ = repo.toggle(
    &id,
    now + Duration::nanoseconds(3_141_592_653)
  );

  let reloaded = load(&store);

  assert_eq!(reloaded.tasks(), repo.tasks());
  assert_eq!(
    repo.tasks()[0].created_at,
    t0() + Duration::milliseconds(714)
  );
}

#[test]
fn malformed_storage_starts_empty_and_recovers() {
  init_tracing();
  let store = MemoryStore::new()
    .with_item("todo-tasks-v1", "[{\"id\":");
  let mut repo = load(&store);
  assert!(repo.tasks().is_empty());

  let _ = repo.add("fresh start", t0());

  assert_eq!(load(&store).tasks().len(), 1);
}

#[test]
fn filtered_views_respect_done_flag() {
  init_tracing();
  let store = MemoryStore::new();
  let mut state = AppState::load(
    store,
    &AppConfig::default()
  );
  for text in ["one", "two", "three"] {
    let _ = state.dispatch(
      Action::Add(text.to_string()),
      t0()
    );
  }
  let second =
    state.repository().tasks()[1].id.clone();
  let _ = state
    .dispatch(Action::Toggle(second), t0());

  for mode in FilterMode::ALL {
    let _ = state.dispatch(
      Action::SelectFilter(mode),
      t0()
    );
    let ListBody::Rows(rows) =
      state.view(utc_offset()).body
    else {
      panic!("{mode} should have rows");
    };
    assert!(rows.iter().all(|row| {
      row.done == (mode == FilterMode::Completed)
    }));
  }
}

#[test]
fn full_session_survives_reload() {
  init_tracing();
  let store = MemoryStore::new();
  let cfg = AppConfig::default();
  let mut state =
    AppState::load(store.clone(), &cfg);

  let _ = state.dispatch(
    Action::Add("  Buy milk  ".to_string()),
    t0()
  );
  let _ = state.dispatch(
    Action::SelectTheme("midnight".to_string()),
    t0()
  );
  let id =
    state.repository().tasks()[0].id.clone();
  let _ = state.dispatch(
    Action::Toggle(id.clone()),
    t0() + Duration::minutes(5)
  );

  let reloaded = AppState::load(store, &cfg);
  assert_eq!(
    reloaded.theme().map(|t| t.id.as_str()),
    Some("midnight")
  );
  assert_eq!(
    reloaded.filter(),
    FilterMode::Active
  );
  let task = reloaded
    .repository()
    .get(&id)
    .expect("task survives reload");
  assert_eq!(task.text, "Buy milk");
  assert_eq!(
    task.completed_at,
    Some(t0() + Duration::minutes(5))
  );
}
