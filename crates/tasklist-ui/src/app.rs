use std::rc::Rc;

use chrono::{
  FixedOffset,
  Utc
};
use gloo::console::log;
use tasklist_core::datetime::offset_from_js_minutes;
use tasklist_core::{
  Action,
  AppConfig,
  AppState
};
use yew::{
  Callback,
  Html,
  Reducible,
  classes,
  function_component,
  html,
  use_effect_with,
  use_reducer
};

use crate::components::{
  FilterTabs,
  TaskInput,
  TaskList,
  ThemeSelector
};
use crate::storage::BrowserStorage;

const CONFIG_TOML: &str =
  include_str!("../assets/tasklist.toml");

/// Root state held by a reducer: Yew hands every action the latest value,
/// so events fired before a re-render still see earlier changes.
#[derive(Debug)]
struct PageState(AppState<BrowserStorage>);

impl Reducible for PageState {
  type Action = Action;

  fn reduce(
    self: Rc<Self>,
    action: Action
  ) -> Rc<Self> {
    match self.0.apply(action, Utc::now())
    {
      | Some(next) => Rc::new(Self(next)),
      | None => self
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let page = use_reducer(|| {
    let cfg =
      AppConfig::load_or_default(
        CONFIG_TOML
      );
    PageState(AppState::load(
      BrowserStorage,
      &cfg
    ))
  });

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and state \
         loaded"
      );
      || ()
    });
  }

  // The only way UI events reach state.
  let dispatch = {
    let dispatcher = page.dispatcher();
    Callback::from(
      move |action: Action| {
        dispatcher.dispatch(action);
      }
    )
  };

  let on_add = dispatch
    .reform(Action::Add);
  let on_toggle = dispatch
    .reform(Action::Toggle);
  let on_remove = dispatch
    .reform(Action::Remove);
  let on_select_filter = dispatch
    .reform(Action::SelectFilter);
  let on_select_theme = dispatch
    .reform(Action::SelectTheme);

  let state = &page.0;
  let view = state.view(local_offset());
  let theme_class = state
    .theme()
    .map(|theme| theme.as_class());
  let selected_theme = state
    .theme()
    .map(|theme| theme.id.clone())
    .unwrap_or_default();

  html! {
      <div class={classes!("app", theme_class)}>
          <div class="topbar">
              <div class="brand">{ "Tasks" }</div>
              <ThemeSelector
                  themes={state.catalog().themes().to_vec()}
                  selected={selected_theme}
                  on_select={on_select_theme}
              />
          </div>

          <TaskInput on_add={on_add} />

          <FilterTabs
              tabs={view.tabs}
              on_select={on_select_filter}
          />

          <TaskList
              body={view.body}
              on_toggle={on_toggle}
              on_remove={on_remove}
          />
      </div>
  }
}

/// Viewer's current UTC offset as reported by the browser.
fn local_offset() -> FixedOffset {
  offset_from_js_minutes(
    js_sys::Date::new_0()
      .get_timezone_offset()
  )
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
