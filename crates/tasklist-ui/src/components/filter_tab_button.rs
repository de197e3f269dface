use tasklist_core::FilterMode;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterTabButtonProps {
  pub mode:      FilterMode,
  pub label:     String,
  pub count:     usize,
  pub is_active: bool,
  pub on_select: Callback<FilterMode>
}

#[function_component(
  FilterTabButton
)]
pub fn filter_tab_button(
  props: &FilterTabButtonProps
) -> Html {
  let mode = props.mode;
  let on_select =
    props.on_select.clone();

  html! {
      <button
          class={if props.is_active { "tab active" } else { "tab" }}
          data-tab={mode.as_key()}
          onclick={move |_| on_select.emit(mode)}
      >
          { props.label.clone() }
          <span class="tab-count">{ props.count.to_string() }</span>
      </button>
  }
}
