use tasklist_core::{
  FilterMode,
  FilterTabView
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::FilterTabButton;

#[derive(Properties, PartialEq)]
pub struct FilterTabsProps {
  pub tabs:      Vec<FilterTabView>,
  pub on_select: Callback<FilterMode>
}

#[function_component(FilterTabs)]
pub fn filter_tabs(
  props: &FilterTabsProps
) -> Html {
  html! {
      <div class="tabs">
          {
              for props.tabs.iter().map(|tab| html! {
                  <FilterTabButton
                      mode={tab.mode}
                      label={tab.label.clone()}
                      count={tab.count}
                      is_active={tab.selected}
                      on_select={props.on_select.clone()}
                  />
              })
          }
      </div>
  }
}
