use tasklist_core::ThemeDef;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ThemeSelectorProps {
  pub themes:    Vec<ThemeDef>,
  pub selected:  String,
  pub on_select: Callback<String>
}

#[function_component(ThemeSelector)]
pub fn theme_selector(
  props: &ThemeSelectorProps
) -> Html {
  let on_change = {
    let on_select =
      props.on_select.clone();
    Callback::from(
      move |e: web_sys::Event| {
        if let Some(select) =
          e.target_dyn_into::<
            web_sys::HtmlSelectElement
          >()
        {
          on_select.emit(select.value());
        } else {
          tracing::warn!(
            "theme change event had \
             non-select target"
          );
        }
      }
    )
  };

  html! {
      <label class="theme-selector">
          { "Theme" }
          <select id="themeSelect" onchange={on_change}>
              {
                  for props.themes.iter().map(|theme| html! {
                      <option
                          value={theme.id.clone()}
                          selected={theme.id == props.selected}
                      >
                          { theme.display_label().to_string() }
                      </option>
                  })
              }
          </select>
      </label>
  }
}
