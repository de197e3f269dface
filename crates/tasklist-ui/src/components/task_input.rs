use yew::{
  Callback,
  Html,
  KeyboardEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

use crate::app::ui_debug;

#[derive(Properties, PartialEq)]
pub struct TaskInputProps {
  pub on_add: Callback<String>
}

/// Text field plus Add button. Enter in the field submits too; the field is
/// cleared once non-blank text has been handed off.
#[function_component(TaskInput)]
pub fn task_input(
  props: &TaskInputProps
) -> Html {
  let draft = use_state(String::new);

  let submit = {
    let draft = draft.clone();
    let on_add = props.on_add.clone();
    Callback::from(move |_: ()| {
      let text = (*draft).clone();
      if text.trim().is_empty() {
        ui_debug(
          "task_input.blank",
          "ignored blank submission"
        );
        return;
      }
      on_add.emit(text);
      draft.set(String::new());
    })
  };

  let on_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        draft.set(input.value());
      }
    )
  };

  let on_keydown = {
    let submit = submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          e.prevent_default();
          submit.emit(());
        }
      }
    )
  };

  let on_click = submit
    .reform(|_: yew::MouseEvent| ());

  html! {
      <div class="task-input">
          <input
              id="taskInput"
              type="text"
              placeholder="What needs doing?"
              value={(*draft).clone()}
              oninput={on_input}
              onkeydown={on_keydown}
          />
          <button id="addBtn" class="btn" onclick={on_click}>{ "Add" }</button>
      </div>
  }
}
