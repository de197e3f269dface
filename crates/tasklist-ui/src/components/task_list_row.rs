use tasklist_core::{
  TaskId,
  TaskRowView
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:       TaskRowView,
  pub on_toggle: Callback<TaskId>,
  pub on_remove: Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let row = &props.row;

  let on_toggle = {
    let id = row.id.clone();
    let on_toggle =
      props.on_toggle.clone();
    move |_: web_sys::Event| {
      on_toggle.emit(id.clone())
    }
  };
  let on_remove = {
    let id = row.id.clone();
    let on_remove =
      props.on_remove.clone();
    move |_: yew::MouseEvent| {
      on_remove.emit(id.clone())
    }
  };

  let text_class =
    if row.struck_through() {
      "task-text done"
    } else {
      "task-text"
    };

  html! {
      <div class="task">
          <div class="task-main">
              <input
                  type="checkbox"
                  checked={row.done}
                  onchange={on_toggle}
              />
              <div>
                  <div class={text_class}>{ row.text.clone() }</div>
                  <div class="task-meta">
                      <div>{ row.created_label.clone() }</div>
                      {
                          match &row.completed_label {
                              Some(label) => html! { <div>{ label.clone() }</div> },
                              None => html! {}
                          }
                      }
                  </div>
              </div>
          </div>
          <div class="task-actions">
              <button class="btn danger" onclick={on_remove}>{ "Remove" }</button>
          </div>
      </div>
  }
}
