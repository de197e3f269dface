use tasklist_core::{
  ListBody,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::{
  EmptyState,
  TaskListRow
};

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub body:      ListBody,
  pub on_toggle: Callback<TaskId>,
  pub on_remove: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let content = match &props.body {
    | ListBody::Empty { message } => {
      html! {
          <EmptyState message={message.clone()} />
      }
    }
    | ListBody::Rows(rows) => {
      html! {
          <>
              {
                  for rows.iter().cloned().map(|row| {
                      let key = row.id.to_string();
                      html! {
                          <TaskListRow
                              key={key}
                              row={row}
                              on_toggle={props.on_toggle.clone()}
                              on_remove={props.on_remove.clone()}
                          />
                      }
                  })
              }
          </>
      }
    }
  };

  html! {
      <div id="taskList" class="task-list">
          { content }
      </div>
  }
}
