use taskpad_shared::TaskDto;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskRow;

#[derive(Properties, PartialEq)]
pub struct TaskTableProps {
  /// `None` until the snapshot has
  /// been fetched once.
  pub tasks:     Option<Vec<TaskDto>>,
  pub on_edit:   Callback<TaskDto>,
  pub on_done:   Callback<TaskDto>,
  pub on_delete: Callback<TaskDto>
}

#[function_component(TaskTable)]
pub fn task_table(
  props: &TaskTableProps
) -> Html {
  let Some(tasks) = &props.tasks else {
    return html! {
        <div class="empty">{ "Loading tasks..." }</div>
    };
  };

  if tasks.is_empty() {
    return html! {
        <div class="empty">{ "No tasks here yet." }</div>
    };
  }

  html! {
      <div class="rows">
          {
              for tasks.iter().cloned().map(|task| html! {
                  <TaskRow
                      key={task.id.0}
                      task={task}
                      on_edit={props.on_edit.clone()}
                      on_done={props.on_done.clone()}
                      on_delete={props.on_delete.clone()}
                  />
              })
          }
      </div>
  }
}
