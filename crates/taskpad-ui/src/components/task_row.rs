use taskpad_shared::{
  TaskDto,
  TaskStatus
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use crate::app::format::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub task:      TaskDto,
  pub on_edit:   Callback<TaskDto>,
  pub on_done:   Callback<TaskDto>,
  pub on_delete: Callback<TaskDto>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let task = &props.task;
  let dot_class = match task.status {
    | TaskStatus::New => "dot pending",
    | TaskStatus::Done => "dot done"
  };
  let description = task
    .description
    .as_deref()
    .map(str::trim)
    .filter(|text| !text.is_empty())
    .map(str::to_string);
  let created = task
    .created_at
    .map(format_timestamp)
    .unwrap_or_else(|| "unknown".to_string());
  let completed =
    task.completed_at.map(format_timestamp);

  let on_edit = {
    let on_edit = props.on_edit.clone();
    let task = task.clone();
    move |_| on_edit.emit(task.clone())
  };
  let on_done = {
    let on_done = props.on_done.clone();
    let task = task.clone();
    move |_| on_done.emit(task.clone())
  };
  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let task = task.clone();
    move |_| on_delete.emit(task.clone())
  };

  html! {
      <div class="row">
          <div class={dot_class}></div>
          <div>
              <div class="task-title">{ &task.title }</div>
              {
                  if let Some(description) = description {
                      html! { <div class="task-subtitle">{ description }</div> }
                  } else {
                      html! {}
                  }
              }
              <div style="margin-top:4px;display:flex;gap:6px;flex-wrap:wrap;">
                  <span class="badge">{ format!("#{}", task.id) }</span>
                  <span class="badge">{ format!("created {created}") }</span>
                  {
                      if let Some(completed) = completed {
                          html! { <span class="badge">{ format!("done {completed}") }</span> }
                      } else {
                          html! {}
                      }
                  }
              </div>
          </div>
          <div class="actions">
              <button type="button" class="btn" onclick={on_edit}>{ "Edit" }</button>
              {
                  if task.status.is_done() {
                      html! {}
                  } else {
                      html! { <button type="button" class="btn ok" onclick={on_done}>{ "Done" }</button> }
                  }
              }
              <button type="button" class="btn danger" onclick={on_delete}>{ "Delete" }</button>
          </div>
      </div>
  }
}
