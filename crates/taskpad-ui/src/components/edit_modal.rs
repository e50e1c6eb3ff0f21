use taskpad_core::{
  EditForm,
  EditPhase
};
use taskpad_shared::TaskId;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

use super::{
  FieldErrorList,
  GeneralError
};

#[derive(Properties, PartialEq)]
pub struct EditTaskModalProps {
  pub task_id:        Option<TaskId>,
  pub form:           EditForm,
  pub phase:          EditPhase,
  pub on_title:       Callback<String>,
  pub on_description: Callback<String>,
  pub on_done:        Callback<bool>,
  pub on_save:        Callback<()>,
  pub on_close:       Callback<()>
}

/// Edit surface for the bound task.
/// Save is disabled while a submit is
/// in flight.
#[function_component(EditTaskModal)]
pub fn edit_task_modal(
  props: &EditTaskModalProps
) -> Html {
  let busy =
    props.phase == EditPhase::Submitting;

  let on_title = {
    let on_title = props.on_title.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_title.emit(input.value());
      }
    )
  };

  let on_description = {
    let on_description =
      props.on_description.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        on_description.emit(input.value());
      }
    )
  };

  let on_done = {
    let on_done = props.on_done.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_done.emit(input.checked());
      }
    )
  };

  let on_save = {
    let on_save = props.on_save.clone();
    Callback::from(
      move |_: web_sys::MouseEvent| {
        on_save.emit(())
      }
    )
  };

  let on_close = {
    let on_close = props.on_close.clone();
    Callback::from(
      move |_: web_sys::MouseEvent| {
        if !busy {
          on_close.emit(())
        }
      }
    )
  };

  let heading = props.task_id.map_or_else(
    || "Edit Task".to_string(),
    |id| format!("Edit Task #{id}")
  );
  let error = props.form.error.clone();

  html! {
      <div class="modal-backdrop" onclick={on_close.clone()}>
          <div class="modal" onclick={Callback::from(|e: yew::MouseEvent| e.stop_propagation())}>
              <div class="header">{ heading }</div>
              <div class="content">
                  <GeneralError error={error.clone()} />
                  <div class="field">
                      <label>{ "Title" }</label>
                      <input
                          value={props.form.title.clone().unwrap_or_default()}
                          oninput={on_title}
                      />
                      <FieldErrorList error={error.clone()} field="title" />
                  </div>
                  <div class="field">
                      <label>{ "Description" }</label>
                      <textarea
                          value={props.form.description.clone().unwrap_or_default()}
                          oninput={on_description}
                      />
                      <FieldErrorList error={error.clone()} field="description" />
                  </div>
                  <div class="field inline">
                      <label>
                          <input
                              type="checkbox"
                              checked={props.form.done}
                              onchange={on_done}
                          />
                          { " Done" }
                      </label>
                      <FieldErrorList error={error} field="status" />
                  </div>
                  <div class="footer">
                      <button type="button" class="btn" onclick={on_close} disabled={busy}>{ "Cancel" }</button>
                      <button type="button" class="btn ok" onclick={on_save} disabled={busy}>
                          { if busy { "Saving..." } else { "Save" } }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
