use taskpad_core::CreateForm;
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
pub struct CreateTaskFormProps {
  pub form:           CreateForm,
  pub on_title:       Callback<String>,
  pub on_description: Callback<String>,
  pub on_submit:      Callback<()>
}

#[function_component(CreateTaskForm)]
pub fn create_task_form(
  props: &CreateTaskFormProps
) -> Html {
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

  let on_submit = {
    let on_submit = props.on_submit.clone();
    Callback::from(
      move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
      }
    )
  };

  let error = props.form.error.clone();

  html! {
      <form class="panel create-form" onsubmit={on_submit}>
          <div class="header">{ "New Task" }</div>
          <div class="content">
              <GeneralError error={error.clone()} />
              <div class="field">
                  <label>{ "Title" }</label>
                  <input
                      value={props.form.title.clone().unwrap_or_default()}
                      oninput={on_title}
                      placeholder="What needs doing?"
                  />
                  <FieldErrorList error={error.clone()} field="title" />
              </div>
              <div class="field">
                  <label>{ "Description" }</label>
                  <textarea
                      value={props.form.description.clone().unwrap_or_default()}
                      oninput={on_description}
                  />
                  <FieldErrorList error={error} field="description" />
              </div>
              <div class="footer">
                  <button type="submit" class="btn">{ "Create" }</button>
              </div>
          </div>
      </form>
  }
}
