use taskpad_shared::{
  FieldErrors,
  has_error
};
use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FieldErrorListProps {
  pub error: Option<FieldErrors>,
  pub field: AttrValue
}

/// Messages the server reported for
/// one form field.
#[function_component(FieldErrorList)]
pub fn field_error_list(
  props: &FieldErrorListProps
) -> Html {
  let error = props.error.as_ref();
  if !has_error(error, &props.field) {
    return html! {};
  }

  let messages = error
    .map(|error| {
      error.messages(&props.field)
    })
    .unwrap_or_default();

  html! {
      <div class="field-errors">
          {
              for messages.into_iter().map(|message| html! {
                  <div class="form-error">{ message }</div>
              })
          }
      </div>
  }
}

#[derive(Properties, PartialEq)]
pub struct GeneralErrorProps {
  pub error: Option<FieldErrors>
}

/// Shown when the server reported the
/// whole error as one string.
#[function_component(GeneralError)]
pub fn general_error(
  props: &GeneralErrorProps
) -> Html {
  match props
    .error
    .as_ref()
    .and_then(FieldErrors::general)
  {
    | Some(message) => html! {
        <div class="form-error">{ message }</div>
    },
    | None => html! {}
  }
}
