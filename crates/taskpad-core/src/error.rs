use taskpad_shared::FieldErrors;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
  /// The request never produced a
  /// response.
  #[error("transport failure: {0}")]
  Transport(String),
  #[error(
    "failed to encode request body: {0}"
  )]
  Encode(String),
  #[error("unexpected response body: {0}")]
  Decode(String),
  #[error(
    "server responded with status {status}"
  )]
  Status { status: u16, body: String },
  /// Non-2xx response carrying an
  /// `error` payload.
  #[error("request rejected: {}", rejection_text(.0))]
  Rejected(FieldErrors)
}

impl ApiError {
  pub fn field_errors(
    &self
  ) -> Option<&FieldErrors> {
    match self {
      | Self::Rejected(errors) => {
        Some(errors)
      }
      | _ => None
    }
  }
}

fn rejection_text(
  errors: &FieldErrors
) -> String {
  errors
    .general()
    .map(str::to_string)
    .unwrap_or_else(|| {
      errors.as_value().to_string()
    })
}
