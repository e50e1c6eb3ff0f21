use std::fmt;

use chrono::{
  DateTime,
  Utc
};
use serde::{
  Deserialize,
  Serialize
};
use serde_json::Value;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
  #[default]
  New,
  Done
}

impl TaskStatus {
  /// Status a task should carry when
  /// its "done" checkbox is in the
  /// given position.
  pub fn from_done(done: bool) -> Self {
    if done {
      Self::Done
    } else {
      Self::New
    }
  }

  pub fn is_done(self) -> bool {
    self == Self::Done
  }

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::New => "new",
      | Self::Done => "done"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskDto {
  pub id:           TaskId,
  #[serde(default)]
  pub title:        String,
  #[serde(default)]
  pub description:  Option<String>,
  #[serde(default)]
  pub status:       TaskStatus,
  #[serde(default)]
  pub created_at:   Option<DateTime<Utc>>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub completed_at: Option<DateTime<Utc>>
}

/// Body of `POST {root}`.
#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskCreate {
  pub title:       Option<String>,
  pub description: Option<String>
}

/// Body of `PUT {root}/{id}`. The whole
/// edit form goes over the wire,
/// including its last error.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskUpdate {
  pub title:       Option<String>,
  pub description: Option<String>,
  pub done:        bool,
  pub status:      TaskStatus,
  pub error:       Option<FieldErrors>
}

#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct EmptyData {}

/// The `{"data":{}}` body sent with
/// complete and delete requests.
#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct EmptyBody {
  pub data: EmptyData
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
  #[serde(default)]
  pub data: Option<T>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
  #[serde(default)]
  pub error: Option<FieldErrors>
}

/// Error payload reported by the task
/// API. Usually a map from field name
/// to a list of messages, sometimes a
/// bare string.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(transparent)]
pub struct FieldErrors(pub Value);

impl FieldErrors {
  pub fn new(value: Value) -> Self {
    Self(value)
  }

  pub fn as_value(&self) -> &Value {
    &self.0
  }

  /// Value stored at `key`, only when
  /// it is truthy.
  pub fn get(
    &self,
    key: &str
  ) -> Option<&Value> {
    self
      .0
      .as_object()
      .and_then(|map| map.get(key))
      .filter(|value| is_truthy(value))
  }

  /// Display strings for `key`,
  /// flattening the message list the
  /// server usually sends.
  pub fn messages(
    &self,
    key: &str
  ) -> Vec<String> {
    match self.get(key) {
      | Some(Value::Array(items)) => {
        items
          .iter()
          .filter(|item| is_truthy(item))
          .map(value_text)
          .collect()
      }
      | Some(value) => {
        vec![value_text(value)]
      }
      | None => vec![]
    }
  }

  /// The message when the whole error
  /// is a bare string.
  pub fn general(&self) -> Option<&str> {
    self
      .0
      .as_str()
      .filter(|text| !text.is_empty())
  }
}

impl From<Value> for FieldErrors {
  fn from(value: Value) -> Self {
    Self(value)
  }
}

pub fn has_error(
  error: Option<&FieldErrors>,
  key: &str
) -> bool {
  get_error(error, key).is_some()
}

pub fn get_error<'a>(
  error: Option<&'a FieldErrors>,
  key: &str
) -> Option<&'a Value> {
  error.and_then(|error| error.get(key))
}

fn is_truthy(value: &Value) -> bool {
  match value {
    | Value::Null => false,
    | Value::Bool(flag) => *flag,
    | Value::Number(number) => {
      number
        .as_f64()
        .is_some_and(|n| n != 0.0)
    }
    | Value::String(text) => {
      !text.is_empty()
    }
    | Value::Array(_)
    | Value::Object(_) => true
  }
}

fn value_text(value: &Value) -> String {
  match value {
    | Value::String(text) => text.clone(),
    | other => other.to_string()
  }
}
