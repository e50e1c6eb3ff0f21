use std::fmt;

use serde::Serialize;
use serde_json::Value;
use taskpad_shared::{
  DataEnvelope,
  EmptyBody,
  ErrorEnvelope,
  TaskCreate,
  TaskDto,
  TaskId,
  TaskUpdate
};
use tracing::{
  debug,
  warn
};

use crate::error::ApiError;

pub const JSON_CONTENT_TYPE: &str =
  "application/json";

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum Method {
  Get,
  Post,
  Put,
  Patch,
  Delete
}

impl Method {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Get => "GET",
      | Self::Post => "POST",
      | Self::Put => "PUT",
      | Self::Patch => "PATCH",
      | Self::Delete => "DELETE"
    }
  }
}

impl fmt::Display for Method {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The three server-side collections
/// the client mirrors.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum Collection {
  All,
  New,
  Completed
}

impl Collection {
  pub fn all() -> [Self; 3] {
    [
      Self::All,
      Self::New,
      Self::Completed
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::New => "new",
      | Self::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::New => "New",
      | Self::Completed => "Completed"
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
  pub method: Method,
  pub url:    String,
  pub body:   Option<Value>
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
  pub status: u16,
  pub body:   String
}

impl ApiResponse {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// Moves one request to the task API
/// and hands back whatever came back.
///
/// Implementations send
/// `Content-Type` and `Accept` headers
/// of `application/json` on every
/// request and only fail with
/// [`ApiError::Transport`] (or
/// [`ApiError::Encode`]); status
/// handling happens in [`TaskApi`].
#[allow(async_fn_in_trait)]
pub trait Transport {
  async fn send(
    &self,
    request: ApiRequest
  ) -> Result<ApiResponse, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
  root: String
}

impl Routes {
  pub fn new(root: &str) -> Self {
    Self {
      root: root
        .trim_end_matches('/')
        .to_string()
    }
  }

  pub fn collection(
    &self,
    collection: Collection
  ) -> String {
    match collection {
      | Collection::All => {
        self.root.clone()
      }
      | Collection::New => {
        format!("{}/new", self.root)
      }
      | Collection::Completed => {
        format!(
          "{}/completed",
          self.root
        )
      }
    }
  }

  pub fn tasks(&self) -> String {
    self.root.clone()
  }

  pub fn task(
    &self,
    id: TaskId
  ) -> String {
    format!("{}/{id}", self.root)
  }

  pub fn task_done(
    &self,
    id: TaskId
  ) -> String {
    format!("{}/{id}/done", self.root)
  }
}

/// Typed client for the task
/// endpoints.
pub struct TaskApi<T> {
  transport: T,
  routes:    Routes
}

impl<T: Transport> TaskApi<T> {
  pub fn new(
    transport: T,
    api_root: &str
  ) -> Self {
    Self {
      transport,
      routes: Routes::new(api_root)
    }
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }

  pub fn routes(&self) -> &Routes {
    &self.routes
  }

  pub async fn list(
    &self,
    collection: Collection
  ) -> Result<Vec<TaskDto>, ApiError> {
    let url =
      self.routes.collection(collection);
    let body = self
      .execute(Method::Get, url, None)
      .await?;
    let envelope: DataEnvelope<
      Vec<TaskDto>
    > = serde_json::from_str(&body)
      .map_err(|err| {
        ApiError::Decode(err.to_string())
      })?;
    let tasks =
      envelope.data.unwrap_or_default();
    debug!(
      collection = collection.as_key(),
      count = tasks.len(),
      "decoded task list"
    );
    Ok(tasks)
  }

  pub async fn create(
    &self,
    body: &TaskCreate
  ) -> Result<(), ApiError> {
    let body = encode(body)?;
    self
      .execute(
        Method::Post,
        self.routes.tasks(),
        Some(body)
      )
      .await
      .map(drop)
  }

  pub async fn update(
    &self,
    id: TaskId,
    body: &TaskUpdate
  ) -> Result<(), ApiError> {
    let body = encode(body)?;
    self
      .execute(
        Method::Put,
        self.routes.task(id),
        Some(body)
      )
      .await
      .map(drop)
  }

  pub async fn complete(
    &self,
    id: TaskId
  ) -> Result<(), ApiError> {
    let body =
      encode(&EmptyBody::default())?;
    self
      .execute(
        Method::Patch,
        self.routes.task_done(id),
        Some(body)
      )
      .await
      .map(drop)
  }

  pub async fn delete(
    &self,
    id: TaskId
  ) -> Result<(), ApiError> {
    let body =
      encode(&EmptyBody::default())?;
    self
      .execute(
        Method::Delete,
        self.routes.task(id),
        Some(body)
      )
      .await
      .map(drop)
  }

  async fn execute(
    &self,
    method: Method,
    url: String,
    body: Option<Value>
  ) -> Result<String, ApiError> {
    debug!(%method, %url, "sending task api request");
    let response = self
      .transport
      .send(ApiRequest {
        method,
        url: url.clone(),
        body
      })
      .await?;

    if response.is_success() {
      return Ok(response.body);
    }

    warn!(%method, %url, status = response.status, "task api request failed");
    Err(rejection(response))
  }
}

fn encode<B: Serialize>(
  body: &B
) -> Result<Value, ApiError> {
  serde_json::to_value(body).map_err(
    |err| ApiError::Encode(err.to_string())
  )
}

fn rejection(
  response: ApiResponse
) -> ApiError {
  match serde_json::from_str::<
    ErrorEnvelope
  >(&response.body)
  {
    | Ok(ErrorEnvelope {
      error: Some(errors)
    }) => ApiError::Rejected(errors),
    | _ => {
      ApiError::Status {
        status: response.status,
        body:   response.body
      }
    }
  }
}
