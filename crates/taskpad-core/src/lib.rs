//! Client engine for the task list:
//! mirrors the server's task
//! collections and drives the create
//! and edit forms against the REST API.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod state;
pub mod store;

pub use api::{
  ApiRequest,
  ApiResponse,
  Collection,
  Method,
  TaskApi,
  Transport
};
pub use config::ClientConfig;
pub use controller::TaskController;
pub use error::ApiError;
pub use state::{
  CreateForm,
  EditForm,
  EditPhase,
  Notice,
  Operation,
  TaskState
};
pub use store::{
  Store,
  Subscription
};
