use taskpad_shared::TaskDto;
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::api::{
  Collection,
  TaskApi,
  Transport
};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::state::{
  Operation,
  SubmitRefusal,
  TaskState
};
use crate::store::Store;

/// Owns the session: the API client,
/// the state store and the config.
///
/// Operations never return errors.
/// Server rejections land in the form
/// they came from, everything else is
/// logged and, unless disabled, pushed
/// as a notice.
pub struct TaskController<T> {
  api:    TaskApi<T>,
  store:  Store,
  config: ClientConfig
}

impl<T: Transport> TaskController<T> {
  pub fn new(
    transport: T,
    config: ClientConfig
  ) -> Self {
    Self {
      api: TaskApi::new(
        transport,
        &config.api_root
      ),
      store: Store::default(),
      config
    }
  }

  pub fn api(&self) -> &TaskApi<T> {
    &self.api
  }

  pub fn store(&self) -> &Store {
    &self.store
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  pub fn state(&self) -> TaskState {
    self.store.snapshot()
  }

  /// Fetches all three collections.
  /// Each snapshot is replaced as soon
  /// as its own response arrives.
  #[tracing::instrument(skip(self))]
  pub async fn reload(&self) {
    info!("reloading task collections");
    futures::join!(
      self.load(Collection::All),
      self.load(Collection::New),
      self.load(Collection::Completed)
    );
  }

  pub async fn load_all(&self) {
    self.load(Collection::All).await;
  }

  pub async fn load_new(&self) {
    self.load(Collection::New).await;
  }

  pub async fn load_completed(&self) {
    self
      .load(Collection::Completed)
      .await;
  }

  async fn load(
    &self,
    collection: Collection
  ) {
    match self.api.list(collection).await
    {
      | Ok(tasks) => {
        debug!(
          collection = collection.as_key(),
          count = tasks.len(),
          "replacing snapshot"
        );
        self.store.update(|state| {
          state.replace_snapshot(
            collection, tasks
          );
        });
      }
      | Err(err) => {
        self.report(
          Operation::Load(collection),
          &err
        );
      }
    }
  }

  #[tracing::instrument(skip(self))]
  pub async fn create_task(&self) {
    let body = self.store.read(|state| {
      state.create_form.to_request()
    });
    info!(
      title_len = body
        .title
        .as_deref()
        .map_or(0, str::len),
      description_len = body
        .description
        .as_deref()
        .map_or(0, str::len),
      "creating task"
    );

    match self.api.create(&body).await {
      | Ok(()) => {
        let message = self
          .config
          .created_message
          .clone();
        self.store.update(|state| {
          state.create_succeeded(message)
        });
        self.reload().await;
      }
      | Err(ApiError::Rejected(errors)) => {
        warn!(error = %errors.as_value(), "task creation rejected");
        self.store.update(|state| {
          state.create_rejected(errors);
        });
      }
      | Err(err) => {
        self.report(Operation::Create, &err);
      }
    }
  }

  /// Binds `task` to the edit form and
  /// shows the edit surface. No request
  /// is made.
  pub fn edit_task(&self, task: &TaskDto) {
    debug!(id = %task.id, "editing task");
    let task = task.clone();
    self.store.update(|state| {
      state.begin_edit(task);
    });
  }

  #[tracing::instrument(skip(self))]
  pub async fn update_task(&self) {
    let started = self
      .store
      .update(|state| state.begin_submit());
    let (id, body) = match started {
      | Ok(started) => started,
      | Err(SubmitRefusal::NothingBound) => {
        warn!("update requested with no task bound for editing");
        return;
      }
      | Err(
        SubmitRefusal::AlreadySubmitting
      ) => {
        debug!(
          "update already in flight"
        );
        return;
      }
    };
    info!(
      %id,
      status = body.status.as_str(),
      "updating task"
    );

    match self.api.update(id, &body).await
    {
      | Ok(()) => {
        self
          .store
          .update(TaskState::finish_submit_ok);
        self.reload().await;
      }
      | Err(ApiError::Rejected(errors)) => {
        warn!(%id, error = %errors.as_value(), "task update rejected");
        self.store.update(|state| {
          state.finish_submit_err(Some(
            errors
          ));
        });
      }
      | Err(err) => {
        self.store.update(|state| {
          state.finish_submit_err(None);
        });
        self.report(Operation::Update, &err);
      }
    }
  }

  #[tracing::instrument(skip(self, task), fields(id = %task.id))]
  pub async fn done_task(
    &self,
    task: &TaskDto
  ) {
    info!("completing task");
    match self.api.complete(task.id).await
    {
      | Ok(()) => self.reload().await,
      | Err(err) => {
        self.report(
          Operation::Complete,
          &err
        );
      }
    }
  }

  #[tracing::instrument(skip(self, task), fields(id = %task.id))]
  pub async fn delete_task(
    &self,
    task: &TaskDto
  ) {
    info!("deleting task");
    match self.api.delete(task.id).await {
      | Ok(()) => self.reload().await,
      | Err(err) => {
        self
          .report(Operation::Delete, &err);
      }
    }
  }

  pub fn set_create_title(
    &self,
    value: String
  ) {
    self.store.update(|state| {
      state.create_form.title = Some(value);
    });
  }

  pub fn set_create_description(
    &self,
    value: String
  ) {
    self.store.update(|state| {
      state.create_form.description =
        Some(value);
    });
  }

  pub fn set_edit_title(
    &self,
    value: String
  ) {
    self.store.update(|state| {
      state.edit_form.title = Some(value);
    });
  }

  pub fn set_edit_description(
    &self,
    value: String
  ) {
    self.store.update(|state| {
      state.edit_form.description =
        Some(value);
    });
  }

  pub fn set_edit_done(&self, done: bool) {
    self.store.update(|state| {
      state.edit_form.done = done;
    });
  }

  /// Hides the edit surface without
  /// saving.
  pub fn close_edit(&self) {
    let closed = self
      .store
      .update(TaskState::close_edit);
    if !closed {
      debug!("edit surface stays open while saving");
    }
  }

  pub fn dismiss_message(&self) {
    self
      .store
      .update(TaskState::dismiss_message);
  }

  pub fn expire_message(&self, seq: u64) {
    let expired = self.store.update(
      |state| state.expire_message(seq)
    );
    if expired {
      debug!(seq, "confirmation message expired");
    }
  }

  pub fn dismiss_notice(&self, id: u64) {
    self.store.update(|state| {
      state.dismiss_notice(id);
    });
  }

  fn report(
    &self,
    operation: Operation,
    err: &ApiError
  ) {
    error!(%operation, error = %err, "task api call failed");
    if !self.config.report_background_failures
    {
      return;
    }
    let message = err.to_string();
    self.store.update(|state| {
      state.push_notice(operation, message);
    });
  }
}
