use std::fmt;

use taskpad_shared::{
  FieldErrors,
  TaskCreate,
  TaskDto,
  TaskId,
  TaskStatus,
  TaskUpdate
};

use crate::api::Collection;

/// Where the edit surface is in its
/// lifecycle.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq,
)]
pub enum EditPhase {
  #[default]
  Idle,
  Editing,
  Submitting
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
  pub title:       Option<String>,
  pub description: Option<String>,
  pub error:       Option<FieldErrors>
}

impl CreateForm {
  pub fn to_request(&self) -> TaskCreate {
    TaskCreate {
      title:       self.title.clone(),
      description: self.description.clone()
    }
  }

  pub fn reset(&mut self) {
    self.error = None;
    self.title = None;
    self.description = None;
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditForm {
  pub title:       Option<String>,
  pub description: Option<String>,
  pub done:        bool,
  pub status:      Option<TaskStatus>,
  pub error:       Option<FieldErrors>
}

impl EditForm {
  /// Copies the editable fields out of
  /// `task`. `status` and `error` are
  /// left alone.
  pub fn seed(&mut self, task: &TaskDto) {
    self.title = Some(task.title.clone());
    self.description =
      task.description.clone();
    self.done = task.status.is_done();
  }

  /// Derives `status` from `done` and
  /// builds the request body.
  pub fn prepare_submit(
    &mut self
  ) -> TaskUpdate {
    let status =
      TaskStatus::from_done(self.done);
    self.status = Some(status);
    TaskUpdate {
      title: self.title.clone(),
      description: self
        .description
        .clone(),
      done: self.done,
      status,
      error: self.error.clone()
    }
  }
}

/// The request that failed, for
/// display in a notice.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Operation {
  Load(Collection),
  Create,
  Update,
  Complete,
  Delete
}

impl fmt::Display for Operation {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | Self::Load(collection) => {
        write!(
          f,
          "loading {} tasks",
          collection.as_key()
        )
      }
      | Self::Create => {
        f.write_str("creating task")
      }
      | Self::Update => {
        f.write_str("updating task")
      }
      | Self::Complete => {
        f.write_str("completing task")
      }
      | Self::Delete => {
        f.write_str("deleting task")
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
  pub id:        u64,
  pub operation: Operation,
  pub message:   String
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRefusal {
  NothingBound,
  AlreadySubmitting
}

/// All session state of the client.
/// The three snapshots are `None`
/// until their first fetch lands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskState {
  pub all_tasks:            Option<Vec<TaskDto>>,
  pub new_tasks:            Option<Vec<TaskDto>>,
  pub completed_tasks:      Option<Vec<TaskDto>>,
  pub message:              Option<String>,
  pub message_seq:          u64,
  pub create_form:          CreateForm,
  pub edit_form:            EditForm,
  pub editing_task:         Option<TaskDto>,
  pub edit_phase:           EditPhase,
  pub edit_surface_visible: bool,
  pub notices:              Vec<Notice>,
  next_notice_id:           u64
}

impl TaskState {
  pub fn snapshot(
    &self,
    collection: Collection
  ) -> Option<&[TaskDto]> {
    match collection {
      | Collection::All => {
        self.all_tasks.as_deref()
      }
      | Collection::New => {
        self.new_tasks.as_deref()
      }
      | Collection::Completed => {
        self.completed_tasks.as_deref()
      }
    }
  }

  pub fn replace_snapshot(
    &mut self,
    collection: Collection,
    tasks: Vec<TaskDto>
  ) {
    let slot = match collection {
      | Collection::All => {
        &mut self.all_tasks
      }
      | Collection::New => {
        &mut self.new_tasks
      }
      | Collection::Completed => {
        &mut self.completed_tasks
      }
    };
    *slot = Some(tasks);
  }

  pub fn editing_id(
    &self
  ) -> Option<TaskId> {
    self
      .editing_task
      .as_ref()
      .map(|task| task.id)
  }

  /// Returns the sequence number of
  /// the new message.
  pub fn create_succeeded(
    &mut self,
    message: String
  ) -> u64 {
    self.message = Some(message);
    self.message_seq =
      self.message_seq.wrapping_add(1);
    self.create_form.reset();
    self.message_seq
  }

  pub fn create_rejected(
    &mut self,
    error: FieldErrors
  ) {
    self.create_form.error = Some(error);
  }

  pub fn dismiss_message(&mut self) {
    self.message = None;
  }

  /// Clears the message only when it is
  /// still the one numbered `seq`.
  pub fn expire_message(
    &mut self,
    seq: u64
  ) -> bool {
    if self.message_seq == seq
      && self.message.is_some()
    {
      self.message = None;
      true
    } else {
      false
    }
  }

  /// Binds `task` to the edit form,
  /// dropping whatever was being edited
  /// before.
  pub fn begin_edit(
    &mut self,
    task: TaskDto
  ) {
    self.edit_form.seed(&task);
    self.editing_task = Some(task);
    self.edit_phase = EditPhase::Editing;
    self.edit_surface_visible = true;
  }

  pub fn begin_submit(
    &mut self
  ) -> Result<
    (TaskId, TaskUpdate),
    SubmitRefusal
  > {
    if self.edit_phase
      == EditPhase::Submitting
    {
      return Err(
        SubmitRefusal::AlreadySubmitting
      );
    }
    let Some(id) = self.editing_id()
    else {
      return Err(
        SubmitRefusal::NothingBound
      );
    };

    let body =
      self.edit_form.prepare_submit();
    self.edit_phase =
      EditPhase::Submitting;
    Ok((id, body))
  }

  pub fn finish_submit_ok(&mut self) {
    self.edit_phase = EditPhase::Idle;
    self.edit_surface_visible = false;
  }

  pub fn finish_submit_err(
    &mut self,
    error: Option<FieldErrors>
  ) {
    if let Some(error) = error {
      self.edit_form.error = Some(error);
    }
    self.edit_phase = EditPhase::Editing;
  }

  /// Hides the edit surface. Refused
  /// while a submit is in flight.
  pub fn close_edit(&mut self) -> bool {
    if self.edit_phase
      == EditPhase::Submitting
    {
      return false;
    }
    self.edit_surface_visible = false;
    self.edit_phase = EditPhase::Idle;
    true
  }

  pub fn push_notice(
    &mut self,
    operation: Operation,
    message: String
  ) -> u64 {
    self.next_notice_id += 1;
    let id = self.next_notice_id;
    self.notices.push(Notice {
      id,
      operation,
      message
    });
    id
  }

  pub fn dismiss_notice(
    &mut self,
    id: u64
  ) -> bool {
    let before = self.notices.len();
    self
      .notices
      .retain(|notice| notice.id != id);
    self.notices.len() != before
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn task(
    id: i64,
    title: &str,
    status: TaskStatus
  ) -> TaskDto {
    TaskDto {
      id: TaskId(id),
      title: title.to_string(),
      description: Some(format!(
        "{title} description"
      )),
      status,
      created_at: None,
      completed_at: None
    }
  }

  #[test]
  fn seeding_twice_is_stable() {
    let mut state = TaskState::default();
    let target =
      task(5, "A", TaskStatus::Done);

    state.begin_edit(target.clone());
    let first = state.edit_form.clone();
    state.begin_edit(target);

    assert_eq!(state.edit_form, first);
    assert!(state.edit_form.done);
    assert_eq!(
      state.edit_phase,
      EditPhase::Editing
    );
    assert!(state.edit_surface_visible);
  }

  #[test]
  fn rebinding_discards_unsaved_edits()
  {
    let mut state = TaskState::default();
    state.begin_edit(task(
      1,
      "first",
      TaskStatus::New
    ));
    state.edit_form.title =
      Some("changed".to_string());
    state.edit_form.done = true;

    state.begin_edit(task(
      2,
      "second",
      TaskStatus::New
    ));

    assert_eq!(
      state.editing_id(),
      Some(TaskId(2))
    );
    assert_eq!(
      state.edit_form.title.as_deref(),
      Some("second")
    );
    assert!(!state.edit_form.done);
  }

  #[test]
  fn submit_derives_status_from_done()
  {
    let mut state = TaskState::default();
    state.begin_edit(task(
      3,
      "x",
      TaskStatus::Done
    ));

    state.edit_form.done = false;
    let (_, body) = state
      .begin_submit()
      .expect("submit");
    assert_eq!(body.status, TaskStatus::New);
    assert_eq!(
      state.edit_form.status,
      Some(TaskStatus::New)
    );

    state.finish_submit_err(None);
    state.edit_form.done = true;
    let (id, body) = state
      .begin_submit()
      .expect("submit");
    assert_eq!(id, TaskId(3));
    assert!(body.done);
    assert_eq!(
      body.status,
      TaskStatus::Done
    );
  }

  #[test]
  fn submit_requires_a_binding_and_no_inflight_request()
  {
    let mut state = TaskState::default();
    assert_eq!(
      state.begin_submit(),
      Err(SubmitRefusal::NothingBound)
    );

    state.begin_edit(task(
      4,
      "y",
      TaskStatus::New
    ));
    state.begin_submit().expect("first");
    assert_eq!(
      state.begin_submit(),
      Err(
        SubmitRefusal::AlreadySubmitting
      )
    );
  }

  #[test]
  fn submit_outcomes_drive_the_surface()
  {
    let mut state = TaskState::default();
    state.begin_edit(task(
      4,
      "y",
      TaskStatus::New
    ));
    state.begin_submit().expect("submit");

    let error = FieldErrors::new(
      json!({"title": ["too short"]})
    );
    state.finish_submit_err(Some(
      error.clone()
    ));
    assert_eq!(
      state.edit_phase,
      EditPhase::Editing
    );
    assert!(state.edit_surface_visible);
    assert_eq!(
      state.edit_form.error,
      Some(error)
    );

    state.begin_submit().expect("retry");
    state.finish_submit_ok();
    assert_eq!(
      state.edit_phase,
      EditPhase::Idle
    );
    assert!(!state.edit_surface_visible);
  }

  #[test]
  fn close_is_refused_while_submitting()
  {
    let mut state = TaskState::default();
    state.begin_edit(task(
      6,
      "z",
      TaskStatus::New
    ));
    state.begin_submit().expect("submit");

    assert!(!state.close_edit());
    assert!(state.edit_surface_visible);
    assert_eq!(
      state.edit_phase,
      EditPhase::Submitting
    );

    state.finish_submit_err(None);
    assert!(state.edit_surface_visible);
    assert!(state.close_edit());
    assert!(!state.edit_surface_visible);
    assert_eq!(
      state.edit_phase,
      EditPhase::Idle
    );
  }

  #[test]
  fn late_reply_lands_on_the_rebound_form()
  {
    let mut state = TaskState::default();
    state.begin_edit(task(
      1,
      "first",
      TaskStatus::New
    ));
    state.begin_submit().expect("submit");
    state.begin_edit(task(
      2,
      "second",
      TaskStatus::Done
    ));
    assert_eq!(
      state.edit_phase,
      EditPhase::Editing
    );

    let error = FieldErrors::new(
      json!({"title": ["taken"]})
    );
    state.finish_submit_err(Some(
      error.clone()
    ));
    assert_eq!(
      state.editing_id(),
      Some(TaskId(2))
    );
    assert_eq!(
      state.edit_form.title.as_deref(),
      Some("second")
    );
    assert_eq!(
      state.edit_form.error,
      Some(error)
    );
    assert!(state.edit_surface_visible);

    state.begin_submit().expect("submit");
    state.begin_edit(task(
      3,
      "third",
      TaskStatus::New
    ));
    state.finish_submit_ok();
    assert_eq!(
      state.editing_id(),
      Some(TaskId(3))
    );
    assert!(!state.edit_surface_visible);
    assert_eq!(
      state.edit_phase,
      EditPhase::Idle
    );
  }

  #[test]
  fn expire_message_ignores_newer_messages()
  {
    let mut state = TaskState::default();
    let first = state
      .create_succeeded("one".to_string());
    let second = state
      .create_succeeded("two".to_string());

    assert!(!state.expire_message(first));
    assert_eq!(
      state.message.as_deref(),
      Some("two")
    );
    assert!(state.expire_message(second));
    assert!(state.message.is_none());
  }

  #[test]
  fn notices_get_distinct_ids() {
    let mut state = TaskState::default();
    let a = state.push_notice(
      Operation::Delete,
      "boom".to_string()
    );
    let b = state.push_notice(
      Operation::Load(Collection::New),
      "down".to_string()
    );

    assert_ne!(a, b);
    assert!(state.dismiss_notice(a));
    assert!(!state.dismiss_notice(a));
    assert_eq!(state.notices.len(), 1);
    assert_eq!(
      state.notices[0]
        .operation
        .to_string(),
      "loading new tasks"
    );
  }
}
