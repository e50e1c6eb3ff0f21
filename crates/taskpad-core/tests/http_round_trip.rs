use std::sync::atomic::{
  AtomicI64,
  Ordering
};
use std::sync::{
  Arc,
  Mutex
};
use std::time::Duration;

use axum::extract::{
  Path,
  State
};
use axum::http::StatusCode;
use axum::routing::{
  get,
  patch,
  put
};
use axum::{
  Json,
  Router
};
use chrono::Utc;
use serde_json::{
  Value,
  json
};
use taskpad_core::http::ReqwestTransport;
use taskpad_core::{
  ClientConfig,
  Collection,
  EditPhase,
  TaskController
};
use taskpad_shared::{
  TaskCreate,
  TaskDto,
  TaskId,
  TaskStatus,
  TaskUpdate,
  has_error
};

type Reply = (StatusCode, Json<Value>);

#[derive(Clone, Default)]
struct Backend {
  tasks:   Arc<Mutex<Vec<TaskDto>>>,
  next_id: Arc<AtomicI64>
}

impl Backend {
  fn list(
    &self,
    keep: impl Fn(&TaskDto) -> bool
  ) -> Reply {
    let tasks: Vec<TaskDto> = self
      .tasks
      .lock()
      .expect("tasks lock")
      .iter()
      .filter(|task| keep(task))
      .cloned()
      .collect();
    if tasks.is_empty() {
      (StatusCode::OK, Json(json!({})))
    } else {
      (
        StatusCode::OK,
        Json(json!({"data": tasks}))
      )
    }
  }

  fn modify(
    &self,
    id: i64,
    change: impl FnOnce(&mut TaskDto)
  ) -> Reply {
    let mut tasks =
      self.tasks.lock().expect("tasks lock");
    match tasks
      .iter_mut()
      .find(|task| task.id == TaskId(id))
    {
      | Some(task) => {
        change(task);
        (
          StatusCode::OK,
          Json(json!({"data": task}))
        )
      }
      | None => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(
          json!({"error": "sql: no rows in result set"})
        )
      )
    }
  }
}

async fn list_all(
  State(backend): State<Backend>
) -> Reply {
  backend.list(|_| true)
}

async fn list_new(
  State(backend): State<Backend>
) -> Reply {
  backend.list(|task| {
    task.status == TaskStatus::New
  })
}

async fn list_completed(
  State(backend): State<Backend>
) -> Reply {
  backend.list(|task| task.status.is_done())
}

async fn create(
  State(backend): State<Backend>,
  Json(body): Json<TaskCreate>
) -> Reply {
  let title = body.title.unwrap_or_default();
  if title.trim().is_empty() {
    return (
      StatusCode::BAD_REQUEST,
      Json(json!({
        "error": {"title": ["The title field is required"]}
      }))
    );
  }

  let id = backend
    .next_id
    .fetch_add(1, Ordering::SeqCst)
    + 1;
  let task = TaskDto {
    id: TaskId(id),
    title,
    description: body.description,
    status: TaskStatus::New,
    created_at: Some(Utc::now()),
    completed_at: None
  };
  backend
    .tasks
    .lock()
    .expect("tasks lock")
    .push(task.clone());
  (StatusCode::OK, Json(json!({"data": task})))
}

async fn update(
  State(backend): State<Backend>,
  Path(id): Path<i64>,
  Json(body): Json<TaskUpdate>
) -> Reply {
  backend.modify(id, |task| {
    if let Some(title) = body.title {
      task.title = title;
    }
    task.description = body.description;
    task.status = body.status;
    task.completed_at = body
      .status
      .is_done()
      .then(Utc::now);
  })
}

async fn complete(
  State(backend): State<Backend>,
  Path(id): Path<i64>
) -> Reply {
  backend.modify(id, |task| {
    task.status = TaskStatus::Done;
    task.completed_at = Some(Utc::now());
  })
}

async fn remove(
  State(backend): State<Backend>,
  Path(id): Path<i64>
) -> Reply {
  let mut tasks =
    backend.tasks.lock().expect("tasks lock");
  tasks.retain(|task| task.id != TaskId(id));
  (StatusCode::OK, Json(json!({"data": true})))
}

fn router() -> Router {
  Router::new()
    .route("/api/tasks", get(list_all).post(create))
    .route("/api/tasks/new", get(list_new))
    .route(
      "/api/tasks/completed",
      get(list_completed)
    )
    .route(
      "/api/tasks/{id}",
      put(update).delete(remove)
    )
    .route("/api/tasks/{id}/done", patch(complete))
    .with_state(Backend::default())
}

fn titles(tasks: Option<&[TaskDto]>) -> Vec<String> {
  tasks
    .unwrap_or_default()
    .iter()
    .map(|task| task.title.clone())
    .collect()
}

#[tokio::test]
async fn client_drives_a_real_http_backend() {
  let listener =
    tokio::net::TcpListener::bind("127.0.0.1:0")
      .await
      .expect("bind");
  let addr = listener.local_addr().expect("addr");
  tokio::spawn(async move {
    axum::serve(listener, router())
      .await
      .expect("serve");
  });

  let config = ClientConfig::from_toml_str(&format!(
    "api_root = \"http://{addr}/api/tasks/\"\n"
  ))
  .expect("config");
  taskpad_core::logging::init_tracing(
    &config.log_filter
  )
  .expect("tracing");
  let client = reqwest::Client::builder()
    .timeout(Duration::from_secs(10))
    .build()
    .expect("http client");
  let controller = TaskController::new(
    ReqwestTransport::with_client(client),
    config
  );

  controller.reload().await;
  let state = controller.state();
  for collection in Collection::all() {
    assert_eq!(
      state.snapshot(collection),
      Some(&[][..])
    );
  }

  controller
    .set_create_title("Buy milk".to_string());
  controller
    .set_create_description(String::new());
  controller.create_task().await;
  let state = controller.state();
  assert!(state.create_form.title.is_none());
  assert_eq!(
    titles(state.snapshot(Collection::All)),
    vec!["Buy milk".to_string()]
  );
  assert_eq!(
    titles(state.snapshot(Collection::New)),
    vec!["Buy milk".to_string()]
  );

  controller.set_create_title("  ".to_string());
  controller.create_task().await;
  let state = controller.state();
  assert!(has_error(
    state.create_form.error.as_ref(),
    "title"
  ));
  assert_eq!(
    state.create_form.title.as_deref(),
    Some("  ")
  );

  let milk = state
    .all_tasks
    .as_ref()
    .and_then(|tasks| tasks.first().cloned())
    .expect("created task");
  controller.edit_task(&milk);
  controller.set_edit_done(true);
  controller
    .set_edit_description("semi-skimmed".to_string());
  controller.update_task().await;

  let state = controller.state();
  assert_eq!(state.edit_phase, EditPhase::Idle);
  assert!(state.new_tasks.as_deref().unwrap_or_default().is_empty());
  let done = state
    .completed_tasks
    .as_ref()
    .and_then(|tasks| tasks.first())
    .expect("completed task");
  assert_eq!(
    done.description.as_deref(),
    Some("semi-skimmed")
  );
  assert!(done.completed_at.is_some());

  controller.delete_task(&milk).await;
  let state = controller.state();
  assert_eq!(state.snapshot(Collection::All), Some(&[][..]));
  assert!(state.notices.is_empty());
}
