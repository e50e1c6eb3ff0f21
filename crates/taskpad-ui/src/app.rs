pub mod format;

use std::rc::Rc;

use gloo::console::log;
use gloo::timers::future::TimeoutFuture;
use taskpad_core::{
  ClientConfig,
  Collection,
  TaskController
};
use taskpad_shared::TaskDto;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_memo,
  use_state
};

use crate::api::GlooTransport;
use crate::components::{
  CollectionTabs,
  CreateTaskForm,
  EditTaskModal,
  StatusBanner,
  TaskTable
};

type Controller =
  TaskController<GlooTransport>;

const CLIENT_CONFIG_TOML: &str =
  include_str!("../assets/client.toml");

fn load_client_config() -> ClientConfig {
  ClientConfig::load_embedded(
    CLIENT_CONFIG_TOML
  )
}

/// Runs `op` against the controller
/// on the browser's microtask queue.
fn spawn_with<F, Fut>(
  controller: &Rc<Controller>,
  op: F
) where
  F: FnOnce(Rc<Controller>) -> Fut + 'static,
  Fut: std::future::Future<Output = ()>
    + 'static
{
  let controller = Rc::clone(controller);
  wasm_bindgen_futures::spawn_local(op(
    controller
  ));
}

#[function_component(App)]
pub fn app() -> Html {
  let controller = use_memo((), |_| {
    TaskController::new(
      GlooTransport,
      load_client_config()
    )
  });
  let force_update = use_force_update();
  let active_tab =
    use_state(|| Collection::All);

  {
    let controller = controller.clone();
    use_effect_with((), move |_| {
      let subscription =
        controller.store().subscribe(
          move || force_update.force_update()
        );
      ui_debug(
        "app.mount",
        "subscribed to task store"
      );
      spawn_with(
        &controller,
        |controller| async move {
          controller.reload().await;
        }
      );

      move || drop(subscription)
    });
  }

  let state = controller.state();

  {
    let controller = controller.clone();
    let has_message =
      state.message.is_some();
    use_effect_with(
      state.message_seq,
      move |seq| {
        let seq = *seq;
        let timeout = controller
          .config()
          .message_timeout_ms;
        if let (true, Some(timeout)) =
          (has_message, timeout)
        {
          spawn_with(
            &controller,
            move |controller| async move {
              TimeoutFuture::new(timeout)
                .await;
              controller
                .expire_message(seq);
            }
          );
        }

        || ()
      }
    );
  }

  let on_select_tab = {
    let active_tab = active_tab.clone();
    Callback::from(
      move |collection: Collection| {
        ui_debug(
          "action.tab.select",
          collection.as_key()
        );
        active_tab.set(collection);
      }
    )
  };

  let on_create_title = {
    let controller = controller.clone();
    Callback::from(move |value: String| {
      controller.set_create_title(value);
    })
  };

  let on_create_description = {
    let controller = controller.clone();
    Callback::from(move |value: String| {
      controller
        .set_create_description(value);
    })
  };

  let on_create_submit = {
    let controller = controller.clone();
    Callback::from(move |()| {
      ui_debug(
        "action.create.submit",
        "posting new task"
      );
      spawn_with(
        &controller,
        |controller| async move {
          controller.create_task().await;
        }
      );
    })
  };

  let on_edit = {
    let controller = controller.clone();
    Callback::from(move |task: TaskDto| {
      ui_debug(
        "action.edit.open",
        &task.id.to_string()
      );
      controller.edit_task(&task);
    })
  };

  let on_done = {
    let controller = controller.clone();
    Callback::from(move |task: TaskDto| {
      spawn_with(
        &controller,
        |controller| async move {
          controller.done_task(&task).await;
        }
      );
    })
  };

  let on_delete = {
    let controller = controller.clone();
    Callback::from(move |task: TaskDto| {
      spawn_with(
        &controller,
        |controller| async move {
          controller
            .delete_task(&task)
            .await;
        }
      );
    })
  };

  let on_edit_title = {
    let controller = controller.clone();
    Callback::from(move |value: String| {
      controller.set_edit_title(value);
    })
  };

  let on_edit_description = {
    let controller = controller.clone();
    Callback::from(move |value: String| {
      controller
        .set_edit_description(value);
    })
  };

  let on_edit_done = {
    let controller = controller.clone();
    Callback::from(move |done: bool| {
      controller.set_edit_done(done);
    })
  };

  let on_edit_save = {
    let controller = controller.clone();
    Callback::from(move |()| {
      ui_debug(
        "action.edit.save",
        "submitting edit form"
      );
      spawn_with(
        &controller,
        |controller| async move {
          controller.update_task().await;
        }
      );
    })
  };

  let on_edit_close = {
    let controller = controller.clone();
    Callback::from(move |()| {
      controller.close_edit();
    })
  };

  let on_dismiss_message = {
    let controller = controller.clone();
    Callback::from(move |()| {
      controller.dismiss_message();
    })
  };

  let on_dismiss_notice = {
    let controller = controller.clone();
    Callback::from(move |id: u64| {
      controller.dismiss_notice(id);
    })
  };

  let counts = Collection::all().map(
    |collection| {
      state
        .snapshot(collection)
        .map(<[TaskDto]>::len)
    }
  );
  let visible = state
    .snapshot(*active_tab)
    .map(<[TaskDto]>::to_vec);

  html! {
      <div class="app">
          <div class="topbar">
              <div class="brand">{ "Taskpad" }</div>
          </div>

          <StatusBanner
              message={state.message.clone()}
              notices={state.notices.clone()}
              on_dismiss={on_dismiss_message}
              on_dismiss_notice={on_dismiss_notice}
          />

          <div class="layout">
              <CreateTaskForm
                  form={state.create_form.clone()}
                  on_title={on_create_title}
                  on_description={on_create_description}
                  on_submit={on_create_submit}
              />

              <div class="panel">
                  <CollectionTabs
                      active={*active_tab}
                      counts={counts}
                      on_select={on_select_tab}
                  />
                  <TaskTable
                      tasks={visible}
                      on_edit={on_edit}
                      on_done={on_done}
                      on_delete={on_delete}
                  />
              </div>
          </div>

          {
              if state.edit_surface_visible {
                  html! {
                      <EditTaskModal
                          task_id={state.editing_id()}
                          form={state.edit_form.clone()}
                          phase={state.edit_phase}
                          on_title={on_edit_title}
                          on_description={on_edit_description}
                          on_done={on_edit_done}
                          on_save={on_edit_save}
                          on_close={on_edit_close}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}

fn ui_debug(event: &str, detail: &str) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
