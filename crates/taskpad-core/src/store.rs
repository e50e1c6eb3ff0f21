use std::cell::{
  Cell,
  Ref,
  RefCell
};
use std::rc::{
  Rc,
  Weak
};

use tracing::trace;

use crate::state::TaskState;

type Listener = Rc<dyn Fn()>;
type Listeners =
  RefCell<Vec<(u64, Listener)>>;

/// Single owner of [`TaskState`].
///
/// Every change goes through
/// [`Store::update`], which notifies
/// subscribers once the borrow has
/// been released, so a listener may
/// read the state or even update it
/// again.
pub struct Store {
  state:         RefCell<TaskState>,
  revision:      Cell<u64>,
  listeners:     Rc<Listeners>,
  next_listener: Cell<u64>
}

impl Default for Store {
  fn default() -> Self {
    Self::new(TaskState::default())
  }
}

impl Store {
  pub fn new(state: TaskState) -> Self {
    Self {
      state:         RefCell::new(state),
      revision:      Cell::new(0),
      listeners:     Rc::new(
        RefCell::new(vec![])
      ),
      next_listener: Cell::new(0)
    }
  }

  /// Borrows the state. Do not hold
  /// the guard across an `.await`.
  pub fn state(&self) -> Ref<'_, TaskState> {
    self.state.borrow()
  }

  pub fn read<R>(
    &self,
    f: impl FnOnce(&TaskState) -> R
  ) -> R {
    f(&self.state.borrow())
  }

  pub fn snapshot(&self) -> TaskState {
    self.state.borrow().clone()
  }

  /// Bumped once per [`Store::update`].
  pub fn revision(&self) -> u64 {
    self.revision.get()
  }

  pub fn update<R>(
    &self,
    f: impl FnOnce(&mut TaskState) -> R
  ) -> R {
    let out = {
      let mut state =
        self.state.borrow_mut();
      f(&mut state)
    };
    self.revision.set(
      self.revision.get().wrapping_add(1)
    );
    self.notify();
    out
  }

  pub fn subscribe(
    &self,
    listener: impl Fn() + 'static
  ) -> Subscription {
    let id = self.next_listener.get();
    self.next_listener.set(id + 1);
    self
      .listeners
      .borrow_mut()
      .push((id, Rc::new(listener)));
    trace!(id, "store subscriber added");
    Subscription {
      id,
      listeners: Rc::downgrade(
        &self.listeners
      )
    }
  }

  pub fn listener_count(&self) -> usize {
    self.listeners.borrow().len()
  }

  fn notify(&self) {
    let listeners: Vec<Listener> = self
      .listeners
      .borrow()
      .iter()
      .map(|(_, listener)| {
        Rc::clone(listener)
      })
      .collect();
    for listener in listeners {
      listener();
    }
  }
}

/// Keeps a listener registered until
/// dropped.
#[must_use = "dropping a subscription unsubscribes it"]
pub struct Subscription {
  id:        u64,
  listeners: Weak<Listeners>
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(listeners) =
      self.listeners.upgrade()
    {
      listeners
        .borrow_mut()
        .retain(|(id, _)| *id != self.id);
      trace!(
        id = self.id,
        "store subscriber removed"
      );
    }
  }
}
