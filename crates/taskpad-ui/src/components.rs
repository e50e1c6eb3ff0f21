mod collection_tabs;
mod create_form;
mod edit_modal;
mod field_errors;
mod status_banner;
mod task_row;
mod task_table;

pub use collection_tabs::CollectionTabs;
pub use create_form::CreateTaskForm;
pub use edit_modal::EditTaskModal;
pub use field_errors::{
  FieldErrorList,
  GeneralError
};
pub use status_banner::StatusBanner;
pub use task_row::TaskRow;
pub use task_table::TaskTable;
