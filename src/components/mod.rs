//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod nav_bar;
mod new_schedule_form;
mod new_task_form;
pub mod notification;
mod schedule_board;
mod settings_panel;
mod task_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use nav_bar::NavBar;
pub use new_schedule_form::NewScheduleForm;
pub use new_task_form::NewTaskForm;
pub use notification::NotificationHost;
pub use schedule_board::ScheduleBoard;
pub use settings_panel::SettingsPanel;
pub use task_list::TaskList;
