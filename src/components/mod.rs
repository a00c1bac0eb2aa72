//! UI Components
//!
//! Leptos components for the widget card.

mod celebration_overlay;
mod clear_completed_button;
mod filter_bar;
mod new_task_form;
mod task_list;
mod task_row;
mod title_heading;

pub use celebration_overlay::CelebrationOverlay;
pub use clear_completed_button::ClearCompletedButton;
pub use filter_bar::FilterBar;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use title_heading::TitleHeading;
