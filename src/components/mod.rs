//! UI Components
//!
//! Reusable Leptos components.

mod todo_input;
mod items_left_footer;
mod mode_tab_bar;
mod local_todo_list;
mod remote_todo_list;

pub use todo_input::TodoInput;
pub use items_left_footer::ItemsLeftFooter;
pub use mode_tab_bar::ModeTabBar;
pub use local_todo_list::LocalTodoList;
pub use remote_todo_list::RemoteTodoList;
