mod empty_state;
mod filter_tab_button;
mod filter_tabs;
mod task_input;
mod task_list;
mod task_list_row;
mod theme_selector;

pub use empty_state::EmptyState;
pub use filter_tab_button::FilterTabButton;
pub use filter_tabs::FilterTabs;
pub use task_input::TaskInput;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use theme_selector::ThemeSelector;
