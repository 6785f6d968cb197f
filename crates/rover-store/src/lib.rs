pub mod history;
pub mod store;

pub use history::{PathHistory, PATH_HISTORY_CAPACITY};
pub use store::{DashboardState, DashboardStore};
