pub mod loader;

pub use loader::{
    DashboardConfig, CONNECTIVITY_CHECK_INTERVAL_MS, DEFAULT_BASE_URL, DEFAULT_ORIGIN,
    DEFAULT_UPDATE_INTERVAL_MS,
};
