pub mod client;
pub mod error;
pub mod geo;
pub mod wire;

pub use client::RobotClient;
pub use error::{ClientError, Result};
pub use geo::pose_to_location;
