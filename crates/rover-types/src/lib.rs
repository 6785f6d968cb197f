pub mod location;
pub mod slam;
pub mod telemetry;
pub mod voice;

pub use location::{GeoPoint, Location};
pub use slam::{Landmark, MapPoint, Pose, SlamData};
pub use telemetry::{RobotStatus, SystemHealth, SystemStatus, Telemetry, TelemetryPatch};
pub use voice::VoiceStatus;
