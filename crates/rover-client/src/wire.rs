//! 后端响应体的反序列化形态
//!
//! 每个字段都带显式默认值：后端返回部分字段或字段缺失时
//! 不会产生非法领域记录（缺失即默认，而不是报错）

use serde::Deserialize;

use rover_types::{
    Landmark, MapPoint, Pose, RobotStatus, SlamData, SystemHealth, SystemStatus, Telemetry,
    VoiceStatus,
};

fn default_battery() -> f64 {
    85.0
}

fn default_temperature() -> f64 {
    45.0
}

fn default_fps() -> f64 {
    30.0
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// `/api/system_status` 响应体
#[derive(Debug, Deserialize)]
pub struct SystemStatusBody {
    #[serde(default = "default_battery")]
    pub battery_level: f64,

    #[serde(default)]
    pub cpu_usage: f64,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_fps")]
    pub camera_fps: f64,

    #[serde(default)]
    pub objects_detected: u32,

    #[serde(default)]
    pub system_status: RobotStatus,

    #[serde(default)]
    pub health: SystemHealth,

    #[serde(default)]
    pub uptime: u64,

    #[serde(default = "default_version")]
    pub version: String,
}

impl From<SystemStatusBody> for Telemetry {
    fn from(body: SystemStatusBody) -> Self {
        Telemetry {
            battery: body.battery_level,
            cpu_usage: body.cpu_usage,
            temperature: body.temperature,
            fps: body.camera_fps,
            objects_detected: body.objects_detected,
            status: body.system_status,
        }
    }
}

impl From<SystemStatusBody> for SystemStatus {
    fn from(body: SystemStatusBody) -> Self {
        SystemStatus {
            // 能拿到响应体即视为可达
            connected: true,
            system_health: body.health,
            uptime: body.uptime,
            version: body.version,
        }
    }
}

/// `/api/slam_map` 响应体
#[derive(Debug, Deserialize)]
pub struct SlamMapBody {
    #[serde(default)]
    pub map_points: Vec<MapPoint>,

    #[serde(default)]
    pub current_pose: Option<Pose>,

    #[serde(default)]
    pub landmarks: Vec<Landmark>,

    #[serde(default)]
    pub velocity: f64,
}

impl From<SlamMapBody> for SlamData {
    fn from(body: SlamMapBody) -> Self {
        SlamData {
            map: body.map_points,
            pose: body.current_pose.unwrap_or_default(),
            landmarks: body.landmarks,
        }
    }
}

/// `/api/voice_status` 响应体
#[derive(Debug, Deserialize)]
pub struct VoiceStatusBody {
    #[serde(default)]
    pub is_listening: bool,

    #[serde(default)]
    pub last_command: String,

    #[serde(default = "default_language")]
    pub current_language: String,

    #[serde(default)]
    pub confidence: f64,
}

impl From<VoiceStatusBody> for VoiceStatus {
    fn from(body: VoiceStatusBody) -> Self {
        VoiceStatus {
            is_listening: body.is_listening,
            last_command: body.last_command,
            language: body.current_language,
            confidence: body.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_battery_falls_back_to_85() {
        let body: SystemStatusBody = serde_json::from_value(json!({
            "cpu_usage": 12.0,
            "system_status": "patrolling"
        }))
        .unwrap();

        let telemetry: Telemetry = body.into();
        assert_eq!(telemetry.battery, 85.0);
        assert_eq!(telemetry.cpu_usage, 12.0);
        assert_eq!(telemetry.status, RobotStatus::Patrolling);
    }

    #[test]
    fn test_empty_body_yields_full_defaults() {
        let body: SystemStatusBody = serde_json::from_value(json!({})).unwrap();
        let telemetry: Telemetry = body.into();

        assert_eq!(telemetry.battery, 85.0);
        assert_eq!(telemetry.cpu_usage, 0.0);
        assert_eq!(telemetry.temperature, 45.0);
        assert_eq!(telemetry.fps, 30.0);
        assert_eq!(telemetry.objects_detected, 0);
        assert_eq!(telemetry.status, RobotStatus::Idle);
    }

    #[test]
    fn test_unknown_status_string_maps_to_idle() {
        let body: SystemStatusBody = serde_json::from_value(json!({
            "system_status": "self_destruct"
        }))
        .unwrap();
        assert_eq!(body.system_status, RobotStatus::Idle);
    }

    #[test]
    fn test_system_status_defaults() {
        let body: SystemStatusBody = serde_json::from_value(json!({})).unwrap();
        let status: SystemStatus = body.into();

        assert!(status.connected);
        assert_eq!(status.system_health, SystemHealth::Good);
        assert_eq!(status.uptime, 0);
        assert_eq!(status.version, "1.0.0");
    }

    #[test]
    fn test_slam_body_without_pose() {
        let body: SlamMapBody = serde_json::from_value(json!({
            "map_points": [{"x": 1.0, "y": 2.0, "z": 0.0}]
        }))
        .unwrap();

        let slam: SlamData = body.into();
        assert_eq!(slam.map.len(), 1);
        assert_eq!(slam.pose, Pose::default());
        assert!(slam.landmarks.is_empty());
    }

    #[test]
    fn test_voice_body_defaults() {
        let body: VoiceStatusBody = serde_json::from_value(json!({})).unwrap();
        let voice: VoiceStatus = body.into();

        assert!(!voice.is_listening);
        assert_eq!(voice.language, "en");
        assert_eq!(voice.last_command, "");
    }
}
