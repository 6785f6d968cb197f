use serde::{Deserialize, Serialize};

/// 机器人运行状态
///
/// 后端返回未知状态字符串时降级为 `Idle`，不报错
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    /// 巡逻中
    Patrolling,
    /// 告警
    Alert,
    /// 离线
    Offline,
    /// 待机（`#[serde(other)]` 要求兜底变体放在最后）
    #[default]
    #[serde(other)]
    Idle,
}

impl RobotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RobotStatus::Idle => "idle",
            RobotStatus::Patrolling => "patrolling",
            RobotStatus::Alert => "alert",
            RobotStatus::Offline => "offline",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "patrolling" => RobotStatus::Patrolling,
            "alert" => RobotStatus::Alert,
            "offline" => RobotStatus::Offline,
            _ => RobotStatus::Idle,
        }
    }
}

/// 遥测快照
///
/// 每次同步成功后整体覆盖；连接失败时仅 status 降级为 Offline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Telemetry {
    /// 电量（0-100）
    pub battery: f64,

    /// CPU 使用率（0-100）
    pub cpu_usage: f64,

    /// 温度（摄氏度）
    pub temperature: f64,

    /// 视频帧率
    pub fps: f64,

    /// 当前检测到的目标数量
    pub objects_detected: u32,

    /// 运行状态
    pub status: RobotStatus,
}

impl Default for Telemetry {
    /// 仪表盘初始值（未收到任何数据前展示用）
    fn default() -> Self {
        Self {
            battery: 85.0,
            cpu_usage: 45.0,
            temperature: 52.0,
            fps: 30.0,
            objects_detected: 0,
            status: RobotStatus::Offline,
        }
    }
}

/// 遥测部分更新
///
/// 只覆盖给出的字段，其余保持不变
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryPatch {
    pub battery: Option<f64>,
    pub cpu_usage: Option<f64>,
    pub temperature: Option<f64>,
    pub fps: Option<f64>,
    pub objects_detected: Option<u32>,
    pub status: Option<RobotStatus>,
}

impl TelemetryPatch {
    /// 将补丁应用到现有遥测
    pub fn apply_to(&self, telemetry: &mut Telemetry) {
        if let Some(battery) = self.battery {
            telemetry.battery = battery;
        }
        if let Some(cpu_usage) = self.cpu_usage {
            telemetry.cpu_usage = cpu_usage;
        }
        if let Some(temperature) = self.temperature {
            telemetry.temperature = temperature;
        }
        if let Some(fps) = self.fps {
            telemetry.fps = fps;
        }
        if let Some(objects_detected) = self.objects_detected {
            telemetry.objects_detected = objects_detected;
        }
        if let Some(status) = self.status {
            telemetry.status = status;
        }
    }
}

/// 系统健康度
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SystemHealth {
    Warning,
    Critical,
    // 兜底变体必须是最后一个
    #[default]
    #[serde(other)]
    Good,
}

/// 系统整体状态
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemStatus {
    /// 后端是否可达
    pub connected: bool,

    /// 系统健康度
    pub system_health: SystemHealth,

    /// 运行时长（秒）
    pub uptime: u64,

    /// 后端版本号
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_unknown_string_degrades_to_idle() {
        // 后端返回未识别的状态时不应报错
        let status: RobotStatus = serde_json::from_str("\"rebooting\"").unwrap();
        assert_eq!(status, RobotStatus::Idle);

        let status: RobotStatus = serde_json::from_str("\"patrolling\"").unwrap();
        assert_eq!(status, RobotStatus::Patrolling);
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(RobotStatus::from_str("alert"), RobotStatus::Alert);
        assert_eq!(RobotStatus::from_str("unknown"), RobotStatus::Idle);
        assert_eq!(RobotStatus::Offline.as_str(), "offline");
        assert_eq!(
            serde_json::to_string(&RobotStatus::Offline).unwrap(),
            "\"offline\""
        );
    }

    #[test]
    fn test_health_unknown_string_degrades_to_good() {
        let health: SystemHealth = serde_json::from_str("\"degraded\"").unwrap();
        assert_eq!(health, SystemHealth::Good);

        // 变体顺序调整不影响序列化名
        assert_eq!(
            serde_json::to_string(&SystemHealth::Critical).unwrap(),
            "\"critical\""
        );
    }

    #[test]
    fn test_patch_only_overwrites_present_fields() {
        let mut telemetry = Telemetry::default();
        let patch = TelemetryPatch {
            battery: Some(60.0),
            status: Some(RobotStatus::Patrolling),
            ..Default::default()
        };

        patch.apply_to(&mut telemetry);

        assert_eq!(telemetry.battery, 60.0);
        assert_eq!(telemetry.status, RobotStatus::Patrolling);
        // 未给出的字段保持默认值
        assert_eq!(telemetry.cpu_usage, 45.0);
        assert_eq!(telemetry.fps, 30.0);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut telemetry = Telemetry::default();
        let before = telemetry.clone();

        TelemetryPatch::default().apply_to(&mut telemetry);

        assert_eq!(telemetry, before);
    }
}
