use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};

use rover_config::DashboardConfig;
use rover_types::{GeoPoint, Location, SlamData, SystemStatus, Telemetry, VoiceStatus};

use crate::error::{ClientError, Result};
use crate::geo::pose_to_location;
use crate::wire::{SlamMapBody, SystemStatusBody, VoiceStatusBody};

/// 连通性检查超时（毫秒）
pub const CONNECT_TIMEOUT_MS: u64 = 5000;

const SYSTEM_STATUS_PATH: &str = "/api/system_status";
const SLAM_MAP_PATH: &str = "/api/slam_map";
const VOICE_STATUS_PATH: &str = "/api/voice_status";
const NAVIGATION_PATH: &str = "/api/navigation";
const EMERGENCY_STOP_PATH: &str = "/api/emergency_stop";

/// 机器人后端客户端
///
/// 每个后端能力对应一个方法。对外接口永不抛错：网络失败、
/// 非 2xx、超时、响应体损坏一律记日志并归一为"暂无数据"，
/// 调用方不需要做任何错误处理。
///
/// 客户端自身不缓存连通性状态，连通性唯一记录在视图状态仓库里。
pub struct RobotClient {
    http: Client,
    base_url: String,
    stream_url: String,
    origin: GeoPoint,
}

impl RobotClient {
    /// 按配置创建客户端
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            stream_url: config.stream_url.clone(),
            origin: config.origin,
        }
    }

    /// 视频流地址（表现层直接消费，不经过本客户端）
    pub fn stream_url(&self) -> &str {
        &self.stream_url
    }

    /// 位姿换算锚点
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// 检查后端是否可达
    ///
    /// 带 5 秒超时；仅 2xx 视为可达，任何网络错误、
    /// 非 2xx 状态或超时都返回 false
    pub async fn check_connection(&self) -> bool {
        let url = format!("{}{}", self.base_url, SYSTEM_STATUS_PATH);
        let request = self.http.get(&url).send();

        match tokio::time::timeout(Duration::from_millis(CONNECT_TIMEOUT_MS), request).await {
            Ok(Ok(response)) if response.status().is_success() => {
                debug!("Backend reachable");
                true
            }
            Ok(Ok(response)) => {
                warn!(status = %response.status(), "Backend returned non-success status");
                false
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Backend connection failed");
                false
            }
            Err(_) => {
                warn!(
                    timeout_ms = CONNECT_TIMEOUT_MS,
                    "Backend connection check timed out"
                );
                false
            }
        }
    }

    /// 获取遥测数据
    pub async fn get_telemetry(&self) -> Option<Telemetry> {
        match self.get_json::<SystemStatusBody>(SYSTEM_STATUS_PATH).await {
            Ok(body) => Some(body.into()),
            Err(e) => {
                warn!(endpoint = SYSTEM_STATUS_PATH, error = %e, "Telemetry unavailable");
                None
            }
        }
    }

    /// 获取系统整体状态
    pub async fn get_system_status(&self) -> Option<SystemStatus> {
        match self.get_json::<SystemStatusBody>(SYSTEM_STATUS_PATH).await {
            Ok(body) => Some(body.into()),
            Err(e) => {
                warn!(endpoint = SYSTEM_STATUS_PATH, error = %e, "System status unavailable");
                None
            }
        }
    }

    /// 获取机器人当前位置
    ///
    /// 从 SLAM 位姿换算为地理坐标；位姿缺失时落在锚点上
    pub async fn get_location(&self) -> Option<Location> {
        match self.get_json::<SlamMapBody>(SLAM_MAP_PATH).await {
            Ok(body) => {
                let pose = body.current_pose.unwrap_or_default();
                Some(pose_to_location(&pose, self.origin, body.velocity))
            }
            Err(e) => {
                warn!(endpoint = SLAM_MAP_PATH, error = %e, "Location unavailable");
                None
            }
        }
    }

    /// 获取 SLAM 数据（地图点、位姿、路标）
    pub async fn get_slam_data(&self) -> Option<SlamData> {
        match self.get_json::<SlamMapBody>(SLAM_MAP_PATH).await {
            Ok(body) => Some(body.into()),
            Err(e) => {
                warn!(endpoint = SLAM_MAP_PATH, error = %e, "SLAM data unavailable");
                None
            }
        }
    }

    /// 获取语音控制状态
    pub async fn get_voice_status(&self) -> Option<VoiceStatus> {
        match self.get_json::<VoiceStatusBody>(VOICE_STATUS_PATH).await {
            Ok(body) => Some(body.into()),
            Err(e) => {
                warn!(endpoint = VOICE_STATUS_PATH, error = %e, "Voice status unavailable");
                None
            }
        }
    }

    /// 下发导航指令
    ///
    /// 返回 true 当且仅当后端响应 2xx
    pub async fn send_navigation_command(
        &self,
        command: &str,
        parameters: Option<serde_json::Value>,
    ) -> bool {
        let body = json!({
            "command": command,
            "parameters": parameters.unwrap_or_else(|| json!({})),
        });

        match self.post_json(NAVIGATION_PATH, Some(body)).await {
            Ok(()) => {
                debug!(command = %command, "Navigation command accepted");
                true
            }
            Err(e) => {
                warn!(command = %command, error = %e, "Navigation command failed");
                false
            }
        }
    }

    /// 急停
    pub async fn emergency_stop(&self) -> bool {
        match self.post_json(EMERGENCY_STOP_PATH, None).await {
            Ok(()) => {
                debug!("Emergency stop accepted");
                true
            }
            Err(e) => {
                warn!(error = %e, "Emergency stop failed");
                false
            }
        }
    }

    // ========== 内部可失败层 ==========

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json::<T>().await?)
    }

    async fn post_json(&self, path: &str, body: Option<serde_json::Value>) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client() -> RobotClient {
        // 端口 1 无人监听，连接立即被拒绝
        let config = DashboardConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            stream_url: "http://127.0.0.1:1/video_feed".to_string(),
            ..Default::default()
        };
        RobotClient::new(&config)
    }

    #[tokio::test]
    async fn test_check_connection_unreachable_is_false() {
        let client = unreachable_client();
        assert!(!client.check_connection().await);
    }

    #[tokio::test]
    async fn test_fetches_unreachable_are_none() {
        let client = unreachable_client();
        assert!(client.get_telemetry().await.is_none());
        assert!(client.get_location().await.is_none());
        assert!(client.get_slam_data().await.is_none());
        assert!(client.get_voice_status().await.is_none());
        assert!(client.get_system_status().await.is_none());
    }

    #[tokio::test]
    async fn test_emergency_stop_unreachable_is_false() {
        // 后端不可达时返回 false，不向调用方抛错
        let client = unreachable_client();
        assert!(!client.emergency_stop().await);
    }

    #[tokio::test]
    async fn test_navigation_command_unreachable_is_false() {
        let client = unreachable_client();
        assert!(!client.send_navigation_command("patrol", None).await);
    }

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let config = DashboardConfig {
            base_url: "http://10.0.0.7:5000/".to_string(),
            ..Default::default()
        };
        let client = RobotClient::new(&config);
        assert_eq!(client.base_url, "http://10.0.0.7:5000");
    }
}
