use anyhow::{anyhow, Result};
use config::{Config, Environment};
use serde::Deserialize;

use rover_types::GeoPoint;

/// 后端默认地址（局域网内的树莓派）
pub const DEFAULT_BASE_URL: &str = "http://192.168.0.101:5000";

/// 数据同步默认间隔（毫秒）
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 2000;

/// 连通性检查间隔（毫秒，固定值，不可配置）
pub const CONNECTIVITY_CHECK_INTERVAL_MS: u64 = 10_000;

/// 位姿换算的锚点坐标（Rajarajeshwari Nagar）
pub const DEFAULT_ORIGIN: GeoPoint = GeoPoint::new(12.9134, 77.5204);

/// 运行时配置
///
/// 启动时从 `ROVER_*` 环境变量加载，之后不可变
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// 后端 API 地址
    pub base_url: String,

    /// 视频流地址（表现层直接消费）
    pub stream_url: String,

    /// 数据同步间隔（毫秒）
    pub update_interval_ms: u64,

    /// 位姿换算锚点
    pub origin: GeoPoint,
}

/// 环境变量的反序列化中间形态
#[derive(Debug, Deserialize)]
struct RawConfig {
    base_url: String,
    stream_url: Option<String>,
    update_interval_ms: u64,
    origin_lat: f64,
    origin_lng: f64,
}

impl DashboardConfig {
    /// 从环境变量加载配置
    ///
    /// 支持的变量：`ROVER_BASE_URL`、`ROVER_STREAM_URL`、
    /// `ROVER_UPDATE_INTERVAL_MS`、`ROVER_ORIGIN_LAT`、`ROVER_ORIGIN_LNG`，
    /// 缺省时使用默认值
    pub fn from_env() -> Result<Self> {
        let config = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("update_interval_ms", DEFAULT_UPDATE_INTERVAL_MS as i64)?
            .set_default("origin_lat", DEFAULT_ORIGIN.lat)?
            .set_default("origin_lng", DEFAULT_ORIGIN.lng)?
            .add_source(Environment::with_prefix("ROVER").try_parsing(true))
            .build()?;

        let raw: RawConfig = config.try_deserialize()?;
        let config = Self::from_raw(raw);
        config.validate()?;
        Ok(config)
    }

    fn from_raw(raw: RawConfig) -> Self {
        // 未显式给出视频流地址时从 base_url 推导
        let stream_url = raw
            .stream_url
            .unwrap_or_else(|| format!("{}/video_feed", raw.base_url.trim_end_matches('/')));

        Self {
            base_url: raw.base_url,
            stream_url,
            update_interval_ms: raw.update_interval_ms,
            origin: GeoPoint::new(raw.origin_lat, raw.origin_lng),
        }
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(anyhow!("base_url must not be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(anyhow!("base_url must be an http(s) URL: {}", self.base_url));
        }
        if self.update_interval_ms == 0 {
            return Err(anyhow!("update_interval_ms must be greater than 0"));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            stream_url: format!("{}/video_feed", DEFAULT_BASE_URL),
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            origin: DEFAULT_ORIGIN,
        }
    }
}
