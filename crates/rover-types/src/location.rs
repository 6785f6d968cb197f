use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 地理坐标点（仅经纬度）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// 机器人位置
///
/// 一旦写入轨迹历史即不可变
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// 纬度
    pub lat: f64,

    /// 经度
    pub lng: f64,

    /// 航向角（弧度，来自位姿 yaw）
    pub heading: Option<f64>,

    /// 速度
    pub speed: Option<f64>,

    /// 采样时间
    pub timestamp: DateTime<Utc>,
}

impl Location {
    /// 以当前时间创建位置
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            heading: None,
            speed: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// 取出经纬度
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

impl From<GeoPoint> for Location {
    fn from(point: GeoPoint) -> Self {
        Location::new(point.lat, point.lng)
    }
}
