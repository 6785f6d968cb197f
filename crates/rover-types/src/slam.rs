use serde::{Deserialize, Serialize};

/// 机器人本体坐标系位姿
///
/// 对本系统而言是不透明数据，仅做透传和简单平移换算
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Pose {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    #[serde(default)]
    pub roll: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub yaw: f64,
}

/// 地图点
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MapPoint {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// SLAM 路标
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Landmark {
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub confidence: f64,
}

/// SLAM 数据（地图点、当前位姿、路标）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SlamData {
    pub map: Vec<MapPoint>,
    pub pose: Pose,
    pub landmarks: Vec<Landmark>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_defaults_on_partial_body() {
        // 后端只给出部分字段时其余补零
        let pose: Pose = serde_json::from_str(r#"{"x": 1.5, "yaw": 0.3}"#).unwrap();
        assert_eq!(pose.x, 1.5);
        assert_eq!(pose.yaw, 0.3);
        assert_eq!(pose.y, 0.0);
        assert_eq!(pose.roll, 0.0);
    }
}
