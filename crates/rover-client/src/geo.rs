//! 位姿到地理坐标的换算
//!
//! 后端位姿是机器人本体坐标系，这里用固定比例的线性平移
//! 锚定到配置的原点上。只是占位映射，不是地理配准算法。

use rover_types::{GeoPoint, Location, Pose};

/// 本体坐标每单位对应的经纬度增量
pub const POSE_TO_DEGREES: f64 = 0.0001;

/// 将位姿换算为地理位置
///
/// lat = origin.lat + x * 0.0001，lng = origin.lng + y * 0.0001，
/// 航向取 yaw，速度由调用方从响应体中取出传入
pub fn pose_to_location(pose: &Pose, origin: GeoPoint, velocity: f64) -> Location {
    Location::new(
        origin.lat + pose.x * POSE_TO_DEGREES,
        origin.lng + pose.y * POSE_TO_DEGREES,
    )
    .with_heading(pose.yaw)
    .with_speed(velocity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_translation_anchored_to_origin() {
        let pose = Pose {
            x: 10.0,
            y: 20.0,
            yaw: 0.5,
            ..Default::default()
        };
        let origin = GeoPoint::new(12.9134, 77.5204);

        let location = pose_to_location(&pose, origin, 0.0);

        assert_eq!(location.lat, 12.9134 + 10.0 * 0.0001);
        assert_eq!(location.lng, 77.5204 + 20.0 * 0.0001);
        assert_eq!(location.heading, Some(0.5));
    }

    #[test]
    fn test_zero_pose_maps_to_origin() {
        let origin = GeoPoint::new(12.9134, 77.5204);
        let location = pose_to_location(&Pose::default(), origin, 1.5);

        assert_eq!(location.point(), origin);
        assert_eq!(location.speed, Some(1.5));
    }
}
