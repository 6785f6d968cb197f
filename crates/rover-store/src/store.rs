use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use rover_config::DashboardConfig;
use rover_types::{Location, RobotStatus, Telemetry, TelemetryPatch};

use crate::history::PathHistory;

/// 仪表盘视图状态
///
/// 读取方只能拿到更新边界上的一致快照，不会观测到写了一半的状态
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardState {
    /// 后端是否可达（连通性的唯一事实来源）
    pub connected: bool,

    /// 遥测快照
    pub telemetry: Telemetry,

    /// 当前位置
    pub location: Location,

    /// 轨迹历史（最多 50 条）
    pub path_history: PathHistory,

    /// 视频流地址
    pub stream_url: String,

    /// 最近一次状态更新时间
    pub last_update: Option<DateTime<Utc>>,
}

/// 共享视图状态仓库
///
/// 所有可变领域状态的唯一持有者。句柄可克隆、可跨任务传递，
/// 所有变更都经过具名动作，内部用读写锁做串行化。
#[derive(Clone)]
pub struct DashboardStore {
    inner: Arc<RwLock<DashboardState>>,
}

impl DashboardStore {
    /// 按配置创建仓库并填入初始状态
    ///
    /// 初始状态：未连接、遥测为展示默认值、位置落在锚点、轨迹为空
    pub fn new(config: &DashboardConfig) -> Self {
        let state = DashboardState {
            connected: false,
            telemetry: Telemetry::default(),
            location: config.origin.into(),
            path_history: PathHistory::new(),
            stream_url: config.stream_url.clone(),
            last_update: None,
        };
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// 当前状态的一致快照
    pub async fn snapshot(&self) -> DashboardState {
        self.inner.read().await.clone()
    }

    /// 整体覆盖遥测并标记在线
    ///
    /// 同步成功的写入路径：遥测整体替换、连通性置真、打时间戳
    pub async fn update_telemetry(&self, telemetry: Telemetry) {
        let mut state = self.inner.write().await;
        state.telemetry = telemetry;
        state.connected = true;
        state.last_update = Some(Utc::now());
    }

    /// 部分更新遥测
    ///
    /// 只覆盖补丁里给出的字段，不触碰连通性
    pub async fn patch_telemetry(&self, patch: TelemetryPatch) {
        let mut state = self.inner.write().await;
        patch.apply_to(&mut state.telemetry);
        state.last_update = Some(Utc::now());
    }

    /// 替换当前位置并写入轨迹历史
    ///
    /// 轨迹满 50 条时淘汰最老的
    pub async fn update_location(&self, location: Location) {
        let mut state = self.inner.write().await;
        state.path_history.push(location.clone());
        state.location = location;
        state.last_update = Some(Utc::now());
    }

    /// 标记离线
    ///
    /// 连通性置假、遥测状态降级为 Offline，其余遥测字段保持原值
    pub async fn mark_offline(&self) {
        let mut state = self.inner.write().await;
        if state.connected || state.telemetry.status != RobotStatus::Offline {
            debug!("Store marked offline");
        }
        state.connected = false;
        state.telemetry.status = RobotStatus::Offline;
        state.last_update = Some(Utc::now());
    }

    /// 写入连通性检查结果
    pub async fn set_connected(&self, connected: bool) {
        let mut state = self.inner.write().await;
        state.connected = connected;
        state.last_update = Some(Utc::now());
    }

    /// 更新视频流地址
    pub async fn set_stream_url(&self, url: String) {
        let mut state = self.inner.write().await;
        state.stream_url = url;
    }
}
