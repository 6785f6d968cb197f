use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{info, warn};

use rover_client::RobotClient;
use rover_config::{DashboardConfig, CONNECTIVITY_CHECK_INTERVAL_MS};
use rover_store::DashboardStore;
use rover_types::{GeoPoint, Location};

/// 同步调度器
///
/// 两个相互独立的周期任务驱动视图状态仓库：
/// 快的数据同步循环（默认 2 秒）和慢的连通性检查循环（固定 10 秒）。
/// 仓库的所有写入都来自这两个循环（单写者），
/// 定时器各自自由运行，不保证跨拍顺序。
pub struct SyncScheduler {
    /// 后端客户端
    client: Arc<RobotClient>,

    /// 视图状态仓库
    store: DashboardStore,

    /// 数据同步间隔
    update_interval: Duration,

    /// 轨迹种子锚点
    origin: GeoPoint,

    /// 是否正在运行
    ///
    /// 每个循环在跨过网络调用之后、写仓库之前都会重读这个标志，
    /// 停止后迟到的响应不可能再改动仓库
    running: Arc<RwLock<bool>>,

    /// 后台任务句柄，停止时逐个取消
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl SyncScheduler {
    pub fn new(client: Arc<RobotClient>, store: DashboardStore, config: &DashboardConfig) -> Self {
        Self {
            client,
            store,
            update_interval: Duration::from_millis(config.update_interval_ms),
            origin: config.origin,
            running: Arc::new(RwLock::new(false)),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// 启动调度器
    ///
    /// 先用锚点播种轨迹历史并做一次连通性检查，
    /// 然后拉起数据同步和连通性检查两个循环
    pub async fn start(&self) {
        let mut running = self.running.write().await;
        if *running {
            warn!("Sync scheduler is already running");
            return;
        }
        *running = true;
        drop(running);

        // 首拍之前：轨迹播种 + 初始连通性检查
        self.store.update_location(Location::from(self.origin)).await;
        if self.client.check_connection().await {
            self.store.set_connected(true).await;
        } else {
            self.store.mark_offline().await;
        }

        info!(
            update_interval = ?self.update_interval,
            connectivity_interval_ms = CONNECTIVITY_CHECK_INTERVAL_MS,
            "Sync scheduler started"
        );

        // 数据同步循环
        let client = self.client.clone();
        let store = self.store.clone();
        let running = self.running.clone();
        let update_interval = self.update_interval;

        let data_task = tokio::spawn(async move {
            let mut ticker = interval(update_interval);
            // 首拍立即完成，启动阶段已单独处理，这里吞掉
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if !*running.read().await {
                    info!("Data sync loop stopped");
                    break;
                }
                data_sync_tick(&client, &store, &running).await;
            }
        });

        // 连通性检查循环
        let client = self.client.clone();
        let store = self.store.clone();
        let running = self.running.clone();

        let connectivity_task = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_millis(CONNECTIVITY_CHECK_INTERVAL_MS));
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if !*running.read().await {
                    info!("Connectivity check loop stopped");
                    break;
                }
                connectivity_tick(&client, &store, &running).await;
            }
        });

        let mut tasks = self.tasks.lock().await;
        tasks.push(data_task);
        tasks.push(connectivity_task);
    }

    /// 停止调度器
    ///
    /// 幂等；取消两个循环，已发出的请求不会再写入仓库
    pub async fn stop(&self) {
        let mut running = self.running.write().await;
        if !*running {
            return;
        }
        *running = false;
        drop(running);

        let mut tasks = self.tasks.lock().await;
        for task in tasks.drain(..) {
            task.abort();
        }

        info!("Sync scheduler stopped");
    }

    /// 调度器是否在运行
    pub async fn is_running(&self) -> bool {
        *self.running.read().await
    }
}

/// 数据同步单拍
///
/// 顺序执行：连通性检查 → 遥测 → 位置。检查失败则本拍提前结束
/// 并把仓库置为离线；单个数据源失败只影响该数据源，不回滚前面的写入。
async fn data_sync_tick(client: &RobotClient, store: &DashboardStore, running: &RwLock<bool>) {
    let connected = client.check_connection().await;
    if !*running.read().await {
        return;
    }
    if !connected {
        store.mark_offline().await;
        return;
    }

    if let Some(telemetry) = client.get_telemetry().await {
        if !*running.read().await {
            return;
        }
        store.update_telemetry(telemetry).await;
    }

    if let Some(location) = client.get_location().await {
        if !*running.read().await {
            return;
        }
        store.update_location(location).await;
    }
}

/// 连通性检查单拍
///
/// 独立于数据同步循环，只把检查结果写入仓库
async fn connectivity_tick(client: &RobotClient, store: &DashboardStore, running: &RwLock<bool>) {
    let connected = client.check_connection().await;
    if !*running.read().await {
        return;
    }
    store.set_connected(connected).await;
}
