//! 无界面的仪表盘进程
//!
//! 表现层的替身：加载配置、拉起同步调度器，
//! 周期性把视图状态快照打到日志里，ctrl-c 时干净收尾。

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rover_client::RobotClient;
use rover_config::DashboardConfig;
use rover_store::DashboardStore;
use rover_sync::SyncScheduler;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rover Dashboard Sync Core")]
struct Args {
    /// 覆盖后端地址（默认取 ROVER_BASE_URL）
    #[arg(long)]
    base_url: Option<String>,

    /// 覆盖数据同步间隔（毫秒）
    #[arg(long)]
    interval_ms: Option<u64>,

    /// 快照日志间隔（秒）
    #[arg(long, default_value_t = 5)]
    snapshot_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut config = DashboardConfig::from_env()?;
    let stream_url_from_env = std::env::var("ROVER_STREAM_URL").is_ok();
    apply_overrides(
        &mut config,
        args.base_url,
        args.interval_ms,
        stream_url_from_env,
    );
    config.validate()?;

    info!(
        base_url = %config.base_url,
        stream_url = %config.stream_url,
        update_interval_ms = config.update_interval_ms,
        "Rover dashboard starting"
    );

    let client = Arc::new(RobotClient::new(&config));
    let store = DashboardStore::new(&config);
    let scheduler = SyncScheduler::new(client, store.clone(), &config);
    scheduler.start().await;

    let mut snapshot_ticker = tokio::time::interval(Duration::from_secs(args.snapshot_secs));
    loop {
        tokio::select! {
            _ = snapshot_ticker.tick() => {
                let snapshot = store.snapshot().await;
                if snapshot.connected {
                    info!(
                        status = snapshot.telemetry.status.as_str(),
                        battery = snapshot.telemetry.battery,
                        cpu = snapshot.telemetry.cpu_usage,
                        fps = snapshot.telemetry.fps,
                        objects = snapshot.telemetry.objects_detected,
                        lat = snapshot.location.lat,
                        lng = snapshot.location.lng,
                        path_len = snapshot.path_history.len(),
                        "Rover online"
                    );
                } else {
                    // 界面上常驻横幅的日志版
                    warn!(
                        base_url = %config.base_url,
                        "Backend offline - attempting to reconnect"
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown requested");
                break;
            }
        }
    }

    scheduler.stop().await;
    info!("Rover dashboard stopped");
    Ok(())
}

/// 把命令行覆盖项合入配置
///
/// 覆盖 base_url 时只在视频流地址没有被显式配置的情况下
/// 才跟着重新推导，显式给出的 ROVER_STREAM_URL 保持不动
fn apply_overrides(
    config: &mut DashboardConfig,
    base_url: Option<String>,
    interval_ms: Option<u64>,
    stream_url_from_env: bool,
) {
    if let Some(base_url) = base_url {
        if !stream_url_from_env {
            config.stream_url = format!("{}/video_feed", base_url.trim_end_matches('/'));
        }
        config.base_url = base_url;
    }
    if let Some(interval_ms) = interval_ms {
        config.update_interval_ms = interval_ms;
    }
}
