use thiserror::Error;

/// 远程访问错误类型
///
/// 仅在 crate 内部流转；对外接口统一吞掉错误并
/// 以 `Option` / `bool` 表达"暂无数据"
#[derive(Error, Debug)]
pub enum ClientError {
    /// 传输层失败（连接拒绝、DNS、响应体解析等）
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 非 2xx 状态码
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// 远程访问结果类型
pub type Result<T> = std::result::Result<T, ClientError>;
