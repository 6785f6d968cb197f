use serde::{Deserialize, Serialize};

/// 语音控制状态
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceStatus {
    /// 是否正在拾音
    pub is_listening: bool,

    /// 最近一条识别到的指令
    pub last_command: String,

    /// 当前识别语言
    pub language: String,

    /// 识别置信度（0-1）
    pub confidence: f64,
}

impl Default for VoiceStatus {
    fn default() -> Self {
        Self {
            is_listening: false,
            last_command: String::new(),
            language: "en".to_string(),
            confidence: 0.0,
        }
    }
}
