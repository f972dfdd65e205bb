//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {url}")]
    Status { url: String, status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// 通信失敗（fetch拒否・非2xx）か
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Status { .. })
    }

    /// パース失敗（不正JSON・必須フィールド欠落）か
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Json(_) | Error::Parse(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
