//! 上流データの取得口
//!
//! ネイティブ(reqwest)とブラウザ(fetch)で実装を差し替える。

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;

/// URLを受け取り本文を返す取得口
///
/// 非2xxは `Error::Status`、接続失敗は `Error::Network` を返すこと。
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// 事前登録した応答
#[derive(Debug, Clone)]
pub enum Scripted {
    Body(String),
    Status(u16),
    Network(String),
}

/// メモリ上の取得口（テスト・オフラインデモ用）
///
/// 未登録のURLは404を返す。リクエストされたURLは順に記録される。
#[derive(Debug, Default)]
pub struct MemorySource {
    responses: RefCell<HashMap<String, Scripted>>,
    requests: RefCell<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.respond(url, Scripted::Body(body.into()));
        self
    }

    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.respond(url, Scripted::Status(status));
        self
    }

    /// 応答を登録（既存は上書き）
    pub fn respond(&self, url: impl Into<String>, response: Scripted) {
        self.responses.borrow_mut().insert(url.into(), response);
    }

    /// これまでにリクエストされたURL
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|u| *u == url).count()
    }
}

#[async_trait(?Send)]
impl CatalogSource for MemorySource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        let scripted = self.responses.borrow().get(url).cloned();
        match scripted {
            Some(Scripted::Body(body)) => Ok(body),
            Some(Scripted::Status(status)) => Err(Error::Status {
                url: url.to_string(),
                status,
            }),
            Some(Scripted::Network(message)) => Err(Error::Network(message)),
            None => Err(Error::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source_body() {
        let source = MemorySource::new().with_body("http://a/x.json", "{}");
        assert_eq!(source.fetch_text("http://a/x.json").await.unwrap(), "{}");
        assert_eq!(source.requests(), vec!["http://a/x.json"]);
    }

    #[tokio::test]
    async fn test_memory_source_unregistered_is_404() {
        let source = MemorySource::new();
        let err = source.fetch_text("http://a/missing.json").await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_memory_source_network_failure() {
        let source = MemorySource::new();
        source.respond("http://a/x.json", Scripted::Network("connection reset".into()));
        let err = source.fetch_text("http://a/x.json").await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(source.request_count("http://a/x.json"), 1);
    }
}
