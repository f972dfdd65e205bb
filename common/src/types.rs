//! カタログの型定義
//!
//! - RawEntry / RawDetail: 上流JSON（champion.json, champion/{id}.json）の生レコード
//! - Entry / Detail: 表示用レコード（CLIとWeb(WASM)で共有）

use serde::{Deserialize, Serialize};

/// 表示用エントリ（チャンピオン1体）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub name: String,
    /// 小文字化済みのタグ（元の順序を保持）
    pub tags: Vec<String>,
    /// 先頭タグ（小文字）。タグが空ならNone
    pub main_tag: Option<String>,
    pub difficulty: u32,
    pub image: String,
    /// スキン一覧。未取得なら空
    #[serde(default)]
    pub details: Vec<Detail>,
}

impl Entry {
    /// スキンが取得済みか
    pub fn is_enriched(&self) -> bool {
        !self.details.is_empty()
    }
}

/// スキン（エントリのバリエーション）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    pub id: String,
    pub name: String,
    pub num: u32,
    pub image: String,
}

/// champion.json のトップレベル
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalog {
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// champion.json の1レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub info: RawInfo,
}

impl RawEntry {
    /// 生タグに完全一致するものがあるか（大文字小文字を区別）
    pub fn has_raw_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInfo {
    pub difficulty: u32,
}

/// champion/{id}.json のトップレベル
#[derive(Debug, Clone, Deserialize)]
pub struct RawDetailFile {
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// champion/{id}.json の data.{id}
#[derive(Debug, Clone, Deserialize)]
pub struct RawDetailOwner {
    pub skins: Vec<RawDetail>,
}

/// スキン生レコード。name が "default" なら所有エントリ名を使う
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetail {
    pub id: String,
    pub num: u32,
    pub name: String,
}
