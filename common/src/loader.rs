//! カタログ読み込み
//!
//! champion.json を取得し、生レコードを表示用 Entry に変換する。

use crate::cdn::CdnConfig;
use crate::error::{Error, Result};
use crate::filter::TagFilter;
use crate::source::CatalogSource;
use crate::types::{Entry, RawCatalog, RawEntry};

/// champion.json 本文をパース
///
/// `data` オブジェクトの値を出現順に返す。
pub fn parse_catalog(body: &str) -> Result<Vec<RawEntry>> {
    let catalog: RawCatalog = serde_json::from_str(body)?;
    catalog
        .data
        .into_iter()
        .map(|(key, value)| {
            serde_json::from_value(value)
                .map_err(|e| Error::Parse(format!("data.{}: {}", key, e)))
        })
        .collect()
}

/// 生レコード → 表示用 Entry（スキンは空）
pub fn map_entry(raw: &RawEntry, cdn: &CdnConfig) -> Entry {
    Entry {
        id: raw.id.clone(),
        name: raw.name.clone(),
        tags: raw.tags.iter().map(|tag| tag.to_lowercase()).collect(),
        main_tag: raw.tags.first().map(|tag| tag.to_lowercase()),
        difficulty: raw.info.difficulty,
        image: cdn.image_url(&raw.id, 0),
        details: Vec::new(),
    }
}

pub fn map_catalog(raw: &[RawEntry], cdn: &CdnConfig) -> Vec<Entry> {
    raw.iter().map(|r| map_entry(r, cdn)).collect()
}

/// タグで選択して変換
///
/// `All` は全件。それ以外は生タグの完全一致（"Mage" 等、大文字小文字を区別）。
pub fn select_by_tag(raw: &[RawEntry], filter: &TagFilter, cdn: &CdnConfig) -> Vec<Entry> {
    match filter {
        TagFilter::All => map_catalog(raw, cdn),
        TagFilter::Tag(tag) => raw
            .iter()
            .filter(|r| r.has_raw_tag(tag))
            .map(|r| map_entry(r, cdn))
            .collect(),
    }
}

/// 全件カタログを取得
pub async fn fetch_catalog<S>(source: &S, cdn: &CdnConfig) -> Result<Vec<RawEntry>>
where
    S: CatalogSource + ?Sized,
{
    let url = cdn.catalog_url();
    tracing::debug!(%url, "カタログ取得");
    let body = source.fetch_text(&url).await?;
    parse_catalog(&body)
}
