//! スキン取得（Detail Enricher）
//!
//! 読み込み済みエントリのスナップショットに対して champion/{id}.json を取得し、
//! スキン一覧を作る。同時実行数と失敗時の扱いは `EnrichOptions` で決める。

use crate::cdn::CdnConfig;
use crate::error::{Error, Result};
use crate::source::CatalogSource;
use crate::types::{Detail, RawDetail, RawDetailFile, RawDetailOwner};
use futures::stream::{self, StreamExt};

/// 上流でベーススキンを表す名前
pub const DEFAULT_DETAIL_NAME: &str = "default";

/// 失敗時の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// 最初の失敗で残りを打ち切る
    #[default]
    StopOnFirstFailure,
    /// 失敗を記録して続行
    ContinueOnFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichOptions {
    /// 同時リクエスト数（1なら逐次）
    pub concurrency: usize,
    pub policy: FailurePolicy,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            concurrency: 1,
            policy: FailurePolicy::StopOnFirstFailure,
        }
    }
}

/// 取得対象（id と所有エントリ名）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichTarget {
    pub id: String,
    pub name: String,
}

/// 一覧のスナップショット
///
/// `generation` が現在の一覧と一致しなければ結果は破棄される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichTicket {
    generation: u64,
    targets: Vec<EnrichTarget>,
    /// 適用時に解除する読み込みの世代
    settles_load: Option<u64>,
}

impl EnrichTicket {
    pub(crate) fn new(
        generation: u64,
        targets: Vec<EnrichTarget>,
        settles_load: Option<u64>,
    ) -> Self {
        Self {
            generation,
            targets,
            settles_load,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn targets(&self) -> &[EnrichTarget] {
        &self.targets
    }

    /// 適用時に読み込み中フラグを解除するか
    pub fn settles_load(&self) -> bool {
        self.settles_load.is_some()
    }
}

/// 取得結果
#[derive(Debug)]
pub struct EnrichOutcome {
    pub generation: u64,
    /// 読み込みをまとめて完了させる場合、その読み込みの世代
    pub settles_load: Option<u64>,
    /// 取得順の (エントリid, スキン一覧)
    pub enriched: Vec<(String, Vec<Detail>)>,
    pub failures: Vec<(String, Error)>,
    /// 打ち切りで未取得のまま残った件数
    pub skipped: usize,
}

impl EnrichOutcome {
    pub(crate) fn for_ticket(ticket: &EnrichTicket) -> Self {
        Self {
            generation: ticket.generation,
            settles_load: ticket.settles_load,
            enriched: Vec::new(),
            failures: Vec::new(),
            skipped: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.skipped == 0
    }
}

fn map_detail(raw: RawDetail, entry_id: &str, entry_name: &str, cdn: &CdnConfig) -> Detail {
    let name = if raw.name == DEFAULT_DETAIL_NAME {
        entry_name.to_string()
    } else {
        raw.name
    };
    Detail {
        image: cdn.image_url(entry_id, raw.num),
        id: raw.id,
        name,
        num: raw.num,
    }
}

/// champion/{id}.json 本文をパースしてスキン一覧にする
pub fn parse_details(
    body: &str,
    entry_id: &str,
    entry_name: &str,
    cdn: &CdnConfig,
) -> Result<Vec<Detail>> {
    let mut file: RawDetailFile = serde_json::from_str(body)?;
    let owner = file
        .data
        .remove(entry_id)
        .ok_or_else(|| Error::Parse(format!("data.{} が見つかりません", entry_id)))?;
    let owner: RawDetailOwner = serde_json::from_value(owner)?;
    Ok(owner
        .skins
        .into_iter()
        .map(|skin| map_detail(skin, entry_id, entry_name, cdn))
        .collect())
}

/// 1エントリ分のスキンを取得
pub async fn fetch_details<S>(source: &S, cdn: &CdnConfig, target: &EnrichTarget) -> Result<Vec<Detail>>
where
    S: CatalogSource + ?Sized,
{
    let body = source.fetch_text(&cdn.detail_url(&target.id)).await?;
    parse_details(&body, &target.id, &target.name, cdn)
}

/// スナップショット内の全エントリのスキンを取得
///
/// 結果は対象の順序で返る。`on_progress(完了数, 総数)` は1件ごとに呼ばれる。
pub async fn enrich<S, F>(
    source: &S,
    cdn: &CdnConfig,
    ticket: &EnrichTicket,
    options: &EnrichOptions,
    mut on_progress: F,
) -> EnrichOutcome
where
    S: CatalogSource + ?Sized,
    F: FnMut(usize, usize),
{
    let total = ticket.targets.len();
    let mut outcome = EnrichOutcome::for_ticket(ticket);
    let mut results = stream::iter(ticket.targets.iter())
        .map(|target| async move { (target, fetch_details(source, cdn, target).await) })
        .buffered(options.concurrency.max(1));

    let mut done = 0;
    while let Some((target, result)) = results.next().await {
        done += 1;
        on_progress(done, total);
        match result {
            Ok(details) => outcome.enriched.push((target.id.clone(), details)),
            Err(e) => {
                tracing::warn!(entry = %target.id, error = %e, "スキン取得に失敗");
                outcome.failures.push((target.id.clone(), e));
                if options.policy == FailurePolicy::StopOnFirstFailure {
                    break;
                }
            }
        }
    }
    outcome.skipped = total - done;

    tracing::debug!(
        generation = outcome.generation,
        enriched = outcome.enriched.len(),
        failed = outcome.failures.len(),
        skipped = outcome.skipped,
        "スキン取得完了"
    );
    outcome
}
