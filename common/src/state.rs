//! 表示状態（ViewState）と読み込みの状態遷移
//!
//! 一覧に影響する読み込みは `begin_load` で世代番号付きのチケットを受け取り、
//! 完了時に `apply_catalog` / `fail_load` へ返す。世代が古い結果は破棄する。

use crate::cdn::CdnConfig;
use crate::enricher::{EnrichOutcome, EnrichTarget, EnrichTicket};
use crate::filter::{filter_by_search, TagFilter};
use crate::loader::{map_catalog, select_by_tag};
use crate::types::{Entry, RawEntry};
use std::collections::HashSet;
use thiserror::Error;

/// 読み込みの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadKind {
    /// 一覧を置換（初回読み込み・タグ選択）
    Replace(TagFilter),
    /// スクロールによる追加読み込み
    Append,
}

/// 読み込みチケット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    kind: LoadKind,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn kind(&self) -> &LoadKind {
        &self.kind
    }

    /// 取得した生レコードからこの読み込みで使うエントリを作る
    pub fn select(&self, raw: &[RawEntry], cdn: &CdnConfig) -> Vec<Entry> {
        match &self.kind {
            LoadKind::Replace(filter) => select_by_tag(raw, filter, cdn),
            LoadKind::Append => map_catalog(raw, cdn),
        }
    }
}

/// 後続の読み込みに追い越された結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stale result discarded (generation {ticket}, current {current})")]
pub struct StaleLoad {
    pub ticket: u64,
    pub current: u64,
}

/// `apply_catalog` の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 読み込み完了
    Settled { added: usize },
    /// スキン表示中のため、スキン取得後に完了する
    AwaitingDetails { added: usize, ticket: EnrichTicket },
}

/// スクロール読み込みの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Idle,
    LoadingMore,
}

/// スクロール位置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// 小数スクロール位置の誤差を吸収する既定値(px)
    pub const DEFAULT_THRESHOLD: f64 = 1.0;

    pub fn is_at_bottom(&self, threshold: f64) -> bool {
        self.scroll_top + self.viewport_height >= self.document_height - threshold
    }
}

/// ギャラリーの表示状態
#[derive(Debug, Clone)]
pub struct ViewState {
    entries: Vec<Entry>,
    loading: bool,
    search_text: String,
    /// 追加読み込みの回数。上流はページングしないため参考値
    next_page: u32,
    is_filtering: bool,
    show_all_details: bool,
    /// 読み込みの世代。`begin_load` ごとに進む
    generation: u64,
    /// 一覧の世代。`apply_catalog` で一覧が変わったときだけ進む
    list_generation: u64,
    pending: Option<LoadKind>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// 起動時の状態（空一覧、読み込み中）
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
            search_text: String::new(),
            next_page: 1,
            is_filtering: false,
            show_all_details: false,
            generation: 0,
            list_generation: 0,
            pending: None,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn is_filtering(&self) -> bool {
        self.is_filtering
    }

    pub fn show_all_details(&self) -> bool {
        self.show_all_details
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn list_generation(&self) -> u64 {
        self.list_generation
    }

    pub fn page_state(&self) -> PageState {
        if self.loading && self.pending == Some(LoadKind::Append) {
            PageState::LoadingMore
        } else {
            PageState::Idle
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// 検索文字列で絞り込んだ表示用一覧（読み込み済みのみ対象）
    pub fn filtered_entries(&self) -> Vec<&Entry> {
        filter_by_search(&self.entries, &self.search_text)
    }

    /// 一覧に影響する読み込みを開始
    pub fn begin_load(&mut self, kind: LoadKind) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.pending = Some(kind.clone());
        tracing::debug!(generation = self.generation, ?kind, "読み込み開始");
        LoadTicket {
            generation: self.generation,
            kind,
        }
    }

    fn check(&self, generation: u64) -> Result<(), StaleLoad> {
        same_generation(generation, self.generation)
    }

    fn settle(&mut self) {
        self.loading = false;
        self.pending = None;
    }

    /// 取得結果を一覧に反映
    ///
    /// 置換はタグ選択状態も更新する。追加は未読み込みのidのみ末尾に足す。
    /// スキン表示中なら読み込み中のまま `AwaitingDetails` を返す。
    pub fn apply_catalog(
        &mut self,
        ticket: &LoadTicket,
        entries: Vec<Entry>,
    ) -> Result<LoadOutcome, StaleLoad> {
        self.check(ticket.generation)?;

        let added = match &ticket.kind {
            LoadKind::Replace(filter) => {
                self.entries = entries;
                self.is_filtering = filter.is_filtering();
                self.entries.len()
            }
            LoadKind::Append => {
                let mut seen: HashSet<String> = self.entries.iter().map(|e| e.id.clone()).collect();
                let before = self.entries.len();
                self.entries
                    .extend(entries.into_iter().filter(|e| seen.insert(e.id.clone())));
                self.next_page += 1;
                let added = self.entries.len() - before;
                if added == 0 {
                    // 上流はページングしないので同じ全件が返る
                    tracing::debug!(page = self.next_page, "追加読み込みで新規エントリなし");
                }
                added
            }
        };

        // 一覧が変わったので以前のスナップショットは無効。
        // 読み込み世代も進めて同じチケットの再適用を防ぐ
        self.list_generation += 1;
        self.generation += 1;

        if self.show_all_details && !self.entries.is_empty() {
            return Ok(LoadOutcome::AwaitingDetails {
                added,
                ticket: self.snapshot(true),
            });
        }

        self.settle();
        Ok(LoadOutcome::Settled { added })
    }

    /// 読み込み失敗を反映
    ///
    /// 一覧は変更しない。置換（タグ選択）の失敗はタグ絞り込みも解除する。
    pub fn fail_load(&mut self, ticket: &LoadTicket) -> Result<(), StaleLoad> {
        self.check(ticket.generation)?;
        if matches!(ticket.kind, LoadKind::Replace(_)) {
            self.is_filtering = false;
        }
        self.settle();
        Ok(())
    }

    /// 「全スキン表示」を切り替える
    ///
    /// false→true の遷移で一覧が空でなければ取得用チケットを返す。
    pub fn set_show_all_details(&mut self, show: bool) -> Option<EnrichTicket> {
        let was = self.show_all_details;
        self.show_all_details = show;
        if show && !was && !self.entries.is_empty() {
            Some(self.snapshot(false))
        } else {
            None
        }
    }

    /// 現在の一覧に対するスキン取得チケット
    pub fn enrich_ticket(&self) -> EnrichTicket {
        self.snapshot(false)
    }

    fn snapshot(&self, settles_load: bool) -> EnrichTicket {
        let targets = self
            .entries
            .iter()
            .map(|e| EnrichTarget {
                id: e.id.clone(),
                name: e.name.clone(),
            })
            .collect();
        let settles = settles_load.then_some(self.generation);
        EnrichTicket::new(self.list_generation, targets, settles)
    }

    /// スキン取得結果を反映（取得できた分のみ）
    pub fn apply_enrichment(&mut self, outcome: EnrichOutcome) -> Result<usize, StaleLoad> {
        same_generation(outcome.generation, self.list_generation)?;

        let mut applied = 0;
        for (id, details) in outcome.enriched {
            if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
                entry.details = details;
                applied += 1;
            }
        }
        // 後続の読み込みが始まっていればそちらが完了させる
        if outcome.settles_load == Some(self.generation) {
            self.settle();
        }
        Ok(applied)
    }

    /// スクロールイベント
    ///
    /// 最下部到達・非読み込み中・スキン非表示・タグ非選択のときだけ追加読み込みを開始する。
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) -> Option<LoadTicket> {
        if !self.can_load_more(metrics) {
            return None;
        }
        Some(self.begin_load(LoadKind::Append))
    }

    /// `on_scroll` が追加読み込みを開始する条件
    pub fn can_load_more(&self, metrics: &ScrollMetrics) -> bool {
        !self.show_all_details
            && !self.is_filtering
            && !self.loading
            && metrics.is_at_bottom(ScrollMetrics::DEFAULT_THRESHOLD)
    }
}

fn same_generation(ticket: u64, current: u64) -> Result<(), StaleLoad> {
    if ticket == current {
        Ok(())
    } else {
        Err(StaleLoad { ticket, current })
    }
}
