//! ギャラリー操作
//!
//! ViewState と取得口をまとめ、ユーザー操作（初回読み込み・タグ選択・スクロール・
//! スキン表示切替）を1操作ずつ実行する。失敗はここで捕捉してログに残し、
//! 呼び出し側には `OperationReport` として返す。

use crate::cdn::CdnConfig;
use crate::enricher::{enrich, EnrichOptions, EnrichTicket};
use crate::error::Error;
use crate::filter::TagFilter;
use crate::loader::fetch_catalog;
use crate::source::CatalogSource;
use crate::state::{LoadKind, LoadOutcome, LoadTicket, ScrollMetrics, ViewState};
use crate::types::Entry;

/// 1操作の結果
#[derive(Debug, Default)]
pub struct OperationReport {
    /// 取得を開始したか（スクロール条件を満たさない等で false）
    pub triggered: bool,
    /// 一覧に加わった件数
    pub added: usize,
    /// スキンを反映したエントリ数
    pub enriched: usize,
    pub errors: Vec<Error>,
    /// 後続の操作に追い越され破棄された
    pub stale: bool,
}

impl OperationReport {
    fn skipped() -> Self {
        Self::default()
    }

    fn started() -> Self {
        Self {
            triggered: true,
            ..Self::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && !self.stale
    }
}

/// カタログビューア本体
pub struct Gallery<S> {
    source: S,
    cdn: CdnConfig,
    options: EnrichOptions,
    state: ViewState,
}

impl<S: CatalogSource> Gallery<S> {
    pub fn new(source: S, cdn: CdnConfig) -> Self {
        Self {
            source,
            cdn,
            options: EnrichOptions::default(),
            state: ViewState::new(),
        }
    }

    pub fn with_enrich_options(mut self, options: EnrichOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cdn(&self) -> &CdnConfig {
        &self.cdn
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text);
    }

    /// 検索で絞り込んだ表示用一覧
    pub fn visible_entries(&self) -> Vec<&Entry> {
        self.state.filtered_entries()
    }

    /// 初回読み込み（全件で置換）
    pub async fn load_initial(&mut self) -> OperationReport {
        let ticket = self.state.begin_load(LoadKind::Replace(TagFilter::All));
        self.run_load(ticket).await
    }

    /// タグ選択。"All" なら全件に戻す
    pub async fn filter_by_tag(&mut self, filter: TagFilter) -> OperationReport {
        let ticket = self.state.begin_load(LoadKind::Replace(filter));
        self.run_load(ticket).await
    }

    /// スクロールイベント。条件を満たせば追加読み込みする
    pub async fn on_scroll(&mut self, metrics: &ScrollMetrics) -> OperationReport {
        match self.state.on_scroll(metrics) {
            Some(ticket) => self.run_load(ticket).await,
            None => OperationReport::skipped(),
        }
    }

    /// 「全スキン表示」の切替。オンにした時点の一覧のスキンを取得する
    pub async fn set_show_all_details(&mut self, show: bool) -> OperationReport {
        self.set_show_all_details_with(show, |_, _| {}).await
    }

    /// 進捗コールバック付きの `set_show_all_details`
    pub async fn set_show_all_details_with<F>(&mut self, show: bool, on_progress: F) -> OperationReport
    where
        F: FnMut(usize, usize),
    {
        match self.state.set_show_all_details(show) {
            Some(ticket) => {
                let mut report = OperationReport::started();
                self.run_enrichment(&ticket, &mut report, on_progress).await;
                report
            }
            None => OperationReport::skipped(),
        }
    }

    /// 現在の一覧のスキンを取得（進捗コールバック付き）
    pub async fn enrich_all<F>(&mut self, on_progress: F) -> OperationReport
    where
        F: FnMut(usize, usize),
    {
        let ticket = self.state.enrich_ticket();
        let mut report = OperationReport::started();
        self.run_enrichment(&ticket, &mut report, on_progress).await;
        report
    }

    async fn run_load(&mut self, ticket: LoadTicket) -> OperationReport {
        let mut report = OperationReport::started();

        let raw = match fetch_catalog(&self.source, &self.cdn).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, kind = ?ticket.kind(), "カタログ取得に失敗");
                if let Err(stale) = self.state.fail_load(&ticket) {
                    tracing::debug!(%stale, "失敗結果を破棄");
                    report.stale = true;
                }
                report.errors.push(e);
                return report;
            }
        };

        let entries = ticket.select(&raw, &self.cdn);
        match self.state.apply_catalog(&ticket, entries) {
            Ok(LoadOutcome::Settled { added }) => report.added = added,
            Ok(LoadOutcome::AwaitingDetails { added, ticket }) => {
                report.added = added;
                self.run_enrichment(&ticket, &mut report, |_, _| {}).await;
            }
            Err(stale) => {
                tracing::debug!(%stale, "取得結果を破棄");
                report.stale = true;
            }
        }

        tracing::info!(
            kind = ?ticket.kind(),
            added = report.added,
            total = self.state.entries().len(),
            "読み込み完了"
        );
        report
    }

    async fn run_enrichment<F>(
        &mut self,
        ticket: &EnrichTicket,
        report: &mut OperationReport,
        on_progress: F,
    ) where
        F: FnMut(usize, usize),
    {
        let mut outcome = enrich(&self.source, &self.cdn, ticket, &self.options, on_progress).await;
        report
            .errors
            .extend(outcome.failures.drain(..).map(|(_, e)| e));
        match self.state.apply_enrichment(outcome) {
            Ok(applied) => report.enriched += applied,
            Err(stale) => {
                tracing::debug!(%stale, "スキン取得結果を破棄");
                report.stale = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::source::Scripted;
    use crate::state::PageState;

    const BOTTOM: ScrollMetrics = ScrollMetrics {
        scroll_top: 500.0,
        viewport_height: 500.0,
        document_height: 1000.0,
    };

    fn gallery() -> Gallery<crate::source::MemorySource> {
        let cdn = CdnConfig::default();
        Gallery::new(fixtures::memory_source(&cdn), cdn)
    }

    #[tokio::test]
    async fn test_load_initial() {
        let mut gallery = gallery();
        let report = gallery.load_initial().await;

        assert!(report.is_ok());
        assert_eq!(report.added, 2);
        let state = gallery.state();
        assert!(!state.is_loading());
        assert_eq!(state.entries()[0].main_tag.as_deref(), Some("fighter"));
        assert_eq!(state.entries()[1].main_tag.as_deref(), Some("mage"));
        assert!(state.entries()[0].image.ends_with("Aatrox_0.jpg"));
        assert!(state.entries()[1].image.ends_with("Ahri_0.jpg"));
    }

    #[tokio::test]
    async fn test_show_all_details_enriches_and_renames_default() {
        let mut gallery = gallery();
        gallery.load_initial().await;

        let report = gallery.set_show_all_details(true).await;
        assert!(report.is_ok());
        assert_eq!(report.enriched, 2);

        let cdn = gallery.cdn().clone();
        let requests = gallery.source().requests();
        assert!(requests.contains(&cdn.detail_url("Aatrox")));
        assert!(requests.contains(&cdn.detail_url("Ahri")));

        let aatrox = gallery.state().entry("Aatrox").unwrap();
        assert_eq!(aatrox.details[0].name, "Aatrox");
    }

    #[tokio::test]
    async fn test_filter_by_tag_mage() {
        let mut gallery = gallery();
        gallery.load_initial().await;

        let report = gallery.filter_by_tag(TagFilter::new("Mage")).await;
        assert!(report.is_ok());
        let ids: Vec<_> = gallery.state().entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["Ahri"]);
        assert!(gallery.state().is_filtering());

        gallery.filter_by_tag(TagFilter::All).await;
        assert_eq!(gallery.state().entries().len(), 2);
        assert!(!gallery.state().is_filtering());
    }

    #[tokio::test]
    async fn test_filter_while_showing_details_enriches_new_list() {
        let mut gallery = gallery();
        gallery.load_initial().await;
        gallery.set_show_all_details(true).await;

        let report = gallery.filter_by_tag(TagFilter::new("Fighter")).await;
        assert!(report.is_ok());
        assert_eq!(report.enriched, 1);
        assert!(!gallery.state().is_loading());
        assert!(gallery.state().entry("Aatrox").unwrap().is_enriched());
        let cdn = gallery.cdn().clone();
        assert_eq!(gallery.source().request_count(&cdn.detail_url("Aatrox")), 2);
    }

    #[tokio::test]
    async fn test_filter_failure_clears_flags() {
        let mut gallery = gallery();
        gallery.load_initial().await;
        gallery.filter_by_tag(TagFilter::new("Mage")).await;

        let url = gallery.cdn().catalog_url();
        gallery.source().respond(url, Scripted::Network("offline".into()));
        let report = gallery.filter_by_tag(TagFilter::new("Tank")).await;

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].is_network());
        assert!(!gallery.state().is_loading());
        assert!(!gallery.state().is_filtering());
        assert_eq!(gallery.state().entries().len(), 1);
    }

    #[tokio::test]
    async fn test_initial_load_parse_failure() {
        let cdn = CdnConfig::default();
        let source = crate::source::MemorySource::new().with_body(cdn.catalog_url(), "<html>");
        let mut gallery = Gallery::new(source, cdn);

        let report = gallery.load_initial().await;
        assert!(report.errors[0].is_parse());
        assert!(!gallery.state().is_loading());

        // 失敗後も次の操作を受け付ける
        let url = gallery.cdn().catalog_url();
        gallery.source().respond(url, Scripted::Body(fixtures::catalog_json()));
        assert!(gallery.load_initial().await.is_ok());
        assert_eq!(gallery.state().entries().len(), 2);
    }

    #[tokio::test]
    async fn test_scroll_refetches_catalog() {
        let mut gallery = gallery();
        gallery.load_initial().await;

        let report = gallery.on_scroll(&BOTTOM).await;
        assert!(report.triggered);
        assert_eq!(report.added, 0);
        assert_eq!(gallery.state().next_page(), 2);
        assert_eq!(gallery.state().page_state(), PageState::Idle);
        let url = gallery.cdn().catalog_url();
        assert_eq!(gallery.source().request_count(&url), 2);
    }

    #[tokio::test]
    async fn test_scroll_suppressed_when_filtering_or_showing_details() {
        let mut gallery = gallery();
        gallery.load_initial().await;
        gallery.filter_by_tag(TagFilter::new("Mage")).await;
        let url = gallery.cdn().catalog_url();
        let before = gallery.source().request_count(&url);

        assert!(!gallery.on_scroll(&BOTTOM).await.triggered);

        gallery.filter_by_tag(TagFilter::All).await;
        gallery.set_show_all_details(true).await;
        let before_details = gallery.source().request_count(&url);
        assert!(!gallery.on_scroll(&BOTTOM).await.triggered);
        assert_eq!(gallery.source().request_count(&url), before_details);
        assert_eq!(before_details, before + 1);
    }

    #[tokio::test]
    async fn test_enrich_all_reports_failures() {
        let mut gallery = gallery();
        gallery.load_initial().await;
        let url = gallery.cdn().detail_url("Aatrox");
        gallery.source().respond(url, Scripted::Status(500));

        let mut calls = 0;
        let report = gallery.enrich_all(|_, _| calls += 1).await;

        assert_eq!(calls, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.enriched, 0);
        assert!(gallery.state().entries().iter().all(|e| !e.is_enriched()));
    }
}
