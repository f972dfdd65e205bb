//! メインアプリケーションコンポーネント
//!
//! 表示状態は `RwSignal<ViewState>` 1つに集約する。取得は spawn_local で並行に走るが、
//! 結果は ViewState の世代チェックを通して反映される。

use crate::api::ddragon::{log_error, log_warn, FetchSource};
use crate::components::{
    champion_gallery::ChampionGallery, header::Header, loading_indicator::LoadingIndicator,
    search_bar::SearchBar, skin_toggle::SkinToggle, tag_filter::TagFilterBar,
};
use champ_gallery_common::{
    enrich, fetch_catalog, CdnConfig, EnrichOptions, EnrichTicket, LoadKind, LoadOutcome,
    LoadTicket, ScrollMetrics, TagFilter, ViewState, ALL_TAGS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// 現在のスクロール位置
fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window
        .document()?
        .document_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(ScrollMetrics {
        scroll_top: window.scroll_y().ok()?,
        viewport_height: window.inner_height().ok()?.as_f64()?,
        document_height: f64::from(root.offset_height()),
    })
}

/// カタログ取得 → 反映。スキン表示中なら続けてスキンを取得
async fn run_load(
    state: RwSignal<ViewState>,
    cdn: CdnConfig,
    options: EnrichOptions,
    ticket: LoadTicket,
) {
    match fetch_catalog(&FetchSource, &cdn).await {
        Ok(raw) => {
            let entries = ticket.select(&raw, &cdn);
            match state.try_update(|s| s.apply_catalog(&ticket, entries)) {
                Some(Ok(LoadOutcome::AwaitingDetails { ticket, .. })) => {
                    run_enrichment(state, cdn, options, ticket).await;
                }
                Some(Err(stale)) => log_warn(&stale.to_string()),
                _ => {}
            }
        }
        Err(e) => {
            log_error(&format!("カタログ取得に失敗: {}", e));
            state.update(|s| {
                if let Err(stale) = s.fail_load(&ticket) {
                    log_warn(&stale.to_string());
                }
            });
        }
    }
}

async fn run_enrichment(
    state: RwSignal<ViewState>,
    cdn: CdnConfig,
    options: EnrichOptions,
    ticket: EnrichTicket,
) {
    let outcome = enrich(&FetchSource, &cdn, &ticket, &options, |_, _| {}).await;
    for (id, e) in &outcome.failures {
        log_error(&format!("スキン取得に失敗 ({}): {}", id, e));
    }
    state.update(|s| {
        if let Err(stale) = s.apply_enrichment(outcome) {
            log_warn(&stale.to_string());
        }
    });
}

fn start_load(state: RwSignal<ViewState>, kind: LoadKind, cdn: CdnConfig, options: EnrichOptions) {
    if let Some(ticket) = state.try_update(|s| s.begin_load(kind)) {
        spawn_local(run_load(state, cdn, options, ticket));
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(ViewState::new());
    let (active_tag, set_active_tag) = signal(ALL_TAGS.to_string());
    let cdn = CdnConfig::default();
    let options = EnrichOptions::default();

    // 初回読み込み
    start_load(state, LoadKind::Replace(TagFilter::All), cdn.clone(), options);

    // 最下部までスクロールしたら追加読み込み
    let _ = window_event_listener(leptos::ev::scroll, {
        let cdn = cdn.clone();
        move |_| {
            let Some(metrics) = scroll_metrics() else {
                return;
            };
            if !state.with_untracked(|s| s.can_load_more(&metrics)) {
                return;
            }
            if let Some(Some(ticket)) = state.try_update(|s| s.on_scroll(&metrics)) {
                spawn_local(run_load(state, cdn.clone(), options, ticket));
            }
        }
    });

    // タグ選択ハンドラ
    let on_tag_select = {
        let cdn = cdn.clone();
        move |tag: String| {
            let filter = TagFilter::new(&tag);
            set_active_tag.set(tag);
            start_load(state, LoadKind::Replace(filter), cdn.clone(), options);
        }
    };

    // 全スキン表示ハンドラ
    let on_toggle_skins = move |show: bool| {
        if let Some(Some(ticket)) = state.try_update(|s| s.set_show_all_details(show)) {
            spawn_local(run_enrichment(state, cdn.clone(), options, ticket));
        }
    };

    view! {
        <div class="container">
            <Header />

            <div class="toolbar">
                <SearchBar state=state />
                <SkinToggle state=state on_toggle=on_toggle_skins />
            </div>

            <TagFilterBar active_tag=active_tag on_select=on_tag_select />

            <Show
                when=move || state.with(|s| !s.is_loading() || !s.entries().is_empty())
                fallback=|| view! { <p class="text-muted">"カタログを読み込み中..."</p> }
            >
                <ChampionGallery state=state />
            </Show>

            <LoadingIndicator state=state />
        </div>
    }
}
