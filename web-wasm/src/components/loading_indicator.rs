//! 読み込み中表示コンポーネント

use champ_gallery_common::{PageState, ViewState};
use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(state: RwSignal<ViewState>) -> impl IntoView {
    let label = move || {
        state.with(|s| match s.page_state() {
            PageState::LoadingMore => "さらに読み込み中...",
            PageState::Idle => "読み込み中...",
        })
    };

    view! {
        <Show when=move || state.with(|s| s.is_loading())>
            <div class="loading-indicator">
                <div class="spinner" />
                <p class="loading-text">{label}</p>
            </div>
        </Show>
    }
}
