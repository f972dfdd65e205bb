//! 検索ボックスコンポーネント

use champ_gallery_common::ViewState;
use leptos::prelude::*;

#[component]
pub fn SearchBar(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="チャンピオン名で検索..."
                prop:value=move || state.with(|s| s.search_text().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    state.update(|s| s.set_search_text(text));
                }
            />
        </div>
    }
}
