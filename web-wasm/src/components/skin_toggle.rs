//! 全スキン表示の切替

use champ_gallery_common::ViewState;
use leptos::prelude::*;

#[component]
pub fn SkinToggle<FT>(state: RwSignal<ViewState>, on_toggle: FT) -> impl IntoView
where
    FT: Fn(bool) + 'static + Clone + Send,
{
    view! {
        <label class="skin-toggle">
            <input
                type="checkbox"
                prop:checked=move || state.with(|s| s.show_all_details())
                on:change=move |ev| on_toggle(event_target_checked(&ev))
            />
            "全スキンを表示"
        </label>
    }
}
