//! チャンピオン一覧コンポーネント

use champ_gallery_common::{type_class, Entry, ViewState};
use leptos::prelude::*;

#[component]
pub fn ChampionGallery(state: RwSignal<ViewState>) -> impl IntoView {
    let show_skins = move || state.with(|s| s.show_all_details());
    let visible = move || {
        state.with(|s| s.filtered_entries().into_iter().cloned().collect::<Vec<Entry>>())
    };
    // スキン反映時に再描画させる
    let key = |entry: &Entry| (entry.id.clone(), entry.details.len());

    view! {
        <div class="champion-gallery" class:show-skins=show_skins>
            <For
                each=visible
                key=key
                children=move |entry| {
                    view! { <ChampionCard entry=entry show_skins=Signal::derive(show_skins) /> }
                }
            />
        </div>
    }
}

#[component]
fn ChampionCard(entry: Entry, show_skins: Signal<bool>) -> impl IntoView {
    let class = entry.main_tag.as_deref().map(type_class).unwrap_or("");
    let skins = entry.details.clone();

    let skin_list = move || {
        show_skins.get().then(|| {
            view! {
                <div class="skin-list">
                    {skins
                        .iter()
                        .map(|skin| {
                            view! {
                                <figure class="skin">
                                    <img src=skin.image.clone() alt=skin.name.clone() loading="lazy" />
                                    <figcaption>{skin.name.clone()}</figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    };

    view! {
        <div class=format!("champion-card {}", class)>
            <img src=entry.image.clone() alt=entry.name.clone() loading="lazy" />
            <div class="champion-info">
                <h3>{entry.name.clone()}</h3>
                <div class="champion-tags">
                    {entry
                        .tags
                        .iter()
                        .map(|tag| {
                            view! { <span class=format!("tag {}", type_class(tag))>{tag.clone()}</span> }
                        })
                        .collect_view()}
                </div>
                <p class="difficulty">{format!("難易度: {}", entry.difficulty)}</p>
            </div>
            {skin_list}
        </div>
    }
}
