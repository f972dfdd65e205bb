//! タグ選択ボタン

use champ_gallery_common::{type_class, TagClass, ALL_TAGS};
use leptos::prelude::*;

#[component]
pub fn TagFilterBar<FS>(active_tag: ReadSignal<String>, on_select: FS) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send,
{
    let tags: Vec<&'static str> = std::iter::once(ALL_TAGS)
        .chain(TagClass::ALL.iter().map(|class| class.raw_tag()))
        .collect();

    view! {
        <div class="tag-filter">
            {tags
                .into_iter()
                .map(|tag| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            class=format!("btn btn-small tag-button {}", type_class(tag))
                            class:active=move || active_tag.get() == tag
                            on:click=move |_| on_select(tag.to_string())
                        >
                            {tag}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
