//! Modal with the full metadata of one gallery image.

use leptos::prelude::*;

use crate::net::types::GeneratedImage;
use crate::util::download::start_download;
use crate::util::format::{format_seed, format_size, format_timestamp};

#[component]
pub fn ImageDetail(image: GeneratedImage, on_close: Callback<()>, on_delete: Callback<String>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let download_url = image.url.clone();
    let download_prompt = image.prompt.clone();
    let on_download = move |_| start_download(download_url.clone(), download_prompt.clone());

    let alt_text = image.prompt.clone();
    let options = image.options;
    let negative = (!options.negative_prompt.trim().is_empty()).then(|| {
        view! {
            <dt>"Negative prompt"</dt>
            <dd>{options.negative_prompt.clone()}</dd>
        }
    });
    let delete_button = image.id.map(|id| {
        view! {
            <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                "Delete"
            </button>
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--detail"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <img class="dialog__image" src=image.url alt=alt_text/>
                <dl class="dialog__meta">
                    <dt>"Prompt"</dt>
                    <dd>{image.prompt}</dd>
                    {negative}
                    <dt>"Size"</dt>
                    <dd>{format_size(&options)}</dd>
                    <dt>"Steps"</dt>
                    <dd>{options.steps.to_string()}</dd>
                    <dt>"Seed"</dt>
                    <dd>{format_seed(options.seed)}</dd>
                    <dt>"Created"</dt>
                    <dd>{format_timestamp(image.timestamp)}</dd>
                </dl>
                <div class="dialog__actions">
                    <button class="btn" on:click=on_download>"Download"</button>
                    {delete_button}
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
