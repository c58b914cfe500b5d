//! Tile for one generated image in the recent list or the gallery.

use leptos::prelude::*;

use crate::net::types::GeneratedImage;
use crate::util::download::start_download;
use crate::util::format::format_timestamp;

/// Image tile with download and, for persisted images, delete actions.
#[component]
pub fn ImageCard(
    image: GeneratedImage,
    #[prop(optional)] on_select: Option<Callback<GeneratedImage>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let selectable = on_select.is_some();
    let created = format_timestamp(image.timestamp);
    let download_url = image.url.clone();
    let download_prompt = image.prompt.clone();
    let delete_id = image.id.clone().filter(|_| on_delete.is_some());
    let selected = image.clone();
    let alt_text = image.prompt.clone();

    let on_click = move |_| {
        if let Some(on_select) = on_select {
            on_select.run(selected.clone());
        }
    };
    let on_download = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        start_download(download_url.clone(), download_prompt.clone());
    };
    let delete_button = delete_id.map(|id| {
        view! {
            <button
                class="btn image-card__delete"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    if let Some(on_delete) = on_delete {
                        on_delete.run(id.clone());
                    }
                }
                title="Delete image"
                aria-label="Delete image"
            >
                "✕"
            </button>
        }
    });

    view! {
        <figure class="image-card" class:image-card--selectable=selectable on:click=on_click>
            <img class="image-card__img" src=image.url alt=alt_text loading="lazy"/>
            <figcaption class="image-card__caption">
                <p class="image-card__prompt">{image.prompt}</p>
                <span class="image-card__time">{created}</span>
            </figcaption>
            <div class="image-card__actions">
                <button class="btn image-card__download" on:click=on_download title="Download image">
                    "Download"
                </button>
                {delete_button}
            </div>
        </figure>
    }
}
