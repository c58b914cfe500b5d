//! Gallery page listing the signed-in user's persisted images.
//!
//! SYSTEM CONTEXT
//! ==============
//! A fetch cycle starts on mount and whenever the user identity changes.
//! Deletes go straight to the backend and prune the local list on success.

use leptos::prelude::*;

use crate::components::image_card::ImageCard;
use crate::components::image_detail::ImageDetail;
use crate::config::ApiConfig;
use crate::net::types::GeneratedImage;
use crate::state::auth::AuthState;
use crate::state::gallery::{GalleryState, LoadTicket};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let config = expect_context::<ApiConfig>();
    let authenticated = config.is_authenticated();

    let load_config = config.clone();
    Effect::new(move || {
        let user_id = auth.with(|a| a.user_id().map(str::to_owned));
        if !authenticated {
            return;
        }
        if let Some(ticket) = gallery.try_update(|g| g.begin_load(user_id.as_deref())).flatten() {
            run_load(load_config.clone(), gallery, ticket);
        }
    });

    on_cleanup(move || {
        gallery.try_update(GalleryState::cancel_load);
    });

    let on_select = Callback::new(move |image: GeneratedImage| gallery.update(|g| g.select(image)));
    let on_close = Callback::new(move |()| gallery.update(GalleryState::close_detail));
    let on_delete = Callback::new(move |image_id: String| run_delete(config.clone(), gallery, image_id));

    let signed_in = move || auth.get().user.is_some();

    view! {
        <div class="gallery-page">
            <Show
                when=move || authenticated && signed_in()
                fallback=|| {
                    view! { <p class="gallery-page__status">"Sign in to see your saved images."</p> }
                }
            >
                <Show
                    when=move || !gallery.get().is_loading()
                    fallback=|| view! { <p class="gallery-page__status">"Loading your images..."</p> }
                >
                    <Show
                        when=move || !gallery.get().images.is_empty()
                        fallback=|| {
                            view! {
                                <p class="gallery-page__status">"No images yet. Generate one to get started."</p>
                            }
                        }
                    >
                        <div class="gallery-page__grid">
                            <For
                                each=move || gallery.get().images
                                key=|image: &GeneratedImage| image.id.clone().unwrap_or_else(|| image.url.clone())
                                children=move |image: GeneratedImage| {
                                    view! { <ImageCard image=image on_select=on_select on_delete=on_delete/> }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </Show>
            {move || {
                gallery
                    .get()
                    .selected
                    .map(|image| view! { <ImageDetail image=image on_close=on_close on_delete=on_delete/> })
            }}
        </div>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn run_load(config: ApiConfig, gallery: RwSignal<GalleryState>, ticket: LoadTicket) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_user_images(&config, &ticket.user_id).await;
        gallery.try_update(|g| g.finish_load(ticket, result));
    });
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn run_delete(config: ApiConfig, gallery: RwSignal<GalleryState>, image_id: String) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::delete_image(&config, &image_id).await;
        gallery.try_update(|g| g.finish_delete(&image_id, result));
    });
}
