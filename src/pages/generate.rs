//! Generate page: prompt composer, options, and the recent-images grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission is split around one async call. `ComposerState::begin_submit`
//! claims the in-flight token before the request is spawned, and the
//! completion is applied only if that token is still current. Leaving the
//! page cancels the outstanding request.

use leptos::prelude::*;

use crate::components::image_card::ImageCard;
use crate::components::options_panel::OptionsPanel;
use crate::config::ApiConfig;
use crate::net::types::{GeneratedImage, ImageGenerationOptions};
use crate::state::auth::AuthState;
use crate::state::composer::{ComposerState, PROMPT_SOFT_LIMIT, PendingGeneration, prompt_counter, submits_on_key};

#[component]
pub fn GeneratePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let composer = expect_context::<RwSignal<ComposerState>>();
    let config = expect_context::<ApiConfig>();
    let authenticated = config.is_authenticated();

    let submit = Callback::new(move |()| {
        let user_id = if authenticated { auth.with_untracked(|a| a.user_id().map(str::to_owned)) } else { None };
        let Some(started) = composer.try_update(|c| c.begin_submit(user_id.as_deref())) else {
            return;
        };
        match started {
            Ok(pending) => run_generation(config.clone(), composer, pending),
            Err(e) => log::debug!("generation not started: {e}"),
        }
    });

    on_cleanup(move || {
        composer.try_update(ComposerState::cancel_in_flight);
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if submits_on_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            submit.run(());
        }
    };
    let options = Signal::derive(move || composer.get().options);
    let on_options_change = Callback::new(move |next: ImageGenerationOptions| composer.update(|c| c.options = next));
    let generating = Signal::derive(move || composer.get().is_generating());

    view! {
        <div class="generate-page">
            <section class="composer">
                <textarea
                    class="composer__prompt"
                    rows="3"
                    placeholder="Describe the image you want to create..."
                    prop:value=move || composer.get().prompt
                    disabled=move || generating.get()
                    on:input=move |ev| composer.update(|c| c.prompt = event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <div class="composer__footer">
                    <span
                        class="composer__counter"
                        class:composer__counter--over=move || {
                            composer.get().prompt.chars().count() > PROMPT_SOFT_LIMIT
                        }
                    >
                        {move || prompt_counter(&composer.get().prompt)}
                    </span>
                    <button
                        class="btn btn--primary composer__submit"
                        disabled=move || !composer.get().can_submit()
                        on:click=move |_| submit.run(())
                    >
                        {move || if generating.get() { "Generating..." } else { "Generate" }}
                    </button>
                </div>
                <Show when=move || authenticated>
                    <OptionsPanel options=options on_change=on_options_change disabled=generating/>
                </Show>
                <Show when=move || composer.get().error.is_some()>
                    <p class="composer__error" role="alert">
                        {move || composer.get().error.unwrap_or_default()}
                    </p>
                </Show>
            </section>

            <Show when=move || generating.get()>
                <div class="generate-page__progress">
                    <span class="spinner" aria-hidden="true"></span>
                    "Creating your image..."
                </div>
            </Show>

            <section class="recent">
                <h2 class="recent__title">"Recent images"</h2>
                <Show
                    when=move || !composer.get().recent.is_empty()
                    fallback=|| view! { <p class="recent__empty">"Your generated images will appear here."</p> }
                >
                    <div class="recent__grid">
                        <For
                            each=move || composer.get().recent
                            key=|image: &GeneratedImage| (image.timestamp, image.url.clone())
                            children=move |image: GeneratedImage| view! { <ImageCard image=image/> }
                        />
                    </div>
                </Show>
            </section>
        </div>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn run_generation(config: ApiConfig, composer: RwSignal<ComposerState>, pending: PendingGeneration) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::generate_image(
            &config,
            &pending.prompt,
            pending.user_id.as_deref(),
            &pending.options,
        )
        .await;
        let now = crate::util::browser::now_ms();
        composer.try_update(|c| c.complete(pending, result, now));
    });
}
