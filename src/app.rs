//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::config::ApiConfig;
use crate::pages::{gallery::GalleryPage, generate::GeneratePage};
use crate::state::auth::{AuthState, USER_STORAGE_KEY, decode_stored_user};
use crate::state::composer::ComposerState;
use crate::state::gallery::GalleryState;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    log::info!("image backend: {:?} at {:?}", config.variant, config.base_url);

    let auth = RwSignal::new(load_auth());
    let composer = RwSignal::new(ComposerState::default());
    let gallery = RwSignal::new(GalleryState::default());

    provide_context(config);
    provide_context(auth);
    provide_context(composer);
    provide_context(gallery);

    view! {
        <Title text="Image Studio"/>

        <Router>
            <Header/>
            <main class="app__main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=GeneratePage/>
                    <Route path=StaticSegment("gallery") view=GalleryPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Identity injected by the hosting page, if any.
fn load_auth() -> AuthState {
    let user = crate::util::storage::load_string(USER_STORAGE_KEY).and_then(|raw| decode_stored_user(&raw));
    AuthState { user, loading: false }
}
