//! App header with navigation tabs and the signed-in identity.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::ApiConfig;
use crate::state::auth::{AuthState, USER_STORAGE_KEY};
use crate::state::ui::Tab;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ApiConfig>();
    let location = use_location();
    let active_tab = Memo::new(move |_| Tab::from_path(&location.pathname.get()));

    let on_sign_out = move |_| {
        crate::util::storage::remove(USER_STORAGE_KEY);
        auth.update(AuthState::sign_out);
    };

    let tabs = Tab::visible(config.is_authenticated())
        .iter()
        .map(|&tab| {
            view! {
                <a
                    class="header__tab"
                    class:header__tab--active=move || active_tab.get() == tab
                    href=tab.href()
                >
                    {tab.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="header">
            <span class="header__title">"Image Studio"</span>
            <nav class="header__tabs">{tabs}</nav>
            <span class="header__spacer"></span>
            <Show when=move || auth.get().user.is_some()>
                <span class="header__user">
                    {move || auth.get().display_name().map(str::to_owned).unwrap_or_default()}
                </span>
                <button class="btn header__sign-out" on:click=on_sign_out title="Sign out">
                    "Sign out"
                </button>
            </Show>
        </header>
    }
}
