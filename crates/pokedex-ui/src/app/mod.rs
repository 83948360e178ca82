//! Root component, client-side route guard and boot.
//!
//! # Design
//! - The boot payload seeds the store before the first render, so server-rendered
//!   data is served from the cache without a refetch.
//! - Every route is checked against the shared access policy before it renders.

use gloo::console;
use gloo::utils::document;
use pokedex_core::AccessPolicy;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::components::layout::Layout;
use crate::components::not_found::NotFound;
use crate::core::boot::{BOOT_ELEMENT_ID, parse_boot};
use crate::core::store::AppStore;
use crate::features::auth::session;
use crate::features::auth::view::LoginPage;
use crate::features::pokemon::api::now_ms;
use crate::features::pokemon::view::{DetailPage, ListPage};

pub(crate) use api::ApiCtx;
pub(crate) use routes::Route;

mod api;
mod routes;

#[function_component(PokedexApp)]
pub(crate) fn pokedex_app() -> Html {
    let settings = use_selector(|store: &AppStore| store.settings.clone());
    let api_ctx = use_memo(ApiCtx::new, (*settings).clone());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    let policy = AccessPolicy::DEFAULT;
    let session = session::session_state();
    let decision = policy.evaluate(&route.to_path(), session);

    match (route, policy.location(decision)) {
        (_, Some(target)) => redirect_to(target),
        (Route::Home, None) => redirect_to(policy.root_target(session)),
        (Route::Login, None) => html! { <LoginPage /> },
        (Route::PokemonList, None) => html! { <ListPage /> },
        (Route::PokemonDetail { id }, None) => match id.parse::<u32>() {
            Ok(id) => html! { <DetailPage {id} /> },
            Err(_) => html! { <NotFound /> },
        },
        (Route::NotFound, None) => html! { <NotFound /> },
    }
}

fn redirect_to(path: &str) -> Html {
    let target = Route::recognize(path).unwrap_or(Route::NotFound);
    html! { <Redirect<Route> to={target} /> }
}

fn boot_store() {
    let payload = document()
        .get_element_by_id(BOOT_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .and_then(|raw| parse_boot(&raw));
    let Some(payload) = payload else {
        console::warn!("boot payload missing; using default settings");
        return;
    };
    let now = now_ms();
    Dispatch::<AppStore>::new().reduce_mut(move |store| {
        store.settings = payload.config;
        if let Some(initial) = payload.initial {
            store.cache.seed_initial(initial, now);
        }
    });
}

/// Boot the browser application.
pub fn run_app() {
    console_error_panic_hook::set_once();
    boot_store();
    match document().get_element_by_id("root") {
        Some(root) => {
            yew::Renderer::<PokedexApp>::with_root(root).render();
        }
        None => {
            yew::Renderer::<PokedexApp>::new().render();
        }
    }
}
