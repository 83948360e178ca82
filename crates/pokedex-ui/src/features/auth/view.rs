//! Login page.

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::{ApiCtx, Route};
use crate::core::store::AppStore;
use crate::features::auth::session;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let auth = use_selector(|store: &AppStore| store.auth.clone());
    let username = use_node_ref();
    let password = use_node_ref();

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(api) = api.clone() else {
                return;
            };
            let read = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let user = read(&username);
            let pass = read(&password);
            let navigator = navigator.clone();
            let dispatch = Dispatch::<AppStore>::new();
            dispatch.reduce_mut(|store| store.auth.begin_login());
            spawn_local(async move {
                let outcome = session::login(&api.client, &user, &pass).await.map(|_| ());
                let succeeded = outcome.is_ok();
                dispatch.reduce_mut(|store| store.auth.finish_login(&outcome));
                if succeeded && let Some(navigator) = navigator {
                    navigator.push(&Route::PokemonList);
                }
            });
        })
    };

    html! {
        <section class="mx-auto flex max-w-sm flex-col gap-4 py-12">
            <h2 class="text-2xl font-semibold">{"Login"}</h2>
            <form class="flex flex-col gap-3" {onsubmit}>
                <label class="form-control">
                    <span class="label-text">{"Username"}</span>
                    <input
                        ref={username}
                        name="username"
                        type="text"
                        class="input input-bordered"
                        autocomplete="username"
                        required="required"
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Password"}</span>
                    <input
                        ref={password}
                        name="password"
                        type="password"
                        class="input input-bordered"
                        autocomplete="current-password"
                        required="required"
                    />
                </label>
                <div role="alert" aria-live="polite" class="min-h-6 text-error">
                    { auth.error.clone().unwrap_or_default() }
                </div>
                <button type="submit" class="btn btn-primary" disabled={auth.busy}>
                    { auth.submit_label() }
                </button>
            </form>
        </section>
    }
}
