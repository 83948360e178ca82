//! Page chrome: header with title and logout.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::Route;
use crate::core::store::AppStore;
use crate::features::auth::session;

#[derive(Properties, PartialEq)]
pub(crate) struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub(crate) fn layout(props: &LayoutProps) -> Html {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let secure = use_selector(|store: &AppStore| store.settings.secure_cookies);
    let show_logout = !matches!(route, Some(Route::Login)) && session::is_authenticated();

    let on_logout = {
        let secure = *secure;
        Callback::from(move |_: MouseEvent| {
            session::logout(secure);
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <div class="min-h-screen bg-base-200">
            <header class="navbar bg-base-100 shadow-sm px-4">
                <h1 class="flex-1 text-xl font-bold">{"Pokemon Browser"}</h1>
                if show_logout {
                    <button class="btn btn-ghost btn-sm" onclick={on_logout}>{"Logout"}</button>
                }
            </header>
            <main class="container mx-auto p-4">
                { for props.children.iter() }
            </main>
        </div>
    }
}
