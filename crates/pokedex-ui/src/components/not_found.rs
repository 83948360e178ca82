//! Not-found view.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(NotFound)]
pub(crate) fn not_found() -> Html {
    html! {
        <section class="flex flex-col items-center gap-4 py-16 text-center">
            <h2 class="text-2xl font-semibold">{"Not Found"}</h2>
            <p>{"Could not find requested resource"}</p>
            <Link<Route> to={Route::PokemonList} classes="btn btn-primary">
                {"Return to Pokemon List"}
            </Link<Route>>
        </section>
    }
}
