//! Routing definitions for the Pokedex UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/pokemon")]
    PokemonList,
    #[at("/pokemon/:id")]
    PokemonDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
