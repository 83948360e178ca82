//! Card grid with loading skeletons and the empty state.

use pokedex_api_models::PokemonListItem;
use yew::prelude::*;

use crate::components::card::{PokemonCard, SkeletonCard};
use crate::features::pokemon::logic::SKELETON_COUNT;

#[derive(Properties, PartialEq)]
pub(crate) struct PokemonGridProps {
    pub items: Vec<PokemonListItem>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub selected: Option<u32>,
    pub on_select: Callback<u32>,
}

#[function_component(PokemonGrid)]
pub(crate) fn pokemon_grid(props: &PokemonGridProps) -> Html {
    let grid = classes!("grid", "grid-cols-2", "md:grid-cols-4", "lg:grid-cols-5", "gap-4");
    if props.loading {
        return html! {
            <div class={grid}>
                { for (0..SKELETON_COUNT).map(|index| html! { <SkeletonCard key={index} /> }) }
            </div>
        };
    }
    if props.items.is_empty() {
        return html! { <p class="py-12 text-center opacity-70">{"No Pokemon found"}</p> };
    }
    html! {
        <div class={grid}>
            { for props.items.iter().map(|item| html! {
                <PokemonCard
                    key={item.id}
                    item={item.clone()}
                    selected={props.selected == Some(item.id)}
                    on_select={props.on_select.clone()}
                />
            }) }
        </div>
    }
}
