//! Catalog card: number, name and artwork with fallback.

use pokedex_api_models::PokemonListItem;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::features::pokemon::logic::{
    FALLBACK_IMAGE_URL, display_name, format_number, image_or_fallback,
};

#[derive(Properties, PartialEq)]
pub(crate) struct PokemonCardProps {
    pub item: PokemonListItem,
    #[prop_or_default]
    pub selected: bool,
    pub on_select: Callback<u32>,
}

#[function_component(PokemonCard)]
pub(crate) fn pokemon_card(props: &PokemonCardProps) -> Html {
    let id = props.item.id;
    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };
    // Swap to the shared artwork once; the fallback itself never re-triggers.
    let onerror = Callback::from(|event: Event| {
        if let Some(img) = event.target_dyn_into::<HtmlImageElement>()
            && img.src() != FALLBACK_IMAGE_URL
        {
            img.set_src(FALLBACK_IMAGE_URL);
        }
    });
    let mut classes = classes!("card", "bg-base-100", "shadow", "cursor-pointer");
    if props.selected {
        classes.push(classes!("ring-2", "ring-primary"));
    }
    let name = display_name(&props.item.name);

    html! {
        <article class={classes} {onclick}>
            <figure class="p-4">
                <img
                    src={image_or_fallback(props.item.image.as_deref()).to_string()}
                    alt={name.clone()}
                    loading="lazy"
                    {onerror}
                />
            </figure>
            <div class="card-body items-center p-3">
                <span class="text-xs opacity-70">{format_number(id)}</span>
                <h3 class="card-title text-base">{name}</h3>
            </div>
        </article>
    }
}

#[function_component(SkeletonCard)]
pub(crate) fn skeleton_card() -> Html {
    html! { <div class="skeleton h-48 w-full" aria-hidden="true"></div> }
}
