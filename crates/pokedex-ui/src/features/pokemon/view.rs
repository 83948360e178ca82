//! List and detail pages.
//!
//! # Design
//! - The list page wires four reactions: URL to cursor, search to cursor, cursor to
//!   URL, and query to fetch. All decisions live in `ListCursor`; this file only
//!   moves values between the router and the store.
//! - Sorting happens at render time over the loaded page.

use std::rc::Rc;

use gloo::console;
use pokedex_api_models::PokemonDetail;
use pokedex_core::paths::{detail_route, list_route, page_from_query};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector, use_selector_with_deps};

use crate::app::{ApiCtx, Route};
use crate::components::grid::PokemonGrid;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::components::sort_popover::SortPopover;
use crate::core::preferences::{SortBy, SortOrder};
use crate::core::store::AppStore;
use crate::features::pokemon::api::{ensure_count, ensure_detail, ensure_list};
use crate::features::pokemon::logic::{
    display_name, format_number, image_or_fallback, pagination_view, sort_items,
};
use crate::features::pokemon::state::{PageRequest, UrlWrite};

fn url_page(location: Option<&Location>) -> u32 {
    location.map_or(1, |location| page_from_query(location.query_str()))
}

fn push_list_page(navigator: &Navigator, page: u32) {
    let result = if page <= 1 {
        navigator.push(&Route::PokemonList);
        Ok(())
    } else {
        navigator.push_with_query(&Route::PokemonList, &[("page", page)])
    };
    if let Err(err) = result {
        console::error!(format!("failed to navigate to {}: {err}", list_route(page)));
    }
}

fn push_detail(navigator: &Navigator, id: u32, page: u32) {
    let route = Route::PokemonDetail { id: id.to_string() };
    if let Err(err) = navigator.push_with_query(&route, &[("page", page.max(1))]) {
        console::error!(format!("failed to navigate to {}: {err}", detail_route(id, page)));
    }
}

#[function_component(ListPage)]
pub(crate) fn list_page() -> Html {
    let api = use_context::<ApiCtx>();
    let location = use_location();
    let navigator = use_navigator();
    let dispatch = Dispatch::<AppStore>::new();

    let search_term = use_selector(|store: &AppStore| store.prefs.search_term().to_string());
    let sort_by = use_selector(|store: &AppStore| store.prefs.sort_by());
    let sort_order = use_selector(|store: &AppStore| store.prefs.sort_order());
    let cursor = use_selector(|store: &AppStore| store.cursor.clone());
    let query = use_selector(AppStore::current_query);
    let list = use_selector(|store: &AppStore| {
        store.cache.lists.get(&store.current_query()).cloned()
    });
    let list_error = use_selector(AppStore::list_error);
    let sort_touched = use_state(|| false);
    let selected = use_state(|| None::<u32>);

    // URL -> cursor.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |page| {
                let page = *page;
                dispatch.reduce_mut(|store| {
                    store.enter_list(page);
                });
                || ()
            },
            url_page(location.as_ref()),
        );
    }

    // Settled search term -> cursor.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |term: &Rc<String>| {
                let term = term.to_string();
                dispatch.reduce_mut(|store| {
                    if store.cursor.on_search_changed(&term) {
                        store.sync_cursor();
                    }
                });
                || ()
            },
            search_term.clone(),
        );
    }

    // Cursor -> URL, skipping changes that came from the URL.
    {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |_| {
                let mut write = UrlWrite::Skip;
                dispatch.reduce_mut(|store| write = store.cursor.url_write());
                if let Some(navigator) = navigator.as_ref() {
                    match write {
                        UrlWrite::Skip => {}
                        UrlWrite::StripPage => push_list_page(navigator, 1),
                        UrlWrite::SetPage(page) => push_list_page(navigator, page),
                    }
                }
                || ()
            },
            cursor.clone(),
        );
    }

    // Query -> fetch. The store is read here, after the URL effect above, so a
    // deep link fetches the adopted page rather than the one rendered with.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let mut query = None;
                dispatch.reduce_mut(|store| {
                    store.sync_cursor();
                    query = Some(store.current_query());
                });
                if let (Some(api), Some(query)) = (api, query) {
                    ensure_list(api.client.clone(), query);
                    ensure_count(api.client);
                }
                || ()
            },
            query.clone(),
        );
    }

    let on_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |term: String| {
            dispatch.reduce_mut(|store| store.prefs.set_search_term(term));
        })
    };
    let on_sort = {
        let dispatch = dispatch.clone();
        let sort_touched = sort_touched.clone();
        Callback::from(move |by: SortBy| {
            sort_touched.set(true);
            dispatch.reduce_mut(|store| store.prefs.set_sorting(by, SortOrder::Asc));
        })
    };
    let on_request = Callback::from(move |request: PageRequest| {
        dispatch.reduce_mut(|store| {
            if store.cursor.request(request) {
                store.sync_cursor();
            }
        });
    });
    let on_select = {
        let selected = selected.clone();
        let page = cursor.display_page();
        Callback::from(move |id: u32| {
            selected.set(Some(id));
            if let Some(navigator) = navigator.as_ref() {
                push_detail(navigator, id, page);
            }
        })
    };

    let items = (*list)
        .as_ref()
        .map(|list| sort_items(&list.results, *sort_by, *sort_order))
        .unwrap_or_default();
    let loading = list.is_none() && list_error.is_none();
    let view = pagination_view(
        cursor.display_page(),
        cursor.total_pages(),
        cursor.has_next(),
        cursor.has_previous(),
        cursor.controls_enabled(),
    );

    html! {
        <section class="flex flex-col gap-4">
            <div class="flex items-center gap-2">
                <div class="flex-1">
                    <SearchInput value={AttrValue::from((*search_term).clone())} {on_search} />
                </div>
                <SortPopover sort_by={*sort_by} touched={*sort_touched} on_select={on_sort} />
            </div>
            if let Some(message) = (*list_error).clone() {
                <div role="alert" class="alert alert-error">{message}</div>
            }
            <PokemonGrid {items} {loading} selected={*selected} {on_select} />
            <Pagination {view} {on_request} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct DetailPageProps {
    pub id: u32,
}

#[function_component(DetailPage)]
pub(crate) fn detail_page(props: &DetailPageProps) -> Html {
    let api = use_context::<ApiCtx>();
    let location = use_location();
    let navigator = use_navigator();
    let detail = use_selector_with_deps(
        |store: &AppStore, id: &u32| store.cache.details.get(id).cloned(),
        props.id,
    );
    let detail_error = use_selector_with_deps(
        |store: &AppStore, id: &u32| store.detail_error(*id),
        props.id,
    );
    let back_page = url_page(location.as_ref());

    use_effect_with_deps(
        move |id| {
            if let Some(api) = api {
                ensure_detail(api.client, *id);
            }
            || ()
        },
        props.id,
    );

    let on_back = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        if let Some(navigator) = navigator.as_ref() {
            push_list_page(navigator, back_page);
        }
    });

    let body = match ((*detail).as_ref(), (*detail_error).clone()) {
        (Some(detail), _) => detail_body(detail),
        (None, Some(message)) => html! { <div role="alert" class="alert alert-error">{message}</div> },
        (None, None) => html! { <div class="skeleton h-96 w-full" aria-busy="true"></div> },
    };

    html! {
        <section class="flex flex-col gap-4">
            <a href={list_route(back_page)} class="link" onclick={on_back}>{"Back to list"}</a>
            { body }
        </section>
    }
}

fn detail_body(detail: &PokemonDetail) -> Html {
    let name = display_name(&detail.name);
    html! {
        <article class="card bg-base-100 shadow md:card-side">
            <figure class="p-6">
                <img src={image_or_fallback(detail.image.as_deref()).to_string()} alt={name.clone()} />
            </figure>
            <div class="card-body gap-4">
                <div>
                    <span class="opacity-70">{format_number(detail.id)}</span>
                    <h2 class="card-title text-3xl">{name}</h2>
                </div>
                if let Some(types) = detail.types.as_ref() {
                    <div class="flex gap-2">
                        { for types.iter().map(|kind| html! {
                            <span class="badge badge-primary">{display_name(&kind.name)}</span>
                        }) }
                    </div>
                }
                <div>
                    <h3 class="font-semibold">{"Abilities"}</h3>
                    <ul>
                        { for detail.abilities.iter().map(|ability| html! {
                            <li>
                                {display_name(&ability.name)}
                                if ability.is_hidden {
                                    <span class="badge badge-ghost ml-2">{"hidden"}</span>
                                }
                            </li>
                        }) }
                    </ul>
                </div>
                if let Some(stats) = detail.stats.as_ref() {
                    <div>
                        <h3 class="font-semibold">{"Stats"}</h3>
                        <dl class="grid grid-cols-2 gap-x-4">
                            { for stats.iter().map(|stat| html! {
                                <>
                                    <dt>{display_name(&stat.name)}</dt>
                                    <dd>{stat.value}</dd>
                                </>
                            }) }
                        </dl>
                    </div>
                }
                <div>
                    <h3 class="font-semibold">{"Forms"}</h3>
                    <p>{detail.forms.iter().map(|form| display_name(&form.name)).collect::<Vec<_>>().join(", ")}</p>
                </div>
                <div>
                    <h3 class="font-semibold">{format!("Moves ({})", detail.moves.len())}</h3>
                    <ul class="flex flex-wrap gap-1">
                        { for detail.moves.iter().map(|entry| html! {
                            <li class="badge badge-outline">{entry.name.clone()}</li>
                        }) }
                    </ul>
                </div>
            </div>
        </article>
    }
}
