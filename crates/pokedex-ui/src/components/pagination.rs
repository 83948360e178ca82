//! First / Previous / `current / total` / Next / Last controls.

use yew::prelude::*;

use crate::features::pokemon::logic::PaginationView;
use crate::features::pokemon::state::PageRequest;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub view: PaginationView,
    pub on_request: Callback<PageRequest>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let button = |label: &'static str, request: PageRequest, enabled: bool| {
        let on_request = props.on_request.clone();
        html! {
            <button
                class="join-item btn btn-sm"
                disabled={!enabled}
                onclick={Callback::from(move |_: MouseEvent| on_request.emit(request))}>
                {label}
            </button>
        }
    };

    html! {
        <nav class="join flex justify-center py-4" aria-label="Pagination">
            { button("First", PageRequest::First, props.view.first) }
            { button("Previous", PageRequest::Previous, props.view.previous) }
            <span class="join-item btn btn-sm btn-disabled">{props.view.label.clone()}</span>
            { button("Next", PageRequest::Next, props.view.next) }
            { button("Last", PageRequest::Last, props.view.last) }
        </nav>
    }
}
