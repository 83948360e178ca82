//! Debounced search input.
//!
//! # Design
//! - Keep local input state for immediate typing feedback.
//! - Emit the settled value after the debounce window, exactly as typed.
//! - Store changes only replace the local text when they did not originate here.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::core::preferences::should_replace_input;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or(300)]
    pub debounce_ms: u32,
    #[prop_or_default]
    pub on_search: Callback<String>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let value_state = use_state(|| props.value.to_string());
    let debounce = props.debounce_ms;
    let timer = use_mut_ref(|| None as Option<Timeout>);
    let last_emitted = use_mut_ref(|| props.value.to_string());

    {
        let value_state = value_state.clone();
        let last_emitted = last_emitted.clone();
        use_effect_with_deps(
            move |incoming| {
                let next = incoming.to_string();
                let replace = should_replace_input(&next, &last_emitted.borrow(), &value_state);
                if replace {
                    *last_emitted.borrow_mut() = next.clone();
                    value_state.set(next);
                }
                || ()
            },
            props.value.clone(),
        );
    }

    let oninput = {
        let on_search = props.on_search.clone();
        let value_state = value_state.clone();
        Callback::from(move |next: String| {
            value_state.set(next.clone());
            if let Some(pending) = timer.borrow_mut().take() {
                drop(pending);
            }
            let on_search = on_search.clone();
            let last_emitted = last_emitted.clone();
            *timer.borrow_mut() = Some(Timeout::new(debounce, move || {
                *last_emitted.borrow_mut() = next.clone();
                on_search.emit(next);
            }));
        })
    };

    html! {
        <label class="input input-bordered flex items-center gap-2">
            <span class="iconify lucide--search size-4 opacity-70"></span>
            <input
                type="search"
                class="grow"
                placeholder="Search"
                aria-label="Search Pokemon"
                value={AttrValue::from((*value_state).clone())}
                oninput={Callback::from(move |event: InputEvent| {
                    if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                        oninput.emit(input.value());
                    }
                })}
            />
        </label>
    }
}
