//! Sort popover: number or name, always ascending on selection.

use yew::prelude::*;

use crate::core::preferences::SortBy;

#[derive(Properties, PartialEq)]
pub(crate) struct SortPopoverProps {
    pub sort_by: SortBy,
    /// Whether the user has picked a sort yet; the icon stays neutral until then.
    #[prop_or_default]
    pub touched: bool,
    pub on_select: Callback<SortBy>,
}

#[function_component(SortPopover)]
pub(crate) fn sort_popover(props: &SortPopoverProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let icon = match (props.touched, props.sort_by) {
        (false, _) => "lucide--arrow-up-down",
        (true, SortBy::Number) => "lucide--hash",
        (true, SortBy::Name) => "lucide--case-sensitive",
    };

    let option = |by: SortBy| {
        let on_select = props.on_select.clone();
        let open = open.clone();
        let onchange = Callback::from(move |_: Event| {
            on_select.emit(by);
            open.set(false);
        });
        html! {
            <label class="flex items-center gap-2 cursor-pointer">
                <input
                    type="radio"
                    name="sort-by"
                    class="radio radio-sm"
                    value={by.label()}
                    checked={props.sort_by == by}
                    {onchange}
                />
                <span>{by.label()}</span>
            </label>
        }
    };

    html! {
        <div class="relative">
            <button class="btn btn-circle btn-sm" aria-label="Sort options" onclick={toggle}>
                <span class={classes!("iconify", icon, "size-4")}></span>
            </button>
            if *open {
                <div class="absolute right-0 z-10 mt-2 w-40 rounded-box bg-base-100 p-3 shadow">
                    <h4 class="mb-2 text-sm font-semibold">{"Sort by:"}</h4>
                    { option(SortBy::Number) }
                    { option(SortBy::Name) }
                </div>
            }
        </div>
    }
}
