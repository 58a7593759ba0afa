use hmedia_shared::pagination::{
    clamp_page, resolve_navigation, visible_slots, PageNav, PageSlot, Side, DEFAULT_WINDOW_RADIUS,
};
use yew::prelude::*;

use crate::i18n::{current::pagination as t, fill_one};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
    /// Neighbours shown on each side of the current page.
    #[prop_or(DEFAULT_WINDOW_RADIUS)]
    pub radius: usize,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = clamp_page(props.current_page, total_pages);
    let slots = visible_slots(current_page, total_pages, props.radius);

    let navigate = {
        let on_page_change = props.on_page_change.clone();
        move |nav: PageNav| {
            let on_page_change = on_page_change.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(target) = resolve_navigation(current_page, total_pages, nav) {
                    on_page_change.emit(target);
                }
            })
        }
    };

    let prev_disabled = current_page <= 1;
    let next_disabled = current_page >= total_pages;

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-10",
        "px-3",
        "rounded-lg",
        "border",
        "border-gray-300",
        "bg-white",
        "text-gray-800",
        "text-sm",
        "font-semibold",
        "shadow-sm",
        "transition-all",
        "duration-200",
        "hover:-translate-y-[1px]",
        "hover:border-red-600",
        "hover:text-red-600",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed",
        "disabled:hover:translate-y-0"
    );

    html! {
        <nav class="flex flex-wrap items-center justify-center gap-3 py-6" aria-label={t::ARIA_NAV}>
            <button
                type="button"
                class={classes!(base_btn_classes.clone(), "min-w-[2.75rem]")}
                disabled={prev_disabled}
                onclick={navigate(PageNav::Previous)}
                aria-label={t::ARIA_PREV}
            >
                {"<"}
            </button>
            <div class={classes!("flex", "flex-wrap", "items-center", "gap-2")}>
                { for slots.into_iter().map(|slot| match slot {
                    PageSlot::Page(page) => {
                        let is_current = page == current_page;
                        let page_classes = classes!(
                            base_btn_classes.clone(),
                            is_current.then_some(
                                "bg-red-600 text-white border-transparent cursor-default pointer-events-none"
                            )
                        );
                        html! {
                            <button
                                key={format!("page-{page}")}
                                type="button"
                                class={page_classes}
                                aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, page)}
                                aria-current={is_current.then(|| AttrValue::from("page"))}
                                disabled={is_current}
                                onclick={navigate(PageNav::Goto(page))}
                            >
                                { page }
                            </button>
                        }
                    }
                    PageSlot::Ellipsis(side) => {
                        let id = match side {
                            Side::Left => "left",
                            Side::Right => "right",
                        };
                        html! {
                            <span
                                key={format!("ellipsis-{id}")}
                                class={classes!(
                                    base_btn_classes.clone(),
                                    "select-none",
                                    "cursor-default",
                                    "opacity-60",
                                    "pointer-events-none"
                                )}
                                aria-hidden="true"
                            >
                                {"..."}
                            </span>
                        }
                    }
                }) }
            </div>
            <button
                type="button"
                class={classes!(base_btn_classes.clone(), "min-w-[2.75rem]")}
                disabled={next_disabled}
                onclick={navigate(PageNav::Next)}
                aria-label={t::ARIA_NEXT}
            >
                {">"}
            </button>
        </nav>
    }
}
