use web_sys::{Event, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::viewport::scroll_y;
use crate::config::BACK_TO_TOP_THRESHOLD;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| scroll_y() > BACK_TO_TOP_THRESHOLD);

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            visible.set(scroll_y() > BACK_TO_TOP_THRESHOLD);
        });
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <>
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        width: 44px;
                        height: 44px;
                        border-radius: 50%;
                        border: none;
                        background: #1E90FF;
                        color: #fff;
                        cursor: pointer;
                        opacity: 0;
                        pointer-events: none;
                        transform: translateY(12px);
                        transition: opacity 0.3s ease, transform 0.3s ease;
                        z-index: 50;
                    }
                    .back-to-top.visible {
                        opacity: 1;
                        pointer-events: auto;
                        transform: translateY(0);
                    }
                "#}
            </style>
            <button
                class={classes!("back-to-top", (*visible).then(|| "visible"))}
                aria-label="Back to top"
                {onclick}
            >
                {"↑"}
            </button>
        </>
    }
}
