use yew::prelude::*;

use crate::carousel::Command;
use crate::components::use_carousel::use_carousel;
use crate::config::CarouselConfig;
use crate::content::Franchise;

#[derive(Properties, PartialEq)]
pub struct FranchiseCarouselProps {
    pub franchises: Vec<Franchise>,
}

#[function_component(FranchiseCarousel)]
pub fn franchise_carousel(props: &FranchiseCarouselProps) -> Html {
    let carousel = use_carousel(CarouselConfig::franchise(), props.franchises.len());
    let state = &carousel.state;

    if state.is_inert() {
        return html! {};
    }

    let card_width = 100.0 / state.visible_count() as f64;
    let track_style = format!(
        "transform: translateX(-{}%);",
        state.track_shift_percent()
    );

    html! {
        <div
            class="franchise-carousel"
            onmouseenter={carousel.on_pointer_enter()}
            onmouseleave={carousel.on_pointer_leave()}
        >
            <style>
                {r#"
                    .franchise-carousel {
                        position: relative;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 3.5rem;
                    }
                    .franchise-viewport {
                        overflow: hidden;
                    }
                    .franchise-track {
                        display: flex;
                        transition: transform 0.6s ease;
                    }
                    .franchise-card {
                        flex-shrink: 0;
                        padding: 1rem;
                        box-sizing: border-box;
                        text-align: center;
                        transition: opacity 0.6s ease;
                    }
                    .franchise-card.hidden {
                        opacity: 0.35;
                    }
                    .franchise-card img {
                        width: 120px;
                        height: 120px;
                        object-fit: contain;
                    }
                    .franchise-card h3 {
                        margin: 1rem 0 0.25rem;
                    }
                    .franchise-nav {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        background: none;
                        border: 1px solid rgba(30, 144, 255, 0.4);
                        color: #1E90FF;
                        border-radius: 50%;
                        width: 40px;
                        height: 40px;
                        cursor: pointer;
                    }
                    .franchise-nav:disabled {
                        opacity: 0.3;
                        cursor: default;
                    }
                    .franchise-nav.prev { left: 0; }
                    .franchise-nav.next { right: 0; }
                    @media (prefers-reduced-motion: reduce) {
                        .franchise-track { transition: none; }
                    }
                "#}
            </style>
            <button
                class="franchise-nav prev"
                aria-label="Previous franchises"
                disabled={state.at_start()}
                onclick={carousel.command(Command::Prev)}
            >
                {"‹"}
            </button>
            <div
                class="franchise-viewport"
                ontouchstart={carousel.on_touch_start()}
                ontouchend={carousel.on_touch_end()}
            >
                <div class="franchise-track" style={track_style}>
                    {
                        props.franchises.iter().enumerate().map(|(i, franchise)| {
                            html! {
                                <div
                                    class={classes!("franchise-card", state.presentation(i).class())}
                                    style={format!("flex-basis: {}%;", card_width)}
                                >
                                    <img src={franchise.logo.clone()} alt={franchise.name.clone()} loading="lazy" />
                                    <h3>{franchise.name.clone()}</h3>
                                    <p>{franchise.tagline.clone()}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <button
                class="franchise-nav next"
                aria-label="Next franchises"
                disabled={state.at_end()}
                onclick={carousel.command(Command::Next)}
            >
                {"›"}
            </button>
        </div>
    }
}
