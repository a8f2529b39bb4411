use yew::prelude::*;

use crate::carousel::Command;
use crate::components::use_carousel::use_carousel;
use crate::config::CarouselConfig;
use crate::content::Branch;

#[derive(Properties, PartialEq)]
pub struct BranchCoverflowProps {
    pub branches: Vec<Branch>,
}

#[function_component(BranchCoverflow)]
pub fn branch_coverflow(props: &BranchCoverflowProps) -> Html {
    let carousel = use_carousel(CarouselConfig::branches(), props.branches.len());
    let state = &carousel.state;

    if state.is_inert() {
        return html! {};
    }

    let Some(current) = props.branches.get(state.current()) else {
        return html! {};
    };

    html! {
        <div class="branch-coverflow">
            <style>
                {r#"
                    .branch-coverflow {
                        position: relative;
                        padding: 2rem 0 4rem;
                    }
                    .branch-stage {
                        position: relative;
                        height: 380px;
                        perspective: 1200px;
                    }
                    .branch-card {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        width: 280px;
                        height: 360px;
                        margin-left: -140px;
                        border-radius: 16px;
                        overflow: hidden;
                        cursor: pointer;
                        transition: transform 0.7s ease, opacity 0.7s ease;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                    }
                    .branch-card img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .branch-card.active { transform: translateX(0) scale(1); z-index: 5; opacity: 1; }
                    .branch-card.left-1 { transform: translateX(-65%) scale(0.85) rotateY(25deg); z-index: 4; opacity: 0.85; }
                    .branch-card.right-1 { transform: translateX(65%) scale(0.85) rotateY(-25deg); z-index: 4; opacity: 0.85; }
                    .branch-card.left-2 { transform: translateX(-120%) scale(0.7) rotateY(35deg); z-index: 3; opacity: 0.5; }
                    .branch-card.right-2 { transform: translateX(120%) scale(0.7) rotateY(-35deg); z-index: 3; opacity: 0.5; }
                    .branch-card.hidden { transform: scale(0.5); z-index: 1; opacity: 0; pointer-events: none; }
                    .branch-caption {
                        text-align: center;
                        margin-top: 1.5rem;
                    }
                    .branch-caption a {
                        color: #1E90FF;
                        text-decoration: none;
                    }
                    .branch-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 1rem;
                    }
                    .branch-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(30, 144, 255, 0.3);
                        cursor: pointer;
                    }
                    .branch-dot.active { background: #1E90FF; }
                    @media (max-width: 768px) {
                        .branch-card.left-2,
                        .branch-card.right-2 { opacity: 0; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .branch-card { transition: none; }
                    }
                "#}
            </style>
            <div
                class="branch-stage"
                ontouchstart={carousel.on_touch_start()}
                ontouchend={carousel.on_touch_end()}
            >
                {
                    props.branches.iter().enumerate().map(|(i, branch)| {
                        html! {
                            <div
                                class={classes!("branch-card", state.presentation(i).class())}
                                onclick={carousel.command(Command::GoTo(i))}
                            >
                                <img src={branch.image.clone()} alt={format!("{} branch in {}", branch.name, branch.city)} loading="lazy" />
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="branch-caption">
                <h3>{current.name.clone()}</h3>
                <p>{current.city.clone()}</p>
                {
                    if let Some(phone) = &current.phone {
                        html! { <a href={format!("tel:{}", phone.replace(' ', ""))}>{phone.clone()}</a> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="branch-dots">
                {
                    (0..state.len()).map(|i| {
                        html! {
                            <button
                                class={classes!("branch-dot", (i == state.current()).then(|| "active"))}
                                aria-label={format!("Show branch {}", i + 1)}
                                onclick={carousel.command(Command::GoTo(i))}
                            ></button>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
