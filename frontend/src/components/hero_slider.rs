use yew::prelude::*;

use crate::carousel::Command;
use crate::components::use_carousel::use_carousel;
use crate::config::CarouselConfig;
use crate::content::HeroSlide;

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<HeroSlide>,
}

#[function_component(HeroSlider)]
pub fn hero_slider(props: &HeroSliderProps) -> Html {
    let config = CarouselConfig::hero();
    let slide_duration_ms = config.slide_duration_ms;
    let carousel = use_carousel(config, props.slides.len());
    let state = &carousel.state;

    if state.is_inert() {
        return html! {};
    }

    html! {
        <section
            class="hero"
            onmouseenter={carousel.on_pointer_enter()}
            onmouseleave={carousel.on_pointer_leave()}
        >
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 90vh;
                        min-height: 520px;
                        overflow: hidden;
                        background: #111;
                        color: #fff;
                    }
                    .hero-slider-wrapper {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-slide {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 1.2s ease, transform 1.2s ease;
                        transform: scale(1.04);
                    }
                    .hero-slide.active {
                        opacity: 1;
                        visibility: visible;
                        transform: scale(1);
                        z-index: 2;
                    }
                    .hero-slide.leaving {
                        opacity: 0;
                        visibility: visible;
                        z-index: 1;
                    }
                    .hero-slide img,
                    .hero-slide video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-slide-content {
                        position: absolute;
                        left: 8%;
                        bottom: 18%;
                        max-width: 640px;
                    }
                    .hero-slide-content h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .hero-cta {
                        display: inline-block;
                        margin-top: 1.5rem;
                        padding: 0.9rem 2rem;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #1E90FF, #4169E1);
                        color: #fff;
                        text-decoration: none;
                    }
                    .slider-arrow {
                        position: absolute;
                        top: 50%;
                        z-index: 3;
                        background: rgba(0, 0, 0, 0.35);
                        color: #fff;
                        border: none;
                        border-radius: 50%;
                        width: 48px;
                        height: 48px;
                        cursor: pointer;
                    }
                    .slider-arrow.prev { left: 2rem; }
                    .slider-arrow.next { right: 2rem; }
                    .slider-dots {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 0.6rem;
                        z-index: 3;
                    }
                    .slider-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.4);
                        cursor: pointer;
                    }
                    .slider-dot.active { background: #fff; }
                    .slide-counter {
                        position: absolute;
                        right: 2rem;
                        bottom: 2rem;
                        z-index: 3;
                        font-variant-numeric: tabular-nums;
                    }
                    .slider-progress {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 3px;
                        background: rgba(255, 255, 255, 0.15);
                        z-index: 3;
                    }
                    .slider-progress-bar {
                        height: 100%;
                        width: 0;
                        background: #1E90FF;
                    }
                    .slider-progress-bar.running {
                        animation-name: sliderProgress;
                        animation-timing-function: linear;
                        animation-fill-mode: forwards;
                    }
                    @keyframes sliderProgress {
                        from { width: 0; }
                        to { width: 100%; }
                    }
                    @media (max-width: 768px) {
                        .hero-slide-content h1 { font-size: 2rem; }
                        .slider-arrow { display: none; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .hero-slide { transition: none; }
                        .slider-progress { display: none; }
                    }
                "#}
            </style>
            <div
                class="hero-slider-wrapper"
                ontouchstart={carousel.on_touch_start()}
                ontouchend={carousel.on_touch_end()}
            >
                {
                    props.slides.iter().enumerate().map(|(i, slide)| {
                        html! {
                            <div class={classes!("hero-slide", state.presentation(i).class())}>
                                {
                                    if let Some(video) = &slide.video {
                                        html! {
                                            <video src={video.clone()} poster={slide.image.clone()} autoplay={true} muted={true}></video>
                                        }
                                    } else {
                                        html! {
                                            <img src={slide.image.clone()} alt={slide.title.clone()} loading={if i == 0 { "eager" } else { "lazy" }} />
                                        }
                                    }
                                }
                                <div class="hero-slide-content">
                                    <h1>{slide.title.clone()}</h1>
                                    <p>{slide.subtitle.clone()}</p>
                                    <a class="hero-cta" href={slide.cta_href.clone()}>{slide.cta_label.clone()}</a>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <button class="slider-arrow prev" aria-label="Previous slide" onclick={carousel.command(Command::Prev)}>
                {"‹"}
            </button>
            <button class="slider-arrow next" aria-label="Next slide" onclick={carousel.command(Command::Next)}>
                {"›"}
            </button>
            <div class="slider-dots">
                {
                    (0..state.len()).map(|i| {
                        html! {
                            <button
                                class={classes!("slider-dot", (i == state.current()).then(|| "active"))}
                                aria-label={format!("Go to slide {}", i + 1)}
                                onclick={carousel.command(Command::GoTo(i))}
                            ></button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="slide-counter">
                <span class="current">{state.counter_label()}</span>
                {" / "}
                <span class="total">{state.total_label()}</span>
            </div>
            <div class="slider-progress">
                // A new key remounts the bar so its CSS animation restarts
                <div
                    key={state.progress_epoch().to_string()}
                    class="slider-progress-bar running"
                    style={format!("animation-duration: {}ms;", slide_duration_ms)}
                ></div>
            </div>
        </section>
    }
}
