use yew::prelude::*;
use log::info;

use crate::components::back_to_top::BackToTop;
use crate::components::branch_coverflow::BranchCoverflow;
use crate::components::franchise_carousel::FranchiseCarousel;
use crate::components::hero_slider::HeroSlider;
use crate::components::reveal::Reveal;
use crate::components::stats::StatsStrip;
use crate::content::{self, SiteContent};

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_state(content::site_content);
    let SiteContent { hero, franchises, branches, stats } = (*content).clone();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                info!("Home page mounted");
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        background: #0d0d0d;
                        color: #eee;
                    }
                    .landing-section {
                        padding: 5rem 1.5rem;
                    }
                    .landing-section h2 {
                        text-align: center;
                        font-size: 2.4rem;
                        margin-bottom: 2.5rem;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .reveal.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .reveal {
                            opacity: 1;
                            transform: none;
                            transition: none;
                        }
                    }
                "#}
            </style>
            <HeroSlider slides={hero} />
            <Reveal id={AttrValue::from("stats")} class={classes!("landing-section")}>
                <StatsStrip {stats} />
            </Reveal>
            <Reveal id={AttrValue::from("franchises")} class={classes!("landing-section")}>
                <h2>{"Our brands"}</h2>
                <FranchiseCarousel {franchises} />
            </Reveal>
            <Reveal id={AttrValue::from("branches")} class={classes!("landing-section")}>
                <h2>{"Find a branch"}</h2>
                <BranchCoverflow {branches} />
            </Reveal>
            <BackToTop />
        </div>
    }
}
