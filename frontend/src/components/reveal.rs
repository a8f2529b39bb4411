use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::viewport::inner_height;
use crate::config::REVEAL_THRESHOLD;

/// Whether at least `threshold` of an element's height lies inside a viewport
/// of the given height. Zero-height elements count once their top is on
/// screen.
pub fn is_revealed(top: f64, bottom: f64, viewport_height: f64, threshold: f64) -> bool {
    let height = bottom - top;
    if height <= 0.0 {
        return top >= 0.0 && top < viewport_height;
    }
    let visible = bottom.min(viewport_height) - top.max(0.0);
    visible > 0.0 && visible / height >= threshold
}

fn node_in_view(node: &NodeRef, threshold: f64) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let Some(viewport_height) = inner_height() else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    is_revealed(rect.top(), rect.bottom(), viewport_height, threshold)
}

/// Flips to `true` the first time the referenced element scrolls into view
/// and stays there.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);

    let check = {
        let revealed = revealed.clone();
        move || {
            if !*revealed && node_in_view(&node, threshold) {
                revealed.set(true);
            }
        }
    };

    // Elements that start on screen reveal without a scroll
    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| check());

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), REVEAL_THRESHOLD);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), revealed.then(|| "revealed"))}
        >
            { for props.children.iter() }
        </section>
    }
}
