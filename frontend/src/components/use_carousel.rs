use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::{key_command, CarouselState, Command, Controller, GlooClock, Mode, SwipeTracker};
use crate::components::viewport::{page_hidden, prefers_reduced_motion, reduced_motion_query};
use crate::config::CarouselConfig;

/// What a carousel component needs to render and wire its controls.
#[derive(Clone)]
pub struct CarouselHandle {
    pub state: CarouselState,
    controller: Controller<GlooClock>,
    swipe: Rc<RefCell<SwipeTracker>>,
}

impl CarouselHandle {
    pub fn command(&self, command: Command) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            controller.apply(command);
        })
    }

    pub fn on_pointer_enter(&self) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |_| controller.pointer_enter())
    }

    pub fn on_pointer_leave(&self) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |_| controller.pointer_leave())
    }

    pub fn on_touch_start(&self) -> Callback<TouchEvent> {
        let swipe = self.swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                swipe.borrow_mut().begin(x);
            }
        })
    }

    pub fn on_touch_end(&self) -> Callback<TouchEvent> {
        let swipe = self.swipe.clone();
        let controller = self.controller.clone();
        Callback::from(move |e: TouchEvent| {
            let command = first_touch_x(&e).and_then(|x| swipe.borrow_mut().end(x));
            if let Some(command) = command {
                controller.apply(command);
            }
        })
    }
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.changed_touches().get(0).map(|touch| f64::from(touch.screen_x()))
}

/// Binds a carousel controller to the component lifetime.
///
/// Auto-advance starts on mount unless the visitor asked for reduced motion,
/// follows later changes of that preference, pauses while the tab is hidden,
/// and everything is torn down on unmount.
#[hook]
pub fn use_carousel(config: CarouselConfig, len: usize) -> CarouselHandle {
    let controller = {
        let config = config.clone();
        use_state(move || Controller::new(GlooClock, config, len))
    };
    let controller: Controller<GlooClock> = (*controller).clone();
    let view = {
        let controller = controller.clone();
        use_state(move || controller.state())
    };
    let swipe = {
        let threshold = config.swipe_threshold;
        use_mut_ref(move || SwipeTracker::new(threshold))
    };

    {
        let controller = controller.clone();
        let setter = view.setter();
        use_effect_with_deps(
            move |_| {
                controller.subscribe(Rc::new(move |state: &CarouselState| {
                    setter.set(state.clone());
                }));
                controller.set_reduced_motion(prefers_reduced_motion());
                // Arms the cadence unless the page opened in a background tab
                controller.set_page_hidden(page_hidden());

                let document = web_sys::window().and_then(|w| w.document());
                let visibility_callback = {
                    let controller = controller.clone();
                    Closure::wrap(Box::new(move || {
                        controller.set_page_hidden(page_hidden());
                    }) as Box<dyn FnMut()>)
                };
                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "visibilitychange",
                        visibility_callback.as_ref().unchecked_ref(),
                    );
                }

                let motion_query = reduced_motion_query();
                let motion_callback = {
                    let controller = controller.clone();
                    Closure::wrap(Box::new(move || {
                        controller.set_reduced_motion(prefers_reduced_motion());
                    }) as Box<dyn FnMut()>)
                };
                if let Some(query) = &motion_query {
                    let _ = query.add_event_listener_with_callback(
                        "change",
                        motion_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = &document {
                        let _ = document.remove_event_listener_with_callback(
                            "visibilitychange",
                            visibility_callback.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(query) = &motion_query {
                        let _ = query.remove_event_listener_with_callback(
                            "change",
                            motion_callback.as_ref().unchecked_ref(),
                        );
                    }
                    controller.shutdown();
                }
            },
            (),
        );
    }

    // Windowed carousels follow the viewport width
    let (width, _) = use_window_size();
    {
        let controller = controller.clone();
        let config = config.clone();
        use_effect_with_deps(
            move |width| {
                if config.mode == Mode::Windowed {
                    controller.set_visible_count(config.visible_count_for(*width));
                }
                || ()
            },
            width,
        );
    }

    {
        let controller = controller.clone();
        let enabled = config.keyboard;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !enabled {
                return;
            }
            if let Some(command) = key_command(&e.key()) {
                controller.apply(command);
            }
        });
    }

    CarouselHandle {
        state: (*view).clone(),
        controller,
        swipe,
    }
}
