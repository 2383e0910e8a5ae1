use std::rc::Rc;

use gloo::console;
use gloo::timers::callback::Interval;
use yew::prelude::*;

use pizza_menu::{App, BrowserClock, Clock, MenuConfig};

const HOUR_POLL_MS: u32 = 60_000;

#[derive(Properties, PartialEq)]
struct RootProps {
    config: Rc<MenuConfig>,
}

#[function_component(Root)]
fn root(props: &RootProps) -> Html {
    let hour = use_state_eq(|| BrowserClock.current_hour());

    // Re-read the clock once a minute; only an hour change re-renders
    {
        let hour = hour.clone();
        use_effect_with((), move |_| {
            let handle = Interval::new(HOUR_POLL_MS, move || hour.set(BrowserClock.current_hour()));
            || drop(handle)
        });
    }

    {
        let hours = props.config.hours;
        use_effect_with(*hour, move |h| {
            let state = if hours.is_open(*h) { "open" } else { "closed" };
            console::log!(format!("hour {}: store {}", h, state));
            || ()
        });
    }

    html! { <App config={props.config.clone()} hour={*hour} /> }
}

#[function_component(MenuUnavailable)]
fn menu_unavailable() -> Html {
    html! {
        <div class="container">
            <p>{ "The menu could not be loaded. Please come back later :)" }</p>
        </div>
    }
}

fn main() {
    match MenuConfig::embedded() {
        Ok(cfg) => {
            console::log!(format!(
                "menu loaded: {} items, open {}:00-{}:00",
                cfg.items.len(),
                cfg.hours.open,
                cfg.hours.close
            ));
            yew::Renderer::<Root>::with_props(RootProps {
                config: Rc::new(cfg),
            })
            .render();
        }
        Err(e) => {
            console::error!(format!("menu config: {}", e));
            yew::Renderer::<MenuUnavailable>::new().render();
        }
    }
}
