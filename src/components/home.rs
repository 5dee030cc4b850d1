use crate::navigation::{MAKE_RESERVATION, intent_callback};
use yew::prelude::*;
use yew_router::prelude::*;

const BUILD_DATE: &str = env!("BUILD_DATE");

#[function_component(Home)]
pub fn home() -> Html {
    let on_reserve = intent_callback(use_navigator(), MAKE_RESERVATION);

    html! {
        <div class="home-container">
            <h1 class="home-title">{"Welcome"}</h1>
            <p class="home-subtitle">
                {"Book a table or a room as a guest, no account needed"}
            </p>
            <div class="home-buttons">
                <button onclick={on_reserve} class="btn btn-primary">
                    {MAKE_RESERVATION.label()}
                </button>
            </div>
            <footer class="home-footer">
                <span class="build-date">{format!("Built: {}", BUILD_DATE)}</span>
            </footer>
        </div>
    }
}
