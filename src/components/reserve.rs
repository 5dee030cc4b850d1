use crate::navigation::{HOME, intent_callback};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Reserve)]
pub fn reserve() -> Html {
    let on_back = intent_callback(use_navigator(), HOME);

    html! {
        <div class="reserve-container">
            <h1>{"Make a Reservation"}</h1>
            <div class="reserve-content">
                <p>{"Guest bookings are handled by the reservation service."}</p>
                <ul>
                    <li>{"Pick a date and a time slot"}</li>
                    <li>{"Tell us how many people are coming"}</li>
                    <li>{"Leave a name and a way to reach you"}</li>
                </ul>
            </div>

            <button onclick={on_back} class="btn btn-back">
                {"Back to Home"}
            </button>
        </div>
    }
}
