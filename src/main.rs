use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod navigation;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

#[derive(Clone, Debug, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[at("/guest/reserve")]
    GuestReserve,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/* =======================
Main App with Router
======================= */

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <components::home::Home /> },
        Route::GuestReserve => html! { <components::reserve::Reserve /> },
        Route::NotFound => html! { <components::not_found::NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
