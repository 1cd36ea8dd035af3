use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod analytics;
mod config;
mod error;
mod menu;
mod nav;
mod navigator;
mod presence;
mod sections;
mod services;
mod sticky_cta;
mod view;

mod pages {
    pub mod landing;
}

mod components {
    pub mod floating_menu;
    pub mod header;
    pub mod presence;
    pub mod reviews;
    pub mod sticky_cta;
}

use pages::landing::Landing;
use services::PageServices;



#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            // Single page site; old links still land somewhere useful.
            info!("Unknown path, rendering Landing page");
            html! { <Landing /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let services = use_state(PageServices::browser);

    html! {
        <ContextProvider<PageServices> context={(*services).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<PageServices>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting storefront");
    yew::Renderer::<App>::new().render();
}
