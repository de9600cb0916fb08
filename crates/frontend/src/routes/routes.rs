use crate::domain::airplane_type::ui::list::AirplaneTypeList;
use crate::domain::airplane_type::ui::pages::{CreateAirplaneTypePage, EditAirplaneTypePage};
use crate::domain::flight::ui::list::FlightList;
use crate::domain::flight::ui::pages::{CreateFlightPage, EditFlightPage};
use crate::layout::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::shared::modal_stack::ModalHost;
use crate::shared::toast::ToastHost;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="content">
            <h1>{"Página no encontrada"}</h1>
            <p>
                <a href="/">{"Volver a la gestión de vuelos"}</a>
            </p>
        </main>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/airplane-types") view=AirplaneTypeList />
                <Route path=path!("/airplane-types/create") view=CreateAirplaneTypePage />
                <Route path=path!("/airplane-types/edit/:id") view=EditAirplaneTypePage />
                <Route path=path!("/flights") view=FlightList />
                <Route path=path!("/flights/create") view=CreateFlightPage />
                <Route path=path!("/flights/edit/:id") view=EditFlightPage />
            </Routes>
            <ModalHost />
            <ToastHost />
        </Router>
    }
}
