use crate::shared::icons::icon;
use leptos::prelude::*;

/// Entry hub of the back office: one card per management section.
#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="content">
            <h1>{"Gestión de Vuelos"}</h1>
            <div class="home-cards">
                <a href="/flights" class="home-card">
                    <span class="home-card__icon">{icon("globe")}</span>
                    <div>
                        <h2>{"Vuelos"}</h2>
                        <p>{"Gestiona los vuelos disponibles para los pasajeros"}</p>
                    </div>
                </a>
                <a href="/airplane-types" class="home-card">
                    <span class="home-card__icon">{icon("plane")}</span>
                    <div>
                        <h2>{"Aeronaves"}</h2>
                        <p>{"Gestiona los modelos de aeronaves disponibles para los vuelos"}</p>
                    </div>
                </a>
            </div>
        </main>
    }
}
