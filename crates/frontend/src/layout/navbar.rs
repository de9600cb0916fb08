use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top navigation bar shared by every page.
#[component]
#[allow(non_snake_case)]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">
                {icon("compass")}
                <h1>{"Singapur Airlines"}</h1>
            </a>
            <nav class="navbar__links">
                <a href="/airplane-types" class="navbar__link">
                    {icon("plane")}
                    {"Aeronaves"}
                </a>
                <a href="/flights" class="navbar__link">
                    {icon("globe")}
                    {"Vuelos"}
                </a>
                <a href="#" class="navbar__link navbar__link--disabled">
                    {icon("calendar")}
                    {"Reservas"}
                </a>
            </nav>
            <div class="navbar__account">
                {icon("user")}
            </div>
        </header>
    }
}
