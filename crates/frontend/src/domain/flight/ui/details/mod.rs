use contracts::domain::flight::Flight;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::domain::flight::model;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;

/// Read-only details dialog for one flight.
#[component]
#[allow(non_snake_case)]
pub fn FlightDetails(id: String, handle: ModalHandle) -> impl IntoView {
    let navigate = use_navigate();

    let (flight, set_flight) = signal::<Option<Flight>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    {
        let id = id.clone();
        spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(f) => set_flight.set(Some(f)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    }

    let edit_id = id.clone();
    let close_handle = handle.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{"Detalle del vuelo"}</h3>
            </div>

            {move || {
                if let Some(e) = error.get() {
                    return view! {
                        <p class="error">
                            {icon("warning")}
                            {format!("Ocurrió un error al cargar el vuelo: {e}")}
                        </p>
                    }
                    .into_any();
                }

                let Some(flight) = flight.get() else {
                    return view! { <p>{"Cargando..."}</p> }.into_any();
                };

                view! {
                    <div class="details-body">
                        <div class="details-title-row">
                            <p class="details-title">{format!("Vuelo {}", flight.flight_number)}</p>
                            <button
                                class="button button--secondary"
                                on:click={
                                    let navigate = navigate.clone();
                                    let edit_id = edit_id.clone();
                                    move |_| {
                                        navigate(&format!("/flights/edit/{edit_id}"), Default::default())
                                    }
                                }
                            >
                                {icon("pencil")}
                                {"Editar"}
                            </button>
                        </div>
                        <hr />
                        <div class="details-grid">
                            <p><b>{"Estado: "}</b>{flight.status.status_name.clone()}</p>
                            <p><b>{"Tipo de vuelo: "}</b>{flight.flight_type.name.clone()}</p>
                            <p><b>{"Origen: "}</b>{flight.origin.iata_code.clone()}</p>
                            <p><b>{"Destino: "}</b>{flight.destination.iata_code.clone()}</p>
                            <p><b>{"Fecha de salida: "}</b>{flight.departure_date.clone()}</p>
                            <p><b>{"Hora de salida: "}</b>{flight.departure_time.clone()}</p>
                            <p><b>{"Fecha de llegada: "}</b>{flight.arrival_date.clone()}</p>
                            <p><b>{"Hora de llegada: "}</b>{flight.arrival_time.clone()}</p>
                            <p><b>{"Precio: "}</b>{format!("${:.2}", flight.price)}</p>
                            <p><b>{"Impuestos: "}</b>{format!("{}%", flight.tax_percentage)}</p>
                            <p><b>{"Sobrecargo: "}</b>{format!("{}%", flight.surcharge_percentage)}</p>
                            <p>
                                <b>{"Tipo de avión: "}</b>
                                {format!(
                                    "{} - {}",
                                    flight.airplane_type.family.name, flight.airplane_type.id
                                )}
                            </p>
                        </div>
                    </div>
                }
                .into_any()
            }}

            <div class="details-actions">
                <button class="button button--secondary" on:click=move |_| close_handle.close()>
                    {"Cerrar"}
                </button>
            </div>
        </div>
    }
}
