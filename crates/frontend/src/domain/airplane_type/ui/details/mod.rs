use contracts::domain::airplane_type::AirplaneType;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::domain::airplane_type::model;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;

/// Read-only details dialog for one airplane type.
#[component]
#[allow(non_snake_case)]
pub fn AirplaneTypeDetails(id: String, handle: ModalHandle) -> impl IntoView {
    let navigate = use_navigate();

    let (airplane, set_airplane) = signal::<Option<AirplaneType>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    {
        let id = id.clone();
        spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(a) => set_airplane.set(Some(a)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    }

    let edit_id = id.clone();
    let close_handle = handle.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{"Detalle de la aeronave"}</h3>
            </div>

            {move || {
                if let Some(e) = error.get() {
                    return view! {
                        <p class="error">
                            {icon("warning")}
                            {format!("Ocurrió un error al cargar la aeronave: {e}")}
                        </p>
                    }
                    .into_any();
                }

                let Some(airplane) = airplane.get() else {
                    return view! { <p>{"Cargando..."}</p> }.into_any();
                };

                view! {
                    <div class="details-body">
                        <div class="details-title-row">
                            <p class="details-title">{format!("Aeronave {}", airplane.id)}</p>
                            <button
                                class="button button--secondary"
                                on:click={
                                    let navigate = navigate.clone();
                                    let edit_id = edit_id.clone();
                                    move |_| {
                                        navigate(
                                            &format!("/airplane-types/edit/{edit_id}"),
                                            Default::default(),
                                        )
                                    }
                                }
                            >
                                {icon("pencil")}
                                {"Editar"}
                            </button>
                        </div>
                        <hr />
                        <div class="details-grid">
                            <p><b>{"Familia: "}</b>{airplane.family.name.clone()}</p>
                            <p><b>{"Modelo: "}</b>{airplane.id.clone()}</p>
                            <p><b>{"Distribución de asientos: "}</b>{airplane.seats_distribution.clone()}</p>
                            <p><b>{"Capacidad de pasajeros: "}</b>{airplane.max_seats}</p>
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
