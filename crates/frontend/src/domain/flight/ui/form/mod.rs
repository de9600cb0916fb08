pub mod view_model;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use self::view_model::{
    FlightFormViewModel, INTERNATIONAL_FLIGHT_TYPE_ID, NATIONAL_FLIGHT_TYPE_ID,
};
use crate::shared::icons::icon;

/// Create/edit form for a flight.
#[component]
#[allow(non_snake_case)]
pub fn FlightForm(vm: FlightFormViewModel, on_saved: Callback<()>) -> impl IntoView {
    let navigate = use_navigate();

    let flight_type_button = move |id: &'static str, label: &'static str| {
        view! {
            <button
                type="button"
                class="button button--toggle"
                class:button--toggle-active=move || vm.fields.get().flight_type_id == id
                on:click=move |_| {
                    vm.fields.update(|f| f.flight_type_id = id.to_string());
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <form class="details-form" on:submit=move |ev| ev.prevent_default()>
            <fieldset class="form-fieldset">
                <legend>{"Características del vuelo"}</legend>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="form-row">
                    <div class="form-group">
                        <label for="flight-number">{"Número de vuelo"}</label>
                        <input
                            type="text"
                            id="flight-number"
                            placeholder="SA1234"
                            maxlength="6"
                            prop:value=move || vm.fields.get().flight_number
                            on:input=move |ev| {
                                vm.fields.update(|f| f.flight_number = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="airplane-type">{"Tipo de avión"}</label>
                        <select
                            id="airplane-type"
                            on:change=move |ev| {
                                vm.fields.update(|f| f.airplane_type_id = event_target_value(&ev));
                            }
                        >
                            <option
                                value=""
                                disabled=true
                                selected=move || vm.fields.get().airplane_type_id.is_empty()
                            >
                                {"Selecciona un tipo de avión"}
                            </option>
                            {move || {
                                if let Some(e) = vm.airplane_types_error.get() {
                                    return view! {
                                        <option disabled=true>{format!("Error al cargar los tipos de avión: {e}")}</option>
                                    }
                                    .into_any();
                                }
                                vm.airplane_types
                                    .get()
                                    .into_iter()
                                    .map(|airplane_type| {
                                        let id = airplane_type.id.clone();
                                        let selected_id = id.clone();
                                        let label =
                                            format!("{} - {}", airplane_type.family.name, airplane_type.id);
                                        view! {
                                            <option
                                                value=id
                                                selected=move || vm.fields.get().airplane_type_id == selected_id
                                            >
                                                {label}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>{"Tipo de vuelo"}</label>
                        <div class="toggle-group">
                            {flight_type_button(NATIONAL_FLIGHT_TYPE_ID, "Nacional")}
                            {flight_type_button(INTERNATIONAL_FLIGHT_TYPE_ID, "Internacional")}
                        </div>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="price">{"Precio"}</label>
                        <input
                            type="number"
                            id="price"
                            placeholder="0.00"
                            min="0"
                            prop:value=move || vm.fields.get().price
                            on:input=move |ev| {
                                vm.fields.update(|f| f.price = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="surcharge-percentage">{"Porcentaje de sobrecargo"}</label>
                        <input
                            type="number"
                            id="surcharge-percentage"
                            placeholder="0%"
                            min="0"
                            prop:value=move || vm.fields.get().surcharge_percentage
                            on:input=move |ev| {
                                vm.fields.update(|f| f.surcharge_percentage = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="tax-percentage">{"Porcentaje de impuestos"}</label>
                        <input
                            type="number"
                            id="tax-percentage"
                            placeholder="0%"
                            min="0"
                            prop:value=move || vm.fields.get().tax_percentage
                            on:input=move |ev| {
                                vm.fields.update(|f| f.tax_percentage = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>{"Salida"}</label>
                        <div class="form-inline">
                            <input
                                type="text"
                                id="departure-airport"
                                placeholder="Aeropuerto (IATA)"
                                maxlength="3"
                                prop:value=move || vm.fields.get().origin_iata
                                on:input=move |ev| {
                                    vm.fields.update(|f| f.origin_iata = event_target_value(&ev));
                                }
                            />
                            <input
                                type="datetime-local"
                                id="departure-date"
                                prop:value=move || vm.fields.get().departure
                                on:input=move |ev| {
                                    vm.fields.update(|f| f.departure = event_target_value(&ev));
                                }
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label>{"Llegada"}</label>
                        <div class="form-inline">
                            <input
                                type="text"
                                id="arrival-airport"
                                placeholder="Aeropuerto (IATA)"
                                maxlength="3"
                                prop:value=move || vm.fields.get().destination_iata
                                on:input=move |ev| {
                                    vm.fields.update(|f| f.destination_iata = event_target_value(&ev));
                                }
                            />
                            <input
                                type="datetime-local"
                                id="arrival-date"
                                prop:value=move || vm.fields.get().arrival
                                on:input=move |ev| {
                                    vm.fields.update(|f| f.arrival = event_target_value(&ev));
                                }
                            />
                        </div>
                    </div>
                </div>

                {move || {
                    (!vm.all_fields_filled())
                        .then(|| view! { <p class="form-hint">{"Todos los campos son requeridos"}</p> })
                }}
            </fieldset>

            <div class="form-actions">
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| navigate("/flights", Default::default())
                >
                    {"Cancelar"}
                </button>
                <button
                    type="button"
                    class="button button--primary"
                    disabled=move || vm.saving.get() || !vm.all_fields_filled()
                    on:click=move |_| vm.save_command(on_saved)
                >
                    {move || if vm.saving.get() { icon("spinner") } else { icon("save") }}
                    {move || if vm.saving.get() { "Guardando..." } else { "Guardar cambios" }}
                </button>
            </div>
        </form>
    }
}
