pub mod state;

use std::cmp::Ordering;

use contracts::domain::flight::Flight;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use self::state::create_state;
use crate::domain::flight::model;
use crate::domain::flight::ui::details::FlightDetails;
use crate::shared::confirm_dialog::{push_confirm, ConfirmOptions};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    filter_list, get_sort_class, get_sort_indicator, sort_list, Searchable, Sortable,
};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

#[derive(Clone, Debug)]
pub struct FlightRow {
    pub id: String,
    pub flight_number: String,
    pub status_name: String,
    pub flight_type_name: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
}

impl From<Flight> for FlightRow {
    fn from(f: Flight) -> Self {
        Self {
            id: f.id,
            flight_number: f.flight_number,
            status_name: f.status.status_name,
            flight_type_name: f.flight_type.name,
            origin: f.origin.airport_name,
            destination: f.destination.airport_name,
            departure: format!("{} {}", f.departure_date, f.departure_time),
            arrival: format!("{} {}", f.arrival_date, f.arrival_time),
        }
    }
}

impl Sortable for FlightRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "flight_number" => self
                .flight_number
                .to_lowercase()
                .cmp(&other.flight_number.to_lowercase()),
            "status" => self
                .status_name
                .to_lowercase()
                .cmp(&other.status_name.to_lowercase()),
            "origin" => self.origin.to_lowercase().cmp(&other.origin.to_lowercase()),
            "destination" => self
                .destination
                .to_lowercase()
                .cmp(&other.destination.to_lowercase()),
            "departure" => self.departure.cmp(&other.departure),
            "arrival" => self.arrival.cmp(&other.arrival),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for FlightRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.flight_number
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}

/// Flights page: filterable, sortable table with per-row actions.
#[component]
#[allow(non_snake_case)]
pub fn FlightList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let navigate = use_navigate();

    let state = create_state();
    let (items, set_items) = signal::<Vec<FlightRow>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(list) => {
                    set_items.set(list.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let open_details = move |id: String| {
        modal_stack.push_with_style(
            Some("max-width: min(920px, 90vw); width: min(920px, 90vw);".to_string()),
            move |handle| {
                let id = id.clone();
                view! { <FlightDetails id=id handle=handle /> }.into_any()
            },
        );
    };

    let delete_flight = move |id: String, flight_number: String| {
        let description = format!(
            "Si seleccionas 'Eliminar', el vuelo '{flight_number}' será eliminado y no podrás \
             recuperarlo."
        );
        push_confirm(
            modal_stack,
            ConfirmOptions {
                title: "¿Estás seguro de eliminar este vuelo?".to_string(),
                description,
                confirm_label: "Eliminar".to_string(),
                ..Default::default()
            },
            Callback::new(move |_| {
                let id = id.clone();
                spawn_local(async move {
                    match model::delete(&id).await {
                        Ok(()) => {
                            toasts.success("¡Éxito!", "Vuelo eliminado exitosamente");
                            fetch();
                        }
                        Err(_) => {
                            toasts.error("Algo salió mal", "No se pudo eliminar el vuelo");
                        }
                    }
                });
            }),
        );
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let visible_items = move || {
        let s = state.get();
        let mut rows = filter_list(items.get(), &s.filter);
        sort_list(&mut rows, &s.sort_field, s.sort_ascending);
        rows
    };

    fetch();

    let navigate_create = navigate.clone();
    let navigate_edit = navigate.clone();

    let sortable_header = move |field: &'static str, label: &'static str| {
        view! {
            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort(field)>
                {label}
                <span class=move || get_sort_class(&state.get().sort_field, field)>
                    {move || get_sort_indicator(&state.get().sort_field, field, state.get().sort_ascending)}
                </span>
            </th>
        }
    };

    view! {
        <main class="content">
            <h1>{"Vuelos"}</h1>
            <div class="header">
                <input
                    type="text"
                    class="filter-input"
                    placeholder="Filtrar por número de vuelo"
                    prop:value=move || state.get().filter
                    on:input=move |ev| {
                        state.update(|s| s.filter = event_target_value(&ev));
                    }
                />
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| navigate_create("/flights/create", Default::default())
                    >
                        {icon("plus")}
                        {"Agregar vuelo"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {sortable_header("flight_number", "Número de vuelo")}
                            {sortable_header("status", "Estado")}
                            <th class="table__header-cell">{"Tipo de vuelo"}</th>
                            {sortable_header("origin", "Origen")}
                            {sortable_header("destination", "Destino")}
                            {sortable_header("departure", "Fecha de salida")}
                            {sortable_header("arrival", "Fecha de llegada")}
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible_items();
                            if rows.is_empty() {
                                let message = if loading.get() {
                                    "Cargando..."
                                } else {
                                    "No hay datos para mostrar."
                                };
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="8">{message}</td>
                                    </tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|row| {
                                    let edit_id = row.id.clone();
                                    let details_id = row.id.clone();
                                    let delete_id = row.id.clone();
                                    let delete_number = row.flight_number.clone();
                                    let navigate_edit = navigate_edit.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.flight_number.clone()}</td>
                                            <td class="table__cell">{row.status_name.clone()}</td>
                                            <td class="table__cell">{row.flight_type_name.clone()}</td>
                                            <td class="table__cell">{row.origin.clone()}</td>
                                            <td class="table__cell">{row.destination.clone()}</td>
                                            <td class="table__cell">{row.departure.clone()}</td>
                                            <td class="table__cell">{row.arrival.clone()}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost"
                                                    title="Editar"
                                                    on:click=move |_| {
                                                        navigate_edit(
                                                            &format!("/flights/edit/{edit_id}"),
                                                            Default::default(),
                                                        )
                                                    }
                                                >
                                                    {icon("pencil")}
                                                </button>
                                                <button
                                                    class="button button--ghost"
                                                    title="Ver detalles"
                                                    on:click=move |_| open_details(details_id.clone())
                                                >
                                                    {icon("eye")}
                                                </button>
                                                <button
                                                    class="button button--ghost button--destructive"
                                                    title="Eliminar"
                                                    on:click=move |_| {
                                                        delete_flight(delete_id.clone(), delete_number.clone())
                                                    }
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </main>
    }
}
