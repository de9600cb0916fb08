pub mod state;

use std::cmp::Ordering;

use contracts::domain::airplane_type::AirplaneType;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use self::state::create_state;
use crate::domain::airplane_type::model;
use crate::domain::airplane_type::ui::details::AirplaneTypeDetails;
use crate::shared::confirm_dialog::{push_confirm, ConfirmOptions};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    filter_list, get_sort_class, get_sort_indicator, sort_list, Searchable, Sortable,
};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

#[derive(Clone, Debug)]
pub struct AirplaneTypeRow {
    pub id: String,
    pub family_name: String,
    pub max_seats: i32,
    pub seats_distribution: String,
}

impl From<AirplaneType> for AirplaneTypeRow {
    fn from(a: AirplaneType) -> Self {
        Self {
            id: a.id,
            family_name: a.family.name,
            max_seats: a.max_seats,
            seats_distribution: a.seats_distribution,
        }
    }
}

impl Sortable for AirplaneTypeRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "model" => self.id.to_lowercase().cmp(&other.id.to_lowercase()),
            "family" => self
                .family_name
                .to_lowercase()
                .cmp(&other.family_name.to_lowercase()),
            "max_seats" => self.max_seats.cmp(&other.max_seats),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for AirplaneTypeRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.id.to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Fleet catalog page: filterable, sortable table of airplane types with
/// per-row edit/details/delete actions.
#[component]
#[allow(non_snake_case)]
pub fn AirplaneTypeList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let navigate = use_navigate();

    let state = create_state();
    let (items, set_items) = signal::<Vec<AirplaneTypeRow>>(Vec::new());
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
                view! { <AirplaneTypeDetails id=id handle=handle /> }.into_any()
            },
        );
    };

    let delete_airplane_type = move |id: String, family_name: String| {
        let description = format!(
            "Si seleccionas 'Eliminar', el tipo de avión '{family_name} {id}' será eliminado \
             y no podrás recuperarlo."
        );
        push_confirm(
            modal_stack,
            ConfirmOptions {
                title: "¿Estás seguro de eliminar este tipo de avión?".to_string(),
                description,
                confirm_label: "Eliminar".to_string(),
                ..Default::default()
            },
            Callback::new(move |_| {
                let id = id.clone();
                spawn_local(async move {
                    match model::delete(&id).await {
                        Ok(()) => {
                            toasts.success("¡Éxito!", "Tipo de avión eliminado exitosamente");
                            fetch();
                        }
                        Err(_) => {
                            toasts.error("Algo salió mal", "No se pudo eliminar el tipo de avión");
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

    view! {
        <main class="content">
            <h1>{"Aeronaves"}</h1>
            <div class="header">
                <input
                    type="text"
                    class="filter-input"
                    placeholder="Filtrar por modelo"
                    prop:value=move || state.get().filter
                    on:input=move |ev| {
                        state.update(|s| s.filter = event_target_value(&ev));
                    }
                />
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| navigate_create("/airplane-types/create", Default::default())
                    >
                        {icon("plus")}
                        {"Agregar aeronave"}
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("model")>
                                "Modelo"
                                <span class=move || get_sort_class(&state.get().sort_field, "model")>
                                    {move || get_sort_indicator(&state.get().sort_field, "model", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("family")>
                                "Familia de avión"
                                <span class=move || get_sort_class(&state.get().sort_field, "family")>
                                    {move || get_sort_indicator(&state.get().sort_field, "family", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("max_seats")>
                                "Número de asientos"
                                <span class=move || get_sort_class(&state.get().sort_field, "max_seats")>
                                    {move || get_sort_indicator(&state.get().sort_field, "max_seats", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Distribución de asientos"}</th>
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
                                        <td class="table__cell table__cell--empty" colspan="5">{message}</td>
                                    </tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|row| {
                                    let edit_id = row.id.clone();
                                    let details_id = row.id.clone();
                                    let delete_id = row.id.clone();
                                    let delete_family = row.family_name.clone();
                                    let navigate_edit = navigate_edit.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.id.clone()}</td>
                                            <td class="table__cell">{row.family_name.clone()}</td>
                                            <td class="table__cell">{row.max_seats}</td>
                                            <td class="table__cell">{row.seats_distribution.clone()}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost"
                                                    title="Editar"
                                                    on:click=move |_| {
                                                        navigate_edit(
                                                            &format!("/airplane-types/edit/{edit_id}"),
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
                                                        delete_airplane_type(delete_id.clone(), delete_family.clone())
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
