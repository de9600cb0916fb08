pub mod view_model;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use self::view_model::AirplaneTypeFormViewModel;
use crate::shared::icons::icon;

/// Create/edit form for an airplane type.
///
/// The same component serves both flows; the view-model decides based on
/// whether it was initialized from an existing record.
#[component]
#[allow(non_snake_case)]
pub fn AirplaneTypeForm(vm: AirplaneTypeFormViewModel, on_saved: Callback<()>) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <form class="details-form" on:submit=move |ev| ev.prevent_default()>
            <fieldset class="form-fieldset">
                <legend>{"Características del modelo"}</legend>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="form-group">
                    <label for="name">{"Nombre"}</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="Ej. A320"
                        prop:value=move || vm.fields.get().name
                        disabled=move || vm.is_edit_mode()
                        on:input=move |ev| {
                            vm.fields.update(|f| f.name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="family">{"Familia"}</label>
                        <select
                            id="family"
                            on:change=move |ev| {
                                vm.fields.update(|f| f.family_id = event_target_value(&ev));
                            }
                        >
                            <option value="" disabled=true selected=move || vm.fields.get().family_id.is_empty()>
                                {"Selecciona una familia"}
                            </option>
                            {move || {
                                if let Some(e) = vm.families_error.get() {
                                    return view! {
                                        <option disabled=true>{format!("Error al cargar las familias: {e}")}</option>
                                    }
                                    .into_any();
                                }
                                vm.families
                                    .get()
                                    .into_iter()
                                    .map(|family| {
                                        let id = family.id.clone();
                                        let selected_id = id.clone();
                                        view! {
                                            <option
                                                value=id
                                                selected=move || vm.fields.get().family_id == selected_id
                                            >
                                                {family.name}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="max-seats">{"Número de asientos"}</label>
                        <input
                            type="number"
                            id="max-seats"
                            placeholder="Ej. 100"
                            min="1"
                            max="10000"
                            prop:value=move || vm.fields.get().max_seats
                            on:input=move |ev| {
                                vm.fields.update(|f| f.max_seats = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <div class="seats-editor__header">
                    <label>
                        {"Distribución de asientos: "}
                        <span class="seats-editor__preview">{move || vm.seats_preview()}</span>
                    </label>
                    <button
                        type="button"
                        class="button button--primary"
                        disabled=move || !vm.can_add_row()
                        on:click=move |_| vm.add_row()
                    >
                        {icon("plus")}
                        {"Agregar fila"}
                    </button>
                </div>

                <div class="seats-editor__rows">
                    <For
                        each=move || vm.seats.with(|layout| layout.rows().map(|(pos, _)| pos).collect::<Vec<_>>())
                        key=|pos| *pos
                        children=move |position| {
                            view! {
                                <div class="seats-editor__row">
                                    <input
                                        type="number"
                                        min="1"
                                        max="10"
                                        placeholder="Ej. 3"
                                        prop:value=move || {
                                            vm.seats.with(|layout| {
                                                layout
                                                    .rows()
                                                    .find(|(pos, _)| *pos == position)
                                                    .and_then(|(_, count)| count)
                                                    .map(|c| c.to_string())
                                                    .unwrap_or_default()
                                            })
                                        }
                                        on:input=move |ev| vm.set_seat(position, event_target_value(&ev))
                                    />
                                    <button
                                        type="button"
                                        class="button button--link button--destructive"
                                        disabled=move || !vm.can_remove_row()
                                        on:click=move |_| vm.remove_row(position)
                                    >
                                        {"Eliminar fila"}
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </fieldset>

            <div class="form-actions">
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| navigate("/airplane-types", Default::default())
                >
                    {"Cancelar"}
                </button>
                <button
                    type="button"
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                    on:click=move |_| vm.save_command(on_saved)
                >
                    {move || if vm.saving.get() { icon("spinner") } else { icon("save") }}
                    {move || if vm.saving.get() { "Guardando..." } else { "Guardar cambios" }}
                </button>
            </div>
        </form>
    }
}
