use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use super::form::view_model::AirplaneTypeFormViewModel;
use super::form::AirplaneTypeForm;
use crate::domain::airplane_type::model;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

#[component]
#[allow(non_snake_case)]
pub fn CreateAirplaneTypePage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let navigate = use_navigate();

    let vm = AirplaneTypeFormViewModel::new();
    vm.load_families();

    // Navigation happens from an effect: event callbacks only flip the flag.
    let saved = RwSignal::new(false);
    Effect::new(move |_| {
        if saved.get() {
            navigate("/airplane-types", Default::default());
        }
    });

    let on_saved = Callback::new(move |_| {
        toasts.success(
            "Tipo de aeronave creado",
            "La aeronave ha sido registrada exitosamente",
        );
        saved.set(true);
    });

    view! {
        <main class="content">
            <h1>{"Agregar aeronave"}</h1>
            <AirplaneTypeForm vm=vm on_saved=on_saved />
        </main>
    }
}

/// Edit page: receives the airplane-type id as a path parameter and loads
/// the record into the form. A record whose stored seats distribution does
/// not parse is reported as a load error instead of opening a broken form.
#[component]
#[allow(non_snake_case)]
pub fn EditAirplaneTypePage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let navigate = use_navigate();
    let params = use_params_map();

    let vm = AirplaneTypeFormViewModel::new();
    vm.load_families();

    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    let airplane_type_id = params.get_untracked().get("id").unwrap_or_default();
    spawn_local(async move {
        match model::fetch_by_id(&airplane_type_id).await {
            Ok(airplane) => {
                if let Err(e) = vm.init_from(&airplane) {
                    set_load_error.set(Some(e));
                }
            }
            Err(e) => set_load_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    let saved = RwSignal::new(false);
    Effect::new(move |_| {
        if saved.get() {
            navigate("/airplane-types", Default::default());
        }
    });

    let on_saved = Callback::new(move |_| {
        toasts.success(
            "Tipo de aeronave actualizado",
            "El tipo de aeronave ha sido actualizado exitosamente",
        );
        saved.set(true);
    });

    view! {
        <main class="content">
            <h1>{"Editar tipo de aeronave"}</h1>
            {move || {
                if loading.get() {
                    return view! {
                        <div class="loading">
                            {icon("spinner")}
                            <p>{"Cargando..."}</p>
                        </div>
                    }
                    .into_any();
                }
                if let Some(e) = load_error.get() {
                    return view! {
                        <p class="error">
                            {icon("warning")}
                            {format!("No se pudo cargar el tipo de aeronave: {e}")}
                        </p>
                    }
                    .into_any();
                }
                view! { <AirplaneTypeForm vm=vm on_saved=on_saved /> }.into_any()
            }}
        </main>
    }
}
