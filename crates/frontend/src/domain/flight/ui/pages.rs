use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use super::form::view_model::FlightFormViewModel;
use super::form::FlightForm;
use crate::domain::flight::model;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

#[component]
#[allow(non_snake_case)]
pub fn CreateFlightPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let navigate = use_navigate();

    let vm = FlightFormViewModel::new();
    vm.load_airplane_types();

    let saved = RwSignal::new(false);
    Effect::new(move |_| {
        if saved.get() {
            navigate("/flights", Default::default());
        }
    });

    let on_saved = Callback::new(move |_| {
        toasts.success("Vuelo creado", "El vuelo ha sido registrado exitosamente");
        saved.set(true);
    });

    view! {
        <main class="content">
            <h1>{"Agregar vuelo"}</h1>
            <FlightForm vm=vm on_saved=on_saved />
        </main>
    }
}

/// Edit page: receives the flight id as a path parameter and loads the
/// record into the form.
#[component]
#[allow(non_snake_case)]
pub fn EditFlightPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let navigate = use_navigate();
    let params = use_params_map();

    let vm = FlightFormViewModel::new();
    vm.load_airplane_types();

    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    let flight_id = params.get_untracked().get("id").unwrap_or_default();
    spawn_local(async move {
        match model::fetch_by_id(&flight_id).await {
            Ok(flight) => {
                if let Err(e) = vm.init_from(&flight) {
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
            navigate("/flights", Default::default());
        }
    });

    let on_saved = Callback::new(move |_| {
        toasts.success("Vuelo actualizado", "El vuelo ha sido actualizado exitosamente");
        saved.set(true);
    });

    view! {
        <main class="content">
            <h1>{"Editar vuelo"}</h1>
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
                            {format!("No se pudo cargar el vuelo: {e}")}
                        </p>
                    }
                    .into_any();
                }
                view! { <FlightForm vm=vm on_saved=on_saved /> }.into_any()
            }}
        </main>
    }
}
