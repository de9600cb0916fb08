//! Confirmation dialog for destructive actions.

use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ConfirmOptions {
    pub title: String,
    pub description: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            title: "¿Estás completamente seguro?".to_string(),
            description: "Esta acción no se puede deshacer. ¿Estás seguro de que quieres \
                          eliminar permanentemente este registro de nuestros servidores?"
                .to_string(),
            cancel_label: "Cancelar".to_string(),
            confirm_label: "Confirmar".to_string(),
        }
    }
}

/// Push a confirmation dialog onto the modal stack. `on_confirm` runs only
/// when the destructive action is confirmed; dismissing the dialog any other
/// way runs nothing.
pub fn push_confirm(modal_stack: ModalStackService, options: ConfirmOptions, on_confirm: Callback<()>) {
    modal_stack.push_with_style(
        Some("max-width: min(480px, 90vw);".to_string()),
        move |handle| {
            view! {
                <ConfirmDialog options=options.clone() handle=handle on_confirm=on_confirm />
            }
            .into_any()
        },
    );
}

#[component]
pub fn ConfirmDialog(
    options: ConfirmOptions,
    handle: ModalHandle,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let cancel_handle = handle.clone();
    let confirm_handle = handle.clone();

    view! {
        <div class="confirm-dialog">
            <div class="confirm-dialog__header">
                <h3>{options.title}</h3>
                <p>{options.description}</p>
            </div>
            <div class="confirm-dialog__footer">
                <button class="button button--secondary" on:click=move |_| cancel_handle.close()>
                    {options.cancel_label}
                </button>
                <button
                    class="button button--destructive"
                    on:click=move |_| {
                        confirm_handle.close();
                        on_confirm.run(());
                    }
                >
                    {icon("trash")}
                    {options.confirm_label}
                </button>
            </div>
        </div>
    }
}
