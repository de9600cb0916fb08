use contracts::domain::airplane_type::{AirplaneFamily, AirplaneType, AirplaneTypePayload};
use contracts::domain::seats::SeatsLayout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::airplane_type::model;

/// Plain form fields outside the seats editor. `max_seats` stays raw until
/// submit so a half-typed number does not fight the input.
#[derive(Clone, Debug, Default)]
pub struct AirplaneTypeFields {
    pub name: String,
    pub family_id: String,
    pub max_seats: String,
}

/// ViewModel for the airplane-type form (create and edit).
///
/// Owns the [`SeatsLayout`] for the lifetime of the form; the layout is
/// never reset while a save is in flight.
#[derive(Clone, Copy)]
pub struct AirplaneTypeFormViewModel {
    pub fields: RwSignal<AirplaneTypeFields>,
    pub seats: RwSignal<SeatsLayout>,
    pub families: RwSignal<Vec<AirplaneFamily>>,
    pub families_error: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// `Some` in edit mode; the id is immutable there.
    pub existing_id: RwSignal<Option<String>>,
}

impl AirplaneTypeFormViewModel {
    pub fn new() -> Self {
        Self {
            fields: RwSignal::new(AirplaneTypeFields::default()),
            seats: RwSignal::new(SeatsLayout::new()),
            families: RwSignal::new(Vec::new()),
            families_error: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            existing_id: RwSignal::new(None),
        }
    }

    /// Populate the form from an existing record (edit flow).
    ///
    /// A stored distribution that does not parse rejects the whole record;
    /// the caller surfaces the error instead of opening the form.
    pub fn init_from(&self, airplane: &AirplaneType) -> Result<(), String> {
        let layout =
            SeatsLayout::parse(&airplane.seats_distribution).map_err(|e| e.to_string())?;

        self.fields.set(AirplaneTypeFields {
            name: airplane.id.clone(),
            family_id: airplane.family.id.clone(),
            max_seats: airplane.max_seats.to_string(),
        });
        self.seats.set(layout);
        self.existing_id.set(Some(airplane.id.clone()));
        Ok(())
    }

    /// Fetch the family catalog for the selector.
    pub fn load_families(&self) {
        let families = self.families;
        let families_error = self.families_error;
        spawn_local(async move {
            match model::fetch_families().await {
                Ok(list) => {
                    families.set(list);
                    families_error.set(None);
                }
                Err(e) => families_error.set(Some(e)),
            }
        });
    }

    pub fn is_edit_mode(&self) -> bool {
        self.existing_id.get().is_some()
    }

    pub fn add_row(&self) {
        self.seats.update(|layout| {
            layout.add_row();
        });
    }

    pub fn set_seat(&self, position: u32, raw: String) {
        let mut result = Ok(());
        self.seats.update(|layout| {
            result = layout.set_count(position, &raw);
        });
        match result {
            Ok(()) => self.error.set(None),
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    pub fn remove_row(&self, position: u32) {
        self.seats.update(|layout| {
            layout.remove_row(position);
        });
    }

    /// The `"3-3-X"`-style display string above the row inputs.
    pub fn seats_preview(&self) -> String {
        self.seats.get().preview()
    }

    /// Assemble the outbound payload. `None` plus an error signal when the
    /// submit contract is not met — no payload is built in that case.
    fn build_payload(&self) -> Option<AirplaneTypePayload> {
        let layout = self.seats.get();
        if !layout.is_complete() {
            self.error
                .set(Some("Por favor, completa la distribución de asientos".to_string()));
            return None;
        }
        let seats_distribution = match layout.encode() {
            Ok(encoded) => encoded,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return None;
            }
        };

        let fields = self.fields.get();
        let payload = AirplaneTypePayload {
            id: self.existing_id.get().unwrap_or_else(|| fields.name.trim().to_string()),
            type_id: fields.family_id.parse().unwrap_or(0),
            max_seats: fields.max_seats.parse().unwrap_or(0),
            seats_distribution,
        };

        if let Err(msg) = payload.validate() {
            self.error.set(Some(msg));
            return None;
        }
        Some(payload)
    }

    /// Validate and send. `on_saved` runs only after the mutation succeeds.
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get() {
            return;
        }
        let Some(payload) = self.build_payload() else {
            return;
        };

        let edit = self.is_edit_mode();
        let error = self.error;
        let saving = self.saving;

        saving.set(true);
        self.error.set(None);
        spawn_local(async move {
            let result = if edit {
                model::update(&payload).await
            } else {
                model::create(&payload).await
            };
            saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

// Rendering guards mirror the layout's own invariants so the buttons can be
// disabled exactly when the operation would be a no-op.
impl AirplaneTypeFormViewModel {
    pub fn can_add_row(&self) -> bool {
        !self.seats.get().is_full()
    }

    pub fn can_remove_row(&self) -> bool {
        !self.seats.get().is_single()
    }
}
