use contracts::domain::airplane_type::AirplaneType;
use contracts::domain::flight::{join_datetime_local, split_datetime_local, Flight, FlightPayload};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::airplane_type::model as airplane_type_model;
use crate::domain::flight::model;

pub const NATIONAL_FLIGHT_TYPE_ID: &str = "1";
pub const INTERNATIONAL_FLIGHT_TYPE_ID: &str = "2";

/// New flights start out "Scheduled".
const DEFAULT_STATUS_ID: &str = "1";

/// Raw form fields. Departure and arrival hold `datetime-local` values and
/// are split into the date and time strings of the payload on submit.
#[derive(Clone, Debug)]
pub struct FlightFields {
    pub flight_number: String,
    pub airplane_type_id: String,
    pub flight_type_id: String,
    pub price: String,
    pub surcharge_percentage: String,
    pub tax_percentage: String,
    pub departure: String,
    pub arrival: String,
    pub origin_iata: String,
    pub destination_iata: String,
}

impl Default for FlightFields {
    fn default() -> Self {
        Self {
            flight_number: String::new(),
            airplane_type_id: String::new(),
            flight_type_id: NATIONAL_FLIGHT_TYPE_ID.to_string(),
            price: "0".to_string(),
            surcharge_percentage: "0".to_string(),
            tax_percentage: "0".to_string(),
            departure: String::new(),
            arrival: String::new(),
            origin_iata: String::new(),
            destination_iata: String::new(),
        }
    }
}

/// ViewModel for the flight form (create and edit).
#[derive(Clone, Copy)]
pub struct FlightFormViewModel {
    pub fields: RwSignal<FlightFields>,
    pub airplane_types: RwSignal<Vec<AirplaneType>>,
    pub airplane_types_error: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub existing_id: RwSignal<Option<String>>,
    status_id: RwSignal<String>,
}

impl FlightFormViewModel {
    pub fn new() -> Self {
        Self {
            fields: RwSignal::new(FlightFields::default()),
            airplane_types: RwSignal::new(Vec::new()),
            airplane_types_error: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            existing_id: RwSignal::new(None),
            status_id: RwSignal::new(DEFAULT_STATUS_ID.to_string()),
        }
    }

    /// Populate the form from an existing record (edit flow).
    pub fn init_from(&self, flight: &Flight) -> Result<(), String> {
        let departure = join_datetime_local(&flight.departure_date, &flight.departure_time)
            .ok_or_else(|| "fecha de salida inválida en el registro".to_string())?;
        let arrival = join_datetime_local(&flight.arrival_date, &flight.arrival_time)
            .ok_or_else(|| "fecha de llegada inválida en el registro".to_string())?;

        self.fields.set(FlightFields {
            flight_number: flight.flight_number.clone(),
            airplane_type_id: flight.airplane_type.id.clone(),
            flight_type_id: flight.flight_type.id.clone(),
            price: flight.price.to_string(),
            surcharge_percentage: flight.surcharge_percentage.to_string(),
            tax_percentage: flight.tax_percentage.to_string(),
            departure,
            arrival,
            origin_iata: flight.origin.iata_code.clone(),
            destination_iata: flight.destination.iata_code.clone(),
        });
        self.existing_id.set(Some(flight.id.clone()));
        self.status_id.set(flight.status.id.clone());
        Ok(())
    }

    /// Fetch the airplane-type catalog for the selector.
    pub fn load_airplane_types(&self) {
        let airplane_types = self.airplane_types;
        let airplane_types_error = self.airplane_types_error;
        spawn_local(async move {
            match airplane_type_model::fetch_all().await {
                Ok(list) => {
                    airplane_types.set(list);
                    airplane_types_error.set(None);
                }
                Err(e) => airplane_types_error.set(Some(e)),
            }
        });
    }

    pub fn is_edit_mode(&self) -> bool {
        self.existing_id.get().is_some()
    }

    /// Submission is gated on every field being non-empty.
    pub fn all_fields_filled(&self) -> bool {
        let f = self.fields.get();
        [
            f.flight_number,
            f.airplane_type_id,
            f.flight_type_id,
            f.price,
            f.surcharge_percentage,
            f.tax_percentage,
            f.departure,
            f.arrival,
            f.origin_iata,
            f.destination_iata,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }

    fn build_payload(&self) -> Option<FlightPayload> {
        let f = self.fields.get();

        let Some((departure_date, departure_time)) = split_datetime_local(&f.departure) else {
            self.error.set(Some("La fecha de salida no es válida".to_string()));
            return None;
        };
        let Some((arrival_date, arrival_time)) = split_datetime_local(&f.arrival) else {
            self.error.set(Some("La fecha de llegada no es válida".to_string()));
            return None;
        };

        let payload = FlightPayload {
            flight_number: f.flight_number.trim().to_string(),
            origin_iata: f.origin_iata.trim().to_uppercase(),
            destination_iata: f.destination_iata.trim().to_uppercase(),
            departure_date,
            arrival_date,
            departure_time,
            arrival_time,
            price: f.price.parse().unwrap_or(-1.0),
            tax_percentage: f.tax_percentage.parse().unwrap_or(-1.0),
            surcharge_percentage: f.surcharge_percentage.parse().unwrap_or(-1.0),
            flight_type_id: f.flight_type_id,
            airplane_type_id: f.airplane_type_id,
            status_id: self.status_id.get(),
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

        let existing_id = self.existing_id.get();
        let error = self.error;
        let saving = self.saving;

        saving.set(true);
        self.error.set(None);
        spawn_local(async move {
            let result = match &existing_id {
                Some(id) => model::update(id, &payload).await,
                None => model::create(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
