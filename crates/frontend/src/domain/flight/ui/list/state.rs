use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct FlightListState {
    pub sort_field: String,
    pub sort_ascending: bool,
    pub filter: String,
}

impl Default for FlightListState {
    fn default() -> Self {
        Self {
            sort_field: "flight_number".to_string(),
            sort_ascending: true,
            filter: String::new(),
        }
    }
}

pub fn create_state() -> RwSignal<FlightListState> {
    RwSignal::new(FlightListState::default())
}
