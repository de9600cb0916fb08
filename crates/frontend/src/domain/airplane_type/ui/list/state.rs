use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct AirplaneTypeListState {
    pub sort_field: String,
    pub sort_ascending: bool,
    pub filter: String,
}

impl Default for AirplaneTypeListState {
    fn default() -> Self {
        Self {
            sort_field: "model".to_string(),
            sort_ascending: true,
            filter: String::new(),
        }
    }
}

pub fn create_state() -> RwSignal<AirplaneTypeListState> {
    RwSignal::new(AirplaneTypeListState::default())
}
