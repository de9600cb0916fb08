//! Airplane-type catalog: wire shapes of the fleet-management GraphQL API.

use serde::{Deserialize, Serialize};

use crate::domain::seats::SeatsLayout;

/// Airplane family ("A320 family", "B737 family", ...). Read-only catalog
/// used to populate the family selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirplaneFamily {
    pub id: String,
    pub name: String,
}

/// A named aircraft model/configuration as the API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirplaneType {
    pub id: String,
    #[serde(rename = "type")]
    pub family: AirplaneFamily,
    #[serde(rename = "maxSeats")]
    pub max_seats: i32,
    #[serde(rename = "seatsDistribution")]
    pub seats_distribution: String,
}

/// Mutation input for `createAirplaneType` / `updateAirplaneType`.
///
/// The model name doubles as the identifier; the family travels as its
/// numeric id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AirplaneTypePayload {
    pub id: String,
    #[serde(rename = "typeId")]
    pub type_id: i32,
    #[serde(rename = "maxSeats")]
    pub max_seats: i32,
    #[serde(rename = "seatsDistribution")]
    pub seats_distribution: String,
}

impl AirplaneTypePayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("El nombre del modelo no puede estar vacío".into());
        }
        if self.type_id <= 0 {
            return Err("Selecciona una familia de avión".into());
        }
        if !(1..=10_000).contains(&self.max_seats) {
            return Err("El número de asientos debe estar entre 1 y 10000".into());
        }
        SeatsLayout::parse(&self.seats_distribution).map_err(|e| e.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AirplaneTypePayload {
        AirplaneTypePayload {
            id: "A320".to_string(),
            type_id: 2,
            max_seats: 180,
            seats_distribution: "3-3".to_string(),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn rejects_missing_fields() {
        let mut p = payload();
        p.id = "  ".to_string();
        assert!(p.validate().is_err());

        let mut p = payload();
        p.type_id = 0;
        assert!(p.validate().is_err());

        let mut p = payload();
        p.max_seats = 0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_undecodable_distribution() {
        let mut p = payload();
        p.seats_distribution = "3-X-3".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn airplane_type_uses_wire_field_names() {
        let json = r#"{
            "id": "A320",
            "type": { "id": "2", "name": "Airbus" },
            "maxSeats": 180,
            "seatsDistribution": "3-3"
        }"#;
        let parsed: AirplaneType = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.family.name, "Airbus");
        assert_eq!(parsed.max_seats, 180);
    }
}
