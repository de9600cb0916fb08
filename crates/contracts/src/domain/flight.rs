//! Flight catalog: wire shapes plus the form's date/time conversions.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::airplane_type::AirplaneType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "iataCode")]
    pub iata_code: String,
    #[serde(rename = "airportName")]
    pub airport_name: String,
    pub country: String,
}

/// National/international classification ("Nacional" id 1, "Internacional" id 2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightKind {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightStatus {
    pub id: String,
    #[serde(rename = "statusName")]
    pub status_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    #[serde(rename = "flightNumber")]
    pub flight_number: String,
    pub origin: City,
    pub destination: City,
    pub price: f64,
    #[serde(rename = "taxPercentage")]
    pub tax_percentage: f64,
    #[serde(rename = "surchargePercentage")]
    pub surcharge_percentage: f64,
    #[serde(rename = "departureDate")]
    pub departure_date: String,
    #[serde(rename = "arrivalDate")]
    pub arrival_date: String,
    #[serde(rename = "departureTime")]
    pub departure_time: String,
    #[serde(rename = "arrivalTime")]
    pub arrival_time: String,
    #[serde(rename = "flightType")]
    pub flight_type: FlightKind,
    #[serde(rename = "airplaneType")]
    pub airplane_type: AirplaneType,
    pub status: FlightStatus,
}

/// Mutation input for `createFlight` / `updateFlight`. Dates and times
/// travel as separate strings even though the form edits them together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightPayload {
    #[serde(rename = "flightNumber")]
    pub flight_number: String,
    #[serde(rename = "originIata")]
    pub origin_iata: String,
    #[serde(rename = "destinationIata")]
    pub destination_iata: String,
    #[serde(rename = "departureDate")]
    pub departure_date: String,
    #[serde(rename = "arrivalDate")]
    pub arrival_date: String,
    #[serde(rename = "departureTime")]
    pub departure_time: String,
    #[serde(rename = "arrivalTime")]
    pub arrival_time: String,
    pub price: f64,
    #[serde(rename = "taxPercentage")]
    pub tax_percentage: f64,
    #[serde(rename = "surchargePercentage")]
    pub surcharge_percentage: f64,
    #[serde(rename = "flightTypeId")]
    pub flight_type_id: String,
    #[serde(rename = "airplaneTypeId")]
    pub airplane_type_id: String,
    #[serde(rename = "statusId")]
    pub status_id: String,
}

impl FlightPayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.flight_number.trim().is_empty() {
            return Err("El número de vuelo no puede estar vacío".into());
        }
        if !is_iata_code(&self.origin_iata) || !is_iata_code(&self.destination_iata) {
            return Err("Los códigos IATA deben tener 3 letras".into());
        }
        if self.departure_date.is_empty()
            || self.departure_time.is_empty()
            || self.arrival_date.is_empty()
            || self.arrival_time.is_empty()
        {
            return Err("Las fechas de salida y llegada son requeridas".into());
        }
        if self.price < 0.0 || self.tax_percentage < 0.0 || self.surcharge_percentage < 0.0 {
            return Err("Los valores numéricos no pueden ser negativos".into());
        }
        if self.flight_type_id.is_empty() || self.airplane_type_id.is_empty() {
            return Err("Selecciona el tipo de vuelo y el tipo de avión".into());
        }
        Ok(())
    }
}

fn is_iata_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Split a `datetime-local` input value into the date and time strings the
/// API expects (`"2024-05-01T13:45"` → `("2024-05-01", "13:45")`).
pub fn split_datetime_local(value: &str) -> Option<(String, String)> {
    let dt = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    Some((
        dt.format("%Y-%m-%d").to_string(),
        dt.format("%H:%M").to_string(),
    ))
}

/// Join a stored date + time pair back into a `datetime-local` value for
/// edit-mode initialization. Accepts times with or without seconds.
pub fn join_datetime_local(date: &str, time: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()?;
    Some(format!(
        "{}T{}",
        date.format("%Y-%m-%d"),
        time.format("%H:%M")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_datetime_local_separates_date_and_time() {
        assert_eq!(
            split_datetime_local("2024-05-01T13:45"),
            Some(("2024-05-01".to_string(), "13:45".to_string()))
        );
        assert_eq!(
            split_datetime_local("2024-05-01T13:45:30"),
            Some(("2024-05-01".to_string(), "13:45".to_string()))
        );
        assert_eq!(split_datetime_local("2024-05-01"), None);
        assert_eq!(split_datetime_local(""), None);
    }

    #[test]
    fn join_datetime_local_accepts_times_with_seconds() {
        assert_eq!(
            join_datetime_local("2024-05-01", "13:45"),
            Some("2024-05-01T13:45".to_string())
        );
        assert_eq!(
            join_datetime_local("2024-05-01", "13:45:00"),
            Some("2024-05-01T13:45".to_string())
        );
        assert_eq!(join_datetime_local("bad", "13:45"), None);
    }

    #[test]
    fn validate_requires_iata_codes() {
        let mut payload = FlightPayload {
            flight_number: "SA1234".to_string(),
            origin_iata: "BOG".to_string(),
            destination_iata: "MDE".to_string(),
            departure_date: "2024-05-01".to_string(),
            arrival_date: "2024-05-01".to_string(),
            departure_time: "13:45".to_string(),
            arrival_time: "15:00".to_string(),
            price: 100.0,
            tax_percentage: 19.0,
            surcharge_percentage: 5.0,
            flight_type_id: "1".to_string(),
            airplane_type_id: "A320".to_string(),
            status_id: "1".to_string(),
        };
        assert!(payload.validate().is_ok());

        payload.origin_iata = "BOGO".to_string();
        assert!(payload.validate().is_err());
        payload.origin_iata = "B1G".to_string();
        assert!(payload.validate().is_err());
    }
}
