//! GraphQL operations of the flight catalog.

use contracts::domain::flight::{Flight, FlightPayload};
use serde::Deserialize;
use serde_json::json;

use crate::shared::graphql::execute;

const ALL_FLIGHTS: &str = r#"
    query {
      getAllFlights {
        id
        flightNumber
        origin {
          iataCode
          airportName
          country
        }
        destination {
          iataCode
          airportName
          country
        }
        price
        taxPercentage
        surchargePercentage
        departureDate
        arrivalDate
        departureTime
        arrivalTime
        flightType {
          id
          name
        }
        airplaneType {
          id
          type {
            id
            name
          }
          maxSeats
          seatsDistribution
        }
        status {
          id
          statusName
        }
      }
    }
"#;

const FLIGHT_BY_ID: &str = r#"
    query($id: ID!) {
      getFlightById(id: $id) {
        id
        flightNumber
        origin {
          iataCode
          airportName
          country
        }
        destination {
          iataCode
          airportName
          country
        }
        price
        taxPercentage
        surchargePercentage
        departureDate
        arrivalDate
        departureTime
        arrivalTime
        flightType {
          id
          name
        }
        airplaneType {
          id
          type {
            id
            name
          }
          maxSeats
          seatsDistribution
        }
        status {
          id
          statusName
        }
      }
    }
"#;

const CREATE_FLIGHT: &str = r#"
    mutation(
      $flightNumber: String!,
      $originIata: String!,
      $destinationIata: String!,
      $departureDate: String!,
      $arrivalDate: String!,
      $departureTime: String!,
      $arrivalTime: String!,
      $price: Float!,
      $taxPercentage: Float!,
      $surchargePercentage: Float!,
      $flightTypeId: ID!,
      $airplaneTypeId: ID!,
      $statusId: ID!
    ) {
      createFlight(
        flightNumber: $flightNumber,
        originIata: $originIata,
        destinationIata: $destinationIata,
        departureDate: $departureDate,
        arrivalDate: $arrivalDate,
        departureTime: $departureTime,
        arrivalTime: $arrivalTime,
        price: $price,
        taxPercentage: $taxPercentage,
        surchargePercentage: $surchargePercentage,
        flightTypeId: $flightTypeId,
        airplaneTypeId: $airplaneTypeId,
        statusId: $statusId
      ) {
        id
        flightNumber
      }
    }
"#;

const UPDATE_FLIGHT: &str = r#"
    mutation(
      $id: ID!,
      $flightNumber: String!,
      $originIata: String!,
      $destinationIata: String!,
      $departureDate: String!,
      $arrivalDate: String!,
      $departureTime: String!,
      $arrivalTime: String!,
      $price: Float!,
      $taxPercentage: Float!,
      $surchargePercentage: Float!,
      $flightTypeId: ID!,
      $airplaneTypeId: ID!,
      $statusId: ID!
    ) {
      updateFlight(
        id: $id,
        flightNumber: $flightNumber,
        originIata: $originIata,
        destinationIata: $destinationIata,
        departureDate: $departureDate,
        arrivalDate: $arrivalDate,
        departureTime: $departureTime,
        arrivalTime: $arrivalTime,
        price: $price,
        taxPercentage: $taxPercentage,
        surchargePercentage: $surchargePercentage,
        flightTypeId: $flightTypeId,
        airplaneTypeId: $airplaneTypeId,
        statusId: $statusId
      ) {
        id
        flightNumber
      }
    }
"#;

const DELETE_FLIGHT: &str = r#"
    mutation($id: ID!) {
      deleteFlight(id: $id)
    }
"#;

/// Shape returned by the two mutations: just enough to confirm the write.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightRef {
    pub id: String,
    #[serde(rename = "flightNumber")]
    pub flight_number: String,
}

pub async fn fetch_all() -> Result<Vec<Flight>, String> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "getAllFlights")]
        all: Vec<Flight>,
    }

    let data: Data = execute(ALL_FLIGHTS, json!({})).await?;
    Ok(data.all)
}

pub async fn fetch_by_id(id: &str) -> Result<Flight, String> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "getFlightById")]
        flight: Flight,
    }

    let data: Data = execute(FLIGHT_BY_ID, json!({ "id": id })).await?;
    Ok(data.flight)
}

pub async fn create(payload: &FlightPayload) -> Result<FlightRef, String> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "createFlight")]
        flight: FlightRef,
    }

    let variables = serde_json::to_value(payload).map_err(|e| e.to_string())?;
    let data: Data = execute(CREATE_FLIGHT, variables).await?;
    Ok(data.flight)
}

pub async fn update(id: &str, payload: &FlightPayload) -> Result<FlightRef, String> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "updateFlight")]
        flight: FlightRef,
    }

    let mut variables = serde_json::to_value(payload).map_err(|e| e.to_string())?;
    variables
        .as_object_mut()
        .ok_or_else(|| "el payload no es un objeto".to_string())?
        .insert("id".to_string(), json!(id));
    let data: Data = execute(UPDATE_FLIGHT, variables).await?;
    Ok(data.flight)
}

pub async fn delete(id: &str) -> Result<(), String> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "deleteFlight")]
        _outcome: String,
    }

    let _: Data = execute(DELETE_FLIGHT, json!({ "id": id })).await?;
    Ok(())
}
