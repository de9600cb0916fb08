//! GraphQL operations of the airplane-type catalog.

use contracts::domain::airplane_type::{AirplaneFamily, AirplaneType, AirplaneTypePayload};
use serde::Deserialize;
use serde_json::json;

use crate::shared::graphql::execute;

const ALL_AIRPLANE_TYPES: &str = r#"
    query {
      getAllAirplaneTypes {
        id
        type {
          id
          name
        }
        maxSeats
        seatsDistribution
      }
    }
"#;

const AIRPLANE_TYPE_BY_ID: &str = r#"
    query($id: String!) {
      getAirplaneTypeById(id: $id) {
        id
        type {
          id
          name
        }
        maxSeats
        seatsDistribution
      }
    }
"#;

const ALL_FAMILIES: &str = r#"
    query {
      getAllFamilies {
        id
        name
      }
    }
"#;

const CREATE_AIRPLANE_TYPE: &str = r#"
    mutation CreateAirplaneType($id: String!, $typeId: Int!, $maxSeats: Int!, $seatsDistribution: String!) {
      createAirplaneType(
        id: $id,
        typeId: $typeId,
        maxSeats: $maxSeats,
        seatsDistribution: $seatsDistribution
      ) {
        id
        type {
          id
          name
        }
        maxSeats
        seatsDistribution
      }
    }
"#;

const UPDATE_AIRPLANE_TYPE: &str = r#"
    mutation($id: String!, $typeId: ID!, $maxSeats: Int!, $seatsDistribution: String!) {
      updateAirplaneType(
        id: $id,
        typeId: $typeId,
        maxSeats: $maxSeats,
        seatsDistribution: $seatsDistribution
      ) {
        id
        type {
          id
          name
        }
        maxSeats
        seatsDistribution
      }
    }
"#;

const DELETE_AIRPLANE_TYPE: &str = r#"
    mutation($id: String!) {
      deleteAirplaneType(id: $id)
    }
"#;

pub async fn fetch_all() -> Result<Vec<AirplaneType>, String> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "getAllAirplaneTypes")]
        all: Vec<AirplaneType>,
    }

    let data: Data = execute(ALL_AIRPLANE_TYPES, json!({})).await?;
    Ok(data.all)
}

pub async fn fetch_by_id(id: &str) -> Result<AirplaneType, String> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "getAirplaneTypeById")]
        airplane_type: AirplaneType,
    }

    let data: Data = execute(AIRPLANE_TYPE_BY_ID, json!({ "id": id })).await?;
    Ok(data.airplane_type)
}

/// Read-only family catalog feeding the form's selector.
pub async fn fetch_families() -> Result<Vec<AirplaneFamily>, String> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "getAllFamilies")]
        families: Vec<AirplaneFamily>,
    }

    let data: Data = execute(ALL_FAMILIES, json!({})).await?;
    Ok(data.families)
}

pub async fn create(payload: &AirplaneTypePayload) -> Result<AirplaneType, String> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "createAirplaneType")]
        airplane_type: AirplaneType,
    }

    let variables = serde_json::to_value(payload).map_err(|e| e.to_string())?;
    let data: Data = execute(CREATE_AIRPLANE_TYPE, variables).await?;
    Ok(data.airplane_type)
}

pub async fn update(payload: &AirplaneTypePayload) -> Result<AirplaneType, String> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "updateAirplaneType")]
        airplane_type: AirplaneType,
    }

    let variables = serde_json::to_value(payload).map_err(|e| e.to_string())?;
    let data: Data = execute(UPDATE_AIRPLANE_TYPE, variables).await?;
    Ok(data.airplane_type)
}

pub async fn delete(id: &str) -> Result<(), String> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "deleteAirplaneType")]
        _outcome: String,
    }

    let _: Data = execute(DELETE_AIRPLANE_TYPE, json!({ "id": id })).await?;
    Ok(())
}
