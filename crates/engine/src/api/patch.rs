//! JSON-Patch decoding for character updates.
//!
//! The only supported update is a single `replace` of the character's
//! location. Everything else is rejected before the move use case runs.

use maze_domain::LocationId;
use serde::Deserialize;
use serde_json::Value;

/// One operation of a JSON-Patch document.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchOperation {
    pub op: String,
    pub path: String,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub from: Option<String>,
}

/// A decoded request to move a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub destination: LocationId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("Only one modification is currently supported")]
    NotSingleOperation,
    #[error("Invalid move to location")]
    InvalidLocation,
    #[error("Unsupported operation")]
    Unsupported,
}

/// Decode a patch document into a move request.
pub fn decode_move(operations: &[PatchOperation]) -> Result<MoveRequest, PatchError> {
    let [operation] = operations else {
        return Err(PatchError::NotSingleOperation);
    };

    if !operation.op.eq_ignore_ascii_case("replace") || !targets_location(&operation.path) {
        return Err(PatchError::Unsupported);
    }

    let destination = operation
        .value
        .as_ref()
        .and_then(location_id_from)
        .ok_or(PatchError::InvalidLocation)?;

    Ok(MoveRequest { destination })
}

fn targets_location(path: &str) -> bool {
    let field = path.strip_prefix('/').unwrap_or(path);
    field.eq_ignore_ascii_case("location")
}

/// Accept a JSON integer or a numeric string that fits in 32 bits.
fn location_id_from(value: &Value) -> Option<LocationId> {
    let raw = match value {
        Value::Number(number) => number.as_i64()?,
        Value::String(text) => text.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    i32::try_from(raw).ok().map(LocationId::new)
}
