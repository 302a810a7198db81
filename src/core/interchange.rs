use crate::domain::model::{Coordinate, Member, Roster};
use crate::utils::error::{OrderError, Result};
use serde_json::{json, Map, Value};

// Interchange format, one entry per member in insertion order:
//   { "name": ["location text", [latitude, longitude]] }
// The coordinate slot is null for members that never resolved.

pub fn serialize(roster: &Roster) -> Result<Vec<u8>> {
    let mut map = Map::new();
    for member in roster.iter() {
        let coordinate = match &member.coordinate {
            Some(c) => json!([c.latitude, c.longitude]),
            None => Value::Null,
        };
        map.insert(member.name.clone(), json!([member.location, coordinate]));
    }
    Ok(serde_json::to_vec_pretty(&Value::Object(map))?)
}

/// Builds a fresh roster; the caller's state is never touched, so a
/// failed import is all-or-nothing.
pub fn deserialize(bytes: &[u8]) -> Result<Roster> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| OrderError::Parse {
        reason: format!("invalid JSON: {}", e),
    })?;
    let Value::Object(map) = value else {
        return Err(OrderError::Parse {
            reason: "top level must be an object".to_string(),
        });
    };

    let mut roster = Roster::new();
    for (name, entry) in map {
        let Value::Array(fields) = entry else {
            return Err(entry_failure(&name, "expected [location, coordinate]"));
        };
        if fields.len() != 2 {
            return Err(entry_failure(&name, "expected exactly two fields"));
        }
        let Some(location) = fields[0].as_str() else {
            return Err(entry_failure(&name, "location must be a string"));
        };
        let coordinate = parse_coordinate(&name, &fields[1])?;

        roster.add(Member {
            name,
            location: location.to_string(),
            coordinate,
        });
    }
    Ok(roster)
}

fn parse_coordinate(name: &str, value: &Value) -> Result<Option<Coordinate>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(pair) if pair.len() == 2 => {
            let (Some(latitude), Some(longitude)) = (pair[0].as_f64(), pair[1].as_f64()) else {
                return Err(entry_failure(name, "coordinate values must be numeric"));
            };
            let coordinate = Coordinate {
                latitude,
                longitude,
            };
            if !coordinate.in_bounds() {
                return Err(entry_failure(name, "coordinate out of range"));
            }
            Ok(Some(coordinate))
        }
        _ => Err(entry_failure(
            name,
            "coordinate must be [latitude, longitude] or null",
        )),
    }
}

fn entry_failure(name: &str, reason: &str) -> OrderError {
    OrderError::Parse {
        reason: format!("entry '{}': {}", name, reason),
    }
}
