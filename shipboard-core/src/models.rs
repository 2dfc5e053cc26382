use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Board records as served by /api/v1/vessels/ and /api/v1/cargoes/.
// Only the displayed fields matter to the board; the rest are carried for
// detail lookups and default to None when the server leaves them out.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    /// Empty when the server sends no name.
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: String,
    pub vessel_type: Option<String>,
    pub position: Option<String>,
    /// Deadweight tonnage.
    pub dwt: Option<f64>,
    pub id: Option<i64>,
    pub description: Option<String>,
    pub eta: Option<String>,
    pub open_date: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    #[serde(default, deserialize_with = "scalar_text")]
    pub cargo_type: String,
    pub quantity: Option<f64>,
    pub load_port: Option<String>,
    pub discharge_port: Option<String>,
    pub rate: Option<Rate>,
    pub id: Option<i64>,
    pub description: Option<String>,
    pub laycan_start: Option<String>,
    pub laycan_end: Option<String>,
    pub created_at: Option<String>,
}

/// Freight rate. The server stores it as free text, but numeric rates show up too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rate {
    Number(f64),
    Text(String),
}

/// Headline fields take any JSON scalar as text: `42` becomes "42", null becomes "".
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!("expected text, found {}", other))),
    }
}

impl Vessel {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            vessel_type: None,
            position: None,
            dwt: None,
            id: None,
            description: None,
            eta: None,
            open_date: None,
            created_at: None,
        }
    }
}

impl Cargo {
    pub fn new(cargo_type: &str) -> Self {
        Self {
            cargo_type: cargo_type.to_string(),
            quantity: None,
            load_port: None,
            discharge_port: None,
            rate: None,
            id: None,
            description: None,
            laycan_start: None,
            laycan_end: None,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vessel_with_only_required_fields() {
        let vessel: Vessel = serde_json::from_str(r#"{"name":"MV Atlas"}"#).unwrap();
        assert_eq!(vessel, Vessel::new("MV Atlas"));
    }

    #[test]
    fn test_vessel_ignores_unknown_fields_and_accepts_nulls() {
        let json = r#"{
            "name": "MV Orion",
            "vessel_type": null,
            "dwt": 82000.5,
            "id": 7,
            "flag": "PA"
        }"#;
        let vessel: Vessel = serde_json::from_str(json).unwrap();
        assert_eq!(vessel.vessel_type, None);
        assert_eq!(vessel.dwt, Some(82000.5));
        assert_eq!(vessel.id, Some(7));
    }

    #[test]
    fn test_vessel_name_from_any_scalar() {
        let missing: Vessel = serde_json::from_str(r#"{"dwt": 1000}"#).unwrap();
        assert_eq!(missing.name, "");

        let number: Vessel = serde_json::from_str(r#"{"name": 42}"#).unwrap();
        assert_eq!(number.name, "42");

        let null: Cargo = serde_json::from_str(r#"{"cargo_type": null}"#).unwrap();
        assert_eq!(null.cargo_type, "");
    }

    #[test]
    fn test_non_object_record_is_rejected() {
        assert!(serde_json::from_str::<Vessel>("null").is_err());
        assert!(serde_json::from_str::<Vessel>(r#"{"name": ["MV A"]}"#).is_err());
        assert!(serde_json::from_str::<Cargo>(r#""Grain""#).is_err());
    }

    #[test]
    fn test_cargo_rate_accepts_text_or_number() {
        let text: Cargo =
            serde_json::from_str(r#"{"cargo_type":"Coal","rate":"USD 12.50/mt"}"#).unwrap();
        assert_eq!(text.rate, Some(Rate::Text("USD 12.50/mt".to_string())));

        let number: Cargo = serde_json::from_str(r#"{"cargo_type":"Coal","rate":12.5}"#).unwrap();
        assert_eq!(number.rate, Some(Rate::Number(12.5)));
    }
}
