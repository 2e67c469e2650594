//! Epic entity and related types

use serde::{Deserialize, Serialize};

use super::validation::EpicValidationError;

/// T-shirt size of an epic, serialized as its integer weight.
///
/// The weights form a fixed ordinal set; arbitrary integers are rejected at
/// deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl Size {
    /// The integer weight used on the wire and for capacity planning
    pub fn weight(&self) -> u32 {
        match self {
            Self::Xs => 1,
            Self::S => 2,
            Self::M => 4,
            Self::L => 8,
            Self::Xl => 16,
            Self::Xxl => 32,
        }
    }
}

impl TryFrom<u32> for Size {
    type Error = EpicValidationError;

    fn try_from(weight: u32) -> Result<Self, Self::Error> {
        match weight {
            1 => Ok(Self::Xs),
            2 => Ok(Self::S),
            4 => Ok(Self::M),
            8 => Ok(Self::L),
            16 => Ok(Self::Xl),
            32 => Ok(Self::Xxl),
            other => Err(EpicValidationError::InvalidSize(other)),
        }
    }
}

impl From<Size> for u32 {
    fn from(size: Size) -> Self {
        size.weight()
    }
}

/// Epic entity
///
/// Fields mirror the wire format exactly; records are replaced wholesale on
/// update, so the entity doubles as the request and response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Epic {
    /// Unique identifier, externally assigned, immutable once created
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Category tag ("CSAT", "RTB", ...) - free-form
    #[serde(default, rename = "type")]
    pub category: String,
    /// Directly responsible individual
    #[serde(default)]
    pub dri: String,
    #[serde(default)]
    pub links_to_docs: Vec<String>,
    pub size: Size,
    #[serde(default)]
    pub cycle_time: f64,
    #[serde(default)]
    pub status: String,
    /// Planning-period label
    #[serde(default)]
    pub pi: String,
    /// Ids of epics this one depends on; not validated for existence
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Id of the owning team, empty when unassigned
    #[serde(default)]
    pub team: String,
}

impl Epic {
    pub fn is_assigned(&self) -> bool {
        !self.team.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epic(id: &str, team: &str) -> Epic {
        Epic {
            id: id.to_string(),
            name: format!("Epic {id}"),
            description: String::new(),
            category: "RTB".to_string(),
            dri: "Marcus Allen".to_string(),
            links_to_docs: vec![],
            size: Size::Xs,
            cycle_time: 0.0,
            status: "Pending".to_string(),
            pi: "22.2".to_string(),
            dependencies: vec![],
            team: team.to_string(),
        }
    }

    #[test]
    fn test_size_weights() {
        assert_eq!(Size::Xs.weight(), 1);
        assert_eq!(Size::S.weight(), 2);
        assert_eq!(Size::M.weight(), 4);
        assert_eq!(Size::L.weight(), 8);
        assert_eq!(Size::Xl.weight(), 16);
        assert_eq!(Size::Xxl.weight(), 32);
    }

    #[test]
    fn test_size_from_weight() {
        assert_eq!(Size::try_from(8), Ok(Size::L));
        assert!(Size::try_from(0).is_err());
        assert!(Size::try_from(3).is_err());
        assert!(Size::try_from(64).is_err());
    }

    #[test]
    fn test_size_ordering() {
        assert!(Size::Xs < Size::S);
        assert!(Size::Xl < Size::Xxl);
    }

    #[test]
    fn test_epic_is_assigned() {
        assert!(epic("1", "T1").is_assigned());
        assert!(!epic("1", "").is_assigned());
    }

    #[test]
    fn test_epic_field_names_round_trip() {
        let e = epic("1", "T1");
        let json = serde_json::to_string(&e).unwrap();

        assert!(json.contains("\"id\":\"1\""));
        assert!(json.contains("\"type\":\"RTB\""));
        assert!(json.contains("\"dri\":\"Marcus Allen\""));
        assert!(json.contains("\"linksToDocs\":[]"));
        assert!(json.contains("\"size\":1"));
        assert!(json.contains("\"cycleTime\":0.0"));
        assert!(json.contains("\"pi\":\"22.2\""));
        assert!(json.contains("\"dependencies\":[]"));
        assert!(json.contains("\"team\":\"T1\""));

        let back: Epic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn test_epic_optional_fields_default() {
        let json = r#"{"id": "9", "size": 4}"#;
        let e: Epic = serde_json::from_str(json).unwrap();

        assert_eq!(e.id, "9");
        assert_eq!(e.size, Size::M);
        assert_eq!(e.team, "");
        assert!(e.dependencies.is_empty());
        assert!(!e.is_assigned());
    }

    #[test]
    fn test_epic_rejects_invalid_size() {
        let json = r#"{"id": "9", "size": 3}"#;
        assert!(serde_json::from_str::<Epic>(json).is_err());
    }
}
