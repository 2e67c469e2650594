//! Team entity

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Team entity
///
/// `epics` is the backward half of the denormalized Epic <-> Team reference;
/// it is only ever mutated together with the matching `Epic.team` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier, externally assigned, immutable once created
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    /// Ids of the epics this team owns; order is not significant
    #[serde(default)]
    pub epics: Vec<String>,
}

impl Team {
    /// Placeholder team created on demand when an epic references a team id
    /// that does not exist yet
    pub fn stub(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("StubTeam-{id}"),
            id,
            members: vec![],
            epics: vec![],
        }
    }

    pub fn owns_epic(&self, epic_id: &str) -> bool {
        self.epics.iter().any(|id| id == epic_id)
    }

    /// Set-equality comparison of the owned epic list against another list,
    /// ignoring order and repetition
    pub fn same_epic_set(&self, other: &[String]) -> bool {
        let mine: HashSet<&str> = self.epics.iter().map(String::as_str).collect();
        let theirs: HashSet<&str> = other.iter().map(String::as_str).collect();
        mine == theirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, epics: &[&str]) -> Team {
        Team {
            id: id.to_string(),
            name: format!("Team {id}"),
            members: vec![],
            epics: epics.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_stub_team() {
        let stub = Team::stub("T9");
        assert_eq!(stub.id, "T9");
        assert_eq!(stub.name, "StubTeam-T9");
        assert!(stub.members.is_empty());
        assert!(stub.epics.is_empty());
    }

    #[test]
    fn test_owns_epic() {
        let t = team("T1", &["1", "2"]);
        assert!(t.owns_epic("1"));
        assert!(!t.owns_epic("3"));
    }

    #[test]
    fn test_same_epic_set_ignores_order() {
        let t = team("T1", &["1", "2"]);
        assert!(t.same_epic_set(&["2".to_string(), "1".to_string()]));
        assert!(!t.same_epic_set(&["1".to_string()]));
        assert!(!t.same_epic_set(&["1".to_string(), "3".to_string()]));
    }

    #[test]
    fn test_team_field_names_round_trip() {
        let t = Team {
            id: "T1".to_string(),
            name: "Catalog".to_string(),
            members: vec!["Marcus Allen".to_string()],
            epics: vec!["1".to_string()],
        };

        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"id\":\"T1\""));
        assert!(json.contains("\"name\":\"Catalog\""));
        assert!(json.contains("\"members\":[\"Marcus Allen\"]"));
        assert!(json.contains("\"epics\":[\"1\"]"));

        let back: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_team_optional_fields_default() {
        let t: Team = serde_json::from_str(r#"{"id": "T2"}"#).unwrap();
        assert_eq!(t.id, "T2");
        assert!(t.name.is_empty());
        assert!(t.members.is_empty());
        assert!(t.epics.is_empty());
    }
}
