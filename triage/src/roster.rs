//! Static employee roster.
//!
//! The roster ships with the client as a JSON fixture; it is never fetched
//! from the backend. Older fixtures keyed employees by `user_id`, which is
//! accepted as an alias of `id`.

use serde::{Deserialize, Serialize};

/// Bundled roster fixture.
pub const DEFAULT_ROSTER_JSON: &str = include_str!("../data/employees.json");

/// One assignable employee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(alias = "user_id")]
    pub id: i64,
    pub name: String,
}

impl Employee {
    /// First letter of the name, used as an avatar.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }
}

/// Parse a roster fixture.
///
/// # Errors
///
/// Returns an error if `json` is not an array of `{id, name}` objects.
pub fn parse_roster(json: &str) -> Result<Vec<Employee>, serde_json::Error> {
    serde_json::from_str(json)
}

/// The bundled roster. Empty if the fixture is malformed.
#[must_use]
pub fn default_roster() -> Vec<Employee> {
    parse_roster(DEFAULT_ROSTER_JSON).unwrap_or_default()
}

/// Look up an employee by id.
#[must_use]
pub fn find(roster: &[Employee], id: i64) -> Option<&Employee> {
    roster.iter().find(|e| e.id == id)
}

/// Names for `ids`, keeping order; unknown ids render as `#<id>`.
#[must_use]
pub fn names_for(roster: &[Employee], ids: &[i64]) -> Vec<String> {
    ids.iter()
        .map(|&id| find(roster, id).map_or_else(|| format!("#{id}"), |e| e.name.clone()))
        .collect()
}
