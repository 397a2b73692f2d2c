//! Roster input: member files (TOML or JSON) and inline `--member` specs.
//!
//! Parsing here only produces candidate records; range and ordering
//! validation stays in [`crate::store::RecordStore::add`] so every input
//! path obeys the same rules.

use std::path::Path;

use serde::Deserialize;

use crate::member::{FamilyMember, Gender};

/// A roster file: `[[member]]` tables in TOML, or a `"member"`/`"members"`
/// array in JSON.
#[derive(Debug, Default, Deserialize)]
struct RosterFile {
    #[serde(default, rename = "member", alias = "members")]
    member: Vec<FamilyMember>,
}

/// Load member entries from a roster file, dispatching on extension:
/// `.json` is parsed as JSON, everything else as TOML.
///
/// # Errors
///
/// Returns a description of the failure if the file cannot be read or
/// parsed.
pub fn load_roster(path: &Path) -> Result<Vec<FamilyMember>, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read roster {}: {e}", path.display()))?;

    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let roster: RosterFile = if is_json {
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse roster {}: {e}", path.display()))?
    } else {
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse roster {}: {e}", path.display()))?
    };

    Ok(roster.member)
}

/// Parse an inline member spec: `relation,name,gender,birth_year,siren_year`.
///
/// The relation may be empty (`",Avi,male,1952,1967"`); the remaining
/// fields are required.
///
/// # Errors
///
/// Returns a description of the failure if the spec does not have five
/// comma-separated fields or a field does not parse.
pub fn parse_member_spec(spec: &str) -> Result<FamilyMember, String> {
    let fields: Vec<&str> = spec.split(',').map(str::trim).collect();
    if fields.len() != 5 {
        return Err(format!(
            "Member spec '{spec}' must have 5 comma-separated fields: \
             relation,name,gender,birth_year,siren_year"
        ));
    }

    let gender: Gender = fields[2].parse()?;
    let birth_year = parse_year(fields[3], "birth year")?;
    let siren_year = parse_year(fields[4], "siren year")?;

    Ok(FamilyMember {
        relation: fields[0].to_string(),
        name: fields[1].to_string(),
        gender,
        birth_year,
        siren_year,
    })
}

fn parse_year(field: &str, what: &str) -> Result<i32, String> {
    field.parse().map_err(|_| format!("Invalid {what} '{field}': expected an integer"))
}
