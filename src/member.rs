//! Family member records and the gender enum driving icon selection.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Gender of a family member. Closed set: exactly one icon-drawing
/// variant exists per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Stick figure with split legs.
    Male,
    /// Stick figure with a triangular dress torso.
    Female,
}

impl Gender {
    /// Lowercase label, matching the roster file spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(format!("Unknown gender '{other}'. Valid: male, female")),
        }
    }
}

/// One family member entry. Immutable once stored; all validation
/// happens at insertion time ([`crate::store::RecordStore::add`]).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FamilyMember {
    /// Free-text relation label (e.g. "Father"); may be empty.
    #[serde(default)]
    pub relation: String,
    /// Display name; required non-empty.
    pub name: String,
    /// Gender, selecting the icon variant.
    pub gender: Gender,
    /// Year of birth.
    pub birth_year: i32,
    /// Year the member first experienced an air-raid siren.
    pub siren_year: i32,
}

impl FamilyMember {
    /// Age in the given year.
    #[must_use]
    pub fn age(&self, current_year: i32) -> i32 {
        current_year - self.birth_year
    }

    /// Age when the member first heard a siren.
    #[must_use]
    pub fn age_at_first_siren(&self) -> i32 {
        self.siren_year - self.birth_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(birth: i32, siren: i32) -> FamilyMember {
        FamilyMember {
            relation: "Father".into(),
            name: "Avi".into(),
            gender: Gender::Male,
            birth_year: birth,
            siren_year: siren,
        }
    }

    #[test]
    fn gender_from_str_accepts_aliases() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" f ".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn gender_from_str_rejects_unknown() {
        assert!("other".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn gender_display_round_trip() {
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(Gender::Female.to_string(), "female");
    }

    #[test]
    fn age_is_relative_to_current_year() {
        assert_eq!(member(1980, 2000).age(2026), 46);
        assert_eq!(member(2026, 2026).age(2026), 0);
    }

    #[test]
    fn age_at_first_siren_is_exact_difference() {
        assert_eq!(member(1980, 2000).age_at_first_siren(), 20);
        assert_eq!(member(1980, 1980).age_at_first_siren(), 0);
    }

    #[test]
    fn deserializes_from_toml_with_default_relation() {
        let m: FamilyMember = toml::from_str(
            r#"
name = "Noa"
gender = "female"
birth_year = 1990
siren_year = 1991
"#,
        )
        .unwrap();
        assert_eq!(m.relation, "");
        assert_eq!(m.gender, Gender::Female);
    }
}
