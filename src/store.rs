//! In-session record store for family members.
//!
//! Single-threaded, insertion-order preserved, no dedup. Indices are
//! positional removal addresses, not stable identities.

use crate::error::ValidationError;
use crate::member::FamilyMember;

/// Lower bound for birth and siren years.
pub const MIN_YEAR: i32 = 1900;

/// Ordered, mutable list of family members scoped to one session.
///
/// Validation happens here, at `add`, so every stored record satisfies
/// the range and ordering constraints regardless of where it came from.
#[derive(Debug)]
pub struct RecordStore {
    members: Vec<FamilyMember>,
    current_year: i32,
}

impl RecordStore {
    /// Create an empty store. Year bounds for validation are relative
    /// to `current_year`.
    #[must_use]
    pub fn new(current_year: i32) -> Self {
        Self { members: Vec::new(), current_year }
    }

    /// Validate and append a member.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] and leaves the store unchanged if
    /// the name is empty, a year is outside `1900..=current_year`, or
    /// the siren year predates the birth year.
    pub fn add(&mut self, member: FamilyMember) -> Result<(), ValidationError> {
        if member.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        self.check_year("Birth year", member.birth_year)?;
        self.check_year("First siren year", member.siren_year)?;
        if member.siren_year < member.birth_year {
            return Err(ValidationError::SirenBeforeBirth {
                birth_year: member.birth_year,
                siren_year: member.siren_year,
            });
        }
        self.members.push(member);
        Ok(())
    }

    /// Remove the member at `index`. Out-of-bounds indices are ignored:
    /// the store is only ever addressed by positions it handed out.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.members.len() {
            self.members.remove(index);
        }
    }

    /// Current members in insertion order.
    #[must_use]
    pub fn list(&self) -> &[FamilyMember] {
        &self.members
    }

    /// Number of stored members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the store holds no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn check_year(&self, field: &'static str, year: i32) -> Result<(), ValidationError> {
        if (MIN_YEAR..=self.current_year).contains(&year) {
            Ok(())
        } else {
            Err(ValidationError::YearOutOfRange { field, year, max: self.current_year })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::Gender;

    const YEAR: i32 = 2026;

    fn member(name: &str, birth: i32, siren: i32) -> FamilyMember {
        FamilyMember {
            relation: String::new(),
            name: name.into(),
            gender: Gender::Male,
            birth_year: birth,
            siren_year: siren,
        }
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = RecordStore::new(YEAR);
        store.add(member("First", 1950, 1967)).unwrap();
        store.add(member("Second", 1980, 1991)).unwrap();
        store.add(member("Third", 2010, 2023)).unwrap();

        let names: Vec<&str> = store.list().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn add_rejects_empty_name() {
        let mut store = RecordStore::new(YEAR);
        let err = store.add(member("", 1980, 2000)).unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_whitespace_name() {
        let mut store = RecordStore::new(YEAR);
        assert_eq!(store.add(member("   ", 1980, 2000)).unwrap_err(), ValidationError::NameRequired);
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_siren_before_birth() {
        let mut store = RecordStore::new(YEAR);
        let err = store.add(member("Avi", 1990, 1985)).unwrap_err();
        assert_eq!(err, ValidationError::SirenBeforeBirth { birth_year: 1990, siren_year: 1985 });
        assert!(store.list().is_empty());
    }

    #[test]
    fn add_rejects_years_out_of_range() {
        let mut store = RecordStore::new(YEAR);
        assert!(matches!(
            store.add(member("Old", 1899, 1950)).unwrap_err(),
            ValidationError::YearOutOfRange { field: "Birth year", year: 1899, .. }
        ));
        assert!(matches!(
            store.add(member("Future", 1980, YEAR + 1)).unwrap_err(),
            ValidationError::YearOutOfRange { field: "First siren year", .. }
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn add_accepts_boundary_years() {
        let mut store = RecordStore::new(YEAR);
        store.add(member("Edge", MIN_YEAR, YEAR)).unwrap();
        store.add(member("SameYear", YEAR, YEAR)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn failed_add_leaves_store_unchanged() {
        let mut store = RecordStore::new(YEAR);
        store.add(member("Keep", 1950, 1967)).unwrap();
        let _ = store.add(member("", 1980, 2000));
        let _ = store.add(member("Bad", 1990, 1985));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].name, "Keep");
    }

    #[test]
    fn remove_at_removes_exactly_one_preserving_order() {
        let mut store = RecordStore::new(YEAR);
        for name in ["A", "B", "C", "D"] {
            store.add(member(name, 1980, 1991)).unwrap();
        }
        store.remove_at(1);
        let names: Vec<&str> = store.list().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "C", "D"]);
    }

    #[test]
    fn remove_at_out_of_bounds_is_silent() {
        let mut store = RecordStore::new(YEAR);
        store.add(member("Only", 1980, 1991)).unwrap();
        store.remove_at(5);
        store.remove_at(1);
        assert_eq!(store.len(), 1);

        let mut empty = RecordStore::new(YEAR);
        empty.remove_at(0);
        assert!(empty.is_empty());
    }
}
