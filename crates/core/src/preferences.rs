//! Preference-set parsing, validation, and expansion.
//!
//! Preferences are stored as ordered, comma-joined code lists (e.g.
//! `"b,y,a"`). This module converts between that textual form and typed
//! sets, and expands the accepted age brackets into the union of underlying
//! year ranges used by the selection query.

use std::collections::BTreeSet;

use crate::codes::{AgeBracket, Gender, Size};
use crate::error::{CoreError, FieldErrors};

/// A user's accepted age-bracket, gender, and size sets.
///
/// Insertion order of the stored lists is not significant; sets are kept
/// ordered so the serialized form is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSets {
    pub ages: BTreeSet<AgeBracket>,
    pub genders: BTreeSet<Gender>,
    pub sizes: BTreeSet<Size>,
}

impl PreferenceSets {
    /// Parse the three comma-joined code lists into typed sets.
    ///
    /// Violations are collected across ALL fields and reported together as
    /// one `Validation` error; a single bad code never masks another.
    /// Empty strings and stray whitespace/commas parse to empty sets.
    pub fn from_codes(age: &str, gender: &str, size: &str) -> Result<Self, CoreError> {
        let mut errors = FieldErrors::new();

        let ages = parse_list(age, "age", "age bracket", AgeBracket::from_code, &mut errors);
        let genders = parse_list(gender, "gender", "gender", Gender::from_code, &mut errors);
        let sizes = parse_list(size, "size", "size", Size::from_code, &mut errors);

        if !errors.is_empty() {
            return Err(errors.into_error());
        }

        Ok(Self {
            ages,
            genders,
            sizes,
        })
    }

    /// Comma-joined age bracket codes, e.g. `"b,y,a"`.
    pub fn age_codes(&self) -> String {
        join_codes(self.ages.iter().map(AgeBracket::as_code))
    }

    /// Comma-joined gender codes.
    pub fn gender_codes(&self) -> String {
        join_codes(self.genders.iter().map(Gender::as_code))
    }

    /// Comma-joined size codes.
    pub fn size_codes(&self) -> String {
        join_codes(self.sizes.iter().map(Size::as_code))
    }

    /// Expand the accepted brackets into every acceptable age in years.
    ///
    /// The selection query matches `dogs.age` against this list; an empty
    /// accepted set yields an empty list, which matches no dog.
    pub fn acceptable_ages(&self) -> Vec<i32> {
        self.ages
            .iter()
            .flat_map(|bracket| bracket.year_range())
            .collect()
    }

    /// Accepted gender codes as owned strings for query binding.
    pub fn gender_code_list(&self) -> Vec<String> {
        self.genders.iter().map(|g| g.as_code().to_string()).collect()
    }

    /// Accepted size codes as owned strings for query binding.
    pub fn size_code_list(&self) -> Vec<String> {
        self.sizes.iter().map(|s| s.as_code().to_string()).collect()
    }
}

fn parse_list<T: Ord>(
    raw: &str,
    field: &'static str,
    label: &str,
    parse: impl Fn(&str) -> Option<T>,
    errors: &mut FieldErrors,
) -> BTreeSet<T> {
    let mut set = BTreeSet::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match parse(token) {
            Some(value) => {
                set.insert(value);
            }
            None => errors.push(field, format!("\"{token}\" is not a valid {label} code")),
        }
    }
    set
}

fn join_codes<'a>(codes: impl Iterator<Item = &'a str>) -> String {
    codes.collect::<Vec<_>>().join(",")
}
