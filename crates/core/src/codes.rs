//! Wire-code enumerations shared by the storage and API layers.
//!
//! The single/double-letter codes are the persisted and serialized format
//! and must not change: existing clients and database rows depend on them.

use std::ops::RangeInclusive;

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// A dog's gender. Wire codes: `m`, `f`, `u`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unknown];

    /// Wire/database code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Gender::Male => "m",
            Gender::Female => "f",
            Gender::Unknown => "u",
        }
    }

    /// Parse a wire code. Returns `None` for anything outside the domain.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "m" => Some(Gender::Male),
            "f" => Some(Gender::Female),
            "u" => Some(Gender::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A dog's size class. Wire codes: `s`, `m`, `l`, `xl`, `u`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Size {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Unknown,
}

impl Size {
    pub const ALL: [Size; 5] = [
        Size::Small,
        Size::Medium,
        Size::Large,
        Size::ExtraLarge,
        Size::Unknown,
    ];

    /// Wire/database code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Size::Small => "s",
            Size::Medium => "m",
            Size::Large => "l",
            Size::ExtraLarge => "xl",
            Size::Unknown => "u",
        }
    }

    /// Parse a wire code. Returns `None` for anything outside the domain.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "s" => Some(Size::Small),
            "m" => Some(Size::Medium),
            "l" => Some(Size::Large),
            "xl" => Some(Size::ExtraLarge),
            "u" => Some(Size::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

// ---------------------------------------------------------------------------
// AgeBracket
// ---------------------------------------------------------------------------

/// Coarse age bracket derived from a dog's age in years.
/// Wire codes: `b`, `y`, `a`, `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AgeBracket {
    Baby,
    Young,
    Adult,
    Senior,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 4] = [
        AgeBracket::Baby,
        AgeBracket::Young,
        AgeBracket::Adult,
        AgeBracket::Senior,
    ];

    /// Wire/database code.
    pub fn as_code(&self) -> &'static str {
        match self {
            AgeBracket::Baby => "b",
            AgeBracket::Young => "y",
            AgeBracket::Adult => "a",
            AgeBracket::Senior => "s",
        }
    }

    /// Parse a wire code. Returns `None` for anything outside the domain.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "b" => Some(AgeBracket::Baby),
            "y" => Some(AgeBracket::Young),
            "a" => Some(AgeBracket::Adult),
            "s" => Some(AgeBracket::Senior),
            _ => None,
        }
    }

    /// The inclusive range of ages in years this bracket covers.
    pub fn year_range(&self) -> RangeInclusive<i32> {
        match self {
            AgeBracket::Baby => 1..=18,
            AgeBracket::Young => 19..=36,
            AgeBracket::Adult => 37..=56,
            AgeBracket::Senior => 57..=99,
        }
    }

    /// Derive the bracket for an age in years.
    ///
    /// Ages outside 1-99 are out of contract and return `None`; callers
    /// decide how to reject them. No clamping.
    pub fn from_age(years: i32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.year_range().contains(&years))
    }
}

impl std::fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

// ---------------------------------------------------------------------------
// DogStatus
// ---------------------------------------------------------------------------

/// A user's verdict on a dog. Wire codes: `l`, `d`, `u`.
///
/// URL path segments use the long names (`liked`, `disliked`, `undecided`),
/// matching the original route shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DogStatus {
    Liked,
    Disliked,
    Undecided,
}

impl DogStatus {
    pub const ALL: [DogStatus; 3] = [DogStatus::Liked, DogStatus::Disliked, DogStatus::Undecided];

    /// Wire/database code.
    pub fn as_code(&self) -> &'static str {
        match self {
            DogStatus::Liked => "l",
            DogStatus::Disliked => "d",
            DogStatus::Undecided => "u",
        }
    }

    /// Parse a wire code. Returns `None` for anything outside the domain.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "l" => Some(DogStatus::Liked),
            "d" => Some(DogStatus::Disliked),
            "u" => Some(DogStatus::Undecided),
            _ => None,
        }
    }

    /// Long name used in URL paths.
    pub fn path_segment(&self) -> &'static str {
        match self {
            DogStatus::Liked => "liked",
            DogStatus::Disliked => "disliked",
            DogStatus::Undecided => "undecided",
        }
    }

    /// Parse a URL path segment. Returns `None` for unrecognized segments,
    /// which the API maps to a routing 404.
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "liked" => Some(DogStatus::Liked),
            "disliked" => Some(DogStatus::Disliked),
            "undecided" => Some(DogStatus::Undecided),
            _ => None,
        }
    }
}

impl std::fmt::Display for DogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}
