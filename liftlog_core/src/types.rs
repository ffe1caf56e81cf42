//! Core domain types for the workout logbook.
//!
//! - Muscle groups (closed set)
//! - Exercises and their per-operation update object

use std::fmt;
use std::str::FromStr;

// ============================================================================
// Muscle Groups
// ============================================================================

/// Body-part target of an exercise
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Biceps,
    Triceps,
    Abs,
}

impl MuscleGroup {
    /// Every muscle group, in display order
    pub const ALL: [MuscleGroup; 7] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Abs,
    ];

    /// Label used in saved logbooks (e.g. `"CHEST"`)
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "CHEST",
            MuscleGroup::Back => "BACK",
            MuscleGroup::Legs => "LEGS",
            MuscleGroup::Shoulders => "SHOULDERS",
            MuscleGroup::Biceps => "BICEPS",
            MuscleGroup::Triceps => "TRICEPS",
            MuscleGroup::Abs => "ABS",
        }
    }

    /// Exact inverse of [`label`](Self::label). Returns None for anything else.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "CHEST" => Some(MuscleGroup::Chest),
            "BACK" => Some(MuscleGroup::Back),
            "LEGS" => Some(MuscleGroup::Legs),
            "SHOULDERS" => Some(MuscleGroup::Shoulders),
            "BICEPS" => Some(MuscleGroup::Biceps),
            "TRICEPS" => Some(MuscleGroup::Triceps),
            "ABS" => Some(MuscleGroup::Abs),
            _ => None,
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive parse for user input
impl FromStr for MuscleGroup {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::from_label(&s.trim().to_uppercase()).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|m| m.label()).collect();
            crate::Error::InvalidInput(format!(
                "unknown muscle type '{}' (expected one of {})",
                s,
                known.join(", ")
            ))
        })
    }
}

// ============================================================================
// Exercise
// ============================================================================

/// Capitalize the first character and lowercase the rest.
///
/// An empty name stays empty.
pub fn normalize_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// One logged movement: weight in kg, reps and sets.
///
/// Numeric fields are not validated here; callers reject bad input before
/// building an exercise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exercise {
    name: String,
    muscle: MuscleGroup,
    weight: i32,
    reps: i32,
    sets: i32,
}

impl Exercise {
    /// Create an exercise with zero weight, reps and sets
    pub fn new(name: &str, muscle: MuscleGroup) -> Self {
        Self::with_stats(name, muscle, 0, 0, 0)
    }

    pub fn with_stats(name: &str, muscle: MuscleGroup, weight: i32, reps: i32, sets: i32) -> Self {
        Self {
            name: normalize_name(name),
            muscle,
            weight,
            reps,
            sets,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn muscle(&self) -> MuscleGroup {
        self.muscle
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn reps(&self) -> i32 {
        self.reps
    }

    pub fn sets(&self) -> i32 {
        self.sets
    }

    /// Rename, re-applying capitalization
    pub fn set_name(&mut self, name: &str) {
        self.name = normalize_name(name);
    }

    pub fn set_muscle(&mut self, muscle: MuscleGroup) {
        self.muscle = muscle;
    }

    pub fn set_weight(&mut self, weight: i32) {
        self.weight = weight;
    }

    pub fn set_reps(&mut self, reps: i32) {
        self.reps = reps;
    }

    pub fn set_sets(&mut self, sets: i32) {
        self.sets = sets;
    }

    /// Case-insensitive name comparison.
    ///
    /// Lowercases char by char, the same way [`normalize_name`] does, so a
    /// name always matches the stored form it was normalized into.
    pub fn is_named(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }
}

/// Changes to apply to one exercise. Unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExerciseUpdate {
    pub name: Option<String>,
    pub muscle: Option<MuscleGroup>,
    pub weight: Option<i32>,
    pub reps: Option<i32>,
    pub sets: Option<i32>,
}

impl ExerciseUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.muscle.is_none()
            && self.weight.is_none()
            && self.reps.is_none()
            && self.sets.is_none()
    }

    pub fn apply(&self, exercise: &mut Exercise) {
        if let Some(ref name) = self.name {
            exercise.set_name(name);
        }
        if let Some(muscle) = self.muscle {
            exercise.set_muscle(muscle);
        }
        if let Some(weight) = self.weight {
            exercise.set_weight(weight);
        }
        if let Some(reps) = self.reps {
            exercise.set_reps(reps);
        }
        if let Some(sets) = self.sets {
            exercise.set_sets(sets);
        }
    }
}
