//! A dated workout session.

use crate::{Exercise, MuscleGroup};

/// Exercises performed on one date, in the order they were logged.
///
/// The date is a free-form string, conventionally `yyyy/mm/dd`. It is not
/// parsed or validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkoutSession {
    date: String,
    exercises: Vec<Exercise>,
}

impl WorkoutSession {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            exercises: Vec::new(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Append an exercise. Duplicate names are allowed.
    pub fn add_exercise(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    /// Remove the first exercise whose name matches, ignoring case.
    ///
    /// Returns false (and leaves the session untouched) when nothing matches.
    pub fn remove_exercise(&mut self, name: &str) -> bool {
        match self.exercises.iter().position(|e| e.is_named(name)) {
            Some(index) => {
                self.exercises.remove(index);
                true
            }
            None => false,
        }
    }

    /// First exercise whose name matches, ignoring case
    pub fn exercise_by_name(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.is_named(name))
    }

    pub fn exercise_by_name_mut(&mut self, name: &str) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.is_named(name))
    }

    /// Whether any exercise in this session targets `muscle`
    pub fn has_muscle(&self, muscle: MuscleGroup) -> bool {
        self.exercises.iter().any(|e| e.muscle() == muscle)
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
