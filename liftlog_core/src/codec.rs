//! JSON reader/writer for logbook files.
//!
//! A logbook file is a top-level JSON array of sessions:
//!
//! ```json
//! [
//!   {
//!     "date": "2025/10/01",
//!     "exercises": [
//!       { "exercise name": "Bench press", "muscle type": "CHEST",
//!         "weight": 150, "sets": 5, "reps": 3 }
//!     ]
//!   }
//! ]
//! ```
//!
//! The key names are fixed for compatibility with existing files.

use crate::error::{ParseError, ReadError};
use crate::{Exercise, MuscleGroup, WorkoutSession};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// On-disk form of a session
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    pub date: String,
    pub exercises: Vec<ExerciseRecord>,
}

/// On-disk form of an exercise
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseRecord {
    #[serde(rename = "exercise name")]
    pub name: String,
    #[serde(rename = "muscle type")]
    pub muscle: String,
    pub weight: i32,
    pub sets: i32,
    pub reps: i32,
}

impl From<&Exercise> for ExerciseRecord {
    fn from(exercise: &Exercise) -> Self {
        Self {
            name: exercise.name().to_string(),
            muscle: exercise.muscle().label().to_string(),
            weight: exercise.weight(),
            sets: exercise.sets(),
            reps: exercise.reps(),
        }
    }
}

impl From<&WorkoutSession> for SessionRecord {
    fn from(session: &WorkoutSession) -> Self {
        Self {
            date: session.date().to_string(),
            exercises: session.exercises().iter().map(ExerciseRecord::from).collect(),
        }
    }
}

impl TryFrom<ExerciseRecord> for Exercise {
    type Error = ParseError;

    fn try_from(record: ExerciseRecord) -> Result<Self, ParseError> {
        let muscle = MuscleGroup::from_label(&record.muscle)
            .ok_or(ParseError::UnknownMuscle(record.muscle))?;

        Ok(Exercise::with_stats(
            &record.name,
            muscle,
            record.weight,
            record.reps,
            record.sets,
        ))
    }
}

impl TryFrom<SessionRecord> for WorkoutSession {
    type Error = ParseError;

    fn try_from(record: SessionRecord) -> Result<Self, ParseError> {
        let mut session = WorkoutSession::new(record.date);
        for exercise in record.exercises {
            session.add_exercise(Exercise::try_from(exercise)?);
        }
        Ok(session)
    }
}

/// Encode sessions as a pretty-printed JSON array
pub fn to_json(sessions: &[WorkoutSession]) -> serde_json::Result<String> {
    let records: Vec<SessionRecord> = sessions.iter().map(SessionRecord::from).collect();
    serde_json::to_string_pretty(&records)
}

/// Decode a JSON array of sessions.
///
/// Fails on the first bad record; nothing is returned for a partially valid
/// document.
pub fn from_json(contents: &str) -> Result<Vec<WorkoutSession>, ParseError> {
    let records: Vec<SessionRecord> = serde_json::from_str(contents)?;
    records.into_iter().map(WorkoutSession::try_from).collect()
}

/// Read and decode a logbook file under a shared lock
pub fn read_sessions(path: &Path) -> Result<Vec<WorkoutSession>, ReadError> {
    let file = File::open(path)?;
    file.lock_shared()?;

    let mut contents = String::new();
    let read = io::BufReader::new(&file).read_to_string(&mut contents);
    file.unlock()?;
    read?;

    let sessions = from_json(&contents)?;
    tracing::debug!("Read {} sessions from {:?}", sessions.len(), path);
    Ok(sessions)
}

/// Encode and write a logbook file.
///
/// Writes to a temp file beside `path` and renames it into place. The
/// directory must already exist.
pub fn write_sessions(path: &Path, sessions: &[WorkoutSession]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "logbook path has no parent directory",
            ))
        }
    };

    let contents = to_json(sessions)?;

    let temp = NamedTempFile::new_in(dir)?;
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = io::BufWriter::new(temp.as_file());
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| e.error)?;

    tracing::debug!("Wrote {} sessions to {:?}", sessions.len(), path);
    Ok(())
}
