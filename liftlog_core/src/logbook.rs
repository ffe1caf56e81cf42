//! The logbook: every recorded session plus the file it persists to.
//!
//! Sessions are kept in insertion order and looked up by linear scan. Dates
//! are not required to be unique; [`Logbook::session_by_date`] sees only the
//! first session for a date while the filters see all of them.

use crate::codec;
use crate::error::ReadError;
use crate::events::EventLog;
use crate::{Error, Exercise, MuscleGroup, Result, WorkoutSession};
use std::path::{Path, PathBuf};

/// Aggregate root for sessions and exercises
#[derive(Debug)]
pub struct Logbook {
    path: PathBuf,
    sessions: Vec<WorkoutSession>,
    events: EventLog,
    dirty: bool,
}

impl Logbook {
    /// Create an empty logbook bound to `path`. Nothing is read or written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sessions: Vec::new(),
            events: EventLog::new(),
            dirty: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a session. A session with an existing date is still added.
    pub fn add_session(&mut self, session: WorkoutSession) {
        self.events
            .log(format!("Added workout session for {}", session.date()));
        self.sessions.push(session);
        self.dirty = true;
    }

    /// First session with exactly this date
    pub fn session_by_date(&self, date: &str) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|s| s.date() == date)
    }

    /// Mutable access to the first session with exactly this date.
    ///
    /// Marks the logbook as having unsaved changes when a session is found.
    pub fn session_by_date_mut(&mut self, date: &str) -> Option<&mut WorkoutSession> {
        let session = self.sessions.iter_mut().find(|s| s.date() == date)?;
        self.dirty = true;
        Some(session)
    }

    /// First session for `date`, appending a new empty one if there is none
    pub fn session_for_date_or_insert(&mut self, date: &str) -> &mut WorkoutSession {
        let index = match self.sessions.iter().position(|s| s.date() == date) {
            Some(index) => index,
            None => {
                self.add_session(WorkoutSession::new(date));
                self.sessions.len() - 1
            }
        };
        self.dirty = true;
        &mut self.sessions[index]
    }

    /// Every session with exactly this date, in insertion order
    pub fn filter_sessions_by_date(&self, date: &str) -> Vec<&WorkoutSession> {
        self.sessions.iter().filter(|s| s.date() == date).collect()
    }

    /// Sessions with at least one exercise for `muscle`, each listed once
    pub fn filter_sessions_by_muscle(&self, muscle: MuscleGroup) -> Vec<&WorkoutSession> {
        self.sessions.iter().filter(|s| s.has_muscle(muscle)).collect()
    }

    /// Every exercise for `muscle` across all sessions, session by session
    pub fn all_exercises_by_muscle(&self, muscle: MuscleGroup) -> Vec<&Exercise> {
        self.sessions
            .iter()
            .flat_map(|s| s.exercises())
            .filter(|e| e.muscle() == muscle)
            .collect()
    }

    pub fn sessions(&self) -> &[WorkoutSession] {
        &self.sessions
    }

    /// Drop every session. The file is untouched until the next save.
    pub fn clear(&mut self) {
        self.sessions.clear();
        self.events.log("Cleared logbook");
        self.dirty = true;
    }

    /// Whether in-memory state may differ from the file.
    ///
    /// Cleared by a successful [`save`](Self::save) or [`load`](Self::load).
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Write every session to the bound file.
    ///
    /// Fails with [`Error::Write`] when the path is unusable, including when
    /// its directory does not exist.
    pub fn save(&mut self) -> Result<()> {
        codec::write_sessions(&self.path, &self.sessions).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })?;

        self.dirty = false;
        self.events.log(format!(
            "Saved {} sessions to {}",
            self.sessions.len(),
            self.path.display()
        ));
        tracing::info!("Saved logbook to {:?}", self.path);
        Ok(())
    }

    /// Replace all sessions with the contents of the bound file.
    ///
    /// On failure the current sessions are left untouched.
    pub fn load(&mut self) -> Result<()> {
        let sessions = codec::read_sessions(&self.path).map_err(|source| self.read_error(source))?;

        self.sessions = sessions;
        self.dirty = false;
        self.events.log(format!(
            "Loaded {} sessions from {}",
            self.sessions.len(),
            self.path.display()
        ));
        tracing::info!("Loaded logbook from {:?}", self.path);
        Ok(())
    }

    fn read_error(&self, source: ReadError) -> Error {
        Error::Read {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    fn bench() -> Exercise {
        Exercise::with_stats("Bench Press", MuscleGroup::Chest, 150, 3, 5)
    }

    fn pull_up() -> Exercise {
        Exercise::with_stats("Pull Up", MuscleGroup::Back, 0, 5, 8)
    }

    fn squat() -> Exercise {
        Exercise::with_stats("Squat", MuscleGroup::Legs, 250, 3, 5)
    }

    /// "2025/10/01" chest + back, "2025/10/03" legs
    fn sample_logbook(path: impl Into<PathBuf>) -> Logbook {
        let mut logbook = Logbook::new(path);

        let mut session1 = WorkoutSession::new("2025/10/01");
        session1.add_exercise(bench());
        session1.add_exercise(pull_up());

        let mut session2 = WorkoutSession::new("2025/10/03");
        session2.add_exercise(squat());

        logbook.add_session(session1);
        logbook.add_session(session2);
        logbook
    }

    #[test]
    fn test_new_logbook_is_empty() {
        let logbook = Logbook::new("./data/file.json");
        assert!(logbook.sessions().is_empty());
        assert_eq!(logbook.path(), Path::new("./data/file.json"));
    }

    #[test]
    fn test_session_by_date() {
        let logbook = sample_logbook("unused.json");

        assert_eq!(
            logbook.session_by_date("2025/10/01").unwrap().exercises(),
            &[bench(), pull_up()]
        );
        assert_eq!(
            logbook.session_by_date("2025/10/03").unwrap().exercises(),
            &[squat()]
        );
        assert!(logbook.session_by_date("2025/11/11").is_none());
    }

    #[test]
    fn test_session_by_date_returns_first_of_duplicates() {
        let mut logbook = sample_logbook("unused.json");

        let mut late = WorkoutSession::new("2025/10/01");
        late.add_exercise(squat());
        logbook.add_session(late);

        let found = logbook.session_by_date("2025/10/01").unwrap();
        assert_eq!(found.exercises(), &[bench(), pull_up()]);

        // Both are visible to the filter
        let filtered = logbook.filter_sessions_by_date("2025/10/01");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].exercises(), &[bench(), pull_up()]);
        assert_eq!(filtered[1].exercises(), &[squat()]);
    }

    #[test]
    fn test_filter_sessions_by_date() {
        let logbook = sample_logbook("unused.json");

        let filtered = logbook.filter_sessions_by_date("2025/10/01");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date(), "2025/10/01");

        assert!(logbook.filter_sessions_by_date("2025/11/11").is_empty());
    }

    #[test]
    fn test_filter_sessions_by_muscle() {
        let logbook = sample_logbook("unused.json");

        let chest = logbook.filter_sessions_by_muscle(MuscleGroup::Chest);
        assert_eq!(chest.len(), 1);
        assert_eq!(chest[0].date(), "2025/10/01");

        let legs = logbook.filter_sessions_by_muscle(MuscleGroup::Legs);
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].date(), "2025/10/03");

        let back = logbook.filter_sessions_by_muscle(MuscleGroup::Back);
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].date(), "2025/10/01");

        assert!(logbook.filter_sessions_by_muscle(MuscleGroup::Biceps).is_empty());
    }

    #[test]
    fn test_filter_by_muscle_lists_session_once() {
        let mut logbook = Logbook::new("unused.json");
        let mut session = WorkoutSession::new("2025/10/05");
        session.add_exercise(bench());
        session.add_exercise(Exercise::with_stats("Incline press", MuscleGroup::Chest, 80, 8, 3));
        logbook.add_session(session);

        assert_eq!(logbook.filter_sessions_by_muscle(MuscleGroup::Chest).len(), 1);
    }

    #[test]
    fn test_all_exercises_by_muscle() {
        let mut logbook = sample_logbook("unused.json");

        let chest = logbook.all_exercises_by_muscle(MuscleGroup::Chest);
        assert_eq!(chest, vec![&bench()]);

        let legs = logbook.all_exercises_by_muscle(MuscleGroup::Legs);
        assert_eq!(legs, vec![&squat()]);

        let mut later = WorkoutSession::new("2025/10/07");
        later.add_exercise(Exercise::with_stats("Lunge", MuscleGroup::Legs, 40, 10, 3));
        logbook.add_session(later);

        let names: Vec<_> = logbook
            .all_exercises_by_muscle(MuscleGroup::Legs)
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(names, vec!["Squat", "Lunge"]);
    }

    #[test]
    fn test_clear() {
        let mut logbook = sample_logbook("unused.json");
        assert!(!logbook.sessions().is_empty());
        logbook.clear();
        assert!(logbook.sessions().is_empty());
    }

    #[test]
    fn test_session_for_date_or_insert() {
        let mut logbook = sample_logbook("unused.json");

        logbook
            .session_for_date_or_insert("2025/10/01")
            .add_exercise(squat());
        assert_eq!(logbook.sessions().len(), 2);
        assert_eq!(logbook.sessions()[0].exercises().len(), 3);

        logbook
            .session_for_date_or_insert("2025/10/09")
            .add_exercise(bench());
        assert_eq!(logbook.sessions().len(), 3);
        assert_eq!(logbook.sessions()[2].date(), "2025/10/09");
    }

    #[test]
    fn test_session_by_date_mut() {
        let mut logbook = sample_logbook("unused.json");

        assert!(logbook.session_by_date_mut("2025/12/31").is_none());

        let session = logbook.session_by_date_mut("2025/10/03").unwrap();
        assert!(session.remove_exercise("squat"));
        assert!(logbook.sessions()[1].is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("fitness_log.json");

        let mut logbook = sample_logbook(&path);
        logbook.save().unwrap();

        let mut restored = Logbook::new(&path);
        restored.load().unwrap();

        assert_eq!(restored.sessions(), logbook.sessions());
        assert_eq!(restored.sessions().len(), 2);
        let total: usize = restored.sessions().iter().map(|s| s.exercises().len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_save_empty_logbook_writes_empty_array() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("empty.json");

        Logbook::new(&path).save().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), "[]");

        let mut restored = Logbook::new(&path);
        restored.load().unwrap();
        assert!(restored.sessions().is_empty());
    }

    #[test]
    fn test_load_replaces_existing_sessions() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("log.json");
        std::fs::write(&path, "[]").unwrap();

        let mut logbook = sample_logbook(&path);
        logbook.load().unwrap();
        assert!(logbook.sessions().is_empty());
    }

    #[test]
    fn test_load_missing_file_keeps_state() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("noSuchFile.json");

        let mut logbook = sample_logbook(&path);
        let err = logbook.load().unwrap_err();

        assert!(matches!(err, Error::Read { .. }));
        assert!(err.is_missing_file());
        assert_eq!(logbook.sessions().len(), 2);
    }

    #[test]
    fn test_load_under_a_regular_file_counts_as_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let mut logbook = Logbook::new(blocker.join("log.json"));
        let err = logbook.load().unwrap_err();
        assert!(err.is_missing_file());

        // The save then fails instead of clobbering anything
        assert!(matches!(logbook.save(), Err(Error::Write { .. })));
    }

    #[test]
    fn test_load_bad_record_is_all_or_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("log.json");
        std::fs::write(
            &path,
            r#"[
                {"date": "2025/12/01", "exercises": [
                    {"exercise name": "Row", "muscle type": "BACK", "weight": 60, "sets": 3, "reps": 10}
                ]},
                {"date": "2025/12/02", "exercises": [
                    {"exercise name": "Calf raise", "muscle type": "CALVES", "weight": 60, "sets": 3, "reps": 10}
                ]}
            ]"#,
        )
        .unwrap();

        let mut logbook = sample_logbook(&path);
        let err = logbook.load().unwrap_err();

        assert!(matches!(
            err,
            Error::Read {
                source: ReadError::Parse(ParseError::UnknownMuscle(_)),
                ..
            }
        ));
        assert!(!err.is_missing_file());
        assert_eq!(logbook.sessions().len(), 2);
        assert_eq!(logbook.sessions()[0].date(), "2025/10/01");
    }

    #[test]
    fn test_load_malformed_json_is_read_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("corrupted.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let mut logbook = Logbook::new(&path);
        assert!(matches!(
            logbook.load(),
            Err(Error::Read {
                source: ReadError::Parse(ParseError::Json(_)),
                ..
            })
        ));
    }

    #[test]
    fn test_save_to_invalid_path_is_write_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("my\0illegal:fileName.json");

        let mut logbook = sample_logbook(&path);
        let err = logbook.save().unwrap_err();

        assert!(matches!(err, Error::Write { .. }));
        assert_eq!(logbook.sessions().len(), 2);
        assert!(logbook.has_unsaved_changes());
    }

    #[test]
    fn test_save_to_missing_directory_is_write_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("log.json");

        let mut logbook = sample_logbook(&path);
        assert!(matches!(logbook.save(), Err(Error::Write { .. })));
    }

    #[test]
    fn test_unsaved_changes_tracking() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("log.json");

        let mut logbook = sample_logbook(&path);
        assert!(logbook.has_unsaved_changes());

        logbook.save().unwrap();
        assert!(!logbook.has_unsaved_changes());

        logbook.session_for_date_or_insert("2025/10/03").add_exercise(bench());
        assert!(logbook.has_unsaved_changes());

        logbook.load().unwrap();
        assert!(!logbook.has_unsaved_changes());
        assert_eq!(logbook.sessions()[1].exercises().len(), 1);

        logbook.clear();
        assert!(logbook.has_unsaved_changes());
    }

    #[test]
    fn test_events_recorded() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("log.json");

        let mut logbook = sample_logbook(&path);
        logbook.save().unwrap();
        logbook.clear();
        logbook.load().unwrap();

        let descriptions: Vec<_> = logbook
            .events()
            .iter()
            .map(|e| e.description.clone())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "Added workout session for 2025/10/01".to_string(),
                "Added workout session for 2025/10/03".to_string(),
                format!("Saved 2 sessions to {}", path.display()),
                "Cleared logbook".to_string(),
                format!("Loaded 2 sessions from {}", path.display()),
            ]
        );
    }
}
