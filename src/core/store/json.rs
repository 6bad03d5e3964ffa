//! JSON-document store
//!
//! The whole store is one JSON document read and rewritten wholesale on
//! every operation, behind a small [`Backend`] trait so tests can swap
//! the file for an in-memory document.

use super::{DataStore, StoreError};
use crate::core::models::{
    AcademicProfile, ApplicationStatus, CareerEvent, CareerGoal, EventStatus, JobApplication,
    LocationEnvironment, Program, Resource, ResourceKind, University,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The full store document.
///
/// One vector per table; content tables are read-only from the
/// application's perspective, tracker tables are mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    /// `universities` table
    #[serde(default)]
    pub universities: Vec<University>,
    /// `programs` table
    #[serde(default)]
    pub programs: Vec<Program>,
    /// `university_location_environment` table
    #[serde(default)]
    pub location_environments: Vec<LocationEnvironment>,
    /// `university_academics` table
    #[serde(default)]
    pub academic_profiles: Vec<AcademicProfile>,
    /// Resource cards for all four resource screens, discriminated by kind
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// `career_events` table
    #[serde(default)]
    pub events: Vec<CareerEvent>,
    /// `career_goals` table
    #[serde(default)]
    pub goals: Vec<CareerGoal>,
    /// `job_applications` table
    #[serde(default)]
    pub applications: Vec<JobApplication>,
}

/// Document access used by [`JsonStore`]
pub trait Backend {
    /// Read the whole document
    ///
    /// # Errors
    /// Returns an error if the document cannot be read or parsed.
    fn read_state(&self) -> Result<StoreState, StoreError>;

    /// Replace the whole document
    ///
    /// # Errors
    /// Returns an error if the document cannot be serialized or written.
    fn write_state(&self, state: &StoreState) -> Result<(), StoreError>;
}

/// File-backed document. A missing file reads as an empty store so the
/// first tracker mutation creates it.
pub struct JsonFileBackend {
    /// Path to the JSON document
    pub file_path: PathBuf,
}

impl Backend for JsonFileBackend {
    fn read_state(&self) -> Result<StoreState, StoreError> {
        if !self.file_path.exists() {
            return Ok(StoreState::default());
        }
        let json_data = fs::read_to_string(&self.file_path)?;
        let state: StoreState = serde_json::from_str(&json_data)?;
        Ok(state)
    }

    fn write_state(&self, state: &StoreState) -> Result<(), StoreError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json_data = serde_json::to_string_pretty(state)?;
        fs::write(&self.file_path, json_data)?;
        Ok(())
    }
}

/// The shipped [`DataStore`] implementation
pub struct JsonStore {
    backend: Box<dyn Backend>,
}

impl JsonStore {
    /// Open a store backed by a JSON file at `path`
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            backend: Box::new(JsonFileBackend {
                file_path: path.as_ref().to_path_buf(),
            }),
        }
    }

    /// Open a store over an explicit backend (used by tests)
    #[must_use]
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Replace the whole document (used by seeding)
    ///
    /// # Errors
    /// Returns an error if the document cannot be written.
    pub fn replace_state(&self, state: &StoreState) -> Result<(), StoreError> {
        self.backend.write_state(state)
    }

    fn read(&self) -> Result<StoreState, StoreError> {
        self.backend.read_state()
    }
}

impl DataStore for JsonStore {
    fn university(&self, id: &str) -> Result<Option<University>, StoreError> {
        let state = self.read()?;
        Ok(state.universities.into_iter().find(|u| u.id == id))
    }

    fn programs(&self, university_id: &str) -> Result<Vec<Program>, StoreError> {
        let state = self.read()?;
        Ok(state
            .programs
            .into_iter()
            .filter(|p| p.university_id == university_id)
            .collect())
    }

    fn location_environment(
        &self,
        university_id: &str,
    ) -> Result<Option<LocationEnvironment>, StoreError> {
        let state = self.read()?;
        Ok(state
            .location_environments
            .into_iter()
            .find(|le| le.university_id == university_id))
    }

    fn academic_profile(
        &self,
        university_id: &str,
    ) -> Result<Option<AcademicProfile>, StoreError> {
        let state = self.read()?;
        Ok(state
            .academic_profiles
            .into_iter()
            .find(|ap| ap.university_id == university_id))
    }

    fn resources(
        &self,
        university_id: &str,
        kind: ResourceKind,
    ) -> Result<Vec<Resource>, StoreError> {
        let state = self.read()?;
        Ok(state
            .resources
            .into_iter()
            .filter(|r| r.university_id == university_id && r.kind == kind)
            .collect())
    }

    fn events(&self, user_id: &str) -> Result<Vec<CareerEvent>, StoreError> {
        let state = self.read()?;
        Ok(state
            .events
            .into_iter()
            .filter(|e| e.user_id == user_id)
            .collect())
    }

    fn goals(&self, user_id: &str) -> Result<Vec<CareerGoal>, StoreError> {
        let state = self.read()?;
        Ok(state
            .goals
            .into_iter()
            .filter(|g| g.user_id == user_id)
            .collect())
    }

    fn applications(&self, user_id: &str) -> Result<Vec<JobApplication>, StoreError> {
        let state = self.read()?;
        Ok(state
            .applications
            .into_iter()
            .filter(|a| a.user_id == user_id)
            .collect())
    }

    fn insert_event(&self, event: CareerEvent) -> Result<String, StoreError> {
        let mut state = self.read()?;
        let id = event.id.clone();
        state.events.push(event);
        self.backend.write_state(&state)?;
        Ok(id)
    }

    fn insert_goal(&self, goal: CareerGoal) -> Result<String, StoreError> {
        let mut state = self.read()?;
        let id = goal.id.clone();
        state.goals.push(goal);
        self.backend.write_state(&state)?;
        Ok(id)
    }

    fn insert_application(&self, application: JobApplication) -> Result<String, StoreError> {
        let mut state = self.read()?;
        let id = application.id.clone();
        state.applications.push(application);
        self.backend.write_state(&state)?;
        Ok(id)
    }

    fn update_event_status(
        &self,
        id: &str,
        user_id: &str,
        status: EventStatus,
    ) -> Result<(), StoreError> {
        let mut state = self.read()?;
        let event = state
            .events
            .iter_mut()
            .find(|e| e.id == id && e.user_id == user_id)
            .ok_or_else(|| StoreError::RowNotFound {
                id: id.to_string(),
                user_id: user_id.to_string(),
            })?;
        event.status = status;
        self.backend.write_state(&state)
    }

    fn update_application_status(
        &self,
        id: &str,
        user_id: &str,
        status: ApplicationStatus,
    ) -> Result<(), StoreError> {
        let mut state = self.read()?;
        let application = state
            .applications
            .iter_mut()
            .find(|a| a.id == id && a.user_id == user_id)
            .ok_or_else(|| StoreError::RowNotFound {
                id: id.to_string(),
                user_id: user_id.to_string(),
            })?;
        application.status = status;
        self.backend.write_state(&state)
    }

    fn update_goal_progress(
        &self,
        id: &str,
        user_id: &str,
        progress: u8,
    ) -> Result<(), StoreError> {
        let mut state = self.read()?;
        let goal = state
            .goals
            .iter_mut()
            .find(|g| g.id == id && g.user_id == user_id)
            .ok_or_else(|| StoreError::RowNotFound {
                id: id.to_string(),
                user_id: user_id.to_string(),
            })?;
        goal.apply_progress(progress);
        self.backend.write_state(&state)
    }

    fn delete_event(&self, id: &str, user_id: &str) -> Result<(), StoreError> {
        let mut state = self.read()?;
        let pos = state
            .events
            .iter()
            .position(|e| e.id == id && e.user_id == user_id)
            .ok_or_else(|| StoreError::RowNotFound {
                id: id.to_string(),
                user_id: user_id.to_string(),
            })?;
        state.events.remove(pos);
        self.backend.write_state(&state)
    }

    fn delete_goal(&self, id: &str, user_id: &str) -> Result<(), StoreError> {
        let mut state = self.read()?;
        let pos = state
            .goals
            .iter()
            .position(|g| g.id == id && g.user_id == user_id)
            .ok_or_else(|| StoreError::RowNotFound {
                id: id.to_string(),
                user_id: user_id.to_string(),
            })?;
        state.goals.remove(pos);
        self.backend.write_state(&state)
    }

    fn delete_application(&self, id: &str, user_id: &str) -> Result<(), StoreError> {
        let mut state = self.read()?;
        let pos = state
            .applications
            .iter()
            .position(|a| a.id == id && a.user_id == user_id)
            .ok_or_else(|| StoreError::RowNotFound {
                id: id.to_string(),
                user_id: user_id.to_string(),
            })?;
        state.applications.remove(pos);
        self.backend.write_state(&state)
    }
}

/// Test helpers shared by unit and integration tests
pub mod test_utils {
    use super::{Backend, StoreError, StoreState};
    use std::cell::RefCell;

    /// In-memory document backend
    pub struct MemoryBackend {
        last_written_state: RefCell<StoreState>,
    }

    impl MemoryBackend {
        /// Create an empty in-memory document
        #[must_use]
        pub fn new() -> Self {
            Self::with_state(StoreState::default())
        }

        /// Create an in-memory document with initial contents
        #[must_use]
        pub const fn with_state(state: StoreState) -> Self {
            Self {
                last_written_state: RefCell::new(state),
            }
        }
    }

    impl Default for MemoryBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Backend for MemoryBackend {
        fn read_state(&self) -> Result<StoreState, StoreError> {
            Ok(self.last_written_state.borrow().clone())
        }

        fn write_state(&self, state: &StoreState) -> Result<(), StoreError> {
            *self.last_written_state.borrow_mut() = state.clone();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::MemoryBackend;
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn event(id: &str, user_id: &str) -> CareerEvent {
        CareerEvent {
            id: id.to_string(),
            user_id: user_id.to_string(),
            title: "Career Fair".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            location: None,
            status: EventStatus::Upcoming,
            created_at: Utc::now(),
        }
    }

    fn goal(id: &str, user_id: &str, progress: u8) -> CareerGoal {
        CareerGoal {
            id: id.to_string(),
            user_id: user_id.to_string(),
            title: "Polish resume".to_string(),
            target_date: None,
            progress,
            status: crate::core::models::GoalStatus::NotStarted,
            created_at: Utc::now(),
        }
    }

    fn memory_store() -> JsonStore {
        JsonStore::with_backend(Box::new(MemoryBackend::new()))
    }

    #[test]
    fn test_university_lookup_misses_on_empty_store() {
        let store = memory_store();
        assert!(store.university("u-1").unwrap().is_none());
    }

    #[test]
    fn test_insert_and_refetch_event() {
        let store = memory_store();
        let id = store.insert_event(event("e-1", "user-1")).unwrap();
        assert_eq!(id, "e-1");

        let events = store.events("user-1").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Career Fair");
    }

    #[test]
    fn test_events_scoped_to_user() {
        let store = memory_store();
        store.insert_event(event("e-1", "user-1")).unwrap();
        store.insert_event(event("e-2", "user-2")).unwrap();

        assert_eq!(store.events("user-1").unwrap().len(), 1);
        assert_eq!(store.events("user-2").unwrap().len(), 1);
        assert!(store.events("user-3").unwrap().is_empty());
    }

    #[test]
    fn test_update_event_status_requires_matching_user() {
        let store = memory_store();
        store.insert_event(event("e-1", "user-1")).unwrap();

        let result = store.update_event_status("e-1", "someone-else", EventStatus::Attended);
        assert!(matches!(result, Err(StoreError::RowNotFound { .. })));

        // The row is untouched
        assert_eq!(
            store.events("user-1").unwrap()[0].status,
            EventStatus::Upcoming
        );

        store
            .update_event_status("e-1", "user-1", EventStatus::Attended)
            .unwrap();
        assert_eq!(
            store.events("user-1").unwrap()[0].status,
            EventStatus::Attended
        );
    }

    #[test]
    fn test_goal_progress_rule_applied_by_store() {
        let store = memory_store();
        store.insert_goal(goal("g-1", "user-1", 0)).unwrap();

        store.update_goal_progress("g-1", "user-1", 25).unwrap();
        let goals = store.goals("user-1").unwrap();
        assert_eq!(goals[0].progress, 25);
        assert_eq!(goals[0].status, crate::core::models::GoalStatus::InProgress);

        store.update_goal_progress("g-1", "user-1", 250).unwrap();
        let goals = store.goals("user-1").unwrap();
        assert_eq!(goals[0].progress, 100);
        assert_eq!(goals[0].status, crate::core::models::GoalStatus::Completed);
    }

    #[test]
    fn test_delete_removes_row_from_refetch() {
        let store = memory_store();
        store.insert_event(event("e-1", "user-1")).unwrap();
        store.insert_event(event("e-2", "user-1")).unwrap();

        store.delete_event("e-1", "user-1").unwrap();

        let events = store.events("user-1").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "e-2");
    }

    #[test]
    fn test_delete_unknown_row_errors() {
        let store = memory_store();
        let result = store.delete_goal("g-404", "user-1");
        assert!(matches!(result, Err(StoreError::RowNotFound { .. })));
    }

    #[test]
    fn test_resources_filtered_by_kind() {
        let backend = MemoryBackend::new();
        let mut state = StoreState::default();
        state.resources.push(Resource::new(
            "r-1".to_string(),
            "u-1".to_string(),
            ResourceKind::Entrepreneurship,
            "Startup Club".to_string(),
        ));
        state.resources.push(Resource::new(
            "r-2".to_string(),
            "u-1".to_string(),
            ResourceKind::Scholarship,
            "Merit Award".to_string(),
        ));
        backend.write_state(&state).unwrap();

        let store = JsonStore::with_backend(Box::new(backend));
        let rows = store
            .resources("u-1", ResourceKind::Entrepreneurship)
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Startup Club");
    }
}
