//! Data store access
//!
//! Every content screen issues point lookups of the shape
//! `select * from <table> where id = :id` (child collections by
//! `<parent>_id`); the career tracker adds inserts, updates, and deletes
//! matched on `id AND user_id`. The [`DataStore`] trait captures that
//! contract so the shipped JSON-document store and any network-backed
//! client are interchangeable.

pub mod json;

pub use json::{JsonFileBackend, JsonStore, StoreState};

use crate::core::models::{
    AcademicProfile, ApplicationStatus, CareerEvent, CareerGoal, EventStatus, JobApplication,
    LocationEnvironment, Program, Resource, ResourceKind, University,
};
use thiserror::Error;

/// Errors surfaced at the data-store boundary
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing document failed
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document is not valid JSON for the expected schema
    #[error("store document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A mutation matched no row for the given `id AND user_id`
    #[error("no row matched id '{id}' for user '{user_id}'")]
    RowNotFound {
        /// Row id the mutation targeted
        id: String,
        /// User id the mutation was scoped to
        user_id: String,
    },
}

/// Store contract shared by all screens and the career tracker.
///
/// Reads are best-effort single attempts; there is no caching, retry, or
/// partial-success handling. Mutations are whole-row operations followed
/// by a full refetch at the caller.
pub trait DataStore {
    /// Fetch a university by id
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    fn university(&self, id: &str) -> Result<Option<University>, StoreError>;

    /// Fetch the programs offered by a university
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    fn programs(&self, university_id: &str) -> Result<Vec<Program>, StoreError>;

    /// Fetch the Location & Environment profile row for a university
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    fn location_environment(
        &self,
        university_id: &str,
    ) -> Result<Option<LocationEnvironment>, StoreError>;

    /// Fetch the academics profile row for a university
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    fn academic_profile(&self, university_id: &str)
        -> Result<Option<AcademicProfile>, StoreError>;

    /// Fetch the resource cards of one kind for a university
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    fn resources(
        &self,
        university_id: &str,
        kind: ResourceKind,
    ) -> Result<Vec<Resource>, StoreError>;

    /// Fetch all career events owned by a user
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    fn events(&self, user_id: &str) -> Result<Vec<CareerEvent>, StoreError>;

    /// Fetch all career goals owned by a user
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    fn goals(&self, user_id: &str) -> Result<Vec<CareerGoal>, StoreError>;

    /// Fetch all job applications owned by a user
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    fn applications(&self, user_id: &str) -> Result<Vec<JobApplication>, StoreError>;

    /// Insert a new career event row
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or written.
    fn insert_event(&self, event: CareerEvent) -> Result<String, StoreError>;

    /// Insert a new career goal row
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or written.
    fn insert_goal(&self, goal: CareerGoal) -> Result<String, StoreError>;

    /// Insert a new job application row
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or written.
    fn insert_application(&self, application: JobApplication) -> Result<String, StoreError>;

    /// Update an event's status, matched on `id AND user_id`
    ///
    /// # Errors
    /// Returns [`StoreError::RowNotFound`] if no row matched, or an I/O
    /// error if the store cannot be read or written.
    fn update_event_status(
        &self,
        id: &str,
        user_id: &str,
        status: EventStatus,
    ) -> Result<(), StoreError>;

    /// Update an application's status, matched on `id AND user_id`
    ///
    /// # Errors
    /// Returns [`StoreError::RowNotFound`] if no row matched, or an I/O
    /// error if the store cannot be read or written.
    fn update_application_status(
        &self,
        id: &str,
        user_id: &str,
        status: ApplicationStatus,
    ) -> Result<(), StoreError>;

    /// Update a goal's progress, matched on `id AND user_id`.
    ///
    /// Applies the progress rule: the value is clamped to 100, and the
    /// goal's status becomes `completed` at 100 or `in_progress` below.
    ///
    /// # Errors
    /// Returns [`StoreError::RowNotFound`] if no row matched, or an I/O
    /// error if the store cannot be read or written.
    fn update_goal_progress(
        &self,
        id: &str,
        user_id: &str,
        progress: u8,
    ) -> Result<(), StoreError>;

    /// Delete an event row, matched on `id AND user_id`
    ///
    /// # Errors
    /// Returns [`StoreError::RowNotFound`] if no row matched, or an I/O
    /// error if the store cannot be read or written.
    fn delete_event(&self, id: &str, user_id: &str) -> Result<(), StoreError>;

    /// Delete a goal row, matched on `id AND user_id`
    ///
    /// # Errors
    /// Returns [`StoreError::RowNotFound`] if no row matched, or an I/O
    /// error if the store cannot be read or written.
    fn delete_goal(&self, id: &str, user_id: &str) -> Result<(), StoreError>;

    /// Delete an application row, matched on `id AND user_id`
    ///
    /// # Errors
    /// Returns [`StoreError::RowNotFound`] if no row matched, or an I/O
    /// error if the store cannot be read or written.
    fn delete_application(&self, id: &str, user_id: &str) -> Result<(), StoreError>;
}
