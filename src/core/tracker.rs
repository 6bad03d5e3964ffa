//! Career tracker mutation flows
//!
//! The tracker owns the three user-scoped collections and mirrors the
//! original mutation model exactly: every add/update/delete issues one
//! store mutation matched on `id AND user_id`, then refetches all three
//! collections wholesale. There are no optimistic updates; a failed
//! mutation leaves the previously fetched data untouched.

use crate::core::models::{
    ApplicationStatus, CareerEvent, CareerGoal, EventStatus, GoalStatus, JobApplication,
};
use crate::core::store::{DataStore, StoreError};
use chrono::{NaiveDate, Utc};
use logger::error;
use uuid::Uuid;

/// Generate an id for a new tracker row
fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// The career tracker screen state for one user
pub struct CareerTracker {
    store: Box<dyn DataStore>,
    user_id: String,
    events: Vec<CareerEvent>,
    goals: Vec<CareerGoal>,
    applications: Vec<JobApplication>,
}

impl CareerTracker {
    /// Open the tracker for a user and load their collections
    ///
    /// # Errors
    /// Returns an error if the initial fetch fails.
    pub fn open(store: Box<dyn DataStore>, user_id: String) -> Result<Self, StoreError> {
        let mut tracker = Self {
            store,
            user_id,
            events: Vec::new(),
            goals: Vec::new(),
            applications: Vec::new(),
        };
        tracker.reload()?;
        Ok(tracker)
    }

    /// The user this tracker is scoped to
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Events from the last successful reload
    #[must_use]
    pub fn events(&self) -> &[CareerEvent] {
        &self.events
    }

    /// Goals from the last successful reload
    #[must_use]
    pub fn goals(&self) -> &[CareerGoal] {
        &self.goals
    }

    /// Applications from the last successful reload
    #[must_use]
    pub fn applications(&self) -> &[JobApplication] {
        &self.applications
    }

    /// Refetch all three collections wholesale.
    ///
    /// Collections are replaced only when every fetch succeeds, so a
    /// failed reload keeps the prior data.
    ///
    /// # Errors
    /// Returns an error if any fetch fails.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let events = self.store.events(&self.user_id)?;
        let goals = self.store.goals(&self.user_id)?;
        let applications = self.store.applications(&self.user_id)?;

        self.events = events;
        self.goals = goals;
        self.applications = applications;
        Ok(())
    }

    /// Add a new event with initial status `upcoming`, then reload
    ///
    /// # Errors
    /// Returns an error if the insert or reload fails.
    pub fn add_event(
        &mut self,
        title: String,
        date: NaiveDate,
        location: Option<String>,
    ) -> Result<String, StoreError> {
        let event = CareerEvent {
            id: new_id(),
            user_id: self.user_id.clone(),
            title,
            date,
            location,
            status: EventStatus::Upcoming,
            created_at: Utc::now(),
        };
        let id = self.store.insert_event(event).map_err(|e| {
            error!("Failed to add event: {e}");
            e
        })?;
        self.reload()?;
        Ok(id)
    }

    /// Add a new goal with initial status `not_started`, then reload
    ///
    /// # Errors
    /// Returns an error if the insert or reload fails.
    pub fn add_goal(
        &mut self,
        title: String,
        target_date: Option<NaiveDate>,
    ) -> Result<String, StoreError> {
        let goal = CareerGoal {
            id: new_id(),
            user_id: self.user_id.clone(),
            title,
            target_date,
            progress: 0,
            status: GoalStatus::NotStarted,
            created_at: Utc::now(),
        };
        let id = self.store.insert_goal(goal).map_err(|e| {
            error!("Failed to add goal: {e}");
            e
        })?;
        self.reload()?;
        Ok(id)
    }

    /// Add a new application with initial status `applied`, then reload
    ///
    /// # Errors
    /// Returns an error if the insert or reload fails.
    pub fn add_application(
        &mut self,
        company: String,
        role: String,
        applied_on: NaiveDate,
        notes: Option<String>,
    ) -> Result<String, StoreError> {
        let application = JobApplication {
            id: new_id(),
            user_id: self.user_id.clone(),
            company,
            role,
            applied_on,
            notes,
            status: ApplicationStatus::Applied,
            created_at: Utc::now(),
        };
        let id = self.store.insert_application(application).map_err(|e| {
            error!("Failed to add application: {e}");
            e
        })?;
        self.reload()?;
        Ok(id)
    }

    /// Update an event's status, then reload
    ///
    /// # Errors
    /// Returns an error if no row matched or the store failed.
    pub fn set_event_status(&mut self, id: &str, status: EventStatus) -> Result<(), StoreError> {
        self.store
            .update_event_status(id, &self.user_id, status)
            .map_err(|e| {
                error!("Failed to update event '{id}': {e}");
                e
            })?;
        self.reload()
    }

    /// Update an application's status, then reload
    ///
    /// # Errors
    /// Returns an error if no row matched or the store failed.
    pub fn set_application_status(
        &mut self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<(), StoreError> {
        self.store
            .update_application_status(id, &self.user_id, status)
            .map_err(|e| {
                error!("Failed to update application '{id}': {e}");
                e
            })?;
        self.reload()
    }

    /// Update a goal's progress, then reload.
    ///
    /// The store applies the progress rule: the value is clamped to 100,
    /// and the status becomes `completed` at 100 or `in_progress` below.
    ///
    /// # Errors
    /// Returns an error if no row matched or the store failed.
    pub fn set_goal_progress(&mut self, id: &str, progress: u8) -> Result<(), StoreError> {
        self.store
            .update_goal_progress(id, &self.user_id, progress)
            .map_err(|e| {
                error!("Failed to update goal '{id}': {e}");
                e
            })?;
        self.reload()
    }

    /// Delete an event, then reload
    ///
    /// # Errors
    /// Returns an error if no row matched or the store failed.
    pub fn delete_event(&mut self, id: &str) -> Result<(), StoreError> {
        self.store.delete_event(id, &self.user_id).map_err(|e| {
            error!("Failed to delete event '{id}': {e}");
            e
        })?;
        self.reload()
    }

    /// Delete a goal, then reload
    ///
    /// # Errors
    /// Returns an error if no row matched or the store failed.
    pub fn delete_goal(&mut self, id: &str) -> Result<(), StoreError> {
        self.store.delete_goal(id, &self.user_id).map_err(|e| {
            error!("Failed to delete goal '{id}': {e}");
            e
        })?;
        self.reload()
    }

    /// Delete an application, then reload
    ///
    /// # Errors
    /// Returns an error if no row matched or the store failed.
    pub fn delete_application(&mut self, id: &str) -> Result<(), StoreError> {
        self.store
            .delete_application(id, &self.user_id)
            .map_err(|e| {
                error!("Failed to delete application '{id}': {e}");
                e
            })?;
        self.reload()
    }
}
