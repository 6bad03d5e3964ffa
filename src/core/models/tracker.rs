//! Career tracker models
//!
//! Events, goals, and job applications are the only mutable entities in
//! the system: created by explicit add actions, updated by explicit
//! status/progress edits, deleted on request, all scoped to a user id.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a career event
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Event has not happened yet
    Upcoming,
    /// User registered for the event
    Registered,
    /// User attended the event
    Attended,
    /// User missed the event
    Missed,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Upcoming => "upcoming",
            Self::Registered => "registered",
            Self::Attended => "attended",
            Self::Missed => "missed",
        };
        write!(f, "{as_str}")
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "registered" => Ok(Self::Registered),
            "attended" => Ok(Self::Attended),
            "missed" => Ok(Self::Missed),
            _ => Err(format!("Unknown event status: '{s}'")),
        }
    }
}

/// Status of a career goal
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// No progress recorded yet
    NotStarted,
    /// Progress recorded, below 100
    InProgress,
    /// Progress reached 100
    Completed,
    /// Paused by the user
    OnHold,
}

impl GoalStatus {
    /// Status implied by a progress value.
    ///
    /// Progress at or above 100 forces `Completed`; anything below
    /// forces `InProgress`.
    #[must_use]
    pub const fn for_progress(progress: u8) -> Self {
        if progress >= 100 {
            Self::Completed
        } else {
            Self::InProgress
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        };
        write!(f, "{as_str}")
    }
}

impl FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "on_hold" => Ok(Self::OnHold),
            _ => Err(format!("Unknown goal status: '{s}'")),
        }
    }
}

/// Status of a job application
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Application submitted
    Applied,
    /// In the screening stage
    Screening,
    /// Interviewing
    Interview,
    /// Offer received
    Offer,
    /// Application rejected
    Rejected,
    /// Application withdrawn by the user
    Withdrawn,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Applied => "applied",
            Self::Screening => "screening",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        };
        write!(f, "{as_str}")
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "applied" => Ok(Self::Applied),
            "screening" => Ok(Self::Screening),
            "interview" => Ok(Self::Interview),
            "offer" => Ok(Self::Offer),
            "rejected" => Ok(Self::Rejected),
            "withdrawn" => Ok(Self::Withdrawn),
            _ => Err(format!("Unknown application status: '{s}'")),
        }
    }
}

/// A career event tracked by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerEvent {
    /// Opaque row id
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Event title
    pub title: String,
    /// Event date
    pub date: NaiveDate,
    /// Event location (free text)
    #[serde(default)]
    pub location: Option<String>,
    /// Current status
    pub status: EventStatus,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A career goal tracked by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerGoal {
    /// Opaque row id
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Goal title
    pub title: String,
    /// Optional target date
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    /// Progress percentage (0-100)
    pub progress: u8,
    /// Current status
    pub status: GoalStatus,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
}

impl CareerGoal {
    /// Apply a progress update, clamping to 100 and forcing the status
    /// implied by the new value.
    pub fn apply_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
        self.status = GoalStatus::for_progress(self.progress);
    }
}

/// A job application tracked by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    /// Opaque row id
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Company name
    pub company: String,
    /// Role applied for
    pub role: String,
    /// Date the application was submitted
    pub applied_on: NaiveDate,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Current status
    pub status: ApplicationStatus,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_round_trips() {
        let event: EventStatus = EventStatus::Registered.to_string().parse().unwrap();
        assert_eq!(event, EventStatus::Registered);

        let goal: GoalStatus = GoalStatus::OnHold.to_string().parse().unwrap();
        assert_eq!(goal, GoalStatus::OnHold);

        let app: ApplicationStatus = ApplicationStatus::Withdrawn.to_string().parse().unwrap();
        assert_eq!(app, ApplicationStatus::Withdrawn);
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("cancelled".parse::<EventStatus>().is_err());
        assert!("done".parse::<GoalStatus>().is_err());
        assert!("ghosted".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_goal_status_for_progress() {
        assert_eq!(GoalStatus::for_progress(0), GoalStatus::InProgress);
        assert_eq!(GoalStatus::for_progress(99), GoalStatus::InProgress);
        assert_eq!(GoalStatus::for_progress(100), GoalStatus::Completed);
    }

    #[test]
    fn test_apply_progress_clamps_and_completes() {
        let mut goal = CareerGoal {
            id: "g-1".to_string(),
            user_id: "user-1".to_string(),
            title: "Finish portfolio".to_string(),
            target_date: None,
            progress: 75,
            status: GoalStatus::InProgress,
            created_at: Utc::now(),
        };

        goal.apply_progress(100);
        assert_eq!(goal.progress, 100);
        assert_eq!(goal.status, GoalStatus::Completed);

        goal.apply_progress(25);
        assert_eq!(goal.progress, 25);
        assert_eq!(goal.status, GoalStatus::InProgress);

        goal.apply_progress(250);
        assert_eq!(goal.progress, 100);
        assert_eq!(goal.status, GoalStatus::Completed);
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&GoalStatus::NotStarted).unwrap();
        assert_eq!(json, r#""not_started""#);

        let status: ApplicationStatus = serde_json::from_str(r#""interview""#).unwrap();
        assert_eq!(status, ApplicationStatus::Interview);
    }
}
