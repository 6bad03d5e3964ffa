//! Data models for `UniScout`

pub mod profile;
pub mod resource;
pub mod tracker;
pub mod university;

pub use profile::{AcademicProfile, Attraction, Facility, LocationEnvironment};
pub use resource::{Contact, Mentor, Resource, ResourceKind, Video};
pub use tracker::{
    ApplicationStatus, CareerEvent, CareerGoal, EventStatus, GoalStatus, JobApplication,
};
pub use university::{Program, University};
