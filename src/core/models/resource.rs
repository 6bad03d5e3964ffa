//! Opportunity resource models
//!
//! The entrepreneurship, innovation, scholarship, and support-service
//! screens all present the same card shape. Instead of loose JSON blobs,
//! the record carries an explicit `ResourceKind` discriminant and typed
//! nested collections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminant for the four resource screens
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Entrepreneurship resources (clubs, incubators, competitions)
    Entrepreneurship,
    /// Innovation opportunities (labs, maker spaces, research openings)
    Innovation,
    /// Scholarships and financial aid
    Scholarship,
    /// Student support services
    SupportService,
}

impl ResourceKind {
    /// All kinds, in screen order
    pub const ALL: [Self; 4] = [
        Self::Entrepreneurship,
        Self::Innovation,
        Self::Scholarship,
        Self::SupportService,
    ];

    /// Human-readable screen title for this kind
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Entrepreneurship => "Entrepreneurship Resources",
            Self::Innovation => "Innovation Opportunities",
            Self::Scholarship => "Scholarships",
            Self::SupportService => "Support Services",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Entrepreneurship => "entrepreneurship",
            Self::Innovation => "innovation",
            Self::Scholarship => "scholarship",
            Self::SupportService => "support_service",
        };
        write!(f, "{as_str}")
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "entrepreneurship" => Ok(Self::Entrepreneurship),
            "innovation" => Ok(Self::Innovation),
            "scholarship" | "scholarships" => Ok(Self::Scholarship),
            "support_service" | "support" => Ok(Self::SupportService),
            _ => Err(format!("Unknown resource kind: '{s}'")),
        }
    }
}

/// An embedded video attached to a resource card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Video title
    pub title: String,
    /// Video URL
    pub url: String,
    /// Duration label (e.g., "12:30")
    #[serde(default)]
    pub duration: Option<String>,
}

/// A mentor attached to a resource card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    /// Mentor name
    pub name: String,
    /// Area of expertise
    #[serde(default)]
    pub expertise: String,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
}

/// A contact block attached to a resource card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact person or office name
    pub name: String,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Office location
    #[serde(default)]
    pub office: Option<String>,
}

/// One card on a resource screen.
///
/// Optional fields may be absent in stored rows; nested collections
/// default to empty. Kind-specific extras (`amount`, `deadline`, `hours`)
/// are populated only for the kinds that use them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Opaque entity id
    pub id: String,

    /// Parent university id (informal foreign key)
    pub university_id: String,

    /// Resource kind (selects the screen this row appears on)
    pub kind: ResourceKind,

    /// Card title
    pub title: String,

    /// Category string used for icon/badge selection and filtering
    #[serde(default)]
    pub category: String,

    /// Free-text summary shown in the card overview section
    #[serde(default)]
    pub summary: String,

    /// Benefit bullet points
    #[serde(default)]
    pub benefits: Vec<String>,

    /// Requirement bullet points
    #[serde(default)]
    pub requirements: Vec<String>,

    /// Application checklist items
    #[serde(default)]
    pub checklist: Vec<String>,

    /// Attached videos (rendered as a carousel in the original app)
    #[serde(default)]
    pub videos: Vec<Video>,

    /// Attached mentors
    #[serde(default)]
    pub mentors: Vec<Mentor>,

    /// Contact block
    #[serde(default)]
    pub contact: Option<Contact>,

    /// Outbound website link
    #[serde(default)]
    pub website: Option<String>,

    /// Outbound email address
    #[serde(default)]
    pub email: Option<String>,

    /// Outbound phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Award amount (scholarships)
    #[serde(default)]
    pub amount: Option<String>,

    /// Application deadline (scholarships, competitions)
    #[serde(default)]
    pub deadline: Option<String>,

    /// Opening hours (support services)
    #[serde(default)]
    pub hours: Option<String>,
}

impl Resource {
    /// Create a new resource card with empty detail sections
    ///
    /// # Arguments
    /// * `id` - Opaque entity id
    /// * `university_id` - Parent university id
    /// * `kind` - Resource kind
    /// * `title` - Card title
    #[must_use]
    pub const fn new(id: String, university_id: String, kind: ResourceKind, title: String) -> Self {
        Self {
            id,
            university_id,
            kind,
            title,
            category: String::new(),
            summary: String::new(),
            benefits: Vec::new(),
            requirements: Vec::new(),
            checklist: Vec::new(),
            videos: Vec::new(),
            mentors: Vec::new(),
            contact: None,
            website: None,
            email: None,
            phone: None,
            amount: None,
            deadline: None,
            hours: None,
        }
    }

    /// Whether the card has any application info to render
    /// (amount, deadline, or opening hours)
    #[must_use]
    pub const fn has_application_info(&self) -> bool {
        self.amount.is_some() || self.deadline.is_some() || self.hours.is_some()
    }

    /// Whether the card has any outbound action targets
    #[must_use]
    pub const fn has_actions(&self) -> bool {
        self.website.is_some() || self.email.is_some() || self.phone.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_round_trip() {
        for kind in ResourceKind::ALL {
            let parsed: ResourceKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_kind_parse_aliases() {
        assert_eq!(
            "scholarships".parse::<ResourceKind>().unwrap(),
            ResourceKind::Scholarship
        );
        assert_eq!(
            "support".parse::<ResourceKind>().unwrap(),
            ResourceKind::SupportService
        );
    }

    #[test]
    fn test_kind_parse_rejects_unknown() {
        assert!("clubs".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_resource_deserializes_sparse_row() {
        let row = r#"{
            "id": "r-1",
            "university_id": "u-1",
            "kind": "entrepreneurship",
            "title": "Startup Incubator"
        }"#;
        let resource: Resource = serde_json::from_str(row).unwrap();

        assert_eq!(resource.kind, ResourceKind::Entrepreneurship);
        assert!(resource.benefits.is_empty());
        assert!(!resource.has_application_info());
        assert!(!resource.has_actions());
    }

    #[test]
    fn test_application_info_detection() {
        let mut resource = Resource::new(
            "r-2".to_string(),
            "u-1".to_string(),
            ResourceKind::Scholarship,
            "Merit Award".to_string(),
        );
        assert!(!resource.has_application_info());

        resource.amount = Some("$5,000".to_string());
        assert!(resource.has_application_info());
    }
}
