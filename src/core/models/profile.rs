//! University profile section models
//!
//! Each profile screen reads one of these child tables keyed by
//! `university_id`. Rows are display-only; missing rows are replaced by
//! generated fallback content at the screen layer.

use serde::{Deserialize, Serialize};

/// A cultural attraction near campus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    /// Attraction name
    pub name: String,
    /// Attraction kind (e.g., "museum", "theater", "park")
    #[serde(default)]
    pub kind: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
}

/// A healthcare facility near campus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Facility name
    pub name: String,
    /// Facility kind (e.g., "hospital", "clinic", "pharmacy")
    #[serde(default)]
    pub kind: String,
    /// Approximate distance from campus (free text)
    #[serde(default)]
    pub distance: Option<String>,
}

/// Location & Environment profile for a university
/// (the `university_location_environment` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEnvironment {
    /// Parent university id (informal foreign key)
    pub university_id: String,

    /// Free-text profile of the surrounding city/town
    pub city_town_profile: String,

    /// Cultural attractions near campus
    #[serde(default)]
    pub cultural_attractions: Vec<Attraction>,

    /// Healthcare facilities near campus
    #[serde(default)]
    pub healthcare_facilities: Vec<Facility>,

    /// Notes on local transport options
    #[serde(default)]
    pub transport_notes: Option<String>,
}

/// Academics profile for a university
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicProfile {
    /// Parent university id (informal foreign key)
    pub university_id: String,

    /// Free-text overview of academic life
    pub overview: String,

    /// Academic strengths / flagship departments
    #[serde(default)]
    pub strengths: Vec<String>,

    /// Student-to-faculty ratio (free text, e.g., "6:1")
    #[serde(default)]
    pub student_faculty_ratio: Option<String>,

    /// Notable research highlights
    #[serde(default)]
    pub research_highlights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_environment_deserializes_sparse_row() {
        let row = r#"{"university_id": "u-1", "city_town_profile": "A quiet college town."}"#;
        let le: LocationEnvironment = serde_json::from_str(row).unwrap();

        assert_eq!(le.university_id, "u-1");
        assert!(le.cultural_attractions.is_empty());
        assert!(le.healthcare_facilities.is_empty());
        assert!(le.transport_notes.is_none());
    }

    #[test]
    fn test_academic_profile_round_trip() {
        let profile = AcademicProfile {
            university_id: "u-1".to_string(),
            overview: "Strong engineering focus.".to_string(),
            strengths: vec!["Engineering".to_string(), "Design".to_string()],
            student_faculty_ratio: Some("8:1".to_string()),
            research_highlights: vec!["Robotics lab".to_string()],
        };

        let json = serde_json::to_string(&profile).unwrap();
        let back: AcademicProfile = serde_json::from_str(&json).unwrap();

        assert_eq!(profile, back);
    }
}
