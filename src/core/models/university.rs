//! University and program models

use serde::{Deserialize, Serialize};

/// A university record as stored in the `universities` table.
///
/// Read-only from the application's perspective; rows are created and
/// maintained externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    /// Opaque entity id (string/UUID), used as the lookup key
    pub id: String,

    /// University name (e.g., "Stanford University")
    pub name: String,

    /// Human-readable location (e.g., "Stanford, CA")
    #[serde(default)]
    pub location: String,

    /// Official website URL
    #[serde(default)]
    pub website: Option<String>,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl University {
    /// Create a new university record
    ///
    /// # Arguments
    /// * `id` - Opaque entity id
    /// * `name` - University name
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            location: String::new(),
            website: None,
            description: String::new(),
        }
    }
}

/// A degree program offered by a university.
///
/// The `university_id` reference is informal; no referential integrity is
/// enforced by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Opaque entity id
    pub id: String,

    /// Parent university id (informal foreign key)
    pub university_id: String,

    /// Program name (e.g., "Computer Science")
    pub name: String,

    /// Degree type (e.g., "BS", "BA", "MS")
    #[serde(default)]
    pub degree_type: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl Program {
    /// Create a new program record
    ///
    /// # Arguments
    /// * `id` - Opaque entity id
    /// * `university_id` - Parent university id
    /// * `name` - Program name
    /// * `degree_type` - Degree type (BS, BA, etc.)
    #[must_use]
    pub const fn new(id: String, university_id: String, name: String, degree_type: String) -> Self {
        Self {
            id,
            university_id,
            name,
            degree_type,
            description: String::new(),
        }
    }

    /// Get a display label for this program
    ///
    /// # Returns
    /// A string combining degree type and name (e.g., "BS Computer Science")
    #[must_use]
    pub fn label(&self) -> String {
        if self.degree_type.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.degree_type, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_university_creation() {
        let uni = University::new("u-1".to_string(), "Stanford University".to_string());

        assert_eq!(uni.id, "u-1");
        assert_eq!(uni.name, "Stanford University");
        assert!(uni.location.is_empty());
        assert!(uni.website.is_none());
    }

    #[test]
    fn test_program_label() {
        let program = Program::new(
            "p-1".to_string(),
            "u-1".to_string(),
            "Computer Science".to_string(),
            "BS".to_string(),
        );

        assert_eq!(program.label(), "BS Computer Science");
    }

    #[test]
    fn test_program_label_without_degree_type() {
        let program = Program::new(
            "p-2".to_string(),
            "u-1".to_string(),
            "Undeclared".to_string(),
            String::new(),
        );

        assert_eq!(program.label(), "Undeclared");
    }

    #[test]
    fn test_university_deserializes_sparse_row() {
        let row = r#"{"id": "u-9", "name": "Sparse U"}"#;
        let uni: University = serde_json::from_str(row).unwrap();

        assert_eq!(uni.name, "Sparse U");
        assert!(uni.description.is_empty());
        assert!(uni.website.is_none());
    }
}
