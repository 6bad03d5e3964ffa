//! Card list rendering
//!
//! Screens resolve their data into a [`CardList`], a flat presentation
//! model: one card per record with a badge, title, and subtitle, plus a
//! fixed sequence of detail sections shown only while the card is
//! expanded. Reporters turn a card list into text or Markdown output.

pub mod cards;
pub mod formats;

use crate::core::outbound::OutboundAction;
use std::error::Error;
use std::path::Path;

pub use cards::{
    profile_cards, program_cards, resource_cards, tracker_cards,
};
pub use formats::{CardFormat, MarkdownReporter, TextReporter};

/// Icon and color keyed by a card's category string
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Icon glyph shown in the card header
    pub icon: &'static str,
    /// Color name used by styled frontends
    pub color: &'static str,
}

/// Look up the badge for a category string.
///
/// Unknown categories fall through to a neutral default.
#[must_use]
pub fn badge_for(category: &str) -> Badge {
    match category.to_ascii_lowercase().as_str() {
        "club" => Badge {
            icon: "👥",
            color: "purple",
        },
        "incubator" => Badge {
            icon: "🚀",
            color: "orange",
        },
        "competition" => Badge {
            icon: "🏆",
            color: "gold",
        },
        "lab" | "research" => Badge {
            icon: "🔬",
            color: "teal",
        },
        "makerspace" => Badge {
            icon: "🛠",
            color: "slate",
        },
        "merit" | "need_based" | "departmental" => Badge {
            icon: "🎓",
            color: "green",
        },
        "advising" => Badge {
            icon: "🧭",
            color: "blue",
        },
        "wellness" => Badge {
            icon: "💚",
            color: "green",
        },
        "career" => Badge {
            icon: "💼",
            color: "navy",
        },
        _ => Badge {
            icon: "📌",
            color: "gray",
        },
    }
}

/// A labeled outbound link on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    /// Button label (e.g., "Website", "Email")
    pub label: String,
    /// The underlying outbound action
    pub action: OutboundAction,
}

/// One detail section of an expanded card.
///
/// Sections are rendered in declaration order, and only when non-empty;
/// builders skip sections with nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSection {
    /// Free-text overview paragraph
    Overview(String),
    /// A bulleted list under a heading (benefits, requirements, checklist)
    Bullets {
        /// Section heading
        heading: String,
        /// Bullet items
        items: Vec<String>,
    },
    /// Key/value rows (application info, profile facts)
    Facts {
        /// Section heading
        heading: String,
        /// Label/value pairs
        rows: Vec<(String, String)>,
    },
    /// Outbound action buttons
    Actions(Vec<ActionLink>),
}

/// One expandable card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Record id (the expansion key)
    pub id: String,
    /// Badge resolved from the record's category
    pub badge: Badge,
    /// Header title
    pub title: String,
    /// Header subtitle
    pub subtitle: String,
    /// Whether the card renders its detail sections
    pub expanded: bool,
    /// Detail sections, in fixed order
    pub sections: Vec<CardSection>,
}

/// A rendered screen: heading plus its cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardList {
    /// Screen title
    pub title: String,
    /// Screen subtitle (university name, counts)
    pub subtitle: String,
    /// Cards in source order
    pub cards: Vec<Card>,
}

impl CardList {
    /// Ids of all cards, in order
    #[must_use]
    pub fn card_ids(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.id.as_str()).collect()
    }
}

/// Trait for card list reporters
pub trait CardRenderer {
    /// Render a card list to a file
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, list: &CardList, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Render a card list as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, list: &CardList) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_lookup_known_categories() {
        assert_eq!(badge_for("club").icon, "👥");
        assert_eq!(badge_for("CLUB").icon, "👥");
        assert_eq!(badge_for("merit").color, "green");
    }

    #[test]
    fn test_badge_lookup_falls_back_to_default() {
        let badge = badge_for("something-unmapped");
        assert_eq!(badge.icon, "📌");
        assert_eq!(badge.color, "gray");
    }
}
