//! Plain-text card list reporter
//!
//! The default terminal output. Collapsed cards render their header
//! line only; expanded cards render their detail sections indented
//! beneath it.

use crate::core::render::{CardList, CardRenderer, CardSection};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Plain-text reporter
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_section(output: &mut String, section: &CardSection) {
        match section {
            CardSection::Overview(text) => {
                let _ = writeln!(output, "    {text}");
            }
            CardSection::Bullets { heading, items } => {
                let _ = writeln!(output, "    {heading}:");
                for item in items {
                    let _ = writeln!(output, "      - {item}");
                }
            }
            CardSection::Facts { heading, rows } => {
                let _ = writeln!(output, "    {heading}:");
                for (label, value) in rows {
                    let _ = writeln!(output, "      {label}: {value}");
                }
            }
            CardSection::Actions(links) => {
                let _ = writeln!(output, "    Actions:");
                for link in links {
                    let _ = writeln!(output, "      [{}] {}", link.label, link.action.to_uri());
                }
            }
        }
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRenderer for TextReporter {
    fn generate(&self, list: &CardList, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(list)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, list: &CardList) -> Result<String, Box<dyn Error>> {
        let mut output = String::new();

        let _ = writeln!(output, "=== {} ===", list.title);
        if !list.subtitle.is_empty() {
            let _ = writeln!(output, "{}", list.subtitle);
        }
        let _ = writeln!(output);

        if list.cards.is_empty() {
            let _ = writeln!(output, "No matching entries.");
            return Ok(output);
        }

        for card in &list.cards {
            let marker = if card.expanded { "▾" } else { "▸" };
            if card.subtitle.is_empty() {
                let _ = writeln!(output, "{marker} {} {}", card.badge.icon, card.title);
            } else {
                let _ = writeln!(
                    output,
                    "{marker} {} {} ({})",
                    card.badge.icon, card.title, card.subtitle
                );
            }

            if card.expanded {
                for section in &card.sections {
                    Self::render_section(&mut output, section);
                }
                let _ = writeln!(output);
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{badge_for, Card};

    fn list_with_card(expanded: bool) -> CardList {
        CardList {
            title: "Entrepreneurship Resources".to_string(),
            subtitle: "Test University".to_string(),
            cards: vec![Card {
                id: "r-1".to_string(),
                badge: badge_for("club"),
                title: "Startup Club".to_string(),
                subtitle: "club".to_string(),
                expanded,
                sections: vec![CardSection::Overview("Weekly founder talks.".to_string())],
            }],
        }
    }

    #[test]
    fn test_collapsed_card_hides_sections() {
        let output = TextReporter::new().render(&list_with_card(false)).unwrap();

        assert!(output.contains("Startup Club"));
        assert!(!output.contains("Weekly founder talks."));
    }

    #[test]
    fn test_expanded_card_shows_sections() {
        let output = TextReporter::new().render(&list_with_card(true)).unwrap();

        assert!(output.contains("Startup Club"));
        assert!(output.contains("Weekly founder talks."));
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let list = CardList {
            title: "Programs".to_string(),
            subtitle: String::new(),
            cards: Vec::new(),
        };
        let output = TextReporter::new().render(&list).unwrap();

        assert!(output.contains("No matching entries."));
    }
}
