//! Markdown card list reporter
//!
//! Generates card lists as Markdown documents that render well in
//! GitHub, GitLab, and VS Code.

use crate::core::render::{Card, CardList, CardRenderer, CardSection};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/cards.md");

/// Markdown reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, list: &CardList) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", &list.title);
        output = output.replace("{{subtitle}}", &list.subtitle);
        output = output.replace("{{card_count}}", &list.cards.len().to_string());
        output = output.replace("{{cards}}", &Self::render_cards(list));

        output
    }

    /// Render all cards as Markdown sections
    fn render_cards(list: &CardList) -> String {
        if list.cards.is_empty() {
            return "_No matching entries._\n".to_string();
        }

        let mut body = String::new();
        for card in &list.cards {
            Self::render_card(&mut body, card);
        }
        body
    }

    fn render_card(body: &mut String, card: &Card) {
        let _ = writeln!(body, "## {} {}", card.badge.icon, card.title);
        if !card.subtitle.is_empty() {
            let _ = writeln!(body, "*{}*", card.subtitle);
        }
        let _ = writeln!(body);

        if !card.expanded {
            return;
        }

        for section in &card.sections {
            match section {
                CardSection::Overview(text) => {
                    let _ = writeln!(body, "{text}");
                    let _ = writeln!(body);
                }
                CardSection::Bullets { heading, items } => {
                    let _ = writeln!(body, "### {heading}");
                    for item in items {
                        let _ = writeln!(body, "- {item}");
                    }
                    let _ = writeln!(body);
                }
                CardSection::Facts { heading, rows } => {
                    let _ = writeln!(body, "### {heading}");
                    for (label, value) in rows {
                        let _ = writeln!(body, "- **{label}**: {value}");
                    }
                    let _ = writeln!(body);
                }
                CardSection::Actions(links) => {
                    let _ = writeln!(body, "### Actions");
                    for link in links {
                        let _ = writeln!(body, "- [{}]({})", link.label, link.action.to_uri());
                    }
                    let _ = writeln!(body);
                }
            }
        }
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRenderer for MarkdownReporter {
    fn generate(&self, list: &CardList, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(list)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, list: &CardList) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outbound::OutboundAction;
    use crate::core::render::{badge_for, ActionLink};

    fn sample_list() -> CardList {
        CardList {
            title: "Scholarships".to_string(),
            subtitle: "Test University".to_string(),
            cards: vec![Card {
                id: "s-1".to_string(),
                badge: badge_for("merit"),
                title: "Merit Award".to_string(),
                subtitle: "merit".to_string(),
                expanded: true,
                sections: vec![
                    CardSection::Facts {
                        heading: "Application Info".to_string(),
                        rows: vec![("Amount".to_string(), "$5,000".to_string())],
                    },
                    CardSection::Actions(vec![ActionLink {
                        label: "Email".to_string(),
                        action: OutboundAction::Email {
                            to: "aid@example.edu".to_string(),
                            subject: "Merit Award".to_string(),
                        },
                    }]),
                ],
            }],
        }
    }

    #[test]
    fn test_template_substitution() {
        let output = MarkdownReporter::new().render(&sample_list()).unwrap();

        assert!(output.contains("# Scholarships"));
        assert!(output.contains("**Test University**"));
        assert!(output.contains("1 entries"));
        assert!(!output.contains("{{"));
    }

    #[test]
    fn test_expanded_card_renders_facts_and_actions() {
        let output = MarkdownReporter::new().render(&sample_list()).unwrap();

        assert!(output.contains("- **Amount**: $5,000"));
        assert!(output.contains("[Email](mailto:aid@example.edu?subject=Merit%20Award)"));
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let list = CardList {
            title: "Programs".to_string(),
            subtitle: String::new(),
            cards: Vec::new(),
        };
        let output = MarkdownReporter::new().render(&list).unwrap();

        assert!(output.contains("_No matching entries._"));
    }
}
