//! Card list builders
//!
//! Resolve screen data into the flat [`CardList`] presentation model.
//! Detail sections are emitted only when the corresponding record field
//! is non-empty, and only expanded cards render them.

use super::{badge_for, ActionLink, Badge, Card, CardList, CardSection};
use crate::core::models::{CareerEvent, CareerGoal, JobApplication, Resource};
use crate::core::outbound::{maps_search, wikipedia_search, OutboundAction};
use crate::core::screen::{
    ExpandedIds, FilterState, ProgramsScreen, ResourceScreen, SectionData, UniversityScreen,
};

/// Badge for career event cards
const EVENT_BADGE: Badge = Badge {
    icon: "📅",
    color: "blue",
};
/// Badge for career goal cards
const GOAL_BADGE: Badge = Badge {
    icon: "🎯",
    color: "orange",
};
/// Badge for job application cards
const APPLICATION_BADGE: Badge = Badge {
    icon: "📨",
    color: "navy",
};

/// Outbound action buttons for a resource card
fn resource_actions(resource: &Resource) -> Vec<ActionLink> {
    let mut actions = Vec::new();
    if let Some(website) = &resource.website {
        actions.push(ActionLink {
            label: "Website".to_string(),
            action: OutboundAction::Url(website.clone()),
        });
    }
    if let Some(email) = &resource.email {
        actions.push(ActionLink {
            label: "Email".to_string(),
            action: OutboundAction::Email {
                to: email.clone(),
                subject: format!("Question about {}", resource.title),
            },
        });
    }
    if let Some(phone) = &resource.phone {
        actions.push(ActionLink {
            label: "Call".to_string(),
            action: OutboundAction::Phone(phone.clone()),
        });
    }
    actions
}

/// Detail sections for a resource card, in the fixed screen order
fn resource_sections(resource: &Resource) -> Vec<CardSection> {
    let mut sections = Vec::new();

    if !resource.summary.is_empty() {
        sections.push(CardSection::Overview(resource.summary.clone()));
    }
    if !resource.benefits.is_empty() {
        sections.push(CardSection::Bullets {
            heading: "Benefits".to_string(),
            items: resource.benefits.clone(),
        });
    }
    if !resource.requirements.is_empty() {
        sections.push(CardSection::Bullets {
            heading: "Requirements".to_string(),
            items: resource.requirements.clone(),
        });
    }
    if !resource.checklist.is_empty() {
        sections.push(CardSection::Bullets {
            heading: "Checklist".to_string(),
            items: resource.checklist.clone(),
        });
    }
    if !resource.videos.is_empty() {
        sections.push(CardSection::Bullets {
            heading: "Videos".to_string(),
            items: resource
                .videos
                .iter()
                .map(|v| match &v.duration {
                    Some(duration) => format!("{} ({duration}) - {}", v.title, v.url),
                    None => format!("{} - {}", v.title, v.url),
                })
                .collect(),
        });
    }
    if !resource.mentors.is_empty() {
        sections.push(CardSection::Bullets {
            heading: "Mentors".to_string(),
            items: resource
                .mentors
                .iter()
                .map(|m| match &m.email {
                    Some(email) => format!("{} ({}) - {email}", m.name, m.expertise),
                    None => format!("{} ({})", m.name, m.expertise),
                })
                .collect(),
        });
    }
    if resource.has_application_info() {
        let mut rows = Vec::new();
        if let Some(amount) = &resource.amount {
            rows.push(("Amount".to_string(), amount.clone()));
        }
        if let Some(deadline) = &resource.deadline {
            rows.push(("Deadline".to_string(), deadline.clone()));
        }
        if let Some(hours) = &resource.hours {
            rows.push(("Hours".to_string(), hours.clone()));
        }
        sections.push(CardSection::Facts {
            heading: "Application Info".to_string(),
            rows,
        });
    }
    if let Some(contact) = &resource.contact {
        let mut rows = vec![("Name".to_string(), contact.name.clone())];
        if let Some(email) = &contact.email {
            rows.push(("Email".to_string(), email.clone()));
        }
        if let Some(phone) = &contact.phone {
            rows.push(("Phone".to_string(), phone.clone()));
        }
        if let Some(office) = &contact.office {
            rows.push(("Office".to_string(), office.clone()));
        }
        sections.push(CardSection::Facts {
            heading: "Contact".to_string(),
            rows,
        });
    }
    let actions = resource_actions(resource);
    if !actions.is_empty() {
        sections.push(CardSection::Actions(actions));
    }

    sections
}

/// Build the card list for a resource screen, applying the filter and
/// expansion state.
#[must_use]
pub fn resource_cards(
    screen: &ResourceScreen,
    filter: &FilterState,
    expanded: &ExpandedIds,
) -> CardList {
    let filtered = filter.apply(&screen.resources);

    let cards = filtered
        .into_iter()
        .map(|resource| Card {
            id: resource.id.clone(),
            badge: badge_for(&resource.category),
            title: resource.title.clone(),
            subtitle: resource.category.clone(),
            expanded: expanded.contains(&resource.id),
            sections: resource_sections(resource),
        })
        .collect();

    CardList {
        title: screen.kind.title().to_string(),
        subtitle: screen.university.name.clone(),
        cards,
    }
}

/// Build the card list for a programs screen.
#[must_use]
pub fn program_cards(
    screen: &ProgramsScreen,
    filter: &FilterState,
    expanded: &ExpandedIds,
) -> CardList {
    let filtered = filter.apply(&screen.programs);

    let cards = filtered
        .into_iter()
        .map(|program| {
            let mut sections = Vec::new();
            if !program.description.is_empty() {
                sections.push(CardSection::Overview(program.description.clone()));
            }
            Card {
                id: program.id.clone(),
                badge: badge_for(&program.degree_type),
                title: program.label(),
                subtitle: program.degree_type.clone(),
                expanded: expanded.contains(&program.id),
                sections,
            }
        })
        .collect();

    CardList {
        title: "Programs".to_string(),
        subtitle: screen.university.name.clone(),
        cards,
    }
}

/// Build the card list for a university profile screen section.
#[must_use]
pub fn profile_cards(screen: &UniversityScreen, expanded: &ExpandedIds) -> CardList {
    let university = &screen.university;

    let (title, cards) = match &screen.section {
        SectionData::Overview => {
            let mut sections = Vec::new();
            if !university.description.is_empty() {
                sections.push(CardSection::Overview(university.description.clone()));
            }
            let mut actions = Vec::new();
            if let Some(website) = &university.website {
                actions.push(ActionLink {
                    label: "Website".to_string(),
                    action: OutboundAction::Url(website.clone()),
                });
            }
            actions.push(ActionLink {
                label: "Wikipedia".to_string(),
                action: OutboundAction::Url(wikipedia_search(&university.name)),
            });
            if !university.location.is_empty() {
                actions.push(ActionLink {
                    label: "Map".to_string(),
                    action: OutboundAction::Url(maps_search(&university.location)),
                });
            }
            sections.push(CardSection::Actions(actions));

            let card = Card {
                id: university.id.clone(),
                badge: badge_for("overview"),
                title: university.name.clone(),
                subtitle: university.location.clone(),
                expanded: expanded.contains(&university.id),
                sections,
            };
            ("Overview".to_string(), vec![card])
        }
        SectionData::Location(le) => {
            let mut cards = Vec::new();

            let mut sections = vec![CardSection::Overview(le.city_town_profile.clone())];
            if let Some(notes) = &le.transport_notes {
                sections.push(CardSection::Facts {
                    heading: "Getting Around".to_string(),
                    rows: vec![("Transport".to_string(), notes.clone())],
                });
            }
            cards.push(Card {
                id: format!("{}-city", university.id),
                badge: badge_for("city"),
                title: "City & Town Profile".to_string(),
                subtitle: university.location.clone(),
                expanded: expanded.contains(&format!("{}-city", university.id)),
                sections,
            });

            for (idx, attraction) in le.cultural_attractions.iter().enumerate() {
                let id = format!("{}-attraction-{}", university.id, idx + 1);
                let mut sections = Vec::new();
                if !attraction.description.is_empty() {
                    sections.push(CardSection::Overview(attraction.description.clone()));
                }
                cards.push(Card {
                    id: id.clone(),
                    badge: badge_for(&attraction.kind),
                    title: attraction.name.clone(),
                    subtitle: attraction.kind.clone(),
                    expanded: expanded.contains(&id),
                    sections,
                });
            }

            for (idx, facility) in le.healthcare_facilities.iter().enumerate() {
                let id = format!("{}-facility-{}", university.id, idx + 1);
                let mut sections = Vec::new();
                if let Some(distance) = &facility.distance {
                    sections.push(CardSection::Facts {
                        heading: "Location".to_string(),
                        rows: vec![("Distance".to_string(), distance.clone())],
                    });
                }
                cards.push(Card {
                    id: id.clone(),
                    badge: badge_for(&facility.kind),
                    title: facility.name.clone(),
                    subtitle: facility.kind.clone(),
                    expanded: expanded.contains(&id),
                    sections,
                });
            }

            ("Location & Environment".to_string(), cards)
        }
        SectionData::Academics(profile) => {
            let mut sections = vec![CardSection::Overview(profile.overview.clone())];
            if !profile.strengths.is_empty() {
                sections.push(CardSection::Bullets {
                    heading: "Strengths".to_string(),
                    items: profile.strengths.clone(),
                });
            }
            if let Some(ratio) = &profile.student_faculty_ratio {
                sections.push(CardSection::Facts {
                    heading: "At a Glance".to_string(),
                    rows: vec![("Student-faculty ratio".to_string(), ratio.clone())],
                });
            }
            if !profile.research_highlights.is_empty() {
                sections.push(CardSection::Bullets {
                    heading: "Research Highlights".to_string(),
                    items: profile.research_highlights.clone(),
                });
            }

            let id = format!("{}-academics", university.id);
            let card = Card {
                id: id.clone(),
                badge: badge_for("academics"),
                title: "Academics".to_string(),
                subtitle: university.name.clone(),
                expanded: expanded.contains(&id),
                sections,
            };
            ("Academics".to_string(), vec![card])
        }
    };

    CardList {
        title,
        subtitle: university.name.clone(),
        cards,
    }
}

/// Build the card list for the career tracker screen.
#[must_use]
pub fn tracker_cards(
    events: &[CareerEvent],
    goals: &[CareerGoal],
    applications: &[JobApplication],
    expanded: &ExpandedIds,
) -> CardList {
    let mut cards = Vec::new();

    for event in events {
        let mut rows = vec![
            ("Date".to_string(), event.date.to_string()),
            ("Status".to_string(), event.status.to_string()),
        ];
        if let Some(location) = &event.location {
            rows.push(("Location".to_string(), location.clone()));
        }
        cards.push(Card {
            id: event.id.clone(),
            badge: EVENT_BADGE,
            title: event.title.clone(),
            subtitle: format!("event · {}", event.status),
            expanded: expanded.contains(&event.id),
            sections: vec![CardSection::Facts {
                heading: "Details".to_string(),
                rows,
            }],
        });
    }

    for goal in goals {
        let mut rows = vec![
            ("Progress".to_string(), format!("{}%", goal.progress)),
            ("Status".to_string(), goal.status.to_string()),
        ];
        if let Some(target) = &goal.target_date {
            rows.push(("Target date".to_string(), target.to_string()));
        }
        cards.push(Card {
            id: goal.id.clone(),
            badge: GOAL_BADGE,
            title: goal.title.clone(),
            subtitle: format!("goal · {}% · {}", goal.progress, goal.status),
            expanded: expanded.contains(&goal.id),
            sections: vec![CardSection::Facts {
                heading: "Details".to_string(),
                rows,
            }],
        });
    }

    for application in applications {
        let mut sections = Vec::new();
        if let Some(notes) = &application.notes {
            sections.push(CardSection::Overview(notes.clone()));
        }
        sections.push(CardSection::Facts {
            heading: "Details".to_string(),
            rows: vec![
                ("Company".to_string(), application.company.clone()),
                ("Role".to_string(), application.role.clone()),
                ("Applied on".to_string(), application.applied_on.to_string()),
                ("Status".to_string(), application.status.to_string()),
            ],
        });
        cards.push(Card {
            id: application.id.clone(),
            badge: APPLICATION_BADGE,
            title: format!("{} - {}", application.role, application.company),
            subtitle: format!("application · {}", application.status),
            expanded: expanded.contains(&application.id),
            sections,
        });
    }

    CardList {
        title: "Career Tracker".to_string(),
        subtitle: format!(
            "{} events · {} goals · {} applications",
            events.len(),
            goals.len(),
            applications.len()
        ),
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fallback;
    use crate::core::models::{ResourceKind, University};

    fn seed() -> University {
        let mut uni = University::new("u-1".to_string(), "Test University".to_string());
        uni.location = "College Town, ST".to_string();
        uni
    }

    fn resource_screen() -> ResourceScreen {
        let uni = seed();
        let resources = fallback::resources(&uni, ResourceKind::Entrepreneurship);
        ResourceScreen {
            university: uni,
            kind: ResourceKind::Entrepreneurship,
            resources,
        }
    }

    #[test]
    fn test_collapsed_cards_keep_sections_hidden_flag() {
        let screen = resource_screen();
        let list = resource_cards(&screen, &FilterState::default(), &ExpandedIds::new());

        assert_eq!(list.cards.len(), screen.resources.len());
        assert_eq!(list.card_ids().len(), screen.resources.len());
        assert!(list.cards.iter().all(|c| !c.expanded));
        // Sections are still resolved so toggling needs no refetch
        assert!(list.cards.iter().all(|c| !c.sections.is_empty()));
    }

    #[test]
    fn test_expanded_flag_follows_expansion_set() {
        let screen = resource_screen();
        let first_id = screen.resources[0].id.clone();
        let expanded = ExpandedIds::new().toggle(&first_id);

        let list = resource_cards(&screen, &FilterState::default(), &expanded);
        assert!(list.cards[0].expanded);
        assert!(list.cards[1..].iter().all(|c| !c.expanded));
    }

    #[test]
    fn test_filter_narrows_cards() {
        let screen = resource_screen();
        let filter = FilterState::new(Some("incubator".to_string()), None);

        let list = resource_cards(&screen, &filter, &ExpandedIds::new());
        assert!(list.cards.len() < screen.resources.len());
        assert!(!list.cards.is_empty());
    }

    #[test]
    fn test_location_profile_cards_cover_all_rows() {
        let uni = seed();
        let le = fallback::location_environment(&uni);
        let expected = 1 + le.cultural_attractions.len() + le.healthcare_facilities.len();

        let screen = UniversityScreen {
            university: uni,
            section: SectionData::Location(le),
        };
        let list = profile_cards(&screen, &ExpandedIds::new());
        assert_eq!(list.cards.len(), expected);
    }

    #[test]
    fn test_overview_card_carries_outbound_actions() {
        let mut uni = seed();
        uni.website = Some("https://test.example.edu".to_string());
        let screen = UniversityScreen {
            university: uni,
            section: SectionData::Overview,
        };

        let list = profile_cards(&screen, &ExpandedIds::new());
        let has_actions = list.cards[0]
            .sections
            .iter()
            .any(|s| matches!(s, CardSection::Actions(links) if !links.is_empty()));
        assert!(has_actions);
    }

    #[test]
    fn test_tracker_cards_list_every_row() {
        let list = tracker_cards(&[], &[], &[], &ExpandedIds::new());
        assert!(list.cards.is_empty());
        assert!(list.subtitle.contains("0 events"));
    }
}
