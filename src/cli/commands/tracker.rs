//! Career tracker command handler

use crate::args::{TrackerKindArg, TrackerSubcommand};
use chrono::Utc;
use std::io::{self, Write};
use uni_scout::config::Config;
use uni_scout::core::render::{tracker_cards, CardRenderer, TextReporter};
use uni_scout::core::screen::ExpandedIds;
use uni_scout::core::store::JsonStore;
use uni_scout::core::tracker::CareerTracker;

/// Dispatch tracker subcommands
pub fn run(subcommand: TrackerSubcommand, config: &Config) {
    let store = JsonStore::from_path(&config.store.path);
    let user_id = config.user.id.clone();

    let mut tracker = match CareerTracker::open(Box::new(store), user_id) {
        Ok(tracker) => tracker,
        Err(e) => {
            eprintln!("✗ Failed to load tracker data: {e}");
            return;
        }
    };

    match subcommand {
        TrackerSubcommand::List { kind, expand } => handle_list(&tracker, kind, &expand),
        TrackerSubcommand::AddEvent {
            title,
            date,
            location,
        } => match tracker.add_event(title, date, location) {
            Ok(id) => println!("✓ Added event {id}"),
            Err(e) => eprintln!("✗ Failed to add event: {e}"),
        },
        TrackerSubcommand::AddGoal { title, target_date } => {
            match tracker.add_goal(title, target_date) {
                Ok(id) => println!("✓ Added goal {id}"),
                Err(e) => eprintln!("✗ Failed to add goal: {e}"),
            }
        }
        TrackerSubcommand::AddApplication {
            company,
            role,
            applied_on,
            notes,
        } => {
            let applied_on = applied_on.unwrap_or_else(|| Utc::now().date_naive());
            match tracker.add_application(company, role, applied_on, notes) {
                Ok(id) => println!("✓ Added application {id}"),
                Err(e) => eprintln!("✗ Failed to add application: {e}"),
            }
        }
        TrackerSubcommand::EventStatus { id, status } => {
            match tracker.set_event_status(&id, status.into()) {
                Ok(()) => println!("✓ Updated event {id}"),
                Err(e) => eprintln!("✗ Failed to update event: {e}"),
            }
        }
        TrackerSubcommand::ApplicationStatus { id, status } => {
            match tracker.set_application_status(&id, status.into()) {
                Ok(()) => println!("✓ Updated application {id}"),
                Err(e) => eprintln!("✗ Failed to update application: {e}"),
            }
        }
        TrackerSubcommand::GoalProgress { id, progress } => {
            match tracker.set_goal_progress(&id, progress) {
                Ok(()) => {
                    // Echo the resulting status so 100 -> completed is visible
                    let status = tracker
                        .goals()
                        .iter()
                        .find(|g| g.id == id)
                        .map(|g| g.status.to_string())
                        .unwrap_or_default();
                    println!("✓ Updated goal {id} ({status})");
                }
                Err(e) => eprintln!("✗ Failed to update goal: {e}"),
            }
        }
        TrackerSubcommand::Delete { kind, id, yes } => handle_delete(&mut tracker, kind, &id, yes),
    }
}

/// Render the tracker collections as a card list
fn handle_list(tracker: &CareerTracker, kind: Option<TrackerKindArg>, expand: &[String]) {
    let expanded = ExpandedIds::from_ids(expand.iter().cloned());

    let list = match kind {
        None => tracker_cards(
            tracker.events(),
            tracker.goals(),
            tracker.applications(),
            &expanded,
        ),
        Some(TrackerKindArg::Events) => tracker_cards(tracker.events(), &[], &[], &expanded),
        Some(TrackerKindArg::Goals) => tracker_cards(&[], tracker.goals(), &[], &expanded),
        Some(TrackerKindArg::Applications) => {
            tracker_cards(&[], &[], tracker.applications(), &expanded)
        }
    };

    match TextReporter::new().render(&list) {
        Ok(content) => print!("{content}"),
        Err(e) => eprintln!("✗ Failed to render tracker: {e}"),
    }
}

/// Confirm and delete a tracked row
fn handle_delete(tracker: &mut CareerTracker, kind: TrackerKindArg, id: &str, yes: bool) {
    if !yes {
        print!("Are you sure you want to delete this entry? (y/n): ");
        io::stdout().flush().ok();

        let mut response = String::new();
        io::stdin().read_line(&mut response).ok();

        if !response.trim().eq_ignore_ascii_case("y")
            && !response.trim().eq_ignore_ascii_case("yes")
        {
            println!("✗ Delete cancelled");
            return;
        }
    }

    let result = match kind {
        TrackerKindArg::Events => tracker.delete_event(id),
        TrackerKindArg::Goals => tracker.delete_goal(id),
        TrackerKindArg::Applications => tracker.delete_application(id),
    };

    match result {
        Ok(()) => println!("✓ Deleted {id}"),
        Err(e) => eprintln!("✗ Failed to delete: {e}"),
    }
}
