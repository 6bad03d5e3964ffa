//! Outbound action command handler

use crate::args::OpenSubcommand;
use uni_scout::core::outbound::{self, OutboundAction};

/// Dispatch open subcommands to the platform opener
pub fn run(subcommand: OpenSubcommand) {
    let action = match subcommand {
        OpenSubcommand::Url { url } => OutboundAction::Url(url),
        OpenSubcommand::Email { to, subject } => OutboundAction::Email { to, subject },
        OpenSubcommand::Phone { number } => OutboundAction::Phone(number),
        OpenSubcommand::Maps { query } => OutboundAction::Url(outbound::maps_search(&query)),
    };

    match outbound::dispatch(&action) {
        Ok(()) => println!("✓ Opened {}", action.to_uri()),
        Err(e) => eprintln!("✗ {e}"),
    }
}
