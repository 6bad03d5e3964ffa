//! Outbound actions
//!
//! Anything that hands off to the host platform: opening a URL,
//! composing an email, dialing a phone number. Dispatch is
//! fire-and-forget; the spawned opener is not awaited and its failures
//! are left to the platform's own handling. The only guard is the empty
//! target, which is rejected before any handoff.

use std::fmt::{self, Write};
use std::process::Command;

/// An action handed off to the host platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundAction {
    /// Open an arbitrary URL
    Url(String),
    /// Compose an email with a subject line
    Email {
        /// Recipient address
        to: String,
        /// Subject line (percent-encoded into the mailto URI)
        subject: String,
    },
    /// Dial a phone number
    Phone(String),
}

impl OutboundAction {
    /// The URI handed to the platform opener
    #[must_use]
    pub fn to_uri(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Email { to, subject } => {
                if subject.is_empty() {
                    format!("mailto:{to}")
                } else {
                    format!("mailto:{to}?subject={}", encode_component(subject))
                }
            }
            Self::Phone(number) => format!("tel:{number}"),
        }
    }

    /// Whether the action has no target to hand off
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Url(url) => url.is_empty(),
            Self::Email { to, .. } => to.is_empty(),
            Self::Phone(number) => number.is_empty(),
        }
    }
}

impl fmt::Display for OutboundAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}

/// Percent-encode a URI component (RFC 3986 unreserved set passes through)
#[must_use]
pub fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}

/// Build a Google search URL for a query
#[must_use]
pub fn google_search(query: &str) -> String {
    format!("https://www.google.com/search?q={}", encode_component(query))
}

/// Build a Wikipedia search URL for a query
#[must_use]
pub fn wikipedia_search(query: &str) -> String {
    format!(
        "https://en.wikipedia.org/wiki/Special:Search?search={}",
        encode_component(query)
    )
}

/// Build a Google Maps search URL for a query
#[must_use]
pub fn maps_search(query: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        encode_component(query)
    )
}

/// Hand an action off to the platform opener.
///
/// The opener process is spawned and not awaited; a spawn failure is
/// not treated as an application error beyond the returned message.
///
/// # Errors
/// Returns an error if the action's target is empty ("link not
/// available") or the opener process cannot be spawned.
pub fn dispatch(action: &OutboundAction) -> Result<(), String> {
    if action.is_empty() {
        return Err("Link not available".to_string());
    }

    let uri = action.to_uri();
    spawn_opener(&uri).map_err(|e| format!("Failed to open '{uri}': {e}"))
}

#[cfg(target_os = "macos")]
fn spawn_opener(uri: &str) -> std::io::Result<()> {
    Command::new("open").arg(uri).spawn().map(|_| ())
}

#[cfg(target_os = "windows")]
fn spawn_opener(uri: &str) -> std::io::Result<()> {
    Command::new("cmd").args(["/C", "start", uri]).spawn().map(|_| ())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn spawn_opener(uri: &str) -> std::io::Result<()> {
    Command::new("xdg-open").arg(uri).spawn().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_uri_passes_through() {
        let action = OutboundAction::Url("https://example.edu".to_string());
        assert_eq!(action.to_uri(), "https://example.edu");
    }

    #[test]
    fn test_mailto_encodes_subject() {
        let action = OutboundAction::Email {
            to: "admissions@example.edu".to_string(),
            subject: "Campus visit & tour".to_string(),
        };
        assert_eq!(
            action.to_uri(),
            "mailto:admissions@example.edu?subject=Campus%20visit%20%26%20tour"
        );
    }

    #[test]
    fn test_mailto_without_subject() {
        let action = OutboundAction::Email {
            to: "info@example.edu".to_string(),
            subject: String::new(),
        };
        assert_eq!(action.to_uri(), "mailto:info@example.edu");
    }

    #[test]
    fn test_tel_uri() {
        let action = OutboundAction::Phone("+1-555-0134".to_string());
        assert_eq!(action.to_uri(), "tel:+1-555-0134");
    }

    #[test]
    fn test_empty_target_is_rejected() {
        let action = OutboundAction::Url(String::new());
        let result = dispatch(&action);
        assert_eq!(result, Err("Link not available".to_string()));
    }

    #[test]
    fn test_encode_component_keeps_unreserved() {
        assert_eq!(encode_component("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("50%"), "50%25");
    }

    #[test]
    fn test_search_url_builders() {
        assert_eq!(
            google_search("Stanford University"),
            "https://www.google.com/search?q=Stanford%20University"
        );
        assert!(wikipedia_search("MIT").starts_with("https://en.wikipedia.org/wiki/"));
        assert!(maps_search("campus").contains("query=campus"));
    }
}
