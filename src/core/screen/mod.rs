//! Screen controllers
//!
//! Every screen follows the same acquisition pattern: resolve an id,
//! fetch one primary entity, fetch zero-or-one related collection, and
//! substitute generated fallback content when the related data is
//! missing or its fetch fails. A failed or empty primary fetch is the
//! only hard failure; it produces the generic error view.

pub mod expansion;
pub mod filter;

pub use expansion::ExpandedIds;
pub use filter::{FilterState, Filterable, ALL_CATEGORIES};

use crate::core::fallback;
use crate::core::models::{
    AcademicProfile, LocationEnvironment, Program, Resource, ResourceKind, University,
};
use crate::core::store::DataStore;
use logger::{error, warn};

/// User-facing message for a failed primary fetch
pub const LOAD_FAILED_MESSAGE: &str =
    "Unable to load this page right now. Please go back and try again.";

/// Load lifecycle for a screen.
///
/// Every load function ends in `Ready` or `Failed`; `Loading` is the
/// transient state a UI would show a spinner for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Acquisition in flight
    Loading,
    /// Primary entity resolved; screen data ready to render
    Ready(T),
    /// Primary fetch failed or matched no row
    Failed(String),
}

impl<T> LoadState<T> {
    /// Whether the screen is ready to render
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Whether the screen shows the error view
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Consume the state, yielding the ready payload if any
    #[must_use]
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Which profile section a university screen shows
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProfileSection {
    /// Name, location, website, description
    Overview,
    /// Location & Environment profile
    Location,
    /// Academics profile
    Academics,
}

/// The related collection resolved for a university screen section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionData {
    /// Overview has no related collection
    Overview,
    /// Location & Environment profile (stored or fallback)
    Location(LocationEnvironment),
    /// Academics profile (stored or fallback)
    Academics(AcademicProfile),
}

/// Data for a university profile screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversityScreen {
    /// The primary entity
    pub university: University,
    /// The resolved section content
    pub section: SectionData,
}

/// Data for a programs list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramsScreen {
    /// The primary entity
    pub university: University,
    /// Programs offered (stored or fallback)
    pub programs: Vec<Program>,
}

/// Data for a resource card screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceScreen {
    /// The primary entity
    pub university: University,
    /// Which resource screen this is
    pub kind: ResourceKind,
    /// Resource cards (stored or fallback)
    pub resources: Vec<Resource>,
}

/// Resolve the primary university entity, or the error view.
fn primary(store: &dyn DataStore, id: &str) -> Result<University, String> {
    match store.university(id) {
        Ok(Some(university)) => Ok(university),
        Ok(None) => Err(LOAD_FAILED_MESSAGE.to_string()),
        Err(e) => {
            error!("Primary fetch failed for university '{id}': {e}");
            Err(LOAD_FAILED_MESSAGE.to_string())
        }
    }
}

/// Load a university profile screen.
///
/// The section's child fetch is best-effort: an error or missing row is
/// logged and replaced with generated fallback content.
pub fn load_university(
    store: &dyn DataStore,
    id: &str,
    section: ProfileSection,
) -> LoadState<UniversityScreen> {
    let university = match primary(store, id) {
        Ok(u) => u,
        Err(msg) => return LoadState::Failed(msg),
    };

    let section = match section {
        ProfileSection::Overview => SectionData::Overview,
        ProfileSection::Location => {
            let le = match store.location_environment(id) {
                Ok(Some(le)) => le,
                Ok(None) => fallback::location_environment(&university),
                Err(e) => {
                    warn!("Location fetch failed for '{id}', using fallback: {e}");
                    fallback::location_environment(&university)
                }
            };
            SectionData::Location(le)
        }
        ProfileSection::Academics => {
            let profile = match store.academic_profile(id) {
                Ok(Some(profile)) => profile,
                Ok(None) => fallback::academic_profile(&university),
                Err(e) => {
                    warn!("Academics fetch failed for '{id}', using fallback: {e}");
                    fallback::academic_profile(&university)
                }
            };
            SectionData::Academics(profile)
        }
    };

    LoadState::Ready(UniversityScreen {
        university,
        section,
    })
}

/// Load a programs list screen.
pub fn load_programs(store: &dyn DataStore, university_id: &str) -> LoadState<ProgramsScreen> {
    let university = match primary(store, university_id) {
        Ok(u) => u,
        Err(msg) => return LoadState::Failed(msg),
    };

    let programs = match store.programs(university_id) {
        Ok(rows) if !rows.is_empty() => rows,
        Ok(_) => fallback::programs(&university),
        Err(e) => {
            warn!("Programs fetch failed for '{university_id}', using fallback: {e}");
            fallback::programs(&university)
        }
    };

    LoadState::Ready(ProgramsScreen {
        university,
        programs,
    })
}

/// Load a resource card screen of one kind.
pub fn load_resources(
    store: &dyn DataStore,
    university_id: &str,
    kind: ResourceKind,
) -> LoadState<ResourceScreen> {
    let university = match primary(store, university_id) {
        Ok(u) => u,
        Err(msg) => return LoadState::Failed(msg),
    };

    let resources = match store.resources(university_id, kind) {
        Ok(rows) if !rows.is_empty() => rows,
        Ok(_) => fallback::resources(&university, kind),
        Err(e) => {
            warn!("Resource fetch failed for '{university_id}' ({kind}), using fallback: {e}");
            fallback::resources(&university, kind)
        }
    };

    LoadState::Ready(ResourceScreen {
        university,
        kind,
        resources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::json::test_utils::MemoryBackend;
    use crate::core::store::json::Backend;
    use crate::core::store::{JsonStore, StoreState};

    fn store_with_university() -> JsonStore {
        let backend = MemoryBackend::new();
        let mut state = StoreState::default();
        state
            .universities
            .push(University::new("u-1".to_string(), "Test University".to_string()));
        backend.write_state(&state).unwrap();
        JsonStore::with_backend(Box::new(backend))
    }

    #[test]
    fn test_missing_university_fails_screen() {
        let store = JsonStore::with_backend(Box::new(MemoryBackend::new()));

        let state = load_university(&store, "u-404", ProfileSection::Overview);
        assert!(state.is_failed());
        assert!(!state.is_ready());
    }

    #[test]
    fn test_missing_location_row_yields_fallback() {
        let store = store_with_university();

        let state = load_university(&store, "u-1", ProfileSection::Location);
        let screen = state.ready().unwrap();

        match screen.section {
            SectionData::Location(le) => {
                assert!(!le.city_town_profile.is_empty());
                assert!(!le.cultural_attractions.is_empty());
                assert!(!le.healthcare_facilities.is_empty());
            }
            _ => panic!("expected location section"),
        }
    }

    #[test]
    fn test_stored_location_row_wins_over_fallback() {
        let backend = MemoryBackend::new();
        let mut state = StoreState::default();
        state
            .universities
            .push(University::new("u-1".to_string(), "Test University".to_string()));
        state.location_environments.push(LocationEnvironment {
            university_id: "u-1".to_string(),
            city_town_profile: "Stored profile.".to_string(),
            cultural_attractions: Vec::new(),
            healthcare_facilities: Vec::new(),
            transport_notes: None,
        });
        backend.write_state(&state).unwrap();
        let store = JsonStore::with_backend(Box::new(backend));

        let screen = load_university(&store, "u-1", ProfileSection::Location)
            .ready()
            .unwrap();
        match screen.section {
            SectionData::Location(le) => assert_eq!(le.city_town_profile, "Stored profile."),
            _ => panic!("expected location section"),
        }
    }

    #[test]
    fn test_empty_program_table_yields_fallback() {
        let store = store_with_university();

        let screen = load_programs(&store, "u-1").ready().unwrap();
        assert!(!screen.programs.is_empty());
    }

    #[test]
    fn test_empty_resource_table_yields_fallback() {
        let store = store_with_university();

        for kind in ResourceKind::ALL {
            let screen = load_resources(&store, "u-1", kind).ready().unwrap();
            assert_eq!(screen.kind, kind);
            assert!(!screen.resources.is_empty());
        }
    }
}
