//! Integration tests for the content screens: load, fallback, filter,
//! and rendering

use tempfile::TempDir;
use uni_scout::core::fallback;
use uni_scout::core::models::{ResourceKind, University};
use uni_scout::core::render::{
    profile_cards, resource_cards, CardRenderer, MarkdownReporter, TextReporter,
};
use uni_scout::core::screen::{
    load_programs, load_resources, load_university, ExpandedIds, FilterState, ProfileSection,
    SectionData,
};
use uni_scout::core::store::{DataStore, JsonStore, StoreState};

/// A file-backed store seeded with the demo dataset
fn seeded_store() -> (TempDir, JsonStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("store.json");

    let store = JsonStore::from_path(&path);
    store
        .replace_state(&fallback::demo_state())
        .expect("Failed to seed store");
    (temp_dir, store)
}

#[test]
fn test_unknown_university_renders_error_view() {
    let (_guard, store) = seeded_store();

    let state = load_university(&store, "nowhere-u", ProfileSection::Overview);
    assert!(state.is_failed());
}

#[test]
fn test_missing_store_file_is_an_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonStore::from_path(temp_dir.path().join("missing.json"));

    assert!(store.university("stanford").unwrap().is_none());
    let state = load_university(&store, "stanford", ProfileSection::Overview);
    assert!(state.is_failed());
}

#[test]
fn test_location_screen_falls_back_when_table_has_no_row() {
    // "cal" is seeded without child rows
    let (_guard, store) = seeded_store();

    let screen = load_university(&store, "cal", ProfileSection::Location)
        .ready()
        .expect("screen should be ready");

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
fn test_location_screen_uses_stored_row_when_present() {
    let (_guard, store) = seeded_store();

    let screen = load_university(&store, "stanford", ProfileSection::Location)
        .ready()
        .expect("screen should be ready");

    match screen.section {
        SectionData::Location(le) => assert_eq!(le.university_id, "stanford"),
        _ => panic!("expected location section"),
    }
}

#[test]
fn test_programs_screen_for_sparse_university_uses_fallback() {
    let (_guard, store) = seeded_store();

    let screen = load_programs(&store, "cal").ready().unwrap();
    assert!(!screen.programs.is_empty());
    assert!(screen.programs.iter().all(|p| p.university_id == "cal"));
}

#[test]
fn test_resource_search_is_case_insensitive() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    let store = JsonStore::from_path(&path);

    let mut state = StoreState::default();
    let uni = University::new("u-1".to_string(), "Test University".to_string());
    let mut club = uni_scout::core::models::Resource::new(
        "r-1".to_string(),
        "u-1".to_string(),
        ResourceKind::Entrepreneurship,
        "Stanford Entrepreneurship Club".to_string(),
    );
    club.category = "club".to_string();
    state.resources.push(club);
    state.universities.push(uni);
    store.replace_state(&state).unwrap();

    let screen = load_resources(&store, "u-1", ResourceKind::Entrepreneurship)
        .ready()
        .unwrap();

    let filter = FilterState::new(Some("stanford".to_string()), None);
    let list = resource_cards(&screen, &filter, &ExpandedIds::new());
    assert_eq!(list.cards.len(), 1);
    assert_eq!(list.cards[0].title, "Stanford Entrepreneurship Club");

    let filter = FilterState::new(Some("zzz-no-match".to_string()), None);
    let list = resource_cards(&screen, &filter, &ExpandedIds::new());
    assert!(list.cards.is_empty());
}

#[test]
fn test_identity_filter_renders_full_collection() {
    let (_guard, store) = seeded_store();

    let screen = load_resources(&store, "stanford", ResourceKind::Scholarship)
        .ready()
        .unwrap();

    let filter = FilterState::default();
    let list = resource_cards(&screen, &filter, &ExpandedIds::new());
    assert_eq!(list.cards.len(), screen.resources.len());
}

#[test]
fn test_expanded_card_round_trips_through_renderers() {
    let (_guard, store) = seeded_store();

    let screen = load_resources(&store, "stanford", ResourceKind::SupportService)
        .ready()
        .unwrap();
    let first_id = screen.resources[0].id.clone();
    let expanded = ExpandedIds::new().toggle(&first_id);

    let list = resource_cards(&screen, &FilterState::default(), &expanded);

    let text = TextReporter::new().render(&list).unwrap();
    assert!(text.contains(&screen.resources[0].title));
    assert!(text.contains("Hours"));

    let markdown = MarkdownReporter::new().render(&list).unwrap();
    assert!(markdown.contains("### Actions"));
    assert!(!markdown.contains("{{"));
}

#[test]
fn test_profile_screen_renders_outbound_links() {
    let (_guard, store) = seeded_store();

    let screen = load_university(&store, "stanford", ProfileSection::Overview)
        .ready()
        .unwrap();
    let expanded = ExpandedIds::new().toggle("stanford");

    let list = profile_cards(&screen, &expanded);
    let markdown = MarkdownReporter::new().render(&list).unwrap();

    assert!(markdown.contains("https://www.stanford.edu"));
    assert!(markdown.contains("en.wikipedia.org"));
    assert!(markdown.contains("google.com/maps"));
}
