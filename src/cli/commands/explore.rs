//! Content screen handlers: university profiles, programs, resources

use logger::info;
use std::path::{Path, PathBuf};
use uni_scout::config::Config;
use uni_scout::core::render::{
    profile_cards, program_cards, resource_cards, CardFormat, CardList, CardRenderer,
    MarkdownReporter, TextReporter,
};
use uni_scout::core::screen::{
    self, ExpandedIds, FilterState, LoadState, ProfileSection,
};
use uni_scout::core::store::JsonStore;
use uni_scout::core::models::ResourceKind;

/// Pick the reporter for a format
fn reporter(format: CardFormat) -> Box<dyn CardRenderer> {
    match format {
        CardFormat::Text => Box::new(TextReporter::new()),
        CardFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

/// Resolve an output path: relative paths land in the configured
/// reports directory.
fn resolve_output(output: &Path, config: &Config) -> Result<PathBuf, String> {
    if output.is_absolute() {
        return Ok(output.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    Ok(reports_dir.join(output))
}

/// Render a card list to stdout or a file
fn emit(list: &CardList, format: CardFormat, output: Option<&Path>, config: &Config) {
    let renderer = reporter(format);

    if let Some(output) = output {
        let path = match resolve_output(output, config) {
            Ok(path) => path,
            Err(msg) => {
                eprintln!("{msg}");
                return;
            }
        };
        match renderer.generate(list, &path) {
            Ok(()) => println!("✓ Screen written to: {}", path.display()),
            Err(e) => eprintln!("✗ Failed to write {}: {e}", path.display()),
        }
    } else {
        match renderer.render(list) {
            Ok(content) => print!("{content}"),
            Err(e) => eprintln!("✗ Failed to render screen: {e}"),
        }
    }
}

/// Run the university profile screen
pub fn university(
    id: &str,
    section: ProfileSection,
    expand: &[String],
    format: CardFormat,
    output: Option<&Path>,
    config: &Config,
) {
    let store = JsonStore::from_path(&config.store.path);

    match screen::load_university(&store, id, section) {
        LoadState::Ready(data) => {
            info!("University screen loaded for '{id}'");
            let expanded = ExpandedIds::from_ids(expand.iter().cloned());
            let list = profile_cards(&data, &expanded);
            emit(&list, format, output, config);
        }
        LoadState::Failed(msg) => eprintln!("✗ {msg}"),
        LoadState::Loading => unreachable!("load_university always resolves"),
    }
}

/// Run the programs screen
pub fn programs(
    university_id: &str,
    query: Option<String>,
    degree_type: Option<String>,
    expand: &[String],
    format: CardFormat,
    output: Option<&Path>,
    config: &Config,
) {
    let store = JsonStore::from_path(&config.store.path);

    match screen::load_programs(&store, university_id) {
        LoadState::Ready(data) => {
            let filter = FilterState::new(query, degree_type);
            let expanded = ExpandedIds::from_ids(expand.iter().cloned());
            let list = program_cards(&data, &filter, &expanded);
            emit(&list, format, output, config);
        }
        LoadState::Failed(msg) => eprintln!("✗ {msg}"),
        LoadState::Loading => unreachable!("load_programs always resolves"),
    }
}

/// Run a resource screen of one kind
#[allow(clippy::too_many_arguments)]
pub fn resources(
    university_id: &str,
    kind: ResourceKind,
    query: Option<String>,
    category: Option<String>,
    expand: &[String],
    format: CardFormat,
    output: Option<&Path>,
    config: &Config,
) {
    let store = JsonStore::from_path(&config.store.path);

    match screen::load_resources(&store, university_id, kind) {
        LoadState::Ready(data) => {
            let filter = FilterState::new(query, category);
            let expanded = ExpandedIds::from_ids(expand.iter().cloned());
            let list = resource_cards(&data, &filter, &expanded);
            emit(&list, format, output, config);
        }
        LoadState::Failed(msg) => eprintln!("✗ {msg}"),
        LoadState::Loading => unreachable!("load_resources always resolves"),
    }
}
