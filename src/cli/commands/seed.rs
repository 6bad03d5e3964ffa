//! Seed command handler

use std::path::PathBuf;
use uni_scout::config::Config;
use uni_scout::core::fallback;
use uni_scout::core::store::JsonStore;

/// Write demo content into the store document
pub fn run(force: bool, config: &Config) {
    let path = PathBuf::from(&config.store.path);

    if path.exists() && !force {
        eprintln!(
            "✗ Store already exists at {} (use --force to overwrite)",
            path.display()
        );
        return;
    }

    let store = JsonStore::from_path(&path);
    match store.replace_state(&fallback::demo_state()) {
        Ok(()) => println!("✓ Demo data written to: {}", path.display()),
        Err(e) => eprintln!("✗ Failed to seed store: {e}"),
    }
}
