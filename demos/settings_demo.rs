//! Settings demonstration example
//!
//! Shows loading, validating, and saving the TOML configuration without
//! touching the real config directory.

use docdeck::Settings;

fn main() {
    println!("=== Docdeck Settings Demo ===\n");

    let dir = std::env::temp_dir().join("docdeck-settings-demo");
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("config.toml");

    // First load creates the file with defaults
    let settings = Settings::load_from(&path);
    println!("Defaults written to {:?}", path);
    println!("  api_url   = {}", settings.api_url);
    println!("  api_type  = {}", settings.api_type);
    println!("  log_level = {}", settings.log_level);
    println!();

    // Point the dashboard at a local backend and persist it
    let custom = Settings {
        api_url: "http://localhost:9000/v1".to_string(),
        api_type: "custom".to_string(),
        ..settings
    };
    custom.save_to(&path).expect("save settings");
    println!("Saved custom backend; reloading...");

    let reloaded = Settings::load_from(&path);
    println!("  api_url  = {}", reloaded.api_url);
    println!("  api_type = {}", reloaded.api_type);

    // Out-of-range values are repaired, not rejected
    let mut broken = Settings {
        api_url: "not a url".to_string(),
        ..reloaded
    };
    broken.validate();
    println!("\nAfter validate(), bad api_url falls back to:");
    println!("  {}", broken.api_url);

    std::fs::remove_dir_all(&dir).ok();
}
