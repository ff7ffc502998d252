//! Loading themes from directories on disk.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use themestore::{
    Color, LoadError, RegistryError, ResolvedTheme, ThemeLibrary, ThemeRegistry, ThemeSource,
    DEFAULT_THEME_NAME,
};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_registry_discovers_nested_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Default.yaml", "tintColor: '4895d9'\n");
    write(dir.path(), "custom/sepia.json", r#"{"backgroundColor": "f4ecd8"}"#);
    write(dir.path(), "notes.txt", "not a theme");

    let mut registry = ThemeRegistry::new();
    registry.add_dir(dir.path()).unwrap();

    let names: Vec<&str> = registry.theme_names().into_iter().collect();
    assert_eq!(names, vec!["Default", "custom/sepia"]);
    assert!(registry.get("custom/sepia.json").is_ok());
    assert!(registry.get("notes").is_err());

    let sepia = registry.load("custom/sepia").unwrap();
    assert_eq!(sepia.name(), "custom/sepia");
    assert_eq!(sepia.color("backgroundColor"), Color::rgb(0xf4, 0xec, 0xd8));
}

#[test]
fn test_json_wins_over_yaml_in_same_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "dark.yaml", "isDark: false\n");
    write(dir.path(), "dark.json", r#"{"isDark": true}"#);
    write(dir.path(), "dark.yml", "isDark: false\n");

    let mut registry = ThemeRegistry::new();
    registry.add_dir(dir.path()).unwrap();

    assert!(registry.load("dark").unwrap().boolean("isDark"));
    assert!(registry.get("dark.json").is_ok());
    assert!(matches!(
        registry.get("dark.yml"),
        Err(RegistryError::NotFound { .. })
    ));
}

#[test]
fn test_upper_case_extensions_are_discovered() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Dark.JSON", r#"{"isDark": true}"#);
    write(dir.path(), "sepia.YML", "backgroundColor: 'f4ecd8'\n");

    let mut registry = ThemeRegistry::new();
    registry.add_dir(dir.path()).unwrap();

    let names: Vec<&str> = registry.theme_names().into_iter().collect();
    assert_eq!(names, vec!["Dark", "sepia"]);
    assert!(registry.get("Dark.JSON").is_ok());

    let dark = registry.load("Dark").unwrap();
    assert_eq!(dark.name(), "Dark");
    assert!(dark.boolean("isDark"));
    let sepia = registry.load("sepia.YML").unwrap();
    assert_eq!(sepia.name(), "sepia");
    assert_eq!(sepia.color("backgroundColor"), Color::rgb(0xf4, 0xec, 0xd8));
}

#[test]
fn test_same_name_in_two_directories_collides() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write(first.path(), "dark.yaml", "isDark: true\n");
    write(second.path(), "dark.yaml", "isDark: true\n");

    let mut registry = ThemeRegistry::new();
    registry.add_dir(first.path()).unwrap();
    let err = registry.add_dir(second.path()).unwrap_err();

    match err {
        LoadError::Registry(RegistryError::Collision { name, .. }) => assert_eq!(name, "dark"),
        other => panic!("Expected collision, got {:?}", other),
    }
}

#[test]
fn test_inline_source_shadows_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "dark.yaml", "isDark: false\n");

    let mut registry = ThemeRegistry::new();
    registry.add_inline("dark", ThemeSource::yaml("isDark: true"));
    registry.add_dir(dir.path()).unwrap();

    assert!(matches!(registry.get("dark"), Ok(ResolvedTheme::Inline(_))));
    assert!(registry.load("dark").unwrap().boolean("isDark"));
    assert!(matches!(
        registry.get("dark.yaml"),
        Ok(ResolvedTheme::File(_))
    ));
}

#[test]
fn test_files_are_reread_on_load() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "dark.yaml", "spacing: 4\n");

    let mut registry = ThemeRegistry::new();
    registry.add_dir(dir.path()).unwrap();
    assert_eq!(registry.load("dark").unwrap().integer("spacing"), 4);

    write(dir.path(), "dark.yaml", "spacing: 8\n");
    assert_eq!(registry.load("dark").unwrap().integer("spacing"), 8);
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "broken.json", "{ \"tintColor\": ");

    let mut registry = ThemeRegistry::new();
    registry.add_dir(dir.path()).unwrap();

    assert!(matches!(
        registry.load("broken"),
        Err(LoadError::Parse { .. })
    ));
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut registry = ThemeRegistry::new();

    assert!(matches!(
        registry.add_dir(dir.path().join("absent")),
        Err(LoadError::Io { .. })
    ));
}

#[test]
fn test_library_from_directory_links_default() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Default.yaml",
        "tintColor: '4895d9'\nbodyFont: system\nbodyFontSize: 15\n",
    );
    write(dir.path(), "dark.json", r#"{"tintColor": "6aa8e0", "isDark": true}"#);
    write(dir.path(), "sepia.yml", "backgroundColor: 'f4ecd8'\n");

    let mut registry = ThemeRegistry::new();
    registry.add_dir(dir.path()).unwrap();
    let mut library = ThemeLibrary::new();
    library.load_registry(&registry).unwrap();

    assert_eq!(library.len(), 3);
    let sepia = library.theme_named("sepia").unwrap();
    assert_eq!(sepia.parent().unwrap().name(), DEFAULT_THEME_NAME);
    assert_eq!(sepia.color("tintColor"), Color::rgb(0x48, 0x95, 0xd9));
    assert_eq!(sepia.font("bodyFont").size(), 15.0);

    let dark = library.theme_named("dark").unwrap();
    assert_eq!(dark.color("tintColor"), Color::rgb(0x6a, 0xa8, 0xe0));
    assert!(dark.boolean("isDark"));
}

#[test]
fn test_document_file_loads_every_theme() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "themes.yaml",
        "Default:\n  tintColor: '4895d9'\ndark:\n  isDark: true\n",
    );

    let source = ThemeSource::from_path(dir.path().join("themes.yaml")).unwrap();
    let library = ThemeLibrary::from_document(&source).unwrap();

    let dark = library.theme_named("dark").unwrap();
    assert!(dark.boolean("isDark"));
    assert_eq!(dark.color("tintColor"), Color::rgb(0x48, 0x95, 0xd9));
}
