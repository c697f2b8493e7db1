use crypton_conf::{SettingsError, SiteSettings};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[rstest]
fn test_load_partial_file() {
	// Arrange
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("site.toml");
	fs::write(
		&path,
		r#"
description = "کریپتون"

[hero_image]
src = "/static/hero.webp"
"#,
	)
	.unwrap();

	// Act
	let settings = SiteSettings::load(&path).unwrap();

	// Assert
	assert_eq!(settings.title, "Crypton");
	assert_eq!(settings.description, "کریپتون");
	assert_eq!(settings.hero_image.src, "/static/hero.webp");
	assert_eq!(settings.hero_image.width, 884);
}

#[rstest]
fn test_load_missing_file() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("missing.toml");

	let error = SiteSettings::load(&path).unwrap_err();

	match error {
		SettingsError::Io { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("expected I/O error, got {other:?}"),
	}
}
