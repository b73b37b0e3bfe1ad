#![forbid(unsafe_code)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn arabic40(dir: &std::path::Path) -> Command {
	let mut cmd = Command::cargo_bin("arabic40").unwrap();
	cmd.current_dir(dir)
		.env_remove("ARABIC40_LOG_LEVEL")
		.env_remove("ARABIC40_DEFAULT_LANG")
		.env_remove("ARABIC40_VIDEOS_URL")
		.env_remove("YOUTUBE_API_KEY");
	cmd
}

#[test]
fn help_shows_name() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempdir()?;
	arabic40(dir.path()).arg("--help").assert().success().stdout(predicate::str::contains("arabic40"));
	Ok(())
}

#[test]
fn config_show_applies_env() {
	let dir = tempdir().unwrap();
	arabic40(dir.path())
		.args(["config", "show"])
		.env("ARABIC40_DEFAULT_LANG", "en")
		.assert()
		.success()
		.stdout(predicate::str::contains("\"default_language\": \"en\""))
		.stdout(predicate::str::contains("\"day_page\": \"day.html\""));
}

#[test]
fn write_template_then_load_it() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("site.toml");
	arabic40(dir.path()).args(["config", "write-template", "--path"]).arg(&path).assert().success();
	assert!(std::fs::read_to_string(&path).unwrap().contains("storage_key = \"preferredLanguage\""));

	arabic40(dir.path())
		.args(["config", "show", "--config"])
		.arg(&path)
		.assert()
		.success()
		.stdout(predicate::str::contains("\"embed_base\": \"https://www.youtube.com/embed\""));

	arabic40(dir.path())
		.args(["config", "write-template", "--path"])
		.arg(&path)
		.assert()
		.code(2)
		.stderr(predicate::str::contains("refusing to overwrite"));
}

#[test]
fn invalid_config_file_fails() {
	let dir = tempdir().unwrap();
	std::fs::write(dir.path().join("arabic40.toml"), "log_level = \"loud\"\n").unwrap();
	arabic40(dir.path())
		.args(["config", "show"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("invalid log_level"));
}

#[test]
fn grid_prints_page_links() {
	let dir = tempdir().unwrap();
	arabic40(dir.path())
		.args(["grid", "--page", "2", "--lang", "en"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Days 11-20 (page 2)"))
		.stdout(predicate::str::contains("day.html?day=15&lang=en"))
		.stdout(predicate::str::contains("day=21").not());
}

#[test]
fn grid_clamps_page() {
	let dir = tempdir().unwrap();
	arabic40(dir.path())
		.args(["grid", "--page", "9"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Days 31-40 (page 4)"))
		.stdout(predicate::str::contains("day.html?day=40&lang=ar"));
}

#[test]
fn embed_resolves_or_falls_back() {
	let dir = tempdir().unwrap();
	std::fs::write(dir.path().join("videos.json"), r#"{"day1":"abc123","day2":""}"#).unwrap();
	arabic40(dir.path())
		.args(["embed", "1"])
		.assert()
		.success()
		.stdout(predicate::str::contains("https://www.youtube.com/embed/abc123"));
	arabic40(dir.path()).args(["embed", "2"]).assert().success().stdout(predicate::str::contains("fallback"));
	arabic40(dir.path()).args(["embed", "0"]).assert().failure().stderr(predicate::str::contains("invalid day"));
}

#[test]
fn audit_flags_missing_days() {
	let dir = tempdir().unwrap();
	let full: serde_json::Map<String, serde_json::Value> =
		(1..=40).map(|d| (format!("day{d}"), serde_json::Value::from(format!("v{d}")))).collect();
	std::fs::write(dir.path().join("full.json"), serde_json::to_string(&full).unwrap()).unwrap();
	arabic40(dir.path())
		.args(["videos", "audit", "full.json"])
		.assert()
		.success()
		.stdout(predicate::str::contains("all 40 days"));

	std::fs::write(dir.path().join("gaps.json"), r#"{"day1":"a","day3":""}"#).unwrap();
	arabic40(dir.path())
		.args(["videos", "audit", "gaps.json"])
		.assert()
		.code(1)
		.stdout(predicate::str::contains("1/40 days mapped"))
		.stdout(predicate::str::contains("day2, day3"));
}

#[test]
fn curate_requires_api_key() {
	let dir = tempdir().unwrap();
	arabic40(dir.path())
		.args(["videos", "curate"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("YOUTUBE_API_KEY"));
}

#[test]
fn grid_jumps_to_page_of_day() {
	let dir = tempdir().unwrap();
	arabic40(dir.path())
		.args(["grid", "--day", "15", "--lang", "en"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Days 11-20 (page 2)"));
}

#[test]
fn null_mapping_entry_only_misses_its_day() {
	let dir = tempdir().unwrap();
	std::fs::write(dir.path().join("videos.json"), r#"{"day1":"abc","day2":null}"#).unwrap();
	arabic40(dir.path())
		.args(["embed", "1"])
		.assert()
		.success()
		.stdout(predicate::str::contains("https://www.youtube.com/embed/abc"));
	arabic40(dir.path()).args(["embed", "2"]).assert().success().stdout(predicate::str::contains("fallback"));
	arabic40(dir.path())
		.args(["videos", "audit", "videos.json"])
		.assert()
		.code(1)
		.stdout(predicate::str::contains("1/40 days mapped"));
}

#[test]
fn phrases_export_writes_tracks() {
	let dir = tempdir().unwrap();
	let book = r#"{"days":[{"day":1,"categories":[{"name":"Greetings","phrases":[
		{"ar":"مرحبا","transliteration":"marhaban","en":"Hello"}]}]}]}"#;
	std::fs::write(dir.path().join("book.json"), book).unwrap();
	arabic40(dir.path())
		.args(["phrases", "export", "--book", "book.json", "--out", "text_files", "--tts", "both"])
		.assert()
		.success()
		.stdout(predicate::str::contains("wrote 5 files"));

	let en = std::fs::read_to_string(dir.path().join("text_files/day1_en.txt")).unwrap();
	assert_eq!(en, "\nGreetings\n---------\nHello\n");
	let ar: serde_json::Value =
		serde_json::from_str(&std::fs::read_to_string(dir.path().join("text_files/day1_ar.tts.json")).unwrap()).unwrap();
	assert_eq!(ar["voice"], "ar-EG-SalmaNeural");
	assert_eq!(ar["text"], "مرحبا، ");
	assert!(!dir.path().join("text_files/day1_transliteration.tts.json").exists());

	arabic40(dir.path())
		.args(["phrases", "export", "--book", "book.json", "--day", "2"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("day 2 is not in the phrasebook"));
}

#[test]
fn builtin_phrasebook_exports_day_one() {
	let dir = tempdir().unwrap();
	arabic40(dir.path())
		.args(["phrases", "export", "--day", "1", "--track", "en", "--tts", "en"])
		.assert()
		.success()
		.stdout(predicate::str::contains("wrote 2 files to text_files"));

	let en = std::fs::read_to_string(dir.path().join("text_files/day1_en.txt")).unwrap();
	let header = "Basic Greetings & Common Phrases";
	assert!(en.starts_with(&format!("\n{header}\n{}\nHello\n", "-".repeat(header.len()))), "{en}");
	let script: serde_json::Value =
		serde_json::from_str(&std::fs::read_to_string(dir.path().join("text_files/day1_en.tts.json")).unwrap()).unwrap();
	assert_eq!(script["voice"], "en-US-JennyNeural");
}

#[test]
fn builtin_phrasebook_exports_supplementary_category() {
	let dir = tempdir().unwrap();
	arabic40(dir.path())
		.args(["phrases", "export", "--category", "daily_life", "--tts", "ar"])
		.assert()
		.success()
		.stdout(predicate::str::contains("wrote 4 files"));
	let sup = dir.path().join("text_files/supplementary");
	assert!(sup.join("daily_life_transliteration.txt").exists());
	assert!(!dir.path().join("text_files/day1_ar.txt").exists());
	let ar: serde_json::Value =
		serde_json::from_str(&std::fs::read_to_string(sup.join("daily_life_ar.tts.json")).unwrap()).unwrap();
	assert_eq!(ar["voice"], "ar-SA-ZariyahNeural");

	arabic40(dir.path()).args(["phrases", "export", "--category", "cooking"]).assert().failure();
}
