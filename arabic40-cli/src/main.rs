#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use arabic40_core::pagination::{page_for_day, DayPaginator};
use arabic40_core::curriculum::SupplementaryCategory;
use arabic40_core::phrases::{Phrasebook, SpeechScript, Track};
use arabic40_core::{Day, LanguageCode, SiteConfig, VideoDisplay, VideoLoader, TOTAL_DAYS};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

mod curate;
mod youtube;

const DEFAULT_CONFIG_PATH: &str = "arabic40.toml";

#[derive(Debug, Parser)]
#[command(name = "arabic40", version, about = "Arabic in 40 Days site maintenance")]
struct Cli {
	/// Site configuration (TOML). Default: ./arabic40.toml when present
	#[arg(long, global = true)]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	/// Video mapping maintenance
	Videos {
		#[command(subcommand)]
		action: VideosCmd,
	},
	/// Print one page of the day grid
	Grid {
		#[arg(long, default_value_t = 1)]
		page: u32,
		/// Show the page holding this day instead of --page
		#[arg(long)]
		day: Option<u32>,
		/// Language placed in the links (default: configured default language)
		#[arg(long)]
		lang: Option<String>,
	},
	/// Print the embed URL for a day, or "fallback"
	Embed {
		day: u32,
		#[arg(long, default_value = "videos.json")]
		file: PathBuf,
	},
	/// Phrasebook exports
	Phrases {
		#[command(subcommand)]
		action: PhrasesCmd,
	},
	/// Config helpers
	Config {
		#[command(subcommand)]
		action: ConfigCmd,
	},
}

#[derive(Debug, Subcommand)]
enum VideosCmd {
	/// Search YouTube for every day (and supplementary category) without a video
	Curate {
		#[arg(long, default_value = "videos.json")]
		file: PathBuf,
		#[arg(long, default_value = "videos_supplementary.json")]
		supplementary_file: PathBuf,
		/// Skip the supplementary categories
		#[arg(long)]
		days_only: bool,
		#[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
		api_key: Option<String>,
		/// Pause after each search (API quota)
		#[arg(long, default_value_t = 1000)]
		delay_ms: u64,
	},
	/// Report days without a video; exits 1 when any are missing
	Audit { file: PathBuf },
}

#[derive(Debug, Subcommand)]
enum PhrasesCmd {
	/// Write day<N>_<track>.txt for each track, and supplementary/<category>_<track>.txt
	Export {
		/// Phrasebook JSON (default: the built-in course phrasebook)
		#[arg(long)]
		book: Option<PathBuf>,
		/// Only this day
		#[arg(long, conflicts_with = "category")]
		day: Option<u32>,
		/// Only this supplementary category
		#[arg(long)]
		category: Option<SupplementaryCategory>,
		/// Only this track (ar, transliteration, en)
		#[arg(long)]
		track: Option<Track>,
		#[arg(long, default_value = "text_files")]
		out: PathBuf,
		/// Also write <name>_<track>.tts.json speech scripts for these languages
		#[arg(long, value_enum)]
		tts: Option<SpeechLanguage>,
	},
}

/// Spoken tracks; transliteration has no speech script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SpeechLanguage {
	Ar,
	En,
	Both,
}

impl SpeechLanguage {
	fn speaks(self, track: Track) -> bool {
		matches!(
			(self, track),
			(Self::Ar | Self::Both, Track::Arabic) | (Self::En | Self::Both, Track::English)
		)
	}
}

/// Which parts of the phrasebook one export covers.
#[derive(Debug, Clone, Copy)]
struct ExportSelection {
	day: Option<u32>,
	category: Option<SupplementaryCategory>,
	track: Option<Track>,
	tts: Option<SpeechLanguage>,
}

#[derive(Debug, Subcommand)]
enum ConfigCmd {
	/// Show the effective configuration (file, then ARABIC40_* env)
	Show,
	/// Write an arabic40.toml template
	WriteTemplate {
		#[arg(long)]
		path: Option<PathBuf>,
		/// Overwrite if file exists
		#[arg(long)]
		force: bool,
	},
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	let cfg = load_config(cli.config.as_deref())?;
	init_tracing(&cfg);

	match cli.command {
		Commands::Videos { action } => match action {
			VideosCmd::Curate { file, supplementary_file, days_only, api_key, delay_ms } => {
				let Some(key) = api_key.filter(|k| !k.trim().is_empty()) else {
					bail!("YOUTUBE_API_KEY is not set (pass --api-key or set the environment variable)");
				};
				let client = Arc::new(youtube::YouTubeClient::new(key.trim()));
				let delay = Duration::from_millis(delay_ms);

				let report = curate::curate(&file, &curate::day_targets(), client.clone(), delay).await?;
				print_report(&file, &report);
				if !days_only {
					let report =
						curate::curate(&supplementary_file, &curate::supplementary_targets(), client, delay).await?;
					print_report(&supplementary_file, &report);
				}
				Ok(())
			}
			VideosCmd::Audit { file } => {
				let mapping = curate::load_mapping(&file).await?;
				let missing = mapping.missing_days();
				if missing.is_empty() {
					println!("{}: all {TOTAL_DAYS} days have a video", file.display());
					return Ok(());
				}
				let keys: Vec<String> = missing.iter().map(|d| d.key()).collect();
				println!("{}: {}/{TOTAL_DAYS} days mapped", file.display(), TOTAL_DAYS as usize - missing.len());
				println!("missing: {}", keys.join(", "));
				std::process::exit(1);
			}
		},
		Commands::Grid { page, day, lang } => {
			let lang = LanguageCode::new(lang.unwrap_or_else(|| cfg.default_language.clone()));
			let mut paginator = DayPaginator::new(cfg.day_page.clone());
			let page = match day.and_then(Day::new) {
				Some(d) => {
					if !d.in_course() {
						warn!(day = %d, "day is outside the course");
					}
					page_for_day(d)
				}
				None => page,
			};
			paginator.set_cursor(page);
			let rendered = paginator.render(&lang);
			println!("Days {}-{} (page {})", rendered.start, rendered.end, paginator.cursor());
			for link in rendered.links {
				println!("{:>2}  {}  {}", link.day, link.href, link.tooltip);
			}
			Ok(())
		}
		Commands::Embed { day, file } => {
			let Some(day) = Day::new(day) else { bail!("invalid day: {day}") };
			let mapping = curate::load_mapping(&file).await?;
			let mut loader = VideoLoader::new(cfg.embed_base.clone());
			loader.begin();
			let mut out = StdoutPlayer;
			let outcomes = loader.complete(Ok(mapping), day, &mut out);
			debug!(?outcomes, "resolved");
			Ok(())
		}
		Commands::Phrases { action } => match action {
			PhrasesCmd::Export { book, day, category, track, out, tts } => {
				let book = match book {
					Some(path) => {
						Phrasebook::load(&path).with_context(|| format!("loading phrasebook {}", path.display()))?
					}
					None => Phrasebook::builtin().context("loading built-in phrasebook")?,
				};
				export_phrases(&book, ExportSelection { day, category, track, tts }, &out).await
			}
		},
		Commands::Config { action } => match action {
			ConfigCmd::Show => {
				println!("{}", serde_json::to_string_pretty(&cfg)?);
				Ok(())
			}
			ConfigCmd::WriteTemplate { path, force } => {
				let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
				if path.exists() && !force {
					eprintln!("refusing to overwrite existing file: {} (use --force)", path.display());
					std::process::exit(2);
				}
				tokio::fs::write(&path, TEMPLATE_ARABIC40_TOML)
					.await
					.with_context(|| format!("writing {}", path.display()))?;
				eprintln!("wrote {}", path.display());
				Ok(())
			}
		},
	}
}

/// `--config`, else ./arabic40.toml if present, else defaults; env overrides last.
fn load_config(explicit: Option<&Path>) -> Result<SiteConfig> {
	let mut cfg = match explicit {
		Some(path) => SiteConfig::load_from_file(path).with_context(|| format!("loading {}", path.display()))?,
		None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
			SiteConfig::load_from_file(DEFAULT_CONFIG_PATH).with_context(|| format!("loading {DEFAULT_CONFIG_PATH}"))?
		}
		None => SiteConfig::default(),
	};
	cfg.apply_env();
	cfg.validate()?;
	Ok(cfg)
}

fn init_tracing(cfg: &SiteConfig) {
	let _ = tracing_subscriber::fmt()
		.with_max_level(cfg.tracing_level())
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}

fn print_report(file: &Path, report: &curate::CurateReport) {
	println!(
		"{}: {} kept, {} found, {} unresolved",
		file.display(),
		report.kept,
		report.found.len(),
		report.unresolved.len()
	);
	if !report.unresolved.is_empty() {
		println!("unresolved: {}", report.unresolved.join(", "));
	}
}

/// Prints what the day page would show.
struct StdoutPlayer;

impl VideoDisplay for StdoutPlayer {
	fn show_embed(&mut self, url: &str) {
		println!("{url}");
	}

	fn show_fallback(&mut self) {
		println!("fallback");
	}
}

/// One day or supplementary category to export.
struct ExportSet<'a> {
	dir: PathBuf,
	name: String,
	file_name: Box<dyn Fn(Track) -> String + 'a>,
	text: Box<dyn Fn(Track) -> String + 'a>,
	speech: Box<dyn Fn(Track) -> Option<SpeechScript> + 'a>,
}

async fn export_phrases(book: &Phrasebook, sel: ExportSelection, out: &Path) -> Result<()> {
	let mut sets = Vec::new();
	if sel.category.is_none() {
		let days: Vec<&_> = match sel.day {
			Some(n) => {
				let Some(d) = Day::new(n).and_then(|d| book.day(d)) else {
					bail!("day {n} is not in the phrasebook");
				};
				vec![d]
			}
			None => book.days.iter().collect(),
		};
		for d in days {
			sets.push(ExportSet {
				dir: out.to_path_buf(),
				name: d.day.key(),
				file_name: Box::new(move |t| d.file_name(t)),
				text: Box::new(move |t| d.render_text(t)),
				speech: Box::new(move |t| d.tts_script(t)),
			});
		}
	}
	if sel.day.is_none() {
		let cats: Vec<&_> = match sel.category {
			Some(c) => {
				let Some(s) = book.supplementary(c) else { bail!("category {c} is not in the phrasebook") };
				vec![s]
			}
			None => book.supplementary.iter().collect(),
		};
		for s in cats {
			sets.push(ExportSet {
				dir: out.join("supplementary"),
				name: s.category.key().to_string(),
				file_name: Box::new(move |t| s.file_name(t)),
				text: Box::new(move |t| s.render_text(t)),
				speech: Box::new(move |t| s.tts_script(t)),
			});
		}
	}

	let tracks: Vec<Track> = match sel.track {
		Some(t) => vec![t],
		None => Track::ALL.to_vec(),
	};
	let mut written = 0usize;
	for set in &sets {
		tokio::fs::create_dir_all(&set.dir).await.with_context(|| format!("creating {}", set.dir.display()))?;
		for &track in &tracks {
			let path = set.dir.join((set.file_name)(track));
			tokio::fs::write(&path, (set.text)(track)).await.with_context(|| format!("writing {}", path.display()))?;
			written += 1;
			if !sel.tts.is_some_and(|lang| lang.speaks(track)) {
				continue;
			}
			if let Some(script) = (set.speech)(track) {
				let path = set.dir.join(format!("{}_{}.tts.json", set.name, track.code()));
				tokio::fs::write(&path, serde_json::to_string_pretty(&script)?).await?;
				debug!(file = %path.display(), voice = script.voice, "speech script");
				written += 1;
			}
		}
	}
	info!(written, out = %out.display(), "phrases exported");
	println!("wrote {written} files to {}", out.display());
	Ok(())
}

const TEMPLATE_ARABIC40_TOML: &str = r#"# Arabic in 40 Days site configuration (template)

# trace | debug | info | warn | error
log_level = "info"

# Language used when neither ?lang= nor a stored preference is present
default_language = "ar"
# localStorage key holding the preference
storage_key = "preferredLanguage"

# Day -> video id mapping, fetched by the day page
videos_url = "videos.json"
embed_base = "https://www.youtube.com/embed"

# Target of the day grid links
day_page = "day.html"
"#;
