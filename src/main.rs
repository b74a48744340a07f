use chrono::{DateTime, Local, Utc};
use clap::Parser;
use moodlog::application::{
    init::init, ConfigService, MoodStatsService, RecordEntryService, TimelineService,
};
use moodlog::cli::{format_detection, format_stats, format_timeline, Cli, Commands};
use moodlog::domain::{classify, EntryKind, Locale};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{Config, EntryRepository, FileSystemRepository};
use std::str::FromStr;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Some(Commands::Init { path, locale }) => {
            let locale = Locale::from_str(&locale).map_err(MoodlogError::Config)?;
            init(&path, locale)
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("locale = {}", config.locale);
                println!("window_days = {}", config.window_days);
                println!("merge_tolerance_secs = {}", config.merge_tolerance_secs);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: locale, window_days, merge_tolerance_secs, created");
                Ok(())
            }
        }
        Some(Commands::Classify { text, record }) => {
            let result = classify(&text);
            if record {
                print!("{}", result.to_toml_string()?);
            } else {
                print!("{}", format_detection(&result, display_locale()));
            }
            Ok(())
        }
        Some(Commands::Add {
            text,
            kind,
            question,
        }) => {
            let kind = EntryKind::from_str(&kind).map_err(MoodlogError::Config)?;
            let repo = FileSystemRepository::discover()?;
            let locale = repo.load_config()?.effective_locale();

            let service = RecordEntryService::new(repo);
            let (entry, result) = service.execute(&text, kind, question.as_deref(), Utc::now())?;

            println!("Recorded entry {}", entry.id);
            print!("{}", format_detection(&result, locale));
            Ok(())
        }
        Some(Commands::Stats { days, as_of }) => {
            let repo = FileSystemRepository::discover()?;
            let service = MoodStatsService::new(repo);

            let stats = match as_of {
                Some(value) => {
                    let now = DateTime::parse_from_rfc3339(&value)
                        .map_err(|_| MoodlogError::InvalidTimestamp(value.clone()))?;
                    service.execute(now, days)?
                }
                None => service.execute(Local::now(), days)?,
            };

            print!("{}", format_stats(&stats));
            Ok(())
        }
        Some(Commands::Timeline { limit }) => {
            let repo = FileSystemRepository::discover()?;
            let mut views = TimelineService::new(repo).execute()?;
            if let Some(limit) = limit {
                views.truncate(limit);
            }

            let output = format_timeline(&views);
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            Ok(())
        }
        None => {
            println!("moodlog - Mood journal with keyword-based emotion analytics");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Locale for classify output, which also works outside a journal
fn display_locale() -> Locale {
    FileSystemRepository::discover()
        .and_then(|repo| repo.load_config())
        .unwrap_or_else(|_| Config::new(Locale::default()))
        .effective_locale()
}
