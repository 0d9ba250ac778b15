//! Binary entrypoint for the spellbee CLI.
//!
//! Commands:
//! - `init` - create a starter `spellbee.toml` and the data documents
//! - `play [--category <c>] [--difficulty <d>] [--seed <n>]` - interactive practice on stdin/stdout
//! - `status` - progress summary and recent results
//! - `words list|add|edit|remove|priority|categories` - manage the word list
//! - `settings show|set` - view or change practice settings
//! - `reset --yes` - clear all progress
//!
//! See the library crate docs for module-level details: `spellbee::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

use spellbee::config::Config;
use spellbee::console::{ConsoleGame, PlayCommandParser};
use spellbee::spelling::scoring::accuracy;
use spellbee::spelling::selection::categories;
use spellbee::spelling::{
    Difficulty, NewWord, PracticeSession, ProgressStore, SettingsStore, SpellingError,
    WordFilter, WordRepository, WordUpdate,
};
use spellbee::storage::JsonStore;
use spellbee::validation::parse_filter_arg;

#[derive(Parser)]
#[command(name = "spellbee")]
#[command(about = "Spelling practice for young learners")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "spellbee.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default configuration and the data documents
    Init,
    /// Start an interactive practice session
    Play {
        /// Only practice words from this category ("all" for every category)
        #[arg(long)]
        category: Option<String>,
        /// Only practice words of this difficulty
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
        /// Seed for reproducible word and clue order
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show progress and recent results
    Status,
    /// Manage the word list
    Words {
        #[command(subcommand)]
        action: WordsCommand,
    },
    /// View or change practice settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
    /// Clear stars, counters and history
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum WordsCommand {
    /// List words, optionally filtered
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },
    /// Add a word
    Add {
        word: String,
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,
        #[arg(long)]
        category: Option<String>,
        /// Practice this word before any others
        #[arg(long)]
        priority: bool,
    },
    /// Change fields of an existing word
    Edit {
        id: String,
        #[arg(long)]
        word: Option<String>,
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, conflicts_with = "category")]
        clear_category: bool,
    },
    /// Delete a word
    Remove { id: String },
    /// Toggle the priority flag of a word
    Priority { id: String },
    /// List the categories in use
    Categories,
}

#[derive(Subcommand)]
enum SettingsCommand {
    Show,
    Set {
        /// Attempts per word (2-5)
        #[arg(long)]
        max_attempts: Option<u32>,
        /// on|off
        #[arg(long, value_parser = parse_on_off)]
        hints: Option<bool>,
        /// on|off
        #[arg(long, value_parser = parse_on_off)]
        audio: Option<bool>,
        /// Preferred speech voice name
        #[arg(long)]
        voice: Option<String>,
        #[arg(long, conflicts_with = "voice")]
        clear_voice: bool,
    },
}

fn parse_on_off(s: &str) -> std::result::Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(format!("expected on or off, got '{}'", other)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            run_init(&cli.config).await?;
        }
        Commands::Play {
            category,
            difficulty,
            seed,
        } => {
            let (config, store) = setup(&cli.config, cli.verbose).await?;
            let filter = WordFilter {
                category: category.as_deref().and_then(parse_filter_arg),
                difficulty,
            };
            run_play(&config, store, filter, seed).await?;
        }
        Commands::Status => {
            let (_, store) = setup(&cli.config, cli.verbose).await?;
            print_status(&store)?;
        }
        Commands::Words { action } => {
            let (_, mut store) = setup(&cli.config, cli.verbose).await?;
            run_words(&mut store, action)?;
        }
        Commands::Settings { action } => {
            let (_, mut store) = setup(&cli.config, cli.verbose).await?;
            run_settings(&mut store, action)?;
        }
        Commands::Reset { yes } => {
            let (_, mut store) = setup(&cli.config, cli.verbose).await?;
            if yes {
                ProgressStore::reset(&mut store)?;
                info!("Progress reset from the command line");
                println!("Progress reset.");
            } else {
                println!("This clears all stars and history and cannot be undone.");
                println!("Re-run with --yes to confirm.");
            }
        }
    }

    Ok(())
}

/// Load the config (defaults when the file is missing), start logging and open the data dir.
async fn setup(config_path: &str, verbosity: u8) -> Result<(Config, JsonStore)> {
    let config = Config::load_or_default(config_path).await?;
    init_logging(&Some(config.clone()), verbosity);
    let store = open_store(&config)?;
    Ok((config, store))
}

fn open_store(config: &Config) -> Result<JsonStore> {
    let store = JsonStore::open(&config.storage.data_dir)
        .map_err(|e| anyhow!("Failed to open data dir {}: {}", config.storage.data_dir, e))?;
    Ok(store.with_recent_cap(config.game.recent_results_cap))
}

async fn run_init(config_path: &str) -> Result<()> {
    if Path::new(config_path).exists() {
        warn!("{} already exists; leaving it unchanged", config_path);
    } else {
        Config::create_default(config_path).await?;
        println!("Created {}", config_path);
    }
    let config = Config::load(config_path).await?;
    let store = open_store(&config)?;
    let summary = store.initialize()?;
    info!("Initialized data directory {}", config.storage.data_dir);
    if summary.seeded_words {
        println!("Seeded {} default words.", summary.words);
    } else {
        println!("Word list has {} words.", summary.words);
    }
    if summary.created_settings {
        println!("Created default settings.");
    }
    if summary.created_progress {
        println!("Created empty progress.");
    }
    println!("Data directory: {}", config.storage.data_dir);
    Ok(())
}

async fn run_play(
    config: &Config,
    store: JsonStore,
    filter: WordFilter,
    seed: Option<u64>,
) -> Result<()> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let session = PracticeSession::new(
        Box::new(store.clone()),
        &store,
        Box::new(store.clone()),
        config.audio.build(),
        rng,
    )?
    .with_max_clues(config.game.max_clues)
    .with_filter(filter);
    let mut game = ConsoleGame::new(session, PlayCommandParser::new(config.game.command_prefix()));

    match game.start() {
        Ok(screen) => println!("{}", screen),
        Err(SpellingError::EmptyRepository) => {
            println!("No words to practice yet. Add some with `spellbee words add <word>`.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        match game.handle_line(&line) {
            Ok(reply) => {
                println!("{}", reply.text);
                if reply.quit {
                    return Ok(());
                }
            }
            Err(SpellingError::EmptyRepository) => {
                println!("The word list is empty now. Add words and play again.");
                return Ok(());
            }
            Err(e) => {
                warn!("play: {}", e);
                println!("Something went wrong: {}", e);
            }
        }
        prompt();
    }
    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn print_status(store: &JsonStore) -> Result<()> {
    let progress = ProgressStore::get(store)?;
    let words = store.list()?;
    println!("spellbee v{}", env!("CARGO_PKG_VERSION"));
    println!("Words in list: {}", words.len());
    println!("Words played:  {}", progress.total_words_played);
    println!("Correct:       {}", progress.correct_words);
    println!(
        "Accuracy:      {}%",
        accuracy(progress.correct_words, progress.total_words_played)
    );
    println!("Attempts:      {}", progress.total_attempts);
    println!("⭐ Stars:       {}", progress.stars);
    if !progress.recent_results.is_empty() {
        println!("\nRecent results:");
        for r in progress.recent_results.iter().take(10) {
            println!(
                "  {} {:<16} {} attempt{}  {}",
                if r.correct { "✓" } else { "✗" },
                r.word,
                r.attempts,
                if r.attempts == 1 { "" } else { "s" },
                r.timestamp.format("%Y-%m-%d %H:%M")
            );
        }
    }
    Ok(())
}

fn run_words(store: &mut JsonStore, action: WordsCommand) -> Result<()> {
    match action {
        WordsCommand::List {
            category,
            difficulty,
        } => {
            let words = store.list()?;
            let filter = WordFilter {
                category: category.as_deref().and_then(parse_filter_arg),
                difficulty,
            };
            let shown = filter.apply(&words);
            for w in &shown {
                println!(
                    "{}  {:<16} {:<6} {:<12} {}",
                    w.id,
                    w.word,
                    w.difficulty,
                    w.category.as_deref().unwrap_or("-"),
                    if w.is_priority { "★" } else { "" }
                );
            }
            println!("{} of {} words ({})", shown.len(), words.len(), filter);
        }
        WordsCommand::Add {
            word,
            difficulty,
            category,
            priority,
        } => {
            let created = store.create(NewWord {
                word,
                difficulty,
                category,
                is_priority: priority,
            })?;
            println!("Added '{}' ({})", created.word, created.id);
        }
        WordsCommand::Edit {
            id,
            word,
            difficulty,
            category,
            clear_category,
        } => {
            let changes = WordUpdate {
                word,
                difficulty,
                category: if clear_category {
                    Some(None)
                } else {
                    category.map(Some)
                },
                is_priority: None,
            };
            if !store.update(&id, changes)? {
                return Err(SpellingError::WordNotFound(id).into());
            }
            println!("Updated {}", id);
        }
        WordsCommand::Remove { id } => {
            if !store.delete(&id)? {
                return Err(SpellingError::WordNotFound(id).into());
            }
            println!("Removed {}", id);
        }
        WordsCommand::Priority { id } => match store.toggle_priority(&id)? {
            Some(true) => println!("{} is now a priority word", id),
            Some(false) => println!("{} is no longer a priority word", id),
            None => return Err(SpellingError::WordNotFound(id).into()),
        },
        WordsCommand::Categories => {
            let words = store.list()?;
            for c in categories(&words) {
                println!("{}", c);
            }
        }
    }
    Ok(())
}

fn run_settings(store: &mut JsonStore, action: SettingsCommand) -> Result<()> {
    let mut settings = SettingsStore::get(store)?;
    match action {
        SettingsCommand::Show => {}
        SettingsCommand::Set {
            max_attempts,
            hints,
            audio,
            voice,
            clear_voice,
        } => {
            if let Some(n) = max_attempts {
                settings.max_attempts = n;
            }
            if let Some(on) = hints {
                settings.hints_enabled = on;
            }
            if let Some(on) = audio {
                settings.audio_enabled = on;
            }
            if clear_voice {
                settings.preferred_voice = None;
            } else if let Some(v) = voice {
                settings.preferred_voice = Some(v);
            }
            store.save(&settings)?;
            println!("Settings saved.");
        }
    }
    let on_off = |b: bool| if b { "on" } else { "off" };
    println!("Max attempts:    {}", settings.max_attempts);
    println!("Clues:           {}", on_off(settings.hints_enabled));
    println!("Audio:           {}", on_off(settings.audio_enabled));
    println!(
        "Preferred voice: {}",
        settings.preferred_voice.as_deref().unwrap_or("(automatic)")
    );
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|c| c.logging.level.parse::<log::LevelFilter>().ok())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|c| c.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    match log_file {
        Some(f) => {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            // Piped or redirected runs only log to the file
            let is_tty = atty::is(atty::Stream::Stdout);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        None => {
            builder.format(|fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
            });
        }
    }
    let _ = builder.try_init();
}
