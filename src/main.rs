use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use podbrowse::config::DEFAULT_API_BASE;
use podbrowse::render::{render_detail, render_genres};
use podbrowse::{
    ApiConfig, BrowseError, Browser, Command, EpisodeKey, Genre, Outcome, ProgressEvent,
    ProgressReporter, RecordId, SharedProgressReporter, ShowDetail, SortKey, TracingReporter,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");

/// Browse a podcast directory from the terminal
#[derive(Parser, Debug)]
#[command(name = "podbrowse")]
#[command(about = "Browse a podcast directory: search, filter, sort and expand shows")]
#[command(version)]
struct Args {
    /// Base URL of the podcast directory API
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout: u64,

    /// Quiet mode - suppress the loading spinner and banner
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Print the catalog, filtered and sorted
    List {
        /// Only podcasts whose title contains this text (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only podcasts in this genre (id or name)
        #[arg(short, long)]
        genre: Option<String>,

        /// newest, oldest, title-asc or title-desc
        #[arg(long, default_value = "newest")]
        sort: SortKey,
    },

    /// Print the details of one show
    Show {
        /// Show id
        id: String,

        /// Season to expand
        #[arg(long)]
        season: Option<String>,

        /// Episode of the expanded season to expand
        #[arg(long, requires = "season")]
        episode: Option<String>,
    },

    /// List the known genres
    Genres,

    /// Interactive session (the default)
    Browse,
}

/// Progress reporter showing an indicatif spinner while a request is in flight
struct SpinnerReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn start(&self, message: String) {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_message(message);

        if let Some(previous) = self.current.lock().unwrap().replace(bar) {
            previous.finish_and_clear();
        }
    }

    fn finish(&self) {
        if let Some(bar) = self.current.lock().unwrap().take() {
            bar.finish_and_clear();
        }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: ProgressEvent) {
        TracingReporter.report(event.clone());

        match event {
            ProgressEvent::FetchingCatalog { url } => {
                self.start(format!("{SEARCH}Fetching catalog: {}", url.cyan()));
            }

            ProgressEvent::FetchingShow { id, .. } => {
                self.start(format!("{HEADPHONES}Loading show {}", id.cyan()));
            }

            ProgressEvent::CatalogLoaded { .. }
            | ProgressEvent::ShowLoaded { .. }
            | ProgressEvent::FetchFailed { .. } => self.finish(),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("podbrowse={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_failure(message: &str) {
    eprintln!("{FAILURE}{}", message.red());
}

/// Print command output, highlighting an error view
fn print_output(text: &str) {
    if text.starts_with("Error: ") {
        print!("{}", text.red());
    } else {
        print!("{text}");
    }
}

async fn run_list(
    config: ApiConfig,
    reporter: SharedProgressReporter,
    search: String,
    genre: Option<String>,
    sort: SortKey,
) -> Result<()> {
    let genre = match genre {
        Some(input) => Some(
            Genre::lookup(&input)
                .ok_or(BrowseError::UnknownGenre(input))?
                .id,
        ),
        None => None,
    };

    let client = config.client()?;
    let mut browser = Browser::start(client, config, reporter)
        .await
        .context("Failed to load the podcast catalog")?;

    let query = browser.query_mut();
    query.search = search;
    query.genre = genre;
    query.sort = sort;

    print!("{}", browser.render_view());
    Ok(())
}

async fn run_show(
    config: ApiConfig,
    reporter: SharedProgressReporter,
    id: String,
    season: Option<String>,
    episode: Option<String>,
) -> Result<()> {
    let client = config.client()?;
    let mut detail = ShowDetail::new();
    detail.load(&client, &config, &id, &reporter).await;

    if let Some(season) = season {
        let season = RecordId::new(season);
        detail.expansion_mut().toggle_season(season.clone());

        if let Some(episode) = episode {
            detail
                .expansion_mut()
                .toggle_episode(EpisodeKey::new(season, RecordId::new(episode)));
        }
    }

    print_output(&render_detail(&detail));

    if detail.error().is_some() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_browse(config: ApiConfig, reporter: SharedProgressReporter) -> Result<()> {
    let client = config.client()?;
    let mut browser = Browser::start(client, config, reporter)
        .await
        .context("Failed to load the podcast catalog")?;

    println!(
        "{} podcasts loaded. Type {} for a list of commands.\n",
        browser.catalog().len().to_string().green().bold(),
        "help".cyan()
    );
    print!("{}", browser.render_view());

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("\n{} ", "podbrowse>".bold().magenta());
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                print_failure(&e.to_string());
                continue;
            }
        };

        match browser.execute(command).await {
            Ok(Outcome::Output(text)) => print_output(&text),
            Ok(Outcome::Quit) => break,
            Err(e) => print_failure(&e.to_string()),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ApiConfig::new(&args.api_base, Duration::from_secs(args.timeout))
        .context("Invalid API configuration")?;

    let reporter: SharedProgressReporter = if args.quiet {
        TracingReporter::shared()
    } else {
        Arc::new(SpinnerReporter::new())
    };

    let mode = args.command.unwrap_or(Mode::Browse);

    if !args.quiet && matches!(mode, Mode::Browse) {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podbrowse".bold().magenta(),
            "- Podcast Directory".dimmed()
        );
    }

    match mode {
        Mode::List {
            search,
            genre,
            sort,
        } => run_list(config, reporter, search, genre, sort).await,
        Mode::Show {
            id,
            season,
            episode,
        } => run_show(config, reporter, id, season, episode).await,
        Mode::Genres => {
            print!("{}", render_genres());
            Ok(())
        }
        Mode::Browse => run_browse(config, reporter).await,
    }
}
