//! Wordsearcher CLI
//!
//! One-shot and interactive front end for the dictionary search engine.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordsearcher::{Config, Dictionary, Query, SearchError, SearchPage};

const HELP_TEXT: &str = include_str!("text/help.txt");

/// Search a word list by regular expression and word length.
#[derive(Parser)]
#[command(name = "wordsearcher", version)]
struct Cli {
    /// Newline-delimited word list (defaults to ~/words)
    #[arg(long, global = true, env = "WORDSEARCHER_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the words matching a pattern
    Search {
        /// Regular expression, matched anywhere in a word
        #[arg(default_value = "")]
        pattern: String,
        /// Minimum word length, 0 for none
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        min: i64,
        /// Maximum word length, 0 for none
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        max: i64,
        /// Emit the result page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print dictionary load statistics
    Stats,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "wordsearcher=debug"
    } else {
        "wordsearcher=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn print_stats(dictionary: &Dictionary) {
    let stats = dictionary.stats();
    println!("Lines read:  {}", stats.lines_read);
    println!("Words kept:  {}", stats.kept);
    println!("Rejected:    {}", stats.rejected);
    println!("Duplicates:  {}", stats.duplicates);
    println!("Empty lines: {}", stats.empty);
}

fn search(
    dictionary: &Dictionary,
    pattern: String,
    min: i64,
    max: i64,
    json: bool,
) -> wordsearcher::Result<()> {
    let query = Query::from_signed(pattern, min, max)?;
    let page = SearchPage::build(dictionary, &query)?;
    if json {
        println!("{}", page.to_json()?);
    } else {
        print!("{}", page.render_text());
    }
    Ok(())
}

/// `-` or a missing token stands for the match-all pattern
fn prompt_pattern(token: Option<&&str>) -> String {
    match token {
        None | Some(&"-") => String::new(),
        Some(s) => s.to_string(),
    }
}

fn parse_bound(name: &str, raw: Option<&&str>) -> Result<i64, String> {
    match raw {
        None => Ok(0),
        Some(s) => s
            .parse()
            .map_err(|_| format!("{name} must be an integer, got {s:?}")),
    }
}

fn run_interactive(dictionary: &Dictionary) -> io::Result<()> {
    println!("wordsearcher: {} words loaded.", dictionary.len());
    println!("Type 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                println!("{}", HELP_TEXT);
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "stats" => {
                print_stats(dictionary);
            }
            "search" | "s" => {
                if parts.len() > 4 {
                    println!("Usage: search <pattern> [min] [max]");
                    continue;
                }
                let pattern = prompt_pattern(parts.get(1));
                let bounds = parse_bound("min", parts.get(2))
                    .and_then(|min| parse_bound("max", parts.get(3)).map(|max| (min, max)));
                let (min, max) = match bounds {
                    Ok(b) => b,
                    Err(msg) => {
                        println!("✗ {}", msg);
                        continue;
                    }
                };
                match search(dictionary, pattern, min, max, false) {
                    Ok(()) => println!(),
                    Err(e) if e.is_recoverable() => println!("✗ {}", e),
                    Err(e) => return Err(io::Error::other(e)),
                }
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }

    Ok(())
}

fn run(cli: Cli) -> Result<(), SearchError> {
    let config = Config::resolve(cli.dictionary)?;
    let dictionary = Dictionary::load(&config.dictionary_path)?;

    match cli.command {
        Some(Command::Search {
            pattern,
            min,
            max,
            json,
        }) => search(&dictionary, pattern, min, max, json),
        Some(Command::Stats) => {
            print_stats(&dictionary);
            Ok(())
        }
        None => run_interactive(&dictionary).map_err(|source| SearchError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        }),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
