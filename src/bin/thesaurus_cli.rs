//! Thesaurus terminal client
//!
//! Interactive front end for the lookup server. Type a word to search it,
//! then pivot to any listed synonym or suggestion by number.
//!
//! # Usage
//!
//! ```bash
//! thesaurus_cli --server http://localhost:3000 happy
//! ```

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use url::Url;

use thesaurus::client::{LookupApi, ThesaurusClient, ViewState, IDLE_HINT};
use thesaurus::WordScore;

#[derive(Parser)]
#[command(name = "thesaurus_cli")]
#[command(about = "Look up synonyms, definitions and spelling suggestions")]
struct Cli {
    /// Base URL of the thesaurus server
    #[arg(long, default_value = "http://localhost:3000", env = "THESAURUS_SERVER_URL")]
    server: Url,

    /// Word to look up before entering the prompt
    word: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Synonym(usize),
    Suggestion(usize),
    Clear,
    Help,
    Quit,
    Empty,
}

/// `s<N>` picks synonym N, `d<N>` picks "did you mean" suggestion N (1-based).
fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "" => return Command::Empty,
        ":q" | ":quit" | ":exit" => return Command::Quit,
        ":c" | ":clear" => return Command::Clear,
        ":h" | ":help" | "?" => return Command::Help,
        _ => {}
    }

    let numbered = |prefix: char| {
        line.strip_prefix(prefix)
            .filter(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
            .and_then(|rest| rest.parse::<usize>().ok())
            .filter(|n| *n > 0)
    };

    if let Some(n) = numbered('s') {
        Command::Synonym(n - 1)
    } else if let Some(n) = numbered('d') {
        Command::Suggestion(n - 1)
    } else {
        Command::Search(line.to_string())
    }
}

fn print_help() {
    println!("  {}        look up a word", "<word>".cyan());
    println!("  {}          search synonym N", "s<N>".cyan());
    println!("  {}          search suggestion N", "d<N>".cyan());
    println!("  {}        reset everything", ":clear".cyan());
    println!("  {}         leave", ":quit".cyan());
}

fn print_words(title: &str, prefix: char, words: &[WordScore]) {
    if words.is_empty() {
        return;
    }
    println!("{}", title.bold());
    for (i, entry) in words.iter().enumerate() {
        println!("  {} {}", format!("{}{}", prefix, i + 1).dimmed(), entry.word);
    }
}

fn render(state: &ViewState) {
    if state.loading {
        println!("{}", "Searching...".dimmed());
        return;
    }
    if let Some(error) = &state.error {
        println!("{}", error.red());
    }
    if let Some(definition) = &state.definition {
        println!("{}", "Definition".blue().bold());
        println!("  {}", definition.as_str());
    }
    print_words("Synonyms:", 's', &state.synonyms);
    print_words("Did you mean:", 'd', &state.suggestions);
    if state.is_idle() {
        println!("{}", IDLE_HINT.dimmed());
    }
}

/// Run a search with the loading indicator shown while it is in flight.
async fn run_search(state: &mut ViewState, api: &dyn LookupApi) {
    if let Some(word) = state.begin_search() {
        render(state);
        let outcome = api.lookup(&word).await;
        state.finish_search(outcome);
    }
    render(state);
}

async fn pick(state: &mut ViewState, api: &dyn LookupApi, word: Option<String>) {
    match word {
        Some(word) => {
            state.query = word;
            run_search(state, api).await;
        }
        None => println!("{}", "No such entry.".yellow()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api = match reqwest::Client::builder()
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|http| ThesaurusClient::new(http, cli.server.clone()))
    {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut state = ViewState::new();
    println!("{} ({})", "Word App".bold(), cli.server);
    if let Some(word) = cli.word {
        state.query = word;
        run_search(&mut state, &api).await;
    } else {
        render(&state);
    }

    loop {
        let line = match editor.readline("word> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            tracing::debug!(error = %e, "Could not record history entry");
        }

        match parse_command(&line) {
            Command::Search(word) => {
                state.query = word;
                run_search(&mut state, &api).await;
            }
            Command::Synonym(i) => {
                let word = state.synonyms.get(i).map(|e| e.word.clone());
                pick(&mut state, &api, word).await;
            }
            Command::Suggestion(i) => {
                let word = state.suggestions.get(i).map(|e| e.word.clone());
                pick(&mut state, &api, word).await;
            }
            Command::Clear => {
                state.clear();
                render(&state);
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Empty => {}
        }
    }

    ExitCode::SUCCESS
}
