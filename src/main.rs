mod cli;
mod logging;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use cinelist::{
    models::{FilterMode, NotificationKind},
    services::{Confirm, LoadOutcome},
    Config, Session,
};
use cli::{Cli, Command, HELP};

type InputLines = Arc<Mutex<Lines<BufReader<Stdin>>>>;

/// Confirmation answered on the same stdin the session reads commands from
struct StdinConfirm {
    lines: InputLines,
}

#[async_trait::async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        prompt_line(&format!("{} [y/N] ", prompt)).await;
        match self.lines.lock().await.next_line().await {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}

async fn prompt_line(text: &str) {
    let mut stdout = tokio::io::stdout();
    let _ = stdout.write_all(text.as_bytes()).await;
    let _ = stdout.flush().await;
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)?;

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url.trim_end_matches('/').to_string();
    }

    let session = Session::from_config(&config).context("Failed to create session")?;
    tracing::info!(api_url = %config.api_base_url, "Session started");

    // Print every notification as it appears
    let mut notifications = session.notifier().subscribe();
    tokio::spawn(async move {
        while notifications.changed().await.is_ok() {
            if let Some(n) = notifications.borrow_and_update().clone() {
                match n.kind {
                    NotificationKind::Success => println!("✔ {}", n.message),
                    NotificationKind::Error => println!("✖ {}", n.message),
                }
            }
        }
    });

    session.load_movies().await;
    print_movies(&session, FilterMode::All).await;

    let lines: InputLines = Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()));
    let confirm = StdinConfirm {
        lines: lines.clone(),
    };

    loop {
        prompt_line("> ").await;
        let line = match lines.lock().await.next_line().await? {
            Some(line) => line,
            None => break,
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                if !message.is_empty() {
                    println!("{}", message);
                }
                continue;
            }
        };

        match command {
            Command::List(mode) => print_movies(&session, mode).await,
            Command::Reload => {
                session.load_movies().await;
                print_movies(&session, FilterMode::All).await;
            }
            Command::Search(query) => {
                session.search(&query).await;
                print_results(&session).await;
            }
            Command::Results => print_results(&session).await,
            Command::Add(imdb_id) => session.promote(&imdb_id).await,
            Command::Watch(id) => session.toggle_watched(id).await,
            Command::Delete(id) => session.delete_movie(id, &confirm).await,
            Command::Recommend {
                query,
                include_watched,
            } => {
                session.recommend(&query, include_watched).await;
                if let Some(rec) = session.recommendation().await {
                    println!("{}", rec.explanation);
                    for movie in rec.movies {
                        println!("  [{}] {} ({})", movie.id, movie.title, movie.imdb_id);
                    }
                }
            }
            Command::Top100 => {
                if let LoadOutcome::Enriched { failed, .. } = session.load_top100().await {
                    if failed > 0 {
                        println!("{} movies could not be loaded", failed);
                    }
                }
                for (rank, entry) in session.top100().await.iter().enumerate() {
                    println!(
                        "{:>3}. {} ({}){}",
                        rank + 1,
                        entry.movie.title,
                        entry.imdb_id(),
                        if entry.added { " ✓" } else { "" }
                    );
                }
            }
            Command::Import(imdb_id) => session.import_from_top100(&imdb_id).await,
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}

async fn print_movies(session: &Session, mode: FilterMode) {
    let movies = session.filtered_view(mode).await;
    if movies.is_empty() {
        println!("(no movies)");
        return;
    }
    for movie in movies {
        let mark = if movie.is_watched { "x" } else { " " };
        let year = movie.year.map(|y| format!(" {}", y)).unwrap_or_default();
        println!("[{}] {:>4}  {}{} ({})", mark, movie.id.0, movie.title, year, movie.imdb_id);
    }
}

async fn print_results(session: &Session) {
    for result in session.search_results().await {
        println!("{}  {} ({})", result.imdb_id, result.title, result.year);
    }
}
