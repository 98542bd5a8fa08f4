use std::str::FromStr;

use clap::{ArgAction, Parser};

use cinelist::models::{FilterMode, MovieId};

#[derive(Parser, Debug)]
#[command(name = "cinelist")]
#[command(about = "Personal movie watchlist backed by a remote catalog service")]
#[command(version)]
pub struct Cli {
    /// Base URL of the catalog service (overrides API_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Enable verbose output (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// One line typed into the interactive session
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List(FilterMode),
    Reload,
    Search(String),
    Results,
    Add(String),
    Watch(MovieId),
    Delete(MovieId),
    Recommend { query: String, include_watched: bool },
    Top100,
    Import(String),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list [all|watched|unwatched]   show the personal list
  reload                         reload the personal list from the server
  search <text>                  search the catalog
  results                        show the last search results
  add <imdb_id>                  add a search result to the list
  watch <id>                     toggle the watched flag
  delete <id>                    delete a movie (asks for confirmation)
  recommend [--all] <text>       ask for a recommendation
  top100                         show the top 100 grid
  import <imdb_id>               add a top 100 movie to the list
  help                           show this help
  quit                           leave";

fn required<'a>(arg: &'a str, usage: &str) -> Result<&'a str, String> {
    if arg.is_empty() {
        Err(format!("usage: {}", usage))
    } else {
        Ok(arg)
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "list" | "ls" => {
                if rest.is_empty() {
                    Ok(Command::List(FilterMode::All))
                } else {
                    rest.parse().map(Command::List)
                }
            }
            "reload" => Ok(Command::Reload),
            "search" => required(rest, "search <text>").map(|q| Command::Search(q.to_string())),
            "results" => Ok(Command::Results),
            "add" => required(rest, "add <imdb_id>").map(|id| Command::Add(id.to_string())),
            "watch" => required(rest, "watch <id>")?
                .parse()
                .map(Command::Watch)
                .map_err(|_| format!("'{}' is not a movie id", rest)),
            "delete" | "rm" => required(rest, "delete <id>")?
                .parse()
                .map(Command::Delete)
                .map_err(|_| format!("'{}' is not a movie id", rest)),
            "recommend" => {
                let (include_watched, query) = match rest.strip_prefix("--all") {
                    Some(query) => (true, query.trim()),
                    None => (false, rest),
                };
                required(query, "recommend [--all] <text>").map(|q| Command::Recommend {
                    query: q.to_string(),
                    include_watched,
                })
            }
            "top100" | "top" => Ok(Command::Top100),
            "import" => {
                required(rest, "import <imdb_id>").map(|id| Command::Import(id.to_string()))
            }
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err(String::new()),
            other => Err(format!("unknown command '{}', try 'help'", other)),
        }
    }
}
