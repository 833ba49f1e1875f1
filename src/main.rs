//! sword-parse - Parse SWORD engine output into JSON

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;

use sword_parse::xref::{self, SourceKind};
use sword_parse::{
    Error, Heuristics, Passage, Result, canon, commentary, decode_text, lexicon, modules, search,
    verse,
};

#[derive(Parser)]
#[command(name = "sword-parse")]
#[command(version, about = "Parse SWORD engine output into JSON", long_about = None)]
#[command(after_help = "EXAMPLES:
    sword-parse resolve 'psalmen 23:1'
    diatheke -b KJV -k Gen 1 | sword-parse verses --book Genesis --chapter 1
    diatheke -b TSK -k John 3:16 | sword-parse commentary -m TSK -r 'John 3:16'
    diatheke -b StrongsGreek -k 25 | sword-parse dict -m StrongsGreek -k G25")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Heuristic thresholds as JSON
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a book name or passage to canonical form
    Resolve {
        text: String,

        /// Exact matches only
        #[arg(long)]
        exact: bool,
    },

    /// List canon books, optionally filtered by name
    Books {
        /// Name prefix or fragment
        query: Option<String>,

        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Parse a verse lookup
    Verses {
        #[arg(short, long)]
        book: String,

        #[arg(short, long)]
        chapter: u16,

        /// Raw engine output (stdin if omitted)
        input: Option<PathBuf>,
    },

    /// Extract cross-references
    Xrefs {
        #[arg(short, long, value_enum, default_value = "commentary")]
        kind: Kind,

        /// Print keyword groups instead of the flat list
        #[arg(short, long)]
        grouped: bool,

        input: Option<PathBuf>,
    },

    /// Parse a dictionary or lexicon entry
    Dict {
        #[arg(short, long)]
        module: String,

        #[arg(short, long)]
        key: String,

        input: Option<PathBuf>,
    },

    /// Parse commentary for one verse
    Commentary {
        #[arg(short, long)]
        module: String,

        /// Verse the output belongs to, e.g. "John 3:16"
        #[arg(short, long)]
        reference: String,

        input: Option<PathBuf>,
    },

    /// Parse a search listing
    Search {
        #[arg(short, long)]
        query: String,

        input: Option<PathBuf>,
    },

    /// Parse the installed-module listing
    Modules { input: Option<PathBuf> },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Commentary,
    Notes,
    Tsk,
}

impl From<Kind> for SourceKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Commentary => SourceKind::Commentary,
            Kind::Notes => SourceKind::BibleNotes,
            Kind::Tsk => SourceKind::CrossReferenceModule,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Resolved {
    Passage {
        passage: Passage,
        display: String,
        engine_key: String,
    },
    Book {
        book: &'static str,
        index: usize,
        chapters: u16,
        engine_token: String,
    },
}

#[derive(Serialize)]
struct SearchOutput {
    reported_total: Option<usize>,
    hits: Vec<sword_parse::SearchHit>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let heuristics = match &cli.config {
        Some(path) => load_heuristics(path)?,
        None => Heuristics::default(),
    };

    match cli.command {
        Commands::Resolve { text, exact } => print_json(&resolve(&text, !exact)?),
        Commands::Books { query, limit } => {
            let books = match query {
                Some(query) => canon::search_books(&query, limit),
                None => canon::BOOKS.iter().collect(),
            };
            print_json(&books)
        }
        Commands::Verses {
            book,
            chapter,
            input,
        } => {
            let book = canon::resolve(&book, true)
                .ok_or_else(|| Error::InvalidReference(format!("unknown book: {book}")))?;
            print_json(&verse::parse_lookup(book, chapter, &read_input(input.as_deref())?))
        }
        Commands::Xrefs {
            kind,
            grouped,
            input,
        } => {
            let raw = read_input(input.as_deref())?;
            if grouped {
                print_json(&xref::extract_grouped_with(&raw, &heuristics))
            } else {
                print_json(&xref::extract(&raw, kind.into()))
            }
        }
        Commands::Dict { module, key, input } => {
            let raw = read_input(input.as_deref())?;
            print_json(&lexicon::parse_entry_with(&module, &key, raw.trim(), &heuristics))
        }
        Commands::Commentary {
            module,
            reference,
            input,
        } => {
            let passage: Passage = reference.parse()?;
            let verse = passage
                .verse
                .ok_or_else(|| Error::InvalidReference(format!("{reference}: verse required")))?;
            let raw = read_input(input.as_deref())?;
            print_json(&commentary::parse(&module, passage.book, passage.chapter, verse, &raw))
        }
        Commands::Search { query, input } => {
            let raw = read_input(input.as_deref())?;
            print_json(&SearchOutput {
                reported_total: search::reported_total(&raw),
                hits: search::parse(&raw, &query),
            })
        }
        Commands::Modules { input } => {
            print_json(&modules::parse_module_list(&read_input(input.as_deref())?))
        }
    }
}

fn resolve(text: &str, fuzzy: bool) -> Result<Resolved> {
    if let Ok(passage) = text.parse::<Passage>() {
        return Ok(Resolved::Passage {
            display: passage.to_string(),
            engine_key: passage.engine_key(),
            passage,
        });
    }

    let book = canon::resolve(text, fuzzy)
        .and_then(canon::book)
        .ok_or_else(|| Error::InvalidReference(format!("unknown book: {text}")))?;
    Ok(Resolved::Book {
        book: book.name,
        index: canon::book_index(book.name).unwrap_or_default(),
        chapters: book.chapters,
        engine_token: canon::engine_token(book.name).to_string(),
    })
}

fn load_heuristics(path: &Path) -> Result<Heuristics> {
    let text = fs::read_to_string(path)?;
    let heuristics = serde_json::from_str(&text)
        .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
    debug!("loaded heuristics from {}", path.display());
    Ok(heuristics)
}

/// Raw engine output from a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(decode_text(&bytes).into_owned())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    println!("{json}");
    Ok(())
}
