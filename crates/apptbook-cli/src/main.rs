//! `apptbook` CLI — add appointments to, show, and search appointment book text
//! files, locally or against a running `apptbook-server`.
//!
//! ## Usage
//!
//! ```sh
//! # Create or extend a book on disk
//! apptbook add Tanya Dentist "07/25/2025 9:00 AM" "07/25/2025 10:00 AM" -t tanya.txt
//!
//! # Print the new appointment and pretty-print the whole book to stdout
//! apptbook add Tanya Lunch "07/25/2025 12:00 PM" "07/25/2025 1:00 PM" -t tanya.txt --print --pretty -
//!
//! # Show a book as text, pretty listing, or JSON
//! apptbook show -t tanya.txt --pretty
//!
//! # Appointments beginning within a window (inclusive)
//! apptbook search -t tanya.txt --begin "07/25/2025 8:00 AM" --end "07/25/2025 11:00 AM"
//!
//! # The same against a server
//! apptbook remote --host localhost --port 8080 add Tanya Dentist "07/25/2025 9:00 AM" "07/25/2025 10:00 AM"
//! apptbook remote --host localhost --port 8080 search Tanya --begin "07/25/2025 8:00 AM" --end "07/25/2025 11:00 AM"
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod remote;

use anyhow::{bail, Context, Result};
use apptbook::{timestamp, Appointment, AppointmentBook, Owner};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use log::{debug, info};
use std::io;
use remote::RestClient;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "apptbook",
    version,
    about = "Appointment book text-file tool",
    after_help = "Timestamps use the form \"MM/DD/YYYY h:mm AM|PM\", e.g. \"07/25/2025 9:00 AM\"."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an appointment, optionally to a book stored in a text file
    Add {
        /// The person who owns the appointment book
        owner: String,
        /// A description of the appointment
        description: String,
        /// When the appointment begins
        begin: String,
        /// When the appointment ends
        end: String,
        /// Text file to read the book from (if it exists) and write it back to
        #[arg(short = 't', long)]
        text_file: Option<PathBuf>,
        /// Print the new appointment
        #[arg(long)]
        print: bool,
        /// Pretty-print the book to FILE ("-" for stdout)
        #[arg(long, value_name = "FILE")]
        pretty: Option<String>,
    },
    /// Show the book stored in a text file
    Show {
        /// Text file holding the book
        #[arg(short = 't', long)]
        text_file: PathBuf,
        /// Human-readable listing instead of the text format
        #[arg(long, conflicts_with = "json")]
        pretty: bool,
        /// JSON instead of the text format
        #[arg(long)]
        json: bool,
    },
    /// Show appointments beginning within an inclusive time window
    Search {
        /// Text file holding the book
        #[arg(short = 't', long)]
        text_file: PathBuf,
        /// Earliest begin time to include
        #[arg(long)]
        begin: String,
        /// Latest begin time to include
        #[arg(long)]
        end: String,
        /// Human-readable listing instead of the text format
        #[arg(long)]
        pretty: bool,
    },
    /// Work with the books held by a running apptbook-server
    Remote {
        /// Host the server runs on
        #[arg(long)]
        host: String,
        /// Port the server listens on
        #[arg(long)]
        port: u16,
        #[command(subcommand)]
        action: RemoteAction,
    },
}

#[derive(Subcommand)]
enum RemoteAction {
    /// Add an appointment to the owner's book on the server
    Add {
        /// The person who owns the appointment book
        owner: String,
        /// A description of the appointment
        description: String,
        /// When the appointment begins
        begin: String,
        /// When the appointment ends
        end: String,
        /// Print the new appointment instead of the server's acknowledgment
        #[arg(long)]
        print: bool,
    },
    /// Show the owner's book, or the appointments beginning within a window
    Search {
        /// The person who owns the appointment book
        owner: String,
        /// Earliest begin time to include
        #[arg(long, requires = "end")]
        begin: Option<String>,
        /// Latest begin time to include
        #[arg(long, requires = "begin")]
        end: Option<String>,
        /// The text format instead of the human-readable listing
        #[arg(long)]
        text: bool,
    },
    /// Delete every book on the server
    Reset,
}

fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            owner,
            description,
            begin,
            end,
            text_file,
            print,
            pretty,
        } => {
            let owner = Owner::new(owner).context("Invalid owner")?;
            let begin = parse_time(&begin, "begin")?;
            let end = parse_time(&end, "end")?;
            let appointment =
                Appointment::new(&description, begin, end).context("Invalid appointment")?;

            let mut book = match text_file.as_deref() {
                Some(path) if path.exists() => {
                    let book = load_book(path)?;
                    if book.owner() != &owner {
                        bail!(
                            "Owner {:?} does not match the owner {:?} of {}",
                            owner.as_str(),
                            book.owner().as_str(),
                            path.display()
                        );
                    }
                    book
                }
                _ => AppointmentBook::new(owner),
            };

            if print {
                println!("{appointment}");
            }
            book.add(appointment);

            if let Some(path) = text_file.as_deref() {
                save_book(&book, path)?;
            }
            if let Some(target) = pretty.as_deref() {
                write_pretty(&book, target)?;
            }
        }
        Commands::Show {
            text_file,
            pretty,
            json,
        } => {
            let book = load_book(&text_file)?;
            if json {
                let out = serde_json::to_string_pretty(&book)?;
                println!("{out}");
            } else {
                render(&book, pretty)?;
            }
        }
        Commands::Search {
            text_file,
            begin,
            end,
            pretty,
        } => {
            let book = load_book(&text_file)?;
            let range_begin = parse_time(&begin, "begin")?;
            let range_end = parse_time(&end, "end")?;
            let hits = book.between(range_begin, range_end);
            debug!(
                "{} of {} appointments begin between {} and {}",
                hits.len(),
                book.len(),
                begin,
                end
            );
            render(&hits, pretty)?;
        }
        Commands::Remote { host, port, action } => {
            let client = RestClient::new(&host, port)?;
            run_remote(&client, action)?;
        }
    }

    Ok(())
}

fn run_remote(client: &RestClient, action: RemoteAction) -> Result<()> {
    match action {
        RemoteAction::Add {
            owner,
            description,
            begin,
            end,
            print,
        } => {
            // Reject bad input before it reaches the server.
            let owner = Owner::new(owner).context("Invalid owner")?;
            let begin = parse_time(&begin, "begin")?;
            let end = parse_time(&end, "end")?;
            let appointment =
                Appointment::new(&description, begin, end).context("Invalid appointment")?;

            let ack = client.add_appointment(
                owner.as_str(),
                appointment.description(),
                &appointment.begin_string(),
                &appointment.end_string(),
            )?;
            if print {
                println!("{appointment}");
            } else {
                print!("{ack}");
            }
        }
        RemoteAction::Search {
            owner,
            begin,
            end,
            text,
        } => {
            let book = match (begin, end) {
                (Some(begin), Some(end)) => {
                    let begin = timestamp::format(&parse_time(&begin, "begin")?);
                    let end = timestamp::format(&parse_time(&end, "end")?);
                    client.between(&owner, &begin, &end)?
                }
                _ => client.book(&owner)?,
            };
            debug!("fetched {}", book);
            render(&book, !text)?;
        }
        RemoteAction::Reset => {
            print!("{}", client.remove_all()?);
        }
    }
    Ok(())
}

fn parse_time(value: &str, which: &str) -> Result<chrono::NaiveDateTime> {
    timestamp::parse(value).with_context(|| format!("Invalid {which} time"))
}

fn load_book(path: &Path) -> Result<AppointmentBook> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let book = apptbook::parse_from(file)
        .with_context(|| format!("Failed to parse appointment book: {}", path.display()))?;
    debug!("loaded {} from {}", book, path.display());
    Ok(book)
}

fn save_book(book: &AppointmentBook, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    apptbook::dump_to(book, io::BufWriter::new(file))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    info!("wrote {} to {}", book, path.display());
    Ok(())
}

fn write_pretty(book: &AppointmentBook, target: &str) -> Result<()> {
    if target == "-" {
        apptbook::pretty_to(book, io::stdout().lock()).context("Failed to write to stdout")?;
        return Ok(());
    }
    let file = std::fs::File::create(target)
        .with_context(|| format!("Failed to write file: {}", target))?;
    apptbook::pretty_to(book, io::BufWriter::new(file))
        .with_context(|| format!("Failed to write file: {}", target))?;
    Ok(())
}

fn render(book: &AppointmentBook, pretty: bool) -> Result<()> {
    let out = io::stdout().lock();
    if pretty {
        apptbook::pretty_to(book, out)?;
    } else {
        apptbook::dump_to(book, out)?;
    }
    Ok(())
}
