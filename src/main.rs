//! # quotedeck CLI
//!
//! Command-line interface for the quotedeck quote manager.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use quotedeck::commands::{self, AddArgs, ListArgs, RandomArgs, SettagsArgs};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/quotedeck/settings.conf    Settings (quote file path, line
                                       separator, web address and port),
                                       created with defaults on first run

Quote File Format (one quote per line):
  <quote> | <author> | <publication> | <tag1, tag2, ...>

Getting Started:
  qd add \"Be yourself; everyone else is already taken. - Oscar Wilde\"
  qd list                        List all quotes
  qd random                      Show a random quote
  qd today                       Show today's quote of the day

Learn more:
  qd <COMMAND> --help            Show detailed help for a command";

#[derive(Parser)]
#[command(name = "qd")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Store, search, and display short text quotes from the command line")]
#[command(
    long_about = "quotedeck manages a collection of quotes in a plain text file; you can add, \
view, and tag quotes, and display a random one. The collection lives in a single UTF-8 file \
with one pipe-delimited line per quote, so it stays human-editable and diff-friendly.

The tool can also start a small web server that shows a quote of the day: a deterministic \
daily pick that stays the same all day and rotates through the whole collection."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Path to the quote file (overrides the settings file)
    #[arg(long, global = true, value_name = "PATH")]
    quotefile: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new quote to the quote file
    #[command(
        long_about = "Add a new quote to the quote file.\n\n\
The quote is given in the simple format:\n  \
\"<quote> - <author>\"\n  \
\"<quote> - <author> (<publication>)\"\n  \
\"<quote> - <author>, '<publication>'\"\n\n\
With --extended, the pipe-delimited quote file format is used instead, which \
also allows tags:\n  \
\"<quote>|<author>|[<publication>]|[<tag1>,<tag2>,...]\"\n\n\
Pass a single dash to read multiple quotes from stdin, one per line.",
        after_help = "Examples:\n  \
qd add \"Less is more. - Mies van der Rohe\"\n  \
qd add \"Festina lente. - Augustus, 'Lives of the Caesars'\"\n  \
qd add -e \"Less is more.|Mies van der Rohe||architecture, design\"\n  \
cat more-quotes.txt | qd add -e -\n\n\
Duplicate quote texts are rejected."
    )]
    Add {
        /// The quote, or '-' to read quotes from stdin
        quote: String,

        /// Use the pipe-delimited quote file format
        #[arg(short, long)]
        extended: bool,
    },

    /// List quotes, optionally filtered
    #[command(
        long_about = "List quotes in the quote file, optionally narrowed by filters.\n\n\
All active filters must match (logical AND). Tag matching is exact and \
case-sensitive; keyword matching is a case-insensitive substring search over \
the quote text, author, and publication.",
        after_help = "Examples:\n  \
qd list                            List all quotes\n  \
qd list -t wisdom                  Quotes tagged 'wisdom'\n  \
qd list -t wisdom,humor            Quotes carrying both tags\n  \
qd list -k twain                   Quotes mentioning 'twain' anywhere\n  \
qd list -n 3                       The third quote in the file\n  \
qd list -s 1a2b3c4d5e6f7a8b        The quote with the given hash\n  \
qd list -l                         Long form with tags and hashes\n  \
qd list -e                         Pipe-delimited form, same as the file"
    )]
    List {
        /// Only list quotes with the given tag(s), comma-separated
        #[arg(short, long)]
        tags: Option<String>,

        /// Only list quotes containing the keyword in quote, author, or publication
        #[arg(short, long)]
        keyword: Option<String>,

        /// Only list the quote on the given line number (1-based)
        #[arg(short, long)]
        number: Option<usize>,

        /// Only list the quote with the matching hash value
        #[arg(short = 's', long)]
        hash: Option<String>,

        /// Long-form output including publication, tags, and hash
        #[arg(short, long, conflicts_with = "extended")]
        long: bool,

        /// Pipe-delimited output, same format as the quote file
        #[arg(short, long)]
        extended: bool,
    },

    /// Display a single random quote
    #[command(
        long_about = "Display a single random quote, optionally selected from the quotes \
matching a tag or keyword filter. Running qd with no subcommand at all does the same thing.",
        after_help = "Examples:\n  \
qd random\n  \
qd random -t motivational\n  \
qd random -k art"
    )]
    Random {
        /// Only consider quotes with the given tag(s), comma-separated
        #[arg(short, long)]
        tags: Option<String>,

        /// Only consider quotes containing the keyword
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Display the quote of the day
    #[command(
        long_about = "Display the quote of the day: a deterministic daily selection that \
stays the same for every call on one calendar day and rotates through the whole collection \
before repeating. This is the same quote the web server shows."
    )]
    Today,

    /// Show all tags used in the quote file
    Tags,

    /// Set new tags for a quote, replacing any existing ones
    #[command(
        long_about = "Set new tags for a single quote, replacing any existing tags. The quote \
is selected either by its line number (-n) or by its hash (-s); exactly one selector must be \
given. Tags may contain only letters, digits, and underscores.",
        after_help = "Examples:\n  \
qd settags -n 3 \"wisdom, stoicism\"\n  \
qd settags -s 1a2b3c4d5e6f7a8b wisdom\n\n\
Tip: qd list -l shows line numbers and hashes."
    )]
    Settags {
        /// Select the quote on the given line number (1-based)
        #[arg(short, long)]
        number: Option<usize>,

        /// Select the quote with the matching hash value
        #[arg(short = 's', long)]
        hash: Option<String>,

        /// Comma-separated list of new tags
        newtags: String,
    },

    /// Show the settings location, quote file location, and quote count
    Info,

    /// Start the quote-of-the-day web server
    #[command(
        long_about = "Start a web server that displays the quote of the day.\n\n\
GET / renders the daily quote; GET /tags additionally shows its tags and a \
ready-made settags command line. The listen address and port come from the \
settings file (web_ip and web_port, default 127.0.0.1:5544). The quote file \
is re-read whenever it changes on disk."
    )]
    Webserver,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let quotefile = cli.quotefile;

    match cli.command {
        Some(Commands::Add { quote, extended }) => {
            commands::add(quotefile, &AddArgs { quote, extended })
        }

        Some(Commands::List {
            tags,
            keyword,
            number,
            hash,
            long,
            extended,
        }) => commands::list(
            quotefile,
            &ListArgs {
                tags,
                keyword,
                number,
                hash,
                long,
                extended,
            },
        ),

        Some(Commands::Random { tags, keyword }) => {
            commands::random(quotefile, &RandomArgs { tags, keyword })
        }

        Some(Commands::Today) => commands::today(quotefile),

        Some(Commands::Tags) => commands::show_tags(quotefile),

        Some(Commands::Settags {
            number,
            hash,
            newtags,
        }) => commands::settags(
            quotefile,
            &SettagsArgs {
                number,
                hash,
                tags: newtags,
            },
        ),

        Some(Commands::Info) => commands::info(quotefile),

        Some(Commands::Webserver) => commands::webserver(quotefile),

        Some(Commands::Completions { shell }) => {
            commands::completions(shell, &mut Cli::command())
        }

        // Bare `qd` shows a random quote
        None => commands::random(quotefile, &RandomArgs::default()),
    }
}
