mod enumfile;
pub use enumfile::BuiltinOrFile;
mod builtins;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::net::Ipv4Addr;

use crate::cli::builtins::impl_builtin_file;

/// Look up words and routes in prefix trees.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log more detail: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Query a dictionary of words.
    Words(OptsWords),
    /// Query an IPv4 routing table.
    Routes(OptsRoutes),
    /// Complete prefixes typed on stdin, one per line.
    ///
    /// A line starting with '?' looks up the rest of the line as a whole word instead.
    Repl(OptsRepl),
}

#[derive(Debug, Args)]
pub struct OptsWordList {
    /// Word list to load: a builtin name or a path to a file of whitespace separated words.
    #[arg(short, long, default_value = "basic")]
    pub list: BuiltinOrFile<BuiltinsWords>,
    /// Fail on words with characters outside of a-z instead of skipping them.
    #[arg(short, long, default_value_t = false)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct OptsWords {
    #[command(flatten)]
    pub list: OptsWordList,

    #[command(subcommand)]
    pub cmd: CmdWords,
}

#[derive(Debug, Subcommand)]
pub enum CmdWords {
    /// Check whether whole words are in the dictionary.
    Exact(OptsSearch),
    /// Check whether any word starts with each prefix.
    Prefix(OptsSearch),
    /// List the words starting with a prefix.
    Complete(OptsComplete),
    /// Report words of a text missing from the dictionary, with suggestions.
    Check(OptsCheck),
    /// Print the trie, one letter per line.
    Print,
    /// Display statistics about the trie.
    Stats(OptsStats),
}

#[derive(Debug, Args)]
pub struct OptsSearch {
    /// Strings to look up.
    #[arg(required = true)]
    pub queries: Vec<String>,
}

#[derive(Debug, Args)]
pub struct OptsComplete {
    /// Prefix of the words to list. Lists every word when omitted.
    #[arg(default_value = "")]
    pub prefix: String,
    /// Maximum number of words to list.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct OptsCheck {
    /// Text to check. Defaults to stdin.
    #[arg(default_value = "-")]
    pub text: clio::Input,
    /// Number of suggestions for each unknown word.
    #[arg(short = 'n', long, default_value_t = 3)]
    pub suggestions: usize,
}

#[derive(Debug, Args)]
pub struct OptsRoutes {
    /// Routing table to load: a builtin name or a path to a file of `prefix<TAB>next_hop` lines.
    #[arg(short, long, default_value = "sample")]
    pub table: BuiltinOrFile<BuiltinsRoutes>,

    #[command(subcommand)]
    pub cmd: CmdRoutes,
}

#[derive(Debug, Subcommand)]
pub enum CmdRoutes {
    /// Find the next hop of each address by longest prefix match.
    Lookup(OptsLookup),
    /// List every route.
    Show,
    /// Display statistics about the trie.
    Stats(OptsStats),
}

#[derive(Debug, Args)]
pub struct OptsLookup {
    /// Addresses to route.
    #[arg(required = true)]
    pub addresses: Vec<Ipv4Addr>,
}

#[derive(Debug, Args)]
pub struct OptsRepl {
    #[command(flatten)]
    pub list: OptsWordList,
    /// Maximum number of completions for each prefix.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct OptsStats {
    #[arg(short, long, value_enum, default_value_t = StatFormat::Human)]
    pub format: StatFormat,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatFormat {
    /// Print the stats in a human-readable format.
    #[default]
    Human,
    /// Print the stats in a machine-readable format (JSON).
    Json,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum BuiltinsWords {
    /// About a thousand common English words.
    #[default]
    Basic,
}

impl_builtin_file!(
    BuiltinsWords,
    Basic => "data/words.txt"
);

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum BuiltinsRoutes {
    /// Four overlapping routes including a default route.
    #[default]
    Sample,
}

impl_builtin_file!(
    BuiltinsRoutes,
    Sample => "data/routes.tsv"
);
