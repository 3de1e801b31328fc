mod cli;

use std::{
    io::{BufRead, Write},
    net::Ipv4Addr,
};

use clap::Parser;
use cli::{Cli, Cmd, CmdRoutes, CmdWords, OptsStats, OptsWordList, StatFormat};
use itertools::Itertools;
use prefixtree::{
    dataset::{self, Strictness},
    RouteTable, SearchKind, TreeStats, WordTrie,
};
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Trie(#[from] prefixtree::Error),
    #[error("Unable to read or write: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to serialise the stats: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} of the queries did not match")]
    Unmatched(usize),
    #[error("{0} of the addresses have no route")]
    Unrouted(usize),
    #[error("Found {0} unknown words")]
    Misspelt(usize),
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    if let Err(err) = entry(cli) {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_words(opts: &mut OptsWordList) -> Result<WordTrie, Error> {
    let strictness = if opts.strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };
    log::info!("Loading words from {}", opts.list);
    let trie = dataset::words(opts.list.reader(), strictness)?;
    log::info!("Loaded {} words", trie.len());
    Ok(trie)
}

fn load_routes(opts: &mut cli::OptsRoutes) -> Result<RouteTable, Error> {
    log::info!("Loading routes from {}", opts.table);
    let table = dataset::routes(opts.table.reader())?;
    log::info!("Loaded {} routes", table.len());
    Ok(table)
}

fn print_stats(stats: TreeStats, opts: &OptsStats) -> Result<(), Error> {
    match opts.format {
        StatFormat::Human => println!("{stats}"),
        StatFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }
    Ok(())
}

fn entry(cli: Cli) -> Result<(), Error> {
    match cli.cmd {
        Cmd::Words(mut opts) => {
            let trie = load_words(&mut opts.list)?;
            match opts.cmd {
                CmdWords::Exact(search) => run_search(&trie, SearchKind::Exact, &search.queries),
                CmdWords::Prefix(search) => run_search(&trie, SearchKind::Prefix, &search.queries),
                CmdWords::Complete(complete) => {
                    let completions = trie.complete(&complete.prefix)?;
                    let mut f = std::io::stdout().lock();
                    for word in completions.take(complete.limit.unwrap_or(usize::MAX)) {
                        writeln!(f, "{word}")?;
                    }
                    Ok(())
                }
                CmdWords::Check(check) => run_check(&trie, check),
                CmdWords::Print => {
                    print!("{trie}");
                    Ok(())
                }
                CmdWords::Stats(stats) => print_stats(trie.stats(), &stats),
            }
        }
        Cmd::Routes(mut opts) => {
            let table = load_routes(&mut opts)?;
            match opts.cmd {
                CmdRoutes::Lookup(lookup) => run_lookup(&table, &lookup.addresses),
                CmdRoutes::Show => {
                    let mut f = std::io::stdout().lock();
                    for route in table.routes() {
                        writeln!(f, "{route}")?;
                    }
                    Ok(())
                }
                CmdRoutes::Stats(stats) => print_stats(table.stats(), &stats),
            }
        }
        Cmd::Repl(mut opts) => {
            let trie = load_words(&mut opts.list)?;
            run_repl(&trie, opts.limit)
        }
    }
}

fn run_search(trie: &WordTrie, kind: SearchKind, queries: &[String]) -> Result<(), Error> {
    let mut f = std::io::stdout().lock();
    let mut unmatched = 0;
    for query in queries {
        let found = trie.search(kind, query)?;
        let verdict = if found { "exists" } else { "does not exist" };
        writeln!(f, "The {} \"{query}\" {verdict} in the trie.", kind.noun())?;
        unmatched += usize::from(!found);
    }
    match unmatched {
        0 => Ok(()),
        n => Err(Error::Unmatched(n)),
    }
}

fn run_lookup(table: &RouteTable, addresses: &[Ipv4Addr]) -> Result<(), Error> {
    let mut f = std::io::stdout().lock();
    let mut unrouted = 0;
    for &addr in addresses {
        match table.lookup_route(addr) {
            Some((prefix, next_hop)) => writeln!(f, "{addr}\t{next_hop}\t{prefix}")?,
            None => {
                writeln!(f, "{addr}\t-")?;
                unrouted += 1;
            }
        }
    }
    match unrouted {
        0 => Ok(()),
        n => Err(Error::Unrouted(n)),
    }
}

fn run_check(trie: &WordTrie, mut check: cli::OptsCheck) -> Result<(), Error> {
    let mut f = std::io::stdout().lock();
    let mut misspelt = 0;
    for word in dataset::extract_raw(&mut check.text)
        .process_results(|words| words.unique().collect_vec())?
    {
        match trie.contains(&word) {
            Ok(true) => {}
            Ok(false) => {
                misspelt += 1;
                let suggestions = trie.suggest(&word, check.suggestions)?;
                writeln!(f, "{word}: {}", suggestions.join(", "))?;
            }
            Err(err) => log::debug!("Not checking {word:?}: {err}"),
        }
    }
    match misspelt {
        0 => Ok(()),
        n => Err(Error::Misspelt(n)),
    }
}

fn run_repl(trie: &WordTrie, limit: usize) -> Result<(), Error> {
    let stdin = std::io::stdin();
    let mut out = std::io::stdout().lock();
    write!(out, "> ")?;
    out.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        let reply = match line.strip_prefix('?') {
            Some(word) => trie.search(SearchKind::Exact, word.trim()).map(|found| {
                let verdict = if found { "exists" } else { "does not exist" };
                vec![format!("The word \"{}\" {verdict} in the trie.", word.trim())]
            }),
            None => trie
                .complete(line)
                .map(|completions| completions.take(limit).collect_vec()),
        };
        match reply {
            Ok(lines) if lines.is_empty() => writeln!(out, "(no words)")?,
            Ok(lines) => writeln!(out, "{}", lines.join("\n"))?,
            Err(err) => writeln!(out, "{err}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
