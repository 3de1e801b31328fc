//! Loaders filling the tries from text sources.

use std::{
    io::{BufRead, BufReader, Read},
    net::Ipv4Addr,
};

use crate::{
    routes::{Ipv4Prefix, Route, RouteTable},
    words::WordTrie,
    Error, Result,
};

/// How to treat words with characters outside of a-z.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Skip them with a warning.
    #[default]
    Lenient,
    /// Fail the whole load.
    Strict,
}

fn normalise(input: &str) -> String {
    input.to_lowercase()
}

/// Reads whitespace separated words into a [`WordTrie`].
///
/// Words are lower-cased before insertion.
pub fn words(rdr: impl Read, strictness: Strictness) -> Result<WordTrie> {
    let mut trie = WordTrie::new();
    let mut skipped = 0usize;
    for (index, line) in BufReader::new(rdr).lines().enumerate() {
        let line = line?;
        for word in line.split_whitespace() {
            let word = normalise(word);
            match (trie.insert(&word), strictness) {
                (Ok(_), _) => {}
                (Err(err), Strictness::Lenient) => {
                    log::warn!("Skipping the word {word:?} on line {}: {err}", index + 1);
                    skipped += 1;
                }
                (Err(_), Strictness::Strict) => {
                    return Err(Error::Record {
                        line: index as u64 + 1,
                        source: Box::new(Error::InvalidWord(word)),
                    });
                }
            }
        }
    }
    log::debug!("Loaded {} words, skipped {skipped}", trie.len());
    Ok(trie)
}

/// Reads a routing table of `prefix<TAB>next_hop` records.
///
/// Lines starting with `#` are comments. Later records replace earlier ones with the same prefix.
pub fn routes(rdr: impl Read) -> Result<RouteTable> {
    #[derive(Debug, serde::Deserialize)]
    struct Record {
        prefix: Ipv4Prefix,
        next_hop: Ipv4Addr,
    }

    let mut table = RouteTable::new();
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(rdr);
    for record in rdr.deserialize::<Record>() {
        let record = record.map_err(|err| match err.position().map(|pos| pos.line()) {
            Some(line) => Error::Record {
                line,
                source: Box::new(err.into()),
            },
            None => err.into(),
        })?;
        if let Some(previous) = table.insert_route(Route {
            prefix: record.prefix,
            next_hop: record.next_hop,
        }) {
            log::warn!(
                "The route {} via {previous} was replaced by {}",
                record.prefix,
                record.next_hop
            );
        }
    }
    log::debug!("Loaded {} routes", table.len());
    Ok(table)
}

/// Splits text into lower-cased words, dropping punctuation and whitespace.
pub fn extract_raw(rdr: impl Read) -> impl Iterator<Item = std::io::Result<String>> {
    use unicode_segmentation::UnicodeSegmentation;
    BufReader::new(rdr).lines().flat_map(|line| {
        let words: Vec<_> = match line {
            Ok(line) => line
                .unicode_words()
                .map(|word| Ok(normalise(word)))
                .collect(),
            Err(err) => vec![Err(err)],
        };
        words
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn load_words() {
        let text = "hello help\n  Helicopter\nhi  \n\nhello";
        let trie = words(text.as_bytes(), Strictness::Strict).unwrap();
        assert_eq!(
            trie.words().collect_vec(),
            vec!["helicopter", "hello", "help", "hi"]
        );
    }

    #[test]
    fn load_words_lenient() {
        let text = "good\nca$h don't\nfine";
        let trie = words(text.as_bytes(), Strictness::Lenient).unwrap();
        assert_eq!(trie.words().collect_vec(), vec!["fine", "good"]);

        let err = words(text.as_bytes(), Strictness::Strict).unwrap_err();
        assert!(matches!(
            err,
            Error::Record { line: 2, ref source } if matches!(**source, Error::InvalidWord(ref w) if w == "ca$h")
        ));
    }

    #[test]
    fn load_routes() {
        let text = "# prefix\tnext hop\n\
            10.0.0.0/24\t10.0.0.1\n\
            10.0.1.0/24\t10.0.0.2\n\
            10.1.0.0/16\t10.0.0.3\n\
            0.0.0.0/0\t10.0.0.4\n";
        let table = routes(text.as_bytes()).unwrap();
        let sample = RouteTable::sample();
        assert_eq!(
            table.routes().collect_vec(),
            sample.routes().collect_vec()
        );
    }

    #[test]
    fn load_routes_bad_line() {
        let text = "10.0.0.0/24\t10.0.0.1\n10.0.0.0/40\t10.0.0.2\n";
        assert!(matches!(
            routes(text.as_bytes()),
            Err(Error::Record { line: 2, .. })
        ));

        let text = "10.0.0.0/24\tgateway\n";
        assert!(routes(text.as_bytes()).is_err());
    }

    #[test]
    fn extract_words() {
        let text = "Hello, world!\nIt's  fine.";
        let found = extract_raw(text.as_bytes())
            .collect::<std::io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(found, vec!["hello", "world", "it's", "fine"]);
    }
}
