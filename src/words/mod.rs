//! Dictionary of lowercase words with exact, prefix, and autocomplete queries.

#[cfg(test)]
mod test;

use crate::{
    trie::{iter::Iter, PrefixTree, Symbols, TreeStats},
    Result,
};

/// Size of the lowercase ascii alphabet.
pub const LETTERS: usize = 26;

/// The kind of lookup performed by [`WordTrie::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// The whole word must have been inserted.
    Exact,
    /// Some inserted word must start with it.
    Prefix,
}

impl SearchKind {
    pub fn noun(&self) -> &'static str {
        match self {
            SearchKind::Exact => "word",
            SearchKind::Prefix => "prefix",
        }
    }
}

#[derive(Default)]
pub struct WordTrie {
    trie: PrefixTree<(), LETTERS>,
}

impl WordTrie {
    pub fn new() -> Self {
        WordTrie::default()
    }

    /// Returns the number of words in the trie.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Adds a word, returning `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let added = self.trie.insert(word, ())?.is_none();
        log::trace!("insert {word:?} (new: {added})");
        Ok(added)
    }

    pub fn contains(&self, word: &str) -> Result<bool> {
        self.trie.contains(word)
    }

    pub fn has_prefix(&self, prefix: &str) -> Result<bool> {
        self.trie.has_prefix(prefix)
    }

    pub fn search(&self, kind: SearchKind, text: &str) -> Result<bool> {
        match kind {
            SearchKind::Exact => self.contains(text),
            SearchKind::Prefix => self.has_prefix(text),
        }
    }

    /// Every word starting with `prefix`, in alphabetical order.
    pub fn complete(&self, prefix: &str) -> Result<Completions<'_>> {
        Ok(Completions {
            inner: self.trie.keys_with_prefix(prefix)?,
        })
    }

    /// Every word in alphabetical order.
    pub fn words(&self) -> Completions<'_> {
        Completions {
            inner: self.trie.iter(),
        }
    }

    /// The longest word in the trie which `text` starts with.
    pub fn longest_word_prefix<'t>(&self, text: &'t str) -> Result<Option<&'t str>> {
        Ok(self
            .trie
            .longest_match(text)?
            .map(|(len, _)| &text[..len]))
    }

    /// Words sharing the longest known prefix with `word`, up to `limit` of them.
    ///
    /// A word that is already in the trie only suggests itself.
    pub fn suggest(&self, word: &str, limit: usize) -> Result<Vec<String>> {
        if self.contains(word)? {
            return Ok(vec![word.to_owned()]);
        }
        let known = self.trie.common_prefix_len(word)?;
        log::debug!("suggest {word:?} from known prefix {:?}", &word[..known]);
        Ok(self.complete(&word[..known])?.take(limit).collect())
    }

    pub fn stats(&self) -> TreeStats {
        self.trie.stats()
    }
}

impl std::fmt::Debug for WordTrie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.words()).finish()
    }
}

/// Renders the trie one letter per line, indented by depth, with `$` closing a word.
impl std::fmt::Display for WordTrie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for visit in self.trie.walk() {
            let Some(symbol) = visit.symbol else {
                continue;
            };
            let end = if visit.value.is_some() { " $" } else { "" };
            writeln!(
                f,
                "{:indent$}{}{end}",
                "",
                letter(symbol),
                indent = (visit.depth - 1) * 2
            )?;
        }
        Ok(())
    }
}

fn letter(symbol: u8) -> char {
    char::from(b'a' + symbol)
}

fn spell(symbols: &Symbols) -> String {
    symbols.iter().copied().map(letter).collect()
}

/// Words yielded by [`WordTrie::complete`].
#[derive(Debug, Clone)]
#[must_use]
pub struct Completions<'a> {
    inner: Iter<'a, (), LETTERS>,
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(symbols, _)| spell(&symbols))
    }
}

impl<'a> IntoIterator for &'a WordTrie {
    type Item = String;
    type IntoIter = Completions<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}

impl<S: AsRef<str>> Extend<S> for WordTrie {
    /// Adds every valid word, skipping the rest.
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            if let Err(err) = self.insert(word.as_ref()) {
                log::warn!("Skipping {:?}: {err}", word.as_ref());
            }
        }
    }
}

impl WordTrie {
    /// Builds a trie from `words`, failing on the first invalid one.
    pub fn try_from_iter<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Result<Self> {
        let mut trie = WordTrie::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }
}
