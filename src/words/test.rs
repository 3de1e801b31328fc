use itertools::Itertools;

use super::*;
use crate::Error;

fn dataset() -> Vec<&'static str> {
    vec!["hello", "help", "helicopter", "hi"]
}

fn trie_from_dataset() -> WordTrie {
    WordTrie::try_from_iter(dataset()).unwrap()
}

#[test]
fn make_trie() {
    let trie = trie_from_dataset();
    assert_eq!(trie.len(), dataset().len());
    for word in dataset() {
        assert!(trie.contains(word).unwrap());
    }
}

#[test]
fn exact_and_prefix() {
    let mut trie = WordTrie::new();
    trie.insert("hello").unwrap();

    assert!(trie.search(SearchKind::Exact, "hello").unwrap());
    assert!(!trie.search(SearchKind::Exact, "hel").unwrap());
    assert!(!trie.search(SearchKind::Exact, "c").unwrap());
    assert!(trie.search(SearchKind::Prefix, "hello").unwrap());
    assert!(trie.search(SearchKind::Prefix, "hel").unwrap());
    assert!(!trie.search(SearchKind::Prefix, "hellooo").unwrap());
    assert!(!trie.search(SearchKind::Prefix, "a").unwrap());
    assert!(!trie.search(SearchKind::Exact, "j").unwrap());
}

#[test]
fn complete() {
    let trie = trie_from_dataset();

    assert_eq!(
        trie.complete("hel").unwrap().collect_vec(),
        vec!["helicopter", "hello", "help"]
    );
    assert_eq!(trie.complete("xyz").unwrap().count(), 0);
    assert_eq!(
        trie.complete("").unwrap().collect_vec(),
        vec!["helicopter", "hello", "help", "hi"]
    );
    assert_eq!(trie.complete("hi").unwrap().collect_vec(), vec!["hi"]);
}

#[test]
fn complete_is_restartable() {
    let trie = trie_from_dataset();
    let first = trie.complete("h").unwrap().collect_vec();
    let second = trie.complete("h").unwrap().collect_vec();
    assert_eq!(first, second);
    assert_eq!(trie.words().collect_vec(), first);
}

#[test]
fn insert_twice() {
    let mut trie = trie_from_dataset();
    let before = trie.words().collect_vec();
    assert!(!trie.insert("help").unwrap());
    assert_eq!(trie.words().collect_vec(), before);
    assert_eq!(trie.len(), before.len());
}

#[test]
fn shorter_word_inside_longer() {
    let mut trie = WordTrie::new();
    assert!(trie.insert("helpful").unwrap());
    assert!(!trie.contains("help").unwrap());
    assert!(trie.insert("help").unwrap());
    assert!(trie.contains("help").unwrap());
    assert_eq!(trie.complete("help").unwrap().collect_vec(), vec!["help", "helpful"]);
}

#[test]
fn empty() {
    let trie = WordTrie::new();
    assert!(!trie.contains("a").unwrap());
    assert!(!trie.has_prefix("a").unwrap());
    assert!(!trie.contains("").unwrap());
    assert_eq!(trie.words().count(), 0);
    assert_eq!(trie.to_string(), "");
}

#[test]
fn invalid_words() {
    let mut trie = WordTrie::new();
    assert!(matches!(trie.insert("naïve"), Err(Error::InvalidChar('ï'))));
    assert!(matches!(trie.insert("two words"), Err(Error::InvalidChar(' '))));
    assert!(matches!(trie.contains("Hello"), Err(Error::InvalidChar('H'))));
    assert!(trie.is_empty());

    trie.extend(["good", "Bad", "fine"]);
    assert_eq!(trie.words().collect_vec(), vec!["fine", "good"]);
}

#[test]
fn longest_word_prefix() {
    let trie = WordTrie::try_from_iter(["he", "help", "helpful"]).unwrap();
    assert_eq!(trie.longest_word_prefix("helping").unwrap(), Some("help"));
    assert_eq!(trie.longest_word_prefix("helpfully").unwrap(), Some("helpful"));
    assert_eq!(trie.longest_word_prefix("hex").unwrap(), Some("he"));
    assert_eq!(trie.longest_word_prefix("h").unwrap(), None);
}

#[test]
fn suggest() {
    let trie = trie_from_dataset();
    assert_eq!(trie.suggest("helo", 10).unwrap(), vec!["helicopter", "hello", "help"]);
    assert_eq!(trie.suggest("helo", 2).unwrap(), vec!["helicopter", "hello"]);
    assert_eq!(trie.suggest("hi", 10).unwrap(), vec!["hi"]);
    assert_eq!(trie.suggest("zebra", 10).unwrap().len(), 4);
}

#[test]
fn render() {
    let trie = WordTrie::try_from_iter(["ab", "b"]).unwrap();
    assert_eq!(trie.to_string(), "a\n  b $\nb $\n");
}
