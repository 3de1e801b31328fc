//! Prefix trees for longest-prefix-match routing and word lookup

#[cfg(feature = "load")]
pub mod dataset;
mod error;
pub mod routes;
pub mod trie;
pub mod words;

pub use error::{Error, Result};
pub use routes::{Ipv4Prefix, Route, RouteTable};
pub use trie::{Key, PrefixTree, TreeStats};
pub use words::{SearchKind, WordTrie};
