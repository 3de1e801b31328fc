//! IPv4 routing table answering longest-prefix-match lookups.
//!
//! Routes live in a binary [`PrefixTree`] indexed by the bits of their prefix, most significant
//! bit first. Any node along a lookup path may hold a next hop; the deepest one wins.

mod prefix;
#[cfg(test)]
mod test;

pub use prefix::{Ipv4Prefix, ADDRESS_BITS};

use crate::trie::{iter::Iter, PrefixTree, TreeStats};
use std::{fmt, net::Ipv4Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Route<H = Ipv4Addr> {
    pub prefix: Ipv4Prefix,
    pub next_hop: H,
}

impl<H: fmt::Display> fmt::Display for Route<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} via {}", self.prefix, self.next_hop)
    }
}

/// Next hops keyed by IPv4 prefix.
pub struct RouteTable<H = Ipv4Addr> {
    trie: PrefixTree<H, 2>,
}

impl<H> RouteTable<H> {
    pub fn new() -> Self {
        RouteTable {
            trie: PrefixTree::new(),
        }
    }

    /// Returns the number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Installs a route, returning the next hop it replaces.
    pub fn insert(&mut self, prefix: Ipv4Prefix, next_hop: H) -> Option<H> {
        log::debug!("install {prefix}");
        self.trie.insert_symbols(prefix.bits(), next_hop)
    }

    pub fn insert_route(&mut self, route: Route<H>) -> Option<H> {
        self.insert(route.prefix, route.next_hop)
    }

    /// Next hop of exactly this prefix.
    pub fn get(&self, prefix: &Ipv4Prefix) -> Option<&H> {
        self.trie.get(prefix).ok().flatten()
    }

    /// Next hop of the longest prefix covering `addr`.
    pub fn lookup(&self, addr: impl Into<Ipv4Addr>) -> Option<&H> {
        self.lookup_route(addr).map(|(_, next_hop)| next_hop)
    }

    /// The longest prefix covering `addr` together with its next hop.
    pub fn lookup_route(&self, addr: impl Into<Ipv4Addr>) -> Option<(Ipv4Prefix, &H)> {
        let host = Ipv4Prefix::host(addr);
        let found = self
            .trie
            .longest_match_symbols(host.bits())
            .map(|(length, next_hop)| (host.truncate(length as u8), next_hop));
        log::trace!(
            "lookup {} matched {:?}",
            host.addr(),
            found.as_ref().map(|(prefix, _)| prefix)
        );
        found
    }

    /// Every route, ordered by the bits of its prefix with shorter prefixes first.
    pub fn routes(&self) -> Routes<'_, H> {
        Routes {
            inner: self.trie.iter(),
        }
    }

    pub fn stats(&self) -> TreeStats {
        self.trie.stats()
    }

    /// Removes every route.
    pub fn clear(&mut self) {
        self.trie.clear();
    }
}

impl RouteTable<Ipv4Addr> {
    /// A small table with overlapping prefixes and a default route.
    pub fn sample() -> Self {
        [
            ([10u8, 0, 0, 0], 24, [10u8, 0, 0, 1]),
            ([10, 0, 1, 0], 24, [10, 0, 0, 2]),
            ([10, 1, 0, 0], 16, [10, 0, 0, 3]),
            ([0, 0, 0, 0], 0, [10, 0, 0, 4]),
        ]
        .into_iter()
        .map(|(addr, length, next_hop)| Route {
            prefix: Ipv4Prefix::host(addr).truncate(length),
            next_hop: Ipv4Addr::from(next_hop),
        })
        .collect()
    }
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        RouteTable::new()
    }
}

impl<H: fmt::Debug> fmt::Debug for RouteTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.routes().map(|route| (route.prefix, route.next_hop)))
            .finish()
    }
}

impl<H> FromIterator<Route<H>> for RouteTable<H> {
    fn from_iter<T: IntoIterator<Item = Route<H>>>(iter: T) -> Self {
        let mut table = RouteTable::new();
        for route in iter {
            table.insert_route(route);
        }
        table
    }
}

impl<H> FromIterator<(Ipv4Prefix, H)> for RouteTable<H> {
    fn from_iter<T: IntoIterator<Item = (Ipv4Prefix, H)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(prefix, next_hop)| Route { prefix, next_hop })
            .collect()
    }
}

impl<H> Extend<Route<H>> for RouteTable<H> {
    fn extend<T: IntoIterator<Item = Route<H>>>(&mut self, iter: T) {
        for route in iter {
            self.insert_route(route);
        }
    }
}

/// Routes yielded by [`RouteTable::routes`].
#[must_use]
pub struct Routes<'a, H> {
    inner: Iter<'a, H, 2>,
}

impl<'a, H> Iterator for Routes<'a, H> {
    type Item = Route<&'a H>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(bits, next_hop)| Route {
            prefix: Ipv4Prefix::from_bits(&bits),
            next_hop,
        })
    }
}
