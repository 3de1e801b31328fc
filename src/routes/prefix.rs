use crate::{
    trie::{Key, Symbols},
    Error, Result,
};
use std::{fmt, net::Ipv4Addr, str::FromStr};

/// Number of bits in an IPv4 address.
pub const ADDRESS_BITS: u8 = 32;

/// An IPv4 network: an address of which only the leading `length` bits are significant.
///
/// Bits past the prefix length are cleared on construction, so two prefixes covering the same
/// network always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "String", into = "String")
)]
pub struct Ipv4Prefix {
    addr: u32,
    length: u8,
}

impl Ipv4Prefix {
    /// `0.0.0.0/0`, covering every address.
    pub const DEFAULT: Ipv4Prefix = Ipv4Prefix { addr: 0, length: 0 };

    pub fn new(addr: impl Into<Ipv4Addr>, length: u8) -> Result<Self> {
        if length > ADDRESS_BITS {
            return Err(Error::InvalidPrefixLength(length.into()));
        }
        let addr: Ipv4Addr = addr.into();
        Ok(Self::masked(addr.into(), length))
    }

    /// The prefix covering exactly one address.
    pub fn host(addr: impl Into<Ipv4Addr>) -> Self {
        let addr: Ipv4Addr = addr.into();
        Self::masked(addr.into(), ADDRESS_BITS)
    }

    fn masked(addr: u32, length: u8) -> Self {
        Self {
            addr: addr & Self::mask_of(length),
            length,
        }
    }

    fn mask_of(length: u8) -> u32 {
        u32::MAX
            .checked_shl((ADDRESS_BITS - length).into())
            .unwrap_or(0)
    }

    /// Network address, with every bit past the prefix length cleared.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr.into()
    }

    /// Number of significant leading bits.
    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn mask(&self) -> Ipv4Addr {
        Self::mask_of(self.length).into()
    }

    /// The enclosing network of `length` bits; a longer `length` leaves the prefix as it is.
    pub fn truncate(&self, length: u8) -> Self {
        Self::masked(self.addr, length.min(self.length))
    }

    /// Whether `addr` lies inside this network.
    pub fn contains(&self, addr: impl Into<Ipv4Addr>) -> bool {
        let addr: Ipv4Addr = addr.into();
        u32::from(addr) & Self::mask_of(self.length) == self.addr
    }

    /// The significant bits, most significant first.
    pub(crate) fn bits(&self) -> impl Iterator<Item = u8> + use<> {
        let addr = self.addr;
        (0..self.length).map(move |i| ((addr >> (ADDRESS_BITS - 1 - i)) & 1) as u8)
    }

    /// Rebuilds a prefix from at most 32 bits, most significant first.
    pub(crate) fn from_bits(bits: &[u8]) -> Self {
        debug_assert!(bits.len() <= ADDRESS_BITS as usize);
        let addr = bits
            .iter()
            .enumerate()
            .fold(0u32, |addr, (i, &bit)| {
                addr | (u32::from(bit) << (ADDRESS_BITS as usize - 1 - i))
            });
        Self::masked(addr, bits.len() as u8)
    }
}

impl Key<2> for Ipv4Prefix {
    fn symbols(&self) -> Result<Symbols> {
        Ok(self.bits().collect())
    }
}

impl From<Ipv4Addr> for Ipv4Prefix {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Prefix::host(addr)
    }
}

impl FromStr for Ipv4Prefix {
    type Err = Error;

    /// Parses `a.b.c.d/length`, or a bare address as a host prefix.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (addr, length) = match s.split_once('/') {
            Some((addr, length)) => (addr, Some(length)),
            None => (s, None),
        };
        let addr = Ipv4Addr::from_str(addr).map_err(|_| Error::InvalidAddress(addr.to_owned()))?;
        match length {
            None => Ok(Ipv4Prefix::host(addr)),
            Some(length) => {
                let length: u32 = length
                    .parse()
                    .map_err(|_| Error::InvalidPrefix(s.to_owned()))?;
                let length = u8::try_from(length)
                    .ok()
                    .filter(|&length| length <= ADDRESS_BITS)
                    .ok_or(Error::InvalidPrefixLength(length))?;
                Ipv4Prefix::new(addr, length)
            }
        }
    }
}

impl TryFrom<String> for Ipv4Prefix {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Ipv4Prefix> for String {
    fn from(prefix: Ipv4Prefix) -> Self {
        prefix.to_string()
    }
}

impl fmt::Display for Ipv4Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr(), self.length)
    }
}
