use super::Key;
use crate::{Error, Result};
use smallvec::SmallVec;

/// Symbols of a single key, inline for keys up to 32 symbols long.
pub type Symbols = SmallVec<[u8; 32]>;

impl<const B: usize> Key<B> for [u8] {
    fn symbols(&self) -> Result<Symbols> {
        self.iter()
            .map(|&symbol| {
                if (symbol as usize) < B {
                    Ok(symbol)
                } else {
                    Err(Error::InvalidSymbol { symbol, size: B })
                }
            })
            .collect()
    }
}

impl<const B: usize, const N: usize> Key<B> for [u8; N] {
    fn symbols(&self) -> Result<Symbols> {
        Key::<B>::symbols(self.as_slice())
    }
}

impl<const B: usize> Key<B> for Vec<u8> {
    fn symbols(&self) -> Result<Symbols> {
        Key::<B>::symbols(self.as_slice())
    }
}

impl Key<{ crate::words::LETTERS }> for str {
    fn symbols(&self) -> Result<Symbols> {
        self.chars()
            .map(|c| {
                if c.is_ascii_lowercase() {
                    Ok(c as u8 - b'a')
                } else {
                    Err(Error::InvalidChar(c))
                }
            })
            .collect()
    }
}

impl Key<{ crate::words::LETTERS }> for String {
    fn symbols(&self) -> Result<Symbols> {
        self.as_str().symbols()
    }
}

impl<const B: usize, K: Key<B> + ?Sized> Key<B> for &K {
    fn symbols(&self) -> Result<Symbols> {
        Key::<B>::symbols(*self)
    }
}
