use super::tag::Tag;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// Fixed-size information-set key.
///
/// Bits are addressed least significant first within each byte, so bit `i`
/// lives at `bytes[i / 8] >> (i % 8)`. Keys are built with a
/// [`Packer`](super::Packer) and read back with [`Key::bits`] and
/// [`Key::tags`]. Serialized form is lowercase hexadecimal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key<const N: usize>([u8; N]);

impl<const N: usize> Key<N> {
    pub const CAPACITY: usize = N * 8;

    pub fn bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// `width` bits starting at bit `start`, least significant first
    pub fn bits(&self, start: usize, width: usize) -> u8 {
        assert!(width <= 8, "cannot read {} bits into a byte", width);
        assert!(start + width <= Self::CAPACITY, "read past end of key");
        (0..width)
            .map(|j| start + j)
            .enumerate()
            .filter(|(_, i)| (self.0[i / 8] >> (i % 8)) & 1 == 1)
            .fold(0u8, |acc, (j, _)| acc | (1 << j))
    }

    /// action tags packed from bit `start`, most recent first,
    /// up to the first empty slot
    pub fn tags(&self, start: usize) -> impl Iterator<Item = Tag> + '_ {
        (start..Self::CAPACITY)
            .step_by(Tag::BITS)
            .take_while(|i| i + Tag::BITS <= Self::CAPACITY)
            .map(move |i| Tag::from(self.bits(i, Tag::BITS)))
            .take_while(|tag| *tag != Tag::None)
    }
}

impl<const N: usize> From<[u8; N]> for Key<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}
impl<const N: usize> From<Key<N>> for [u8; N] {
    fn from(key: Key<N>) -> Self {
        key.0
    }
}

impl<const N: usize> std::fmt::Display for Key<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{:02x}", b))
    }
}

impl<const N: usize> std::str::FromStr for Key<N> {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != N * 2 || !s.is_ascii() {
            return Err(anyhow::anyhow!("expected {} hex digits, got {:?}", N * 2, s));
        }
        let mut bytes = [0u8; N];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)?;
        }
        Ok(Self(bytes))
    }
}

impl<const N: usize> Serialize for Key<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de, const N: usize> Deserialize<'de> for Key<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
