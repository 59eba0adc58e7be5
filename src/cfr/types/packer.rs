use super::key::Key;
use super::tag::Tag;

/// Builds a [`Key`] by appending fixed-width fields without gaps.
///
/// Games push their private knowledge first and then the action tags
/// from the most recent backwards. Overflowing the key is a bug in the
/// game's choice of `N` and panics.
#[derive(Debug, Clone, Copy)]
pub struct Packer<const N: usize> {
    bytes: [u8; N],
    cursor: usize,
}

impl<const N: usize> Default for Packer<N> {
    fn default() -> Self {
        Self {
            bytes: [0; N],
            cursor: 0,
        }
    }
}

impl<const N: usize> Packer<N> {
    /// bits written so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// append the low `width` bits of `value`
    pub fn push(mut self, value: u8, width: usize) -> Self {
        assert!(width <= 8, "field wider than a byte");
        assert!(
            width == 8 || value < (1 << width),
            "{} does not fit in {} bits",
            value,
            width
        );
        assert!(
            self.cursor + width <= Key::<N>::CAPACITY,
            "information set overflows {} bytes",
            N
        );
        for j in (0..width).filter(|j| (value >> j) & 1 == 1) {
            let i = self.cursor + j;
            self.bytes[i / 8] |= 1 << (i % 8);
        }
        self.cursor += width;
        self
    }

    pub fn tag(self, tag: Tag) -> Self {
        self.push(u8::from(tag), Tag::BITS)
    }

    pub fn tags(self, tags: impl IntoIterator<Item = Tag>) -> Self {
        tags.into_iter().fold(self, Self::tag)
    }
}

impl<const N: usize> From<Packer<N>> for Key<N> {
    fn from(packer: Packer<N>) -> Self {
        Key::from(packer.bytes)
    }
}
