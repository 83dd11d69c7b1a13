//! Fixed-size bit masks stored in blocks of an unsigned integer type.
//!
//! Bit `i` lives in block `i / B::BITS` at position `i % B::BITS`:
//!
//! ```text
//! Bitset<u8>, size = 10     block 0          block 1
//!                           [b7 .. b1 b0]    [.. b9 b8]
//! ```
//!
//! Unused high bits of the last block stay clear.

use std::fmt;
use std::ops::{BitAndAssign, BitOrAssign};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TileError};

/// Unsigned integer types usable as bitset storage blocks.
pub trait Block:
    Copy
    + Default
    + Eq
    + std::hash::Hash
    + fmt::Debug
    + fmt::Binary
    + std::ops::BitOr<Output = Self>
    + std::ops::BitAnd<Output = Self>
    + std::ops::Not<Output = Self>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Number of bits per block.
    const BITS: usize;
    const ZERO: Self;

    /// The block with only bit `pos` set.
    fn bit(pos: usize) -> Self;

    fn count_ones(self) -> usize;
}

macro_rules! impl_block {
    ($($t:ty),*) => {
        $(
            impl Block for $t {
                const BITS: usize = <$t>::BITS as usize;
                const ZERO: Self = 0;

                #[inline]
                fn bit(pos: usize) -> Self {
                    1 << pos
                }

                #[inline]
                fn count_ones(self) -> usize {
                    <$t>::count_ones(self) as usize
                }
            }
        )*
    };
}

impl_block!(u8, u16, u32, u64, u128, usize);

/// A bit mask of fixed size.
///
/// # Example
///
/// ```
/// use tilearray::Bitset;
///
/// let mut mask: Bitset<u8> = Bitset::new(12);
/// assert_eq!(mask.num_blocks(), 2);
/// mask.set(3, true);
/// mask.set(9, true);
/// assert!(mask[3] && mask[9] && !mask[4]);
/// assert_eq!(mask.blocks(), &[0b0000_1000, 0b0000_0010]);
/// assert!(mask.get(12).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "", try_from = "BitsetRaw<B>", into = "BitsetRaw<B>")]
pub struct Bitset<B: Block = u64> {
    size: usize,
    blocks: Box<[B]>,
}

impl<B: Block> Bitset<B> {
    /// A mask of `size` bits, all clear.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            blocks: vec![B::ZERO; size.div_ceil(B::BITS)].into_boxed_slice(),
        }
    }

    /// Number of bits.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Raw storage, exactly `num_blocks()` elements.
    #[inline]
    pub fn blocks(&self) -> &[B] {
        &self.blocks
    }

    /// Mutable raw storage for bulk transfer.
    ///
    /// Callers must leave the unused high bits of the last block clear.
    #[inline]
    pub fn blocks_mut(&mut self) -> &mut [B] {
        &mut self.blocks
    }

    #[inline]
    fn locate(i: usize) -> (usize, B) {
        (i / B::BITS, B::bit(i % B::BITS))
    }

    /// Read bit `i`.
    ///
    /// # Errors
    ///
    /// Returns `TileError::OutOfRange` if `i >= size`.
    pub fn get(&self, i: usize) -> Result<bool> {
        if i >= self.size {
            return Err(TileError::OutOfRange {
                index: i.to_string(),
                bound: self.size.to_string(),
            });
        }
        let (block, mask) = Self::locate(i);
        Ok(self.blocks[block] & mask != B::ZERO)
    }

    /// Set or clear bit `i`.
    #[inline]
    pub fn set(&mut self, i: usize, value: bool) {
        debug_assert!(i < self.size, "bit {i} out of range for size {}", self.size);
        let (block, mask) = Self::locate(i);
        let b = &mut self.blocks[block];
        *b = if value { *b | mask } else { *b & !mask };
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones()).sum()
    }

    fn check_size(&self, other: &Self) -> Result<()> {
        if self.size != other.size {
            return Err(TileError::SizeMismatch {
                expected: self.size,
                actual: other.size,
            });
        }
        Ok(())
    }

    /// `self |= other`, checking sizes.
    pub fn try_or_assign(&mut self, other: &Self) -> Result<()> {
        self.check_size(other)?;
        for (a, &b) in self.blocks.iter_mut().zip(other.blocks.iter()) {
            *a = *a | b;
        }
        Ok(())
    }

    /// `self &= other`, checking sizes.
    pub fn try_and_assign(&mut self, other: &Self) -> Result<()> {
        self.check_size(other)?;
        for (a, &b) in self.blocks.iter_mut().zip(other.blocks.iter()) {
            *a = *a & b;
        }
        Ok(())
    }

    /// Copy every bit of `other` into `self`, checking sizes.
    pub fn assign_from(&mut self, other: &Self) -> Result<()> {
        self.check_size(other)?;
        self.blocks.copy_from_slice(&other.blocks);
        Ok(())
    }
}

impl<B: Block> std::ops::Index<usize> for Bitset<B> {
    type Output = bool;

    fn index(&self, i: usize) -> &bool {
        match self.get(i) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<B: Block> BitOrAssign<&Bitset<B>> for Bitset<B> {
    /// # Panics
    ///
    /// Panics if the sizes differ.
    fn bitor_assign(&mut self, rhs: &Bitset<B>) {
        if let Err(e) = self.try_or_assign(rhs) {
            panic!("{e}");
        }
    }
}

impl<B: Block> BitAndAssign<&Bitset<B>> for Bitset<B> {
    /// # Panics
    ///
    /// Panics if the sizes differ.
    fn bitand_assign(&mut self, rhs: &Bitset<B>) {
        if let Err(e) = self.try_and_assign(rhs) {
            panic!("{e}");
        }
    }
}

impl<B: Block> fmt::Display for Bitset<B> {
    /// Bits in index order, `0`/`1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            let (block, mask) = Self::locate(i);
            let bit = if self.blocks[block] & mask != B::ZERO { '1' } else { '0' };
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

/// Serialized form of a bitset, validated on load.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
struct BitsetRaw<B: Block> {
    size: usize,
    blocks: Vec<B>,
}

impl<B: Block> TryFrom<BitsetRaw<B>> for Bitset<B> {
    type Error = TileError;

    fn try_from(raw: BitsetRaw<B>) -> Result<Self> {
        let expected = raw.size.div_ceil(B::BITS);
        if raw.blocks.len() != expected {
            return Err(TileError::SizeMismatch {
                expected,
                actual: raw.blocks.len(),
            });
        }
        let bitset = Self {
            size: raw.size,
            blocks: raw.blocks.into_boxed_slice(),
        };
        let stray = (bitset.size..expected * B::BITS).find(|&i| {
            let (block, mask) = Self::locate(i);
            bitset.blocks[block] & mask != B::ZERO
        });
        if let Some(i) = stray {
            return Err(TileError::OutOfRange {
                index: i.to_string(),
                bound: bitset.size.to_string(),
            });
        }
        Ok(bitset)
    }
}

impl<B: Block> From<Bitset<B>> for BitsetRaw<B> {
    fn from(b: Bitset<B>) -> Self {
        BitsetRaw {
            size: b.size,
            blocks: b.blocks.into_vec(),
        }
    }
}
