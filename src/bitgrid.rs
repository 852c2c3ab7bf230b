//! A runtime-sized bit grid.
//!
//! Cells are packed row-major into a vector of unsigned words `T`. The grid is
//! `no_std` friendly (it only needs `alloc`) and is used for ship occupancy,
//! per-cell shot state and the AI's record of fired coordinates.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use core::{any, fmt};
use num_traits::{PrimInt, Unsigned};

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is outside `[0..height) × [0..width)`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A `height × width` bitset stored in words of type `T`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitGrid<T = u64>
where
    T: PrimInt + Unsigned,
{
    width: usize,
    height: usize,
    words: Vec<T>,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn word_bits() -> usize {
        T::zero().count_zeros() as usize
    }

    /// Create an empty grid (all bits cleared).
    pub fn new(width: usize, height: usize) -> Self {
        let cells = width * height;
        let n_words = cells.div_ceil(Self::word_bits());
        BitGrid {
            width,
            height,
            words: vec![T::zero(); n_words],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let (w, b) = self.locate(row, col)?;
        Ok(((self.words[w] >> b) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let (w, b) = self.locate(row, col)?;
        self.words[w] = self.words[w] | (T::one() << b);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let (w, b) = self.locate(row, col)?;
        self.words[w] = self.words[w] & !(T::one() << b);
        Ok(())
    }

    /// Clears every bit.
    pub fn clear_all(&mut self) {
        for w in self.words.iter_mut() {
            *w = T::zero();
        }
    }

    /// True when `self` and `other` share at least one set bit.
    pub fn intersects(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| !(*a & *b).is_zero())
    }

    /// Iterator over the set bits as `(row, col)` pairs, row-major.
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits { grid: self, idx: 0 }
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::IndexOutOfBounds { row, col });
        }
        let idx = row * self.width + col;
        Ok((idx / Self::word_bits(), idx % Self::word_bits()))
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        let w = self.words[idx / Self::word_bits()];
        ((w >> (idx % Self::word_bits())) & T::one()) != T::zero()
    }

    // Bits past the last cell must stay zero so counts and equality hold.
    fn trim(&mut self) {
        let used = self.len() % Self::word_bits();
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last = *last & ((T::one() << used) - T::one());
            }
        }
    }

    fn zip_with(&self, rhs: &Self, op: impl Fn(T, T) -> T) -> Self {
        debug_assert_eq!((self.width, self.height), (rhs.width, rhs.height));
        let words = self
            .words
            .iter()
            .zip(rhs.words.iter())
            .map(|(a, b)| op(*a, *b))
            .collect();
        BitGrid {
            width: self.width,
            height: self.height,
            words,
        }
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BitGrid<{}>({}x{}):",
            any::type_name::<T>(),
            self.height,
            self.width
        )?;
        for r in 0..self.height {
            for c in 0..self.width {
                let bit = if self.bit(r * self.width + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> fmt::Display for BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.height {
            for c in 0..self.width {
                let bit = if self.bit(r * self.width + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set bits of a grid.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned,
{
    grid: &'a BitGrid<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.grid.len();
        while self.idx < len {
            let idx = self.idx;
            self.idx += 1;
            if self.grid.bit(idx) {
                return Some((idx / self.grid.width, idx % self.grid.width));
            }
        }
        None
    }
}

impl<'a, T> BitAnd for &'a BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    type Output = BitGrid<T>;
    fn bitand(self, rhs: Self) -> BitGrid<T> {
        self.zip_with(rhs, |a, b| a & b)
    }
}

impl<'a, T> BitOr for &'a BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    type Output = BitGrid<T>;
    fn bitor(self, rhs: Self) -> BitGrid<T> {
        self.zip_with(rhs, |a, b| a | b)
    }
}

impl<'a, T> BitXor for &'a BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    type Output = BitGrid<T>;
    fn bitxor(self, rhs: Self) -> BitGrid<T> {
        self.zip_with(rhs, |a, b| a ^ b)
    }
}

/// Bitwise NOT, restricted to the grid area.
impl<'a, T> Not for &'a BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    type Output = BitGrid<T>;
    fn not(self) -> BitGrid<T> {
        let mut out = BitGrid {
            width: self.width,
            height: self.height,
            words: self.words.iter().map(|w| !*w).collect(),
        };
        out.trim();
        out
    }
}

impl<'a, T> BitAndAssign<&'a BitGrid<T>> for BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    fn bitand_assign(&mut self, rhs: &'a BitGrid<T>) {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a = *a & *b;
        }
    }
}

impl<'a, T> BitOrAssign<&'a BitGrid<T>> for BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    fn bitor_assign(&mut self, rhs: &'a BitGrid<T>) {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a = *a | *b;
        }
    }
}

impl<'a, T> BitXorAssign<&'a BitGrid<T>> for BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    fn bitxor_assign(&mut self, rhs: &'a BitGrid<T>) {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a = *a ^ *b;
        }
    }
}
