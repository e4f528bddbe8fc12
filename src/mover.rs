//! Element movers drive the cyclic rotation strategy.
//!
//! A mover owns the single scratch slot a rotation needs and knows how to
//! move one element of some storage `S` from one position to another. The
//! engine never touches `S` directly, so the same cycle walk can rotate a
//! plain slice, a block of raw fixed-size records, or a structure whose
//! moves need extra bookkeeping.

use bytemuck::Pod;

use crate::error::Error;

/// Positional moves requested by [`rotate_by_cycles`].
///
/// The storage is passed mutably on every call so movers that keep
/// bookkeeping inside the host structure can update it on any step.
///
/// [`rotate_by_cycles`]: crate::cycles::rotate_by_cycles
pub trait ElementMover<S: ?Sized> {
    /// Save the element at `src` into the scratch slot.
    fn save(&mut self, seq: &mut S, src: usize);

    /// Overwrite the element at `dst` with the element at `src`.
    fn copy(&mut self, seq: &mut S, src: usize, dst: usize);

    /// Write the scratch slot to `dst`.
    fn restore(&mut self, seq: &mut S, dst: usize);
}

/// Mover for slices of cloneable elements.
///
/// Restoring without a saved element is a misuse: debug builds panic, release
/// builds leave the destination untouched.
#[derive(Debug, Clone)]
pub struct SliceMover<T> {
    slot: Option<T>,
}

impl<T> SliceMover<T> {
    pub const fn new() -> Self {
        Self { slot: None }
    }
}

impl<T> Default for SliceMover<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ElementMover<[T]> for SliceMover<T> {
    fn save(&mut self, seq: &mut [T], src: usize) {
        self.slot = Some(seq[src].clone());
    }

    fn copy(&mut self, seq: &mut [T], src: usize, dst: usize) {
        let value = seq[src].clone();
        seq[dst] = value;
    }

    fn restore(&mut self, seq: &mut [T], dst: usize) {
        let value = self.slot.take();
        debug_assert!(value.is_some(), "restore without a saved element");

        if let Some(value) = value {
            seq[dst] = value;
        }
    }
}

/// Mover for a raw byte block holding records of `W` bytes each.
///
/// Record `i` occupies bytes `i * W..(i + 1) * W`. Arrays of `Pod` records
/// can be rotated as memory through [`BlockMover::block_of`].
#[derive(Debug, Clone, Copy)]
pub struct BlockMover<const W: usize> {
    slot: [u8; W],
}

impl<const W: usize> BlockMover<W> {
    pub const fn new() -> Self {
        Self { slot: [0; W] }
    }

    /// Number of records in `bytes`.
    pub fn stride_len(bytes: &[u8]) -> Result<usize, Error> {
        if W == 0 || bytes.len() % W != 0 {
            return Err(Error::RaggedBlock {
                len: bytes.len(),
                stride: W,
            });
        }

        Ok(bytes.len() / W)
    }

    /// View `records` as a byte block of `W`-byte records.
    pub fn block_of<T: Pod>(records: &mut [T]) -> Result<&mut [u8], Error> {
        let size = std::mem::size_of::<T>();
        if size != W {
            return Err(Error::StrideMismatch { size, stride: W });
        }

        Ok(bytemuck::cast_slice_mut(records))
    }

    fn span(index: usize) -> std::ops::Range<usize> {
        index * W..(index + 1) * W
    }
}

impl<const W: usize> Default for BlockMover<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> ElementMover<[u8]> for BlockMover<W> {
    fn save(&mut self, seq: &mut [u8], src: usize) {
        self.slot.copy_from_slice(&seq[Self::span(src)]);
    }

    fn copy(&mut self, seq: &mut [u8], src: usize, dst: usize) {
        seq.copy_within(Self::span(src), dst * W);
    }

    fn restore(&mut self, seq: &mut [u8], dst: usize) {
        seq[Self::span(dst)].copy_from_slice(&self.slot);
    }
}

/// A single step of a cyclic rotation, as seen by an [`FnMover`] callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAction {
    Save { src: usize },
    Copy { src: usize, dst: usize },
    Restore { dst: usize },
}

/// Adapts a closure into an [`ElementMover`].
///
/// The closure captures whatever scratch state it needs.
pub struct FnMover<F>(pub F);

impl<S, F> ElementMover<S> for FnMover<F>
where
    S: ?Sized,
    F: FnMut(&mut S, MoveAction),
{
    fn save(&mut self, seq: &mut S, src: usize) {
        (self.0)(seq, MoveAction::Save { src });
    }

    fn copy(&mut self, seq: &mut S, src: usize, dst: usize) {
        (self.0)(seq, MoveAction::Copy { src, dst });
    }

    fn restore(&mut self, seq: &mut S, dst: usize) {
        (self.0)(seq, MoveAction::Restore { dst });
    }
}
