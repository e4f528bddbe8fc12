pub mod config;
pub mod cycles;
pub mod error;
pub mod mover;
pub mod normalize;
pub mod reversal;
pub mod rng_source;
pub mod rotate;
pub mod sort;
pub mod verify;

pub use crate::cycles::rotate_by_cycles;
pub use crate::error::Error;
pub use crate::mover::{
    BlockMover, ElementMover, FnMover, MoveAction, SliceMover,
};
pub use crate::normalize::{gcd, normalize};
pub use crate::reversal::{reverse, rotate_by_reversal};
pub use crate::rotate::{
    rotate, rotate_range, rotate_using, rotate_with_mover, Strategy,
};
