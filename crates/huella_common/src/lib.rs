//! Huella Common - Shared domain types for the Huella pet ID platform
//!
//! Pure, clock-for-input-only domain logic: species metadata, the pet age
//! engine and the per-life-stage care recommendations. No I/O and no state;
//! callers own all display state and recompute by calling again.

pub mod age;
pub mod recommendations;
pub mod species;

pub use age::*;
pub use recommendations::*;
pub use species::*;
