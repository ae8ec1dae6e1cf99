//! Positional collision resolution for frame-stepped simulations.
//!
//! # Frame pipeline
//!
//! The host drives one bounded, synchronous step per simulated frame:
//!
//! 1. Integrate every body's position from its velocity (host-side)
//! 2. Run the pairwise intersection predicates for every relevant pair
//! 3. Call [`resolve_rects`] for each overlapping rectangle pair
//! 4. Fold the returned corrections and flags into body state ("on ground")
//!
//! Resolution is positional only: one body is pushed out of the other and
//! the matching velocity components are zeroed. There are no impulses, no
//! mass, no restitution, and corrections from several pairs within one
//! frame accumulate additively without clamping.

mod resolve;

pub use resolve::{resolve_rects, Resolution};
