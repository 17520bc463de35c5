//! # Goal
//! The main goal of this library is to provide a growable contiguous
//! sequence container in which raw memory acquisition and element-object
//! lifetime are kept strictly apart.
//!
//! Primary attribute of the library is an explicit storage model: one owned
//! block, a live prefix of constructed elements, and a raw tail that is
//! never exposed as typed data.
//!
//! # Features
//! - Amortized O(1) append through capacity doubling.
//! - Value semantics: deep `Clone` sized exactly to its length, with the
//!   strong guarantee on assignment. A copy that fails part way leaves the
//!   receiver untouched.
//! - Ownership-transferring moves. A move is a plain Rust move; taking out
//!   of a place with `mem::take`/`mem::replace` leaves the canonical empty
//!   state behind, ready for reuse.
//! - Lexicographic comparison over the live range.
//! - Unchecked indexed access as an explicit `unsafe` contract for callers
//!   that have already proven their bounds.
//!
//! # Architecture
//! There are two pieces layered on one owned memory block:
//! - `RawBlock` - acquires and releases uninitialized storage for exactly
//!   n elements. It never constructs or destroys an element, and it releases
//!   by scope, so abandoned blocks can't leak on any exit path.
//! - `DynArray` - owns a block plus a length, constructs and destroys
//!   elements one slot at a time, and decides when to relocate.
//!
//! Slots at `[0, len)` hold live elements. Slots at `[len, cap)` are raw
//! memory: no destructor ever runs there and no read ever treats them as
//! values.

pub mod array;
pub mod iter;
// Raw storage, kept private so the uninitialized tail can't escape.
mod raw;

pub use array::DynArray;
pub use iter::IntoIter;
