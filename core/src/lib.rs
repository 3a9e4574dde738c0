//! # Netcarve Core
//!
//! The subnet arithmetic behind the multi-interface IPAM plugins. Every operation is
//! a pure function of its arguments: the caller owns allocation state, retry policy
//! and persistence.
//!
//! Leaf first:
//! * **[`bits`]**: byte rendering and mask extension.
//! * **[`composer`]**: places an index below a mask.
//! * **[`allocator`]**: carves the `index`-th child subnet out of a parent block.
//! * **[`exclusion`]**: checks a candidate against administratively excluded ranges.
//! * **[`free_index`]**: finds the lowest unused index in a sorted allocation table.
//! * **[`index`]**: maps an address back to its offset inside a block.
//! * **[`pod`]**: host addresses inside a leaf pod block, with exclusions as index runs.

pub mod allocator;
pub mod bits;
pub mod composer;
pub mod exclusion;
pub mod free_index;
pub mod index;
pub mod pod;
