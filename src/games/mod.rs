//! Game implementations.

pub mod cube;
