#![no_std]

//! SMTX Core - Sparse Integer Matrix Engine
//!
//! This crate provides the storage model, text format, and arithmetic for
//! sparse integer matrices, with no I/O dependencies.

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod ops;
pub mod text;

pub use error::*;
pub use matrix::*;
pub use ops::*;
pub use text::*;
