//! Infrastructure Layer

pub mod mock;
