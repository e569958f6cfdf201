//! Statement normalization and integrity checking

pub mod validator;

pub use validator::*;
