//! Matching pipeline: candidate indexing, pair scoring, global assignment,
//! and classification

pub mod categorize;
pub mod index;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use categorize::*;
pub use index::*;
pub use matcher::*;
pub use scoring::*;
pub use similarity::*;
