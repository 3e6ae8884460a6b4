//! Vector index storage

pub mod index;
pub mod vectorize;

#[cfg(test)]
mod vectorize_test;

#[cfg(test)]
pub use index::MockVectorIndex;
pub use index::{QueryMatch, QueryOptions, RecordMetadata, UpsertResult, VectorIndex, VectorRecord};
pub use vectorize::VectorizeIndex;
