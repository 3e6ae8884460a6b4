//! Embedding generation and record assembly

pub mod batch;
pub mod records;


pub use batch::BatchGenerator;
pub use records::{build_vector_records, InputRecord};
