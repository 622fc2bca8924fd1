//! # Rayon Parallelism
//!
//! Classification is a pure per-element function, so batches can be
//! normalized with ``rayon``; output order still equals input order.

mod rayon_normalizer;

#[doc(inline)]
pub use rayon_normalizer::ParallelRayonNormalizer;
