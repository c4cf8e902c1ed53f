//! Concrete strand representations.
//!
//! Three interchangeable backings for the [`Strand`](crate::traits::Strand)
//! contract: a flat copy-on-append string, an amortized-growth buffer, and a
//! linked chain of immutable fragments.

mod buffered;
mod chain;
mod flat;

pub use buffered::BufferedStrand;
pub use chain::ChainStrand;
pub use flat::FlatStrand;
