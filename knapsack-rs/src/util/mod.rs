/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::BnBConfig;
#[doc(inline)]
pub use config::DPConfig;
#[doc(inline)]
pub use config::GridRounding;
#[doc(inline)]
pub use config::SolverConfig;
#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use fpa::VALUE_EPSILON;
