/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

mod export;
mod import;

/// Exports a solution out of the library.
pub use export::export;

/// Imports an instance into the library.
pub use import::import;
