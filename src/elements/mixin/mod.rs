//! Facets that concrete elements compose: alignment errors, the particle
//! push contract, thin/thick reference push and teardown.

pub mod alignment;
pub mod beamoptic;
pub mod finalize;
pub mod thick;
pub mod thin;

pub use alignment::Alignment;
pub use beamoptic::BeamOptic;
pub use finalize::Finalize;
pub use thick::Thick;
pub use thin::Thin;
