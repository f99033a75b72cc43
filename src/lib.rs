use anyhow::Result;
use tracing::info;

pub mod config;
pub mod distribution;
pub mod elements;
pub mod error;
pub mod particles;
pub mod refpart;
mod save;
pub mod simulation;

pub use config::{Beam, Config, DistributionConfig, ElementConfig, Output};
pub use error::ConfigError;
pub use particles::ParticleContainer;
pub use refpart::RefPart;
pub use simulation::Sim;

// We use a type alias for f64/Float to easily support
// double and single precision.
#[cfg(feature = "dprec")]
pub type Float = f64;

#[cfg(not(feature = "dprec"))]
pub type Float = f32;

/// Speed of light in m/s.
pub const C_LIGHT: Float = 299_792_458.0;

// number of particles handed to one rayon task
pub const PRTL_CHUNK_SIZE: usize = 1024;

pub fn run(cfg: Config) -> Result<()> {
    if cfg.beam.npart == 0 {
        return Err(anyhow::Error::msg("Number of particles must be positive"));
    }

    let mut sim = Sim::new(&cfg)?;
    let mut pc = sim.init_beam()?;

    info!(
        elements = sim.lattice.len(),
        kin_energy_mev = sim.refpart.kin_energy_mev(),
        rigidity_tm = sim.refpart.rigidity_tm(),
        "tracking"
    );
    sim.track(&mut pc)?;

    save::save_output(&cfg.output, &pc)?;
    sim.finalize();
    info!(s = sim.refpart.s, "done");
    Ok(())
}

#[cfg(all(test, feature = "dprec"))]
pub(crate) const E_TOL: Float = 1E-10;

#[cfg(all(test, not(feature = "dprec")))]
pub(crate) const E_TOL: Float = 1E-4;

#[cfg(test)]
pub(crate) fn build_test_refpart() -> RefPart {
    // 250 MeV protons
    RefPart::new(938.272_088, 1.0, 250.0).unwrap()
}
