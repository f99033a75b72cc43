pub mod empty;
pub mod gaussian;

pub use empty::Empty;
pub use gaussian::Gaussian;

use crate::elements::Finalize;
use crate::error::ConfigError;
use crate::particles::ParticleContainer;
use crate::refpart::RefPart;
use crate::{Float, PRTL_CHUNK_SIZE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// The contract of an initial beam distribution.
///
/// `initialize` runs once before sampling and `finalize` once after; both
/// default to doing nothing. `sample` is called once per particle, possibly
/// from many threads at once, and must only read `self`. Every variant takes
/// the random engine, whether it draws from it or not.
pub trait BeamDistribution: Finalize + Sync {
    /// `bunch_charge` in C.
    fn initialize(&mut self, _bunch_charge: Float, _refpart: &RefPart) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Return one 6D particle coordinate.
    #[allow(clippy::too_many_arguments)]
    fn sample<R: Rng + ?Sized>(
        &self,
        x: &mut Float,
        y: &mut Float,
        t: &mut Float,
        px: &mut Float,
        py: &mut Float,
        pt: &mut Float,
        engine: &mut R,
    );
}

#[derive(Clone, Debug, PartialEq)]
pub enum Distribution {
    Empty(Empty),
    Gaussian(Gaussian),
}

impl Distribution {
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Empty(_) => "Empty",
            Distribution::Gaussian(_) => "Gaussian",
        }
    }
}

impl BeamDistribution for Distribution {
    fn initialize(&mut self, bunch_charge: Float, refpart: &RefPart) -> Result<(), ConfigError> {
        match self {
            Distribution::Empty(d) => d.initialize(bunch_charge, refpart),
            Distribution::Gaussian(d) => d.initialize(bunch_charge, refpart),
        }
    }

    #[inline(always)]
    fn sample<R: Rng + ?Sized>(
        &self,
        x: &mut Float,
        y: &mut Float,
        t: &mut Float,
        px: &mut Float,
        py: &mut Float,
        pt: &mut Float,
        engine: &mut R,
    ) {
        match self {
            Distribution::Empty(d) => d.sample(x, y, t, px, py, pt, engine),
            Distribution::Gaussian(d) => d.sample(x, y, t, px, py, pt, engine),
        }
    }
}

impl Finalize for Distribution {
    fn finalize(&mut self) {
        match self {
            Distribution::Empty(d) => d.finalize(),
            Distribution::Gaussian(d) => d.finalize(),
        }
    }
}

/// The random engine of one particle. Each particle id gets its own
/// ChaCha stream, so the beam does not depend on how the work is split
/// between threads.
pub fn particle_engine(seed: u64, idcpu: u64) -> ChaCha8Rng {
    let mut engine = ChaCha8Rng::seed_from_u64(seed);
    engine.set_stream(idcpu);
    engine
}

/// Fill `pc` with samples of `dist`.
pub fn seed<D: BeamDistribution>(
    dist: &mut D,
    pc: &mut ParticleContainer,
    bunch_charge: Float,
    refpart: &RefPart,
    seed: u64,
) -> Result<(), ConfigError> {
    dist.initialize(bunch_charge, refpart)?;
    pc.assert_consistent();

    let sampler = &*dist;
    (
        &mut pc.x,
        &mut pc.y,
        &mut pc.t,
        &mut pc.px,
        &mut pc.py,
        &mut pc.pt,
        &pc.idcpu,
    )
        .into_par_iter()
        .chunks(PRTL_CHUNK_SIZE)
        .for_each(|o| {
            o.into_iter().for_each(|(x, y, t, px, py, pt, idcpu)| {
                let mut engine = particle_engine(seed, *idcpu);
                sampler.sample(x, y, t, px, py, pt, &mut engine)
            })
        });

    dist.finalize();
    Ok(())
}

impl From<Empty> for Distribution {
    fn from(d: Empty) -> Distribution {
        Distribution::Empty(d)
    }
}

impl From<Gaussian> for Distribution {
    fn from(d: Gaussian) -> Distribution {
        Distribution::Gaussian(d)
    }
}
