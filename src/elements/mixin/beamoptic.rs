use crate::error::ConfigError;
use crate::particles::ParticleContainer;
use crate::refpart::RefPart;
use crate::{Float, PRTL_CHUNK_SIZE};
use rayon::prelude::*;

/// The call contract every element exposes to the transport driver.
///
/// An element supplies `push_particle`, the map of a single particle, and
/// gets `push` over a whole container for free. `push_particle` must be a
/// pure function of its six inputs, the reference particle and the
/// element's own fixed parameters; particles are pushed in parallel and in
/// no particular order.
pub trait BeamOptic: Sync {
    /// Advance one particle through the element (one slice of it, for thick
    /// elements). `idcpu` is the particle's global id.
    #[allow(clippy::too_many_arguments)]
    fn push_particle(
        &self,
        x: &mut Float,
        y: &mut Float,
        t: &mut Float,
        px: &mut Float,
        py: &mut Float,
        pt: &mut Float,
        idcpu: u64,
        refpart: &RefPart,
    );

    /// Checks preconditions that depend on the reference particle. Called
    /// once per `push`, before any particle is touched.
    fn validate(&self, _refpart: &RefPart) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Push all particles.
    fn push(&self, pc: &mut ParticleContainer, refpart: &RefPart) -> Result<(), ConfigError> {
        self.validate(refpart)?;
        pc.assert_consistent();

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
                    self.push_particle(x, y, t, px, py, pt, *idcpu, refpart)
                })
            });
        Ok(())
    }
}
