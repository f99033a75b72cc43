use crate::config::Config;
use crate::distribution::{self, Distribution};
use crate::elements::{Element, Finalize};
use crate::particles::ParticleContainer;
use crate::refpart::RefPart;
use crate::Float;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// A beamline, the beam that is sent through it and the reference
/// particle that travels with the beam.
pub struct Sim {
    pub refpart: RefPart,
    pub lattice: Vec<Element>,
    pub distribution: Distribution,
    pub bunch_charge: Float,
    pub npart: usize,
    pub seed: u64,
}

impl Sim {
    pub fn new(cfg: &Config) -> Result<Sim> {
        let beam = &cfg.beam;
        let refpart = RefPart::new(beam.mass_mev, beam.charge_qe, beam.kin_energy_mev)
            .context("Could not build the reference particle")?;
        let distribution = cfg
            .distribution
            .build()
            .context("Could not build the initial distribution")?;
        let lattice = cfg
            .lattice
            .iter()
            .enumerate()
            .map(|(i, e)| {
                e.build()
                    .with_context(|| format!("Could not build lattice element {}", i))
            })
            .collect::<Result<Vec<Element>>>()?;

        Ok(Sim {
            refpart,
            lattice,
            distribution,
            bunch_charge: beam.bunch_charge_c,
            npart: beam.npart,
            seed: beam.seed,
        })
    }

    /// Seeds a fresh beam of `npart` particles from the distribution.
    pub fn init_beam(&mut self) -> Result<ParticleContainer> {
        info!(
            npart = self.npart,
            distribution = self.distribution.name(),
            "initializing beam"
        );
        let mut pc = ParticleContainer::new(self.npart);
        distribution::seed(
            &mut self.distribution,
            &mut pc,
            self.bunch_charge,
            &self.refpart,
            self.seed,
        )
        .context("Could not seed the beam")?;
        Ok(pc)
    }

    /// Sends the beam through every element of the lattice in order.
    pub fn track(&mut self, pc: &mut ParticleContainer) -> Result<()> {
        let refpart = &mut self.refpart;
        for (i, element) in self.lattice.iter().enumerate() {
            debug!(element = element.name(), nslice = element.nslice(), "pushing");
            element
                .track(pc, refpart)
                .with_context(|| format!("Could not push element {} ({})", i, element.name()))?;

            let moments = pc.moments();
            info!(
                element = element.name(),
                s = refpart.s,
                x_rms = moments.rms[0],
                y_rms = moments.rms[1],
                t_rms = moments.rms[2],
                "tracked"
            );
        }
        Ok(())
    }

    /// Releases whatever the elements and the distribution hold.
    pub fn finalize(&mut self) {
        for element in self.lattice.iter_mut() {
            element.finalize();
        }
        self.distribution.finalize();
    }
}
