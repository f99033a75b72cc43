pub mod drift;
pub mod mixin;
pub mod quad;
pub mod tapered_pl;

pub use drift::Drift;
pub use mixin::{Alignment, BeamOptic, Finalize, Thick, Thin};
pub use quad::Quad;
pub use tapered_pl::TaperedPL;

use crate::error::ConfigError;
use crate::particles::ParticleContainer;
use crate::refpart::RefPart;
use crate::Float;
use std::convert::TryFrom;

/// Units of a focusing strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusingUnit {
    /// Already normalized to the rigidity (MAD-X convention). `unit = 0`.
    Normalized,
    /// Field (gradient) in Tesla units, divided by the rigidity on use.
    /// `unit = 1`.
    Tesla,
}

impl TryFrom<i64> for FocusingUnit {
    type Error = ConfigError;

    fn try_from(unit: i64) -> Result<FocusingUnit, ConfigError> {
        match unit {
            0 => Ok(FocusingUnit::Normalized),
            1 => Ok(FocusingUnit::Tesla),
            other => Err(ConfigError::UnknownUnit(other)),
        }
    }
}

impl FocusingUnit {
    /// Converts `k` to the normalized convention.
    #[inline(always)]
    pub fn normalize(self, k: Float, refpart: &RefPart) -> Float {
        match self {
            FocusingUnit::Normalized => k,
            FocusingUnit::Tesla => k / refpart.rigidity_tm(),
        }
    }

    pub fn validate(self, refpart: &RefPart) -> Result<(), ConfigError> {
        match self {
            FocusingUnit::Normalized => Ok(()),
            FocusingUnit::Tesla => {
                let rigidity = refpart.rigidity_tm();
                if rigidity.is_finite() && rigidity != 0.0 {
                    Ok(())
                } else {
                    Err(ConfigError::DegenerateRigidity(rigidity))
                }
            }
        }
    }
}

/// Every element the driver knows about. Dispatch is a `match`, so the
/// particle loops stay monomorphized per element type.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Drift(Drift),
    Quad(Quad),
    TaperedPL(TaperedPL),
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Drift(_) => Drift::NAME,
            Element::Quad(_) => Quad::NAME,
            Element::TaperedPL(_) => TaperedPL::NAME,
        }
    }

    pub fn is_thick(&self) -> bool {
        match self {
            Element::Drift(_) | Element::Quad(_) => true,
            Element::TaperedPL(_) => false,
        }
    }

    /// Number of slices; 1 for thin elements.
    pub fn nslice(&self) -> usize {
        match self {
            Element::Drift(e) => Thick::nslice(e),
            Element::Quad(e) => Thick::nslice(e),
            Element::TaperedPL(_) => 1,
        }
    }

    /// Length in m; 0 for thin elements.
    pub fn ds(&self) -> Float {
        match self {
            Element::Drift(e) => Thick::ds(e),
            Element::Quad(e) => Thick::ds(e),
            Element::TaperedPL(_) => 0.0,
        }
    }

    /// Advance the reference particle through one slice.
    pub fn push_reference(&self, refpart: &mut RefPart) -> Result<(), ConfigError> {
        match self {
            Element::Drift(e) => Thick::push_reference(e, refpart),
            Element::Quad(e) => Thick::push_reference(e, refpart),
            Element::TaperedPL(e) => {
                Thin::push_reference(e, refpart);
                Ok(())
            }
        }
    }

    /// Push the beam and the reference particle through the whole element,
    /// slice by slice.
    pub fn track(&self, pc: &mut ParticleContainer, refpart: &mut RefPart) -> Result<(), ConfigError> {
        for _ in 0..self.nslice() {
            self.push(pc, refpart)?;
            self.push_reference(refpart)?;
        }
        Ok(())
    }
}

impl BeamOptic for Element {
    #[inline(always)]
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
    ) {
        match self {
            Element::Drift(e) => e.push_particle(x, y, t, px, py, pt, idcpu, refpart),
            Element::Quad(e) => e.push_particle(x, y, t, px, py, pt, idcpu, refpart),
            Element::TaperedPL(e) => e.push_particle(x, y, t, px, py, pt, idcpu, refpart),
        }
    }

    fn validate(&self, refpart: &RefPart) -> Result<(), ConfigError> {
        match self {
            Element::Drift(e) => e.validate(refpart),
            Element::Quad(e) => e.validate(refpart),
            Element::TaperedPL(e) => e.validate(refpart),
        }
    }

    fn push(&self, pc: &mut ParticleContainer, refpart: &RefPart) -> Result<(), ConfigError> {
        match self {
            Element::Drift(e) => e.push(pc, refpart),
            Element::Quad(e) => e.push(pc, refpart),
            Element::TaperedPL(e) => e.push(pc, refpart),
        }
    }
}

impl Finalize for Element {
    fn finalize(&mut self) {
        match self {
            Element::Drift(e) => e.finalize(),
            Element::Quad(e) => e.finalize(),
            Element::TaperedPL(e) => e.finalize(),
        }
    }
}

impl From<Drift> for Element {
    fn from(e: Drift) -> Element {
        Element::Drift(e)
    }
}

impl From<Quad> for Element {
    fn from(e: Quad) -> Element {
        Element::Quad(e)
    }
}

impl From<TaperedPL> for Element {
    fn from(e: TaperedPL) -> Element {
        Element::TaperedPL(e)
    }
}
