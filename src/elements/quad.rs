use crate::elements::mixin::thick::check_moving;
use crate::elements::mixin::{Alignment, BeamOptic, Finalize, Thick};
use crate::elements::FocusingUnit;
use crate::error::{check_finite, ConfigError};
use crate::refpart::RefPart;
use crate::Float;

/// A linear quadrupole. `k > 0` focuses horizontally and defocuses
/// vertically.
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    ds: Float,
    k: Float,
    unit: FocusingUnit,
    nslice: usize,
    alignment: Alignment,
}

// (u, pu) after a length s in a focusing plane of strength omega^2
#[inline(always)]
fn focus(omega: Float, s: Float, u: Float, pu: Float) -> (Float, Float) {
    let (sin, cos) = (omega * s).sin_cos();
    (cos * u + sin / omega * pu, -omega * sin * u + cos * pu)
}

#[inline(always)]
fn defocus(omega: Float, s: Float, u: Float, pu: Float) -> (Float, Float) {
    let (sinh, cosh) = ((omega * s).sinh(), (omega * s).cosh());
    (cosh * u + sinh / omega * pu, omega * sinh * u + cosh * pu)
}

impl Quad {
    pub const NAME: &'static str = "Quad";

    pub fn new(
        ds: Float,
        k: Float,
        unit: FocusingUnit,
        nslice: usize,
        alignment: Alignment,
    ) -> Result<Quad, ConfigError> {
        check_finite("ds", ds)?;
        check_finite("k", k)?;
        check_finite("dx", alignment.dx())?;
        check_finite("dy", alignment.dy())?;
        check_finite("rotation", alignment.rotation())?;
        if nslice == 0 {
            return Err(ConfigError::ZeroSlices);
        }
        Ok(Quad {
            ds,
            k,
            unit,
            nslice,
            alignment,
        })
    }

    /// Focusing strength in 1/m^2, or field gradient in T/m for
    /// `FocusingUnit::Tesla`.
    pub fn k(&self) -> Float {
        self.k
    }

    pub fn unit(&self) -> FocusingUnit {
        self.unit
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }
}

impl BeamOptic for Quad {
    #[inline(always)]
    fn push_particle(
        &self,
        x: &mut Float,
        y: &mut Float,
        t: &mut Float,
        px: &mut Float,
        py: &mut Float,
        pt: &mut Float,
        _idcpu: u64,
        refpart: &RefPart,
    ) {
        self.alignment.shift_in(x, y, px, py);

        let slice_ds = self.slice_ds();
        let betgam2 = refpart.pt * refpart.pt - 1.0;
        let g = self.unit.normalize(self.k, refpart);
        let omega = g.abs().sqrt();

        if g > 0.0 {
            let (xout, pxout) = focus(omega, slice_ds, *x, *px);
            let (yout, pyout) = defocus(omega, slice_ds, *y, *py);
            *x = xout;
            *px = pxout;
            *y = yout;
            *py = pyout;
        } else if g < 0.0 {
            let (xout, pxout) = defocus(omega, slice_ds, *x, *px);
            let (yout, pyout) = focus(omega, slice_ds, *y, *py);
            *x = xout;
            *px = pxout;
            *y = yout;
            *py = pyout;
        } else {
            *x += slice_ds * *px;
            *y += slice_ds * *py;
        }
        *t += (slice_ds / betgam2) * *pt;

        self.alignment.shift_out(x, y, px, py);
    }

    fn validate(&self, refpart: &RefPart) -> Result<(), ConfigError> {
        check_moving(refpart)?;
        self.unit.validate(refpart)
    }
}

impl Thick for Quad {
    fn ds(&self) -> Float {
        self.ds
    }

    fn nslice(&self) -> usize {
        self.nslice
    }
}

impl Finalize for Quad {}
