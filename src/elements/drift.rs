use crate::elements::mixin::thick::check_moving;
use crate::elements::mixin::{Alignment, BeamOptic, Finalize, Thick};
use crate::error::{check_finite, ConfigError};
use crate::refpart::RefPart;
use crate::Float;

/// A field-free region.
#[derive(Clone, Debug, PartialEq)]
pub struct Drift {
    ds: Float,
    nslice: usize,
    alignment: Alignment,
}

impl Drift {
    pub const NAME: &'static str = "Drift";

    pub fn new(ds: Float, nslice: usize, alignment: Alignment) -> Result<Drift, ConfigError> {
        check_finite("ds", ds)?;
        check_finite("dx", alignment.dx())?;
        check_finite("dy", alignment.dy())?;
        check_finite("rotation", alignment.rotation())?;
        if nslice == 0 {
            return Err(ConfigError::ZeroSlices);
        }
        Ok(Drift {
            ds,
            nslice,
            alignment,
        })
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }
}

impl BeamOptic for Drift {
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

        *x += slice_ds * *px;
        *y += slice_ds * *py;
        *t += (slice_ds / betgam2) * *pt;

        self.alignment.shift_out(x, y, px, py);
    }

    fn validate(&self, refpart: &RefPart) -> Result<(), ConfigError> {
        check_moving(refpart)
    }
}

impl Thick for Drift {
    fn ds(&self) -> Float {
        self.ds
    }

    fn nslice(&self) -> usize {
        self.nslice
    }
}

impl Finalize for Drift {}
