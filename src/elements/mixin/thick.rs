use crate::error::ConfigError;
use crate::refpart::RefPart;
use crate::Float;

/// An element with a finite length `ds`, split into `nslice` equal slices.
///
/// The reference particle is advanced one slice at a time, interleaved with
/// the particle pushes of that slice.
pub trait Thick {
    /// Segment length in m.
    fn ds(&self) -> Float;

    fn nslice(&self) -> usize;

    #[inline(always)]
    fn slice_ds(&self) -> Float {
        self.ds() / self.nslice() as Float
    }

    /// Free flight of the reference particle through one slice. A reference
    /// particle at rest is rejected and left untouched.
    fn push_reference(&self, refpart: &mut RefPart) -> Result<(), ConfigError> {
        check_moving(refpart)?;
        let slice_ds = self.slice_ds();
        let step = slice_ds / (refpart.pt * refpart.pt - 1.0).sqrt();

        refpart.x += step * refpart.px;
        refpart.y += step * refpart.py;
        refpart.z += step * refpart.pz;
        refpart.t -= step * refpart.pt;

        refpart.s += slice_ds;
        Ok(())
    }
}

/// Thick maps divide by (beta*gamma)^2 of the reference particle.
pub(crate) fn check_moving(refpart: &RefPart) -> Result<(), ConfigError> {
    let betgam2 = refpart.pt * refpart.pt - 1.0;
    if betgam2.is_finite() && betgam2 > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::StationaryReference(refpart.pt))
    }
}
