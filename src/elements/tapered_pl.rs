use crate::elements::mixin::{Alignment, BeamOptic, Finalize, Thin};
use crate::elements::FocusingUnit;
use crate::error::{check_finite, ConfigError};
use crate::refpart::RefPart;
use crate::Float;

/// A short segment of a nonlinear plasma lens with a horizontal taper.
#[derive(Clone, Debug, PartialEq)]
pub struct TaperedPL {
    k: Float,
    taper: Float,
    unit: FocusingUnit,
    alignment: Alignment,
}

impl TaperedPL {
    pub const NAME: &'static str = "TaperedPL";

    pub fn new(
        k: Float,
        taper: Float,
        unit: FocusingUnit,
        alignment: Alignment,
    ) -> Result<TaperedPL, ConfigError> {
        check_finite("k", k)?;
        check_finite("taper", taper)?;
        check_finite("dx", alignment.dx())?;
        check_finite("dy", alignment.dy())?;
        check_finite("rotation", alignment.rotation())?;
        Ok(TaperedPL {
            k,
            taper,
            unit,
            alignment,
        })
    }

    /// Integrated linear focusing strength, in 1/m for
    /// `FocusingUnit::Normalized`, or the integrated azimuthal field
    /// gradient in T for `FocusingUnit::Tesla`.
    pub fn k(&self) -> Float {
        self.k
    }

    /// Horizontal taper in 1/m (1 / horizontal dispersion).
    pub fn taper(&self) -> Float {
        self.taper
    }

    pub fn unit(&self) -> FocusingUnit {
        self.unit
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }
}

impl BeamOptic for TaperedPL {
    #[inline(always)]
    fn push_particle(
        &self,
        x: &mut Float,
        y: &mut Float,
        _t: &mut Float,
        px: &mut Float,
        py: &mut Float,
        _pt: &mut Float,
        _idcpu: u64,
        refpart: &RefPart,
    ) {
        self.alignment.shift_in(x, y, px, py);

        let g = self.unit.normalize(self.k, refpart);

        // thin kick: x, y, t and pt pass through
        let (xin, yin) = (*x, *y);
        *px -= g * (xin + self.taper * 0.5 * (xin * xin + yin * yin));
        *py -= g * (yin + self.taper * xin * yin);

        self.alignment.shift_out(x, y, px, py);
    }

    fn validate(&self, refpart: &RefPart) -> Result<(), ConfigError> {
        self.unit.validate(refpart)
    }
}

impl Thin for TaperedPL {}

impl Finalize for TaperedPL {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_test_refpart, E_TOL};

    fn push_one(lens: &TaperedPL, refpart: &RefPart, p: [Float; 6]) -> [Float; 6] {
        let [mut x, mut y, mut t, mut px, mut py, mut pt] = p;
        lens.push_particle(&mut x, &mut y, &mut t, &mut px, &mut py, &mut pt, 0, refpart);
        [x, y, t, px, py, pt]
    }

    #[test]
    fn taper_adds_nonlinear_cross_term() {
        let refpart = build_test_refpart();
        let lens = TaperedPL::new(2.0, 0.5, FocusingUnit::Normalized, Alignment::default()).unwrap();
        let out = push_one(&lens, &refpart, [0.1, 0.2, 0.0, 0.0, 0.0, 0.0]);
        // px = -2 * (0.1 + 0.25 * 0.05), py = -2 * (0.2 + 0.5 * 0.02)
        assert!((out[3] + 0.225).abs() < E_TOL);
        assert!((out[4] + 0.42).abs() < E_TOL);
        assert_eq!(out[0], 0.1);
        assert_eq!(out[1], 0.2);
    }

    #[test]
    fn offset_lens_kicks_about_its_own_axis() {
        let refpart = build_test_refpart();
        let lens =
            TaperedPL::new(2.0, 0.0, FocusingUnit::Normalized, Alignment::new(0.25, 0.0, 0.0))
                .unwrap();
        let out = push_one(&lens, &refpart, [0.25, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(out[3].abs() < E_TOL);
        let out = push_one(&lens, &refpart, [1.25, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((out[3] + 2.0).abs() < E_TOL);
        assert!((out[0] - 1.25).abs() < E_TOL);
    }

    #[test]
    fn parameters_are_read_back_unchanged() {
        let align = Alignment::new(1e-3, 0.0, 5.0);
        let lens = TaperedPL::new(0.7, -3.0, FocusingUnit::Tesla, align).unwrap();
        assert_eq!(lens.k(), 0.7);
        assert_eq!(lens.taper(), -3.0);
        assert_eq!(lens.unit(), FocusingUnit::Tesla);
        assert_eq!(*lens.alignment(), align);
    }

    #[test]
    fn rejects_non_finite_strength() {
        assert!(TaperedPL::new(Float::NAN, 0.0, FocusingUnit::Normalized, Alignment::default()).is_err());
        assert!(
            TaperedPL::new(1.0, Float::INFINITY, FocusingUnit::Tesla, Alignment::default()).is_err()
        );
    }
}
