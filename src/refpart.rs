use crate::error::{check_finite, ConfigError};
use crate::{Float, C_LIGHT};

/// The reference particle. Carries the global beam quantities that the
/// elements need to normalize their parameters.
///
/// Positions are in m, `t` is c*t in m. Momenta are normalized to m*c,
/// with `pt = -gamma`.
#[derive(Clone, Debug, PartialEq)]
pub struct RefPart {
    pub s: Float,
    pub x: Float,
    pub y: Float,
    pub z: Float,
    pub t: Float,
    pub px: Float,
    pub py: Float,
    pub pz: Float,
    pub pt: Float,
    pub mass_mev: Float,
    pub charge_qe: Float,
}

impl RefPart {
    pub fn new(mass_mev: Float, charge_qe: Float, kin_energy_mev: Float) -> Result<RefPart, ConfigError> {
        let mass_mev = check_finite("mass_mev", mass_mev)?;
        let charge_qe = check_finite("charge_qe", charge_qe)?;
        let kin_energy_mev = check_finite("kin_energy_mev", kin_energy_mev)?;
        if mass_mev <= 0.0 {
            return Err(ConfigError::InvalidReference("mass must be positive"));
        }
        if charge_qe == 0.0 {
            return Err(ConfigError::InvalidReference("charge must be non-zero"));
        }
        if kin_energy_mev <= 0.0 {
            return Err(ConfigError::InvalidReference("kinetic energy must be positive"));
        }
        let mut refpart = RefPart {
            s: 0.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            t: 0.0,
            px: 0.0,
            py: 0.0,
            pz: 0.0,
            pt: 0.0,
            mass_mev,
            charge_qe,
        };
        refpart.set_kin_energy_mev(kin_energy_mev);
        Ok(refpart)
    }

    /// Sets the energy and puts all of the momentum along z.
    pub fn set_kin_energy_mev(&mut self, kin_energy_mev: Float) {
        self.pt = -kin_energy_mev / self.mass_mev - 1.0;
        self.px = 0.0;
        self.py = 0.0;
        self.pz = (self.pt * self.pt - 1.0).sqrt();
    }

    #[inline(always)]
    pub fn gamma(&self) -> Float {
        -self.pt
    }

    #[inline(always)]
    pub fn beta_gamma(&self) -> Float {
        (self.pt * self.pt - 1.0).sqrt()
    }

    #[inline(always)]
    pub fn beta(&self) -> Float {
        self.beta_gamma() / self.gamma()
    }

    pub fn kin_energy_mev(&self) -> Float {
        -self.mass_mev * (self.pt + 1.0)
    }

    /// Magnetic rigidity in T-m.
    #[inline(always)]
    pub fn rigidity_tm(&self) -> Float {
        // p [eV/c] / (c * q [e]) = B*rho [T-m]
        self.beta_gamma() * self.mass_mev * 1.0e6 / (C_LIGHT * self.charge_qe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_test_refpart, E_TOL};

    #[test]
    fn energy_round_trip() {
        let refpart = build_test_refpart();
        assert!((refpart.kin_energy_mev() - 250.0).abs() < E_TOL * 250.0);
        assert!((refpart.pz - refpart.beta_gamma()).abs() < E_TOL);
        assert!(refpart.beta() < 1.0);
    }

    #[test]
    fn proton_rigidity() {
        // 250 MeV protons: p = 729.134 MeV/c -> 2.4321 T-m
        let refpart = build_test_refpart();
        assert!((refpart.rigidity_tm() - 2.4321).abs() < 1e-3);
    }

    #[test]
    fn rejects_unphysical_reference() {
        assert!(RefPart::new(0.0, 1.0, 10.0).is_err());
        assert!(RefPart::new(938.272, 0.0, 10.0).is_err());
        assert!(RefPart::new(938.272, 1.0, 0.0).is_err());
        assert!(RefPart::new(Float::NAN, 1.0, 10.0).is_err());
    }
}
