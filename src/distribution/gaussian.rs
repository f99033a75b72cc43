use crate::distribution::BeamDistribution;
use crate::elements::Finalize;
use crate::error::{check_finite, check_non_negative, ConfigError};
use crate::Float;
use rand::Rng;
use rand_distr::StandardNormal;

/// A 6D Gaussian beam, uncorrelated between the three planes.
///
/// In each plane `(u, pu)` two standard normal draws `a, b` are mapped to
///
/// ```text
/// u  = lambda_u * a / sqrt(1 - mu^2)
/// pu = lambda_pu * (-mu * a / sqrt(1 - mu^2) + b)
/// ```
///
/// so with `mu = 0` the `lambda`s are the rms sizes.
#[derive(Clone, Debug, PartialEq)]
pub struct Gaussian {
    pub lambda_x: Float,
    pub lambda_y: Float,
    pub lambda_t: Float,
    pub lambda_px: Float,
    pub lambda_py: Float,
    pub lambda_pt: Float,
    pub mu_xpx: Float,
    pub mu_ypy: Float,
    pub mu_tpt: Float,
}

fn check_correlation(name: &'static str, mu: Float) -> Result<Float, ConfigError> {
    let mu = check_finite(name, mu)?;
    if mu.abs() < 1.0 {
        Ok(mu)
    } else {
        Err(ConfigError::InvalidCorrelation { name, value: mu })
    }
}

#[inline(always)]
fn correlate(lambda_u: Float, lambda_pu: Float, mu: Float, a: Float, b: Float) -> (Float, Float) {
    let root = (1.0 - mu * mu).sqrt();
    (lambda_u * a / root, lambda_pu * (-mu * a / root + b))
}

impl Gaussian {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        lambda_x: Float,
        lambda_y: Float,
        lambda_t: Float,
        lambda_px: Float,
        lambda_py: Float,
        lambda_pt: Float,
        mu_xpx: Float,
        mu_ypy: Float,
        mu_tpt: Float,
    ) -> Result<Gaussian, ConfigError> {
        Ok(Gaussian {
            lambda_x: check_non_negative("lambda_x", lambda_x)?,
            lambda_y: check_non_negative("lambda_y", lambda_y)?,
            lambda_t: check_non_negative("lambda_t", lambda_t)?,
            lambda_px: check_non_negative("lambda_px", lambda_px)?,
            lambda_py: check_non_negative("lambda_py", lambda_py)?,
            lambda_pt: check_non_negative("lambda_pt", lambda_pt)?,
            mu_xpx: check_correlation("mu_xpx", mu_xpx)?,
            mu_ypy: check_correlation("mu_ypy", mu_ypy)?,
            mu_tpt: check_correlation("mu_tpt", mu_tpt)?,
        })
    }
}

impl BeamDistribution for Gaussian {
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
        let a: Float = engine.sample(StandardNormal);
        let b: Float = engine.sample(StandardNormal);
        let (u, pu) = correlate(self.lambda_x, self.lambda_px, self.mu_xpx, a, b);
        *x = u;
        *px = pu;

        let a: Float = engine.sample(StandardNormal);
        let b: Float = engine.sample(StandardNormal);
        let (u, pu) = correlate(self.lambda_y, self.lambda_py, self.mu_ypy, a, b);
        *y = u;
        *py = pu;

        let a: Float = engine.sample(StandardNormal);
        let b: Float = engine.sample(StandardNormal);
        let (u, pu) = correlate(self.lambda_t, self.lambda_pt, self.mu_tpt, a, b);
        *t = u;
        *pt = pu;
    }
}

impl Finalize for Gaussian {}
