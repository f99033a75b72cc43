use crate::distribution::BeamDistribution;
use crate::elements::Finalize;
use crate::Float;
use rand::Rng;

/// Puts every particle on the reference orbit: all six coordinates are
/// zero. Holds no state and draws no random numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Empty;

impl Empty {
    pub fn new() -> Empty {
        Empty
    }
}

impl BeamDistribution for Empty {
    #[inline(always)]
    fn sample<R: Rng + ?Sized>(
        &self,
        x: &mut Float,
        y: &mut Float,
        t: &mut Float,
        px: &mut Float,
        py: &mut Float,
        pt: &mut Float,
        _engine: &mut R,
    ) {
        *x = 0.0;
        *y = 0.0;
        *t = 0.0;
        *px = 0.0;
        *py = 0.0;
        *pt = 0.0;
    }
}

impl Finalize for Empty {}
