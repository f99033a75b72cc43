use crate::Float;

/// Transverse misalignment of an element: an offset in x and y and a
/// rotation in the transverse plane.
///
/// `shift_in` moves a particle into the element's error-free frame and
/// `shift_out` undoes it. Both only touch their arguments, so they are safe
/// to call from any number of particle pushes at once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Alignment {
    dx: Float,
    dy: Float,
    rotation: Float, // radians
}

impl Default for Alignment {
    fn default() -> Alignment {
        Alignment {
            dx: 0.0,
            dy: 0.0,
            rotation: 0.0,
        }
    }
}

impl Alignment {
    /// `dx`, `dy` in m, `rotation_degree` in degrees.
    pub fn new(dx: Float, dy: Float, rotation_degree: Float) -> Alignment {
        Alignment {
            dx,
            dy,
            rotation: rotation_degree.to_radians(),
        }
    }

    pub fn dx(&self) -> Float {
        self.dx
    }

    pub fn dy(&self) -> Float {
        self.dy
    }

    /// Rotation error in radians.
    pub fn rotation(&self) -> Float {
        self.rotation
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0 && self.rotation == 0.0
    }

    #[inline(always)]
    pub fn shift_in(&self, x: &mut Float, y: &mut Float, px: &mut Float, py: &mut Float) {
        if self.is_zero() {
            return;
        }
        let (sin, cos) = self.rotation.sin_cos();

        let xc = *x - self.dx;
        let yc = *y - self.dy;

        // rotate by -rotation
        *x = xc * cos + yc * sin;
        *y = -xc * sin + yc * cos;

        let pxc = *px;
        let pyc = *py;
        *px = pxc * cos + pyc * sin;
        *py = -pxc * sin + pyc * cos;
    }

    #[inline(always)]
    pub fn shift_out(&self, x: &mut Float, y: &mut Float, px: &mut Float, py: &mut Float) {
        if self.is_zero() {
            return;
        }
        let (sin, cos) = self.rotation.sin_cos();

        // rotate by +rotation
        let xr = *x * cos - *y * sin;
        let yr = *x * sin + *y * cos;
        *x = xr + self.dx;
        *y = yr + self.dy;

        let pxc = *px;
        let pyc = *py;
        *px = pxc * cos - pyc * sin;
        *py = pxc * sin + pyc * cos;
    }
}
