use crate::Float;
use itertools::izip;
use rayon::prelude::*;

/// Structure-of-arrays storage for the beam. Each particle is the same
/// index in all seven columns.
pub struct ParticleContainer {
    pub x: Vec<Float>,
    pub y: Vec<Float>,
    pub t: Vec<Float>,
    pub px: Vec<Float>,
    pub py: Vec<Float>,
    pub pt: Vec<Float>,
    pub idcpu: Vec<u64>,
}

/// First and second moments of the six phase-space columns, in the order
/// x, y, t, px, py, pt.
#[derive(Clone, Debug, PartialEq)]
pub struct Moments {
    pub mean: [Float; 6],
    pub rms: [Float; 6],
}

impl ParticleContainer {
    pub fn new(npart: usize) -> ParticleContainer {
        ParticleContainer {
            x: vec![0.0; npart],
            y: vec![0.0; npart],
            t: vec![0.0; npart],
            px: vec![0.0; npart],
            py: vec![0.0; npart],
            pt: vec![0.0; npart],
            idcpu: (0..npart as u64).collect(),
        }
    }

    /// Builds a container from explicit (x, y, t, px, py, pt) rows.
    pub fn from_rows(rows: &[[Float; 6]]) -> ParticleContainer {
        let mut pc = ParticleContainer::new(rows.len());
        for (row, x, y, t, px, py, pt) in izip!(
            rows,
            &mut pc.x,
            &mut pc.y,
            &mut pc.t,
            &mut pc.px,
            &mut pc.py,
            &mut pc.pt
        ) {
            *x = row[0];
            *y = row[1];
            *t = row[2];
            *px = row[3];
            *py = row[4];
            *pt = row[5];
        }
        pc
    }

    pub fn len(&self) -> usize {
        self.idcpu.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idcpu.is_empty()
    }

    /// Returns particle `i` as (x, y, t, px, py, pt).
    pub fn row(&self, i: usize) -> [Float; 6] {
        [self.x[i], self.y[i], self.t[i], self.px[i], self.py[i], self.pt[i]]
    }

    #[inline(always)]
    pub(crate) fn assert_consistent(&self) {
        if !cfg!(feature = "unchecked") {
            let n = self.idcpu.len();
            assert_eq!(self.x.len(), n);
            assert_eq!(self.y.len(), n);
            assert_eq!(self.t.len(), n);
            assert_eq!(self.px.len(), n);
            assert_eq!(self.py.len(), n);
            assert_eq!(self.pt.len(), n);
        }
    }

    pub fn moments(&self) -> Moments {
        let mut mean = [0.0; 6];
        let mut rms = [0.0; 6];
        for (i, col) in [&self.x, &self.y, &self.t, &self.px, &self.py, &self.pt]
            .iter()
            .enumerate()
        {
            let (m, s) = mean_rms(col);
            mean[i] = m;
            rms[i] = s;
        }
        Moments { mean, rms }
    }
}

fn mean_rms(col: &[Float]) -> (Float, Float) {
    if col.is_empty() {
        return (0.0, 0.0);
    }
    let n = col.len() as Float;
    let mean = col.par_iter().sum::<Float>() / n;
    let var = col
        .par_iter()
        .map(|&v| (v - mean) * (v - mean))
        .sum::<Float>()
        / n;
    (mean, var.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::E_TOL;

    #[test]
    fn ids_are_unique_and_ordered() {
        let pc = ParticleContainer::new(5);
        assert_eq!(pc.idcpu, vec![0, 1, 2, 3, 4]);
        assert_eq!(pc.len(), 5);
        assert!(ParticleContainer::new(0).is_empty());
    }

    #[test]
    fn moments_of_two_particles() {
        let pc = ParticleContainer::from_rows(&[
            [1.0, 0.0, 0.0, 2.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0, 4.0, 0.0, 0.0],
        ]);
        let m = pc.moments();
        assert!(m.mean[0].abs() < E_TOL);
        assert!((m.rms[0] - 1.0).abs() < E_TOL);
        assert!((m.mean[3] - 3.0).abs() < E_TOL);
        assert!((m.rms[3] - 1.0).abs() < E_TOL);
        assert_eq!(m.rms[1], 0.0);
    }

    #[test]
    fn moments_of_empty_beam() {
        let m = ParticleContainer::new(0).moments();
        assert_eq!(m.mean, [0.0; 6]);
        assert_eq!(m.rms, [0.0; 6]);
    }
}
