use crate::{config::Output, particles::ParticleContainer, Float};
use anyhow::{Context, Result};

fn save_column(col: &[Float], name: &str, outdir: &str, stride: usize) -> Result<()> {
    let out_vec: Vec<Float> = col.iter().step_by(stride).copied().collect();
    npy::to_file(format!("{}/{}.npy", outdir, name), out_vec)
        .context(format!("Could not save {} data to file", name))?;
    Ok(())
}

/// Writes every `stride`-th particle's phase-space coordinates to
/// `<outdir>/<name>.npy`, one file per column.
pub(crate) fn save_output(output: &Output, pc: &ParticleContainer) -> Result<()> {
    if !output.write_output {
        return Ok(());
    }
    output.validate()?;
    let stride = output.stride;
    std::fs::create_dir_all(&output.outdir).context("Unable to create output directory")?;

    for (col, name) in &[
        (&pc.x, "x"),
        (&pc.y, "y"),
        (&pc.t, "t"),
        (&pc.px, "px"),
        (&pc.py, "py"),
        (&pc.pt, "pt"),
    ] {
        save_column(col, name, &output.outdir, stride)?;
    }

    let ids: Vec<u64> = pc.idcpu.iter().step_by(stride).copied().collect();
    npy::to_file(format!("{}/idcpu.npy", output.outdir), ids)
        .context("Could not save particle ids to file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_file_per_column() {
        let outdir = std::env::temp_dir().join("beamline_rs_save_test");
        let output = Output {
            write_output: true,
            outdir: outdir.to_string_lossy().into_owned(),
            stride: 2,
        };
        let pc = ParticleContainer::new(5);
        save_output(&output, &pc).unwrap();
        for name in &["x", "y", "t", "px", "py", "pt", "idcpu"] {
            assert!(outdir.join(format!("{}.npy", name)).exists());
        }
        std::fs::remove_dir_all(&outdir).unwrap();
    }

    #[test]
    fn zero_stride_is_rejected() {
        let outdir = std::env::temp_dir().join("beamline_rs_zero_stride_test");
        let output = Output {
            write_output: true,
            outdir: outdir.to_string_lossy().into_owned(),
            stride: 0,
        };
        let pc = ParticleContainer::new(5);
        assert!(save_output(&output, &pc).is_err());
        assert!(!outdir.exists());
    }
}
