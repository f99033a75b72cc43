mod common;

use beamline_rs::distribution::Distribution;
use beamline_rs::elements::{Element, FocusingUnit};
use beamline_rs::{run, Config, ConfigError, ElementConfig, Float, Sim};
use common::{assert_close, setup_config, TEST_CONFIG};

#[test]
fn builds_lattice_from_toml() {
    let cfg = setup_config();
    assert_eq!(cfg.beam.npart, 2000);
    assert_eq!(cfg.beam.seed, 7);
    assert!(!cfg.output.write_output);
    assert_eq!(
        cfg.lattice[3],
        ElementConfig::Drift {
            ds: 0.5,
            nslice: 1,
            dx: 0.0,
            dy: 0.0,
            rotation: 0.0
        }
    );

    let sim = Sim::new(&cfg).unwrap();
    let names: Vec<_> = sim.lattice.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Drift", "Quad", "TaperedPL", "Drift"]);
    assert!(matches!(sim.distribution, Distribution::Gaussian(_)));
    match &sim.lattice[2] {
        Element::TaperedPL(lens) => {
            assert_eq!(lens.unit(), FocusingUnit::Tesla);
            assert_eq!(lens.k(), 0.5);
            assert_eq!(lens.taper(), 10.0);
            assert_eq!(lens.alignment().dx(), 1.0e-4);
        }
        other => panic!("expected a tapered lens, got {:?}", other),
    }
}

#[test]
fn unknown_unit_is_a_config_error() {
    let toml = TEST_CONFIG.replace("unit = 1", "unit = 7");
    let cfg = Config::from_toml(&toml).unwrap();
    let err = match Sim::new(&cfg) {
        Ok(_) => panic!("unit = 7 must be rejected"),
        Err(err) => err,
    };
    let msg = format!("{:#}", err);
    assert!(msg.contains("lattice element 2"), "{}", msg);
    assert!(msg.contains("unknown focusing unit 7"), "{}", msg);
}

#[test]
fn unknown_element_kind_fails_to_parse() {
    let toml = TEST_CONFIG.replace("kind = \"quad\"", "kind = \"sextupole\"");
    assert!(Config::from_toml(&toml).is_err());
}

#[test]
fn track_through_test_lattice() {
    let cfg = setup_config();
    let mut sim = Sim::new(&cfg).unwrap();
    let mut pc = sim.init_beam().unwrap();
    assert_eq!(pc.len(), 2000);
    let before = pc.moments();

    sim.track(&mut pc).unwrap();
    sim.finalize();

    let length: Float = sim.lattice.iter().map(|e| e.ds()).sum();
    assert_close(sim.refpart.s, length, 1e-12);
    assert_close(sim.refpart.s, 1.2, 1e-12);

    // the beam drifts, so the horizontal size changes but stays finite
    let after = pc.moments();
    assert!(after.rms.iter().all(|v| v.is_finite()));
    assert!(after.rms[0] != before.rms[0]);
    // nothing in this lattice changes the energy spread
    assert_close(after.rms[5], before.rms[5], 1e-12);
}

#[test]
fn run_without_output() {
    let cfg = setup_config();
    run(cfg).unwrap();

    let toml = TEST_CONFIG.replace("npart = 2000", "npart = 0");
    let cfg = Config::from_toml(&toml).unwrap();
    assert!(run(cfg).is_err());
}

#[test]
fn partial_output_table_uses_defaults() {
    let toml = format!("{}\n[output]\nstride = 4\n", TEST_CONFIG);
    let cfg = Config::from_toml(&toml).unwrap();
    assert_eq!(cfg.output.stride, 4);
    assert!(!cfg.output.write_output);
    assert_eq!(cfg.output.outdir, "output");
}

#[test]
fn zero_output_stride_is_rejected() {
    let toml = format!("{}\n[output]\nwrite_output = true\nstride = 0\n", TEST_CONFIG);
    let err = match Config::from_toml(&toml) {
        Ok(_) => panic!("stride = 0 must be rejected"),
        Err(err) => err,
    };
    assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::ZeroStride));
}
