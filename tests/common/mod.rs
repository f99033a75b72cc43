#![allow(dead_code)]
use beamline_rs::{Config, Float, RefPart};

pub const TEST_CONFIG: &str = r#"
[beam]
kin_energy_mev = 250.0
mass_mev = 938.272088
charge_qe = 1.0
bunch_charge_c = 1.0e-9
npart = 2000
seed = 7

[distribution]
kind = "gaussian"
lambda_x = 1.0e-3
lambda_y = 2.0e-3
lambda_t = 1.0e-3
lambda_px = 1.0e-4
lambda_py = 2.0e-4
lambda_pt = 1.0e-5

[[lattice]]
kind = "drift"
ds = 0.5
nslice = 5

[[lattice]]
kind = "quad"
ds = 0.2
k = 4.0
nslice = 2

[[lattice]]
kind = "tapered_pl"
k = 0.5
taper = 10.0
unit = 1
dx = 1.0e-4

[[lattice]]
kind = "drift"
ds = 0.5
"#;

pub fn setup_config() -> Config {
    // This is a function that sets up a small beamline
    // so that it can be used in testing.
    Config::from_toml(TEST_CONFIG).unwrap()
}

pub fn proton_refpart() -> RefPart {
    RefPart::new(938.272088, 1.0, 250.0).unwrap()
}

pub fn electron_refpart() -> RefPart {
    RefPart::new(0.510998950, -1.0, 2.0e3).unwrap()
}

pub fn assert_close(a: Float, b: Float, tol: Float) {
    assert!(
        (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs())),
        "{} != {} (tol {})",
        a,
        b,
        tol
    );
}
