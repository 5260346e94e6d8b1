//! End-to-end: tune a PI controller with the ITAE rules, wire it into a
//! diagram, and check the closed loop behaves.

use bf_blocks::Block;
use bf_controls::{itae_parameters, ControllerKind, InputKind};
use bf_core::Real;
use bf_sim::{input, Diagram, Input, Sum};

#[test]
fn itae_tuned_pi_tracks_setpoint() {
    // FOPDT process: K = 1.5, tau = 3, theta = 0.4.
    let (k, tau, theta) = (1.5, 3.0, 0.4);
    let settings =
        itae_parameters(k, tau, theta, InputKind::Setpoint, ControllerKind::Pi).unwrap();
    assert!(settings.kc > 0.0 && settings.tau_i > 0.0);

    let blocks = vec![
        Block::pi("controller", "e", "u", settings.kc, settings.tau_i).unwrap(),
        Block::lti("process", "u", "y", &[k], &[tau, 1.0], theta).unwrap(),
    ];
    let sums = vec![Sum::new("e", &["+ysp", "-y"]).unwrap()];
    let inputs = vec![Input::new("ysp", input::step(0.0, 0.0, 1.0))];
    let mut diagram = Diagram::new(blocks, sums, inputs).unwrap();

    let dt = 0.005;
    let times: Vec<Real> = (0..(60.0 / dt) as usize).map(|i| i as Real * dt).collect();
    let historian = diagram.simulate(&times).unwrap();
    let y = historian.get("y").unwrap();

    // Integral action drives the tracking error to zero.
    let last = *y.last().unwrap();
    assert!((last - 1.0).abs() < 0.01, "steady state {last}");

    // ITAE setpoint tuning is deliberately gentle: the response should not
    // wildly overshoot.
    let peak = y.iter().cloned().fold(0.0, f64::max);
    assert!(peak < 1.35, "excessive overshoot: {peak}");
}
