//! Single second-order LTI block against the closed-form SOPDT response,
//! covering all three damping branches.

use bf_blocks::Block;
use bf_core::Real;
use bf_lti::sopdt_series;
use bf_sim::{Diagram, Input};

fn run_second_order(k: Real, tau: Real, zeta: Real, theta: Real) -> Real {
    // K / (tau^2 s^2 + 2 tau zeta s + 1)
    let den = [tau * tau, 2.0 * tau * zeta, 1.0];
    let blocks = vec![Block::lti("process", "u", "y", &[k], &den, theta).unwrap()];
    let inputs = vec![Input::new("u", bf_sim::input::step(0.0, 0.0, 1.0))];
    let mut diagram = Diagram::new(blocks, vec![], inputs).unwrap();

    let dt = 1e-3;
    let n = (12.0 * tau / dt).round() as usize;
    let ts: Vec<Real> = (0..=n).map(|i| i as Real * dt).collect();

    let historian = diagram.simulate(&ts).unwrap();
    let simulated = historian.get("y").unwrap();
    let reference = sopdt_series(&ts, k, tau, zeta, theta, 0.0).unwrap();

    simulated
        .iter()
        .zip(&reference)
        .map(|(s, r)| (s - r).abs())
        .fold(0.0, f64::max)
}

#[test]
fn underdamped_matches_sopdt() {
    let worst = run_second_order(1.0, 1.0, 0.5, 0.0);
    assert!(worst < 0.02, "worst error {worst}");
}

#[test]
fn critically_damped_matches_sopdt() {
    let worst = run_second_order(1.5, 1.0, 1.0, 0.0);
    assert!(worst < 0.02, "worst error {worst}");
}

#[test]
fn overdamped_matches_sopdt() {
    let worst = run_second_order(2.0, 1.0, 2.0, 0.0);
    assert!(worst < 0.02, "worst error {worst}");
}

#[test]
fn underdamped_with_dead_time_matches_sopdt() {
    let worst = run_second_order(1.0, 1.0, 0.4, 1.0);
    assert!(worst < 0.02, "worst error {worst}");
}
