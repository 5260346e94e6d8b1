//! Single first-order LTI block against the closed-form FOPDT response.

use bf_blocks::Block;
use bf_core::Real;
use bf_lti::fopdt_series;
use bf_sim::{Diagram, Input};

fn times(dt: Real, t_end: Real) -> Vec<Real> {
    let n = (t_end / dt).round() as usize;
    (0..=n).map(|i| i as Real * dt).collect()
}

fn run_first_order(k: Real, tau: Real, theta: Real, dt: Real, t_end: Real) -> (Vec<Real>, Vec<Real>) {
    let blocks = vec![Block::lti("process", "u", "y", &[k], &[tau, 1.0], theta).unwrap()];
    let inputs = vec![Input::new("u", bf_sim::input::step(0.0, 0.0, 1.0))];
    let mut diagram = Diagram::new(blocks, vec![], inputs).unwrap();

    let ts = times(dt, t_end);
    let historian = diagram.simulate(&ts).unwrap();
    let simulated = historian.get("y").unwrap().to_vec();
    let reference = fopdt_series(&ts, k, tau, theta, 0.0).unwrap();
    (simulated, reference)
}

#[test]
fn step_response_matches_fopdt() {
    for &(k, tau) in &[(1.0, 1.0), (2.5, 0.5), (-1.5, 2.0)] {
        let (simulated, reference) = run_first_order(k, tau, 0.0, 1e-3, 5.0 * tau);
        let worst = simulated
            .iter()
            .zip(&reference)
            .map(|(s, r)| (s - r).abs())
            .fold(0.0, f64::max);
        assert!(
            worst < 0.01 * k.abs().max(1.0),
            "K = {k}, tau = {tau}: worst error {worst}"
        );
    }
}

#[test]
fn step_response_settles_at_gain() {
    let (simulated, _) = run_first_order(2.0, 1.0, 0.0, 1e-3, 10.0);
    let last = *simulated.last().unwrap();
    assert!((last - 2.0).abs() < 1e-3, "steady state {last}");
}

#[test]
fn dead_time_shifts_the_response() {
    let (simulated, reference) = run_first_order(1.0, 1.0, 0.5, 1e-3, 6.0);
    let worst = simulated
        .iter()
        .zip(&reference)
        .map(|(s, r)| (s - r).abs())
        .fold(0.0, f64::max);
    assert!(worst < 0.01, "worst error {worst}");

    // Before the dead time elapses the output stays at zero.
    let ts = times(1e-3, 6.0);
    for (i, &t) in ts.iter().enumerate() {
        if t < 0.5 {
            assert!(
                simulated[i].abs() < 1e-9,
                "output arrived early at t = {t}: {}",
                simulated[i]
            );
        }
    }
}
