//! Simulate a PI-controlled first-order process and print the response.

use bf_blocks::Block;
use bf_core::Real;
use bf_sim::{input, Diagram, Input, Sum};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    // PI controller driving K = 2 / (4s + 1) with 0.5 s of dead time.
    let blocks = vec![
        Block::pi("controller", "e", "u", 1.2, 3.0)?,
        Block::lti("process", "u", "y", &[2.0], &[4.0, 1.0], 0.5)?,
    ];
    let sums = vec![Sum::new("e", &["+ysp", "-y"])?];
    let inputs = vec![Input::new("ysp", input::step(0.0, 1.0, 1.0))];
    let mut diagram = Diagram::new(blocks, sums, inputs)?;

    let dt = 0.01;
    let times: Vec<Real> = (0..3000).map(|i| i as Real * dt).collect();
    let historian = diagram.simulate_with_progress(&times, |p| {
        if p.step % 500 == 0 {
            println!("... step {}/{} (t = {:.1} s)", p.step, p.total, p.time);
        }
    })?;

    let y = historian.get("y").expect("y is simulated");
    let u = historian.get("u").expect("u is simulated");
    println!("\n  t      u        y");
    for i in (0..times.len()).step_by(300) {
        println!("{:5.1}  {:7.4}  {:7.4}", times[i], u[i], y[i]);
    }
    println!(
        "final: y = {:.4} (setpoint 1.0)",
        y.last().expect("non-empty run")
    );

    Ok(())
}
