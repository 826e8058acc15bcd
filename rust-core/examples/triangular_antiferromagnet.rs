/// Dispersion of the 120 degree triangular-lattice antiferromagnet along (h, h, 0)
/// of its three-site cell, next to the closed-form branches.
use nalgebra::Vector3;
use spinwave_core::models::{q_line, triangular_antiferromagnet, triangular_branches};
use spinwave_core::{calculate, SpinwaveConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let exchange = 1.0;
    let spin = 1.5;

    let input = triangular_antiferromagnet(exchange, spin)?;
    let config = SpinwaveConfig::default();
    let qs = q_line(Vector3::zeros(), Vector3::new(0.5, 0.5, 0.0), 11);
    let result = calculate(&input, &qs, &config)?;

    println!("=== Triangular antiferromagnet, J = {} meV, S = {} ===\n", exchange, spin);
    for outcome in &result.outcomes {
        match outcome {
            Ok(o) => {
                let energies = o.spectrum.physical(config.zero_energy_tolerance);
                println!("q = ({:.3}, {:.3}, 0)  [{}]", o.q.x, o.q.y, o.method);
                println!("   computed:    {:?}", energies);
                println!("   closed form: {:?}", triangular_branches(exchange, spin, &o.q));
            }
            Err(e) => println!("failed: {}", e),
        }
    }

    if !result.warnings().is_empty() {
        println!("\n{} wavevectors carry complex energies", result.warnings().len());
    }
    Ok(())
}
