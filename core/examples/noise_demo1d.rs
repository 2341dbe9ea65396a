use cubic_noise::{config_1d, generate1};

fn main() {
    env_logger::init();

    // Seed 2025, 16 units per lattice cell, repeats every 256 units
    let config = config_1d(2025, 16, 256);
    let line = generate1(&config, 96);

    // Print each sample as a bar, one row per coordinate
    for (x, v) in line.iter().enumerate() {
        let width = ((v + 0.25) * 40.0).clamp(0.0, 60.0) as usize;
        println!("{:>4} {:>7.4} {}", x, v, "#".repeat(width));
    }
}
