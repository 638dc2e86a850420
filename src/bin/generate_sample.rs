use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// "No data" marker understood by the viewer.
const NO_DATA: &str = "-1.23e34";

fn gaussian(x: f64, mu: f64, sigma: f64, depth: f64) -> f64 {
    depth * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Box-Muller transform for normal distribution
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-15);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

/// Sloped continuum with absorption dips, clamped to [0, 1].
fn generate_reflectance(
    wavelengths: &[f64],
    absorptions: &[(f64, f64, f64)],
    noise_level: f64,
    rng: &mut StdRng,
) -> Vec<f64> {
    wavelengths
        .iter()
        .map(|&wl| {
            let continuum = 0.35 + 0.2 * wl / 2.5;
            let dips: f64 = absorptions
                .iter()
                .map(|&(mu, sigma, depth)| gaussian(wl, mu, sigma, depth))
                .sum();
            (continuum - dips + gauss(rng, 0.0, noise_level)).clamp(0.0, 1.0)
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut rng = StdRng::seed_from_u64(42);

    // 0.35 → 2.5 µm, 0.01 µm step
    let wavelengths: Vec<f64> = (0..=215).map(|i| 0.35 + i as f64 * 0.01).collect();

    // Kaolinite-like doublet near 2.2 µm plus OH / water features
    let absorptions = [(1.4, 0.03, 0.08), (1.9, 0.04, 0.06), (2.16, 0.015, 0.1), (2.21, 0.02, 0.15)];
    let reflectance = generate_reflectance(&wavelengths, &absorptions, 0.004, &mut rng);

    let mut wl_text = String::from("Wavelength (um)\n");
    let mut refl_text = String::from("Synthetic clay reflectance\n");
    for (wl, r) in wavelengths.iter().zip(&reflectance) {
        writeln!(wl_text, "{wl:.4}")?;
        writeln!(refl_text, "{r:.6}")?;
    }
    // Padding channels the viewer drops on load.
    for _ in 0..4 {
        writeln!(refl_text, "{NO_DATA}")?;
    }

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let wl_path = out_dir.join("sample_wavelengths.txt");
    let refl_path = out_dir.join("sample_reflectance.txt");
    std::fs::write(&wl_path, wl_text).with_context(|| format!("writing {}", wl_path.display()))?;
    std::fs::write(&refl_path, refl_text)
        .with_context(|| format!("writing {}", refl_path.display()))?;

    log::info!("Generated {} channels", wavelengths.len());
    println!(
        "Wrote {} samples to {} and {}",
        wavelengths.len(),
        wl_path.display(),
        refl_path.display()
    );
    Ok(())
}
