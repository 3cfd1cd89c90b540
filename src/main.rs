//! Kaleidoscope CLI - render kaleidoscope patterns to PNG.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use kaleidoscope::config::KaleidoConfig;
use kaleidoscope::generators::kaleidoscope::KaleidoscopeGenerator;
use kaleidoscope::generators::Generator;
use kaleidoscope::palette::{self, ColorTheme, Rgb};
use kaleidoscope::params::{PatternParameters, Resolution};
use kaleidoscope::session::{download_file_name, SeedMode, SessionState};
use kaleidoscope::stats::{PatternReport, PatternStats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser)]
#[command(name = "kaleidoscope")]
#[command(about = "Generate kaleidoscope patterns from layered harmonics")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "kaleidoscope.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate one or more patterns
    Generate {
        /// Number of harmonics (1-20)
        #[arg(short, long)]
        complexity: Option<u32>,

        /// Angular symmetry order (even, 4-24)
        #[arg(long)]
        segments: Option<u32>,

        /// Extent of the sampled plane (0.1-5.0)
        #[arg(long)]
        scale: Option<f64>,

        /// Radial magnification (0.5-2.0)
        #[arg(long)]
        zoom: Option<f64>,

        /// Rotation in degrees [0, 360)
        #[arg(short, long)]
        rotation: Option<f64>,

        /// Color theme, or "random" for a seeded random palette
        #[arg(short, long)]
        theme: Option<String>,

        /// Gradient colors (comma-separated hex values, e.g. "#000000,#ffffff")
        #[arg(long)]
        colors: Option<String>,

        /// Fixed seed; a random seed is drawn for each pattern otherwise
        #[arg(short = 'S', long)]
        seed: Option<u32>,

        /// Resolution preset
        #[arg(long, value_enum)]
        resolution: Option<ResolutionArg>,

        /// Explicit grid size in pixels, overrides --resolution
        #[arg(long)]
        size: Option<u32>,

        /// How many patterns to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Clamp out-of-range values instead of rejecting them
        #[arg(long)]
        clamp: bool,

        /// Background color outside the disk (hex)
        #[arg(long)]
        background: Option<String>,

        /// Output file path (single pattern only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also save parameters and stats as JSON
        #[arg(long)]
        save_params: bool,
    },

    /// List the built-in color themes
    Themes,

    /// Render every theme with the same seed for comparison
    Showcase {
        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Seed for consistent results
        #[arg(short = 'S', long, default_value = "42")]
        seed: u32,

        /// Resolution preset
        #[arg(long, value_enum, default_value = "low")]
        resolution: ResolutionArg,
    },
}

#[derive(Clone, Copy, ValueEnum, Debug)]
enum ResolutionArg {
    /// 500x500
    Low,
    /// 800x800
    Medium,
    /// 1200x1200
    High,
}

impl ResolutionArg {
    fn to_resolution(self) -> Resolution {
        match self {
            ResolutionArg::Low => Resolution::Low,
            ResolutionArg::Medium => Resolution::Medium,
            ResolutionArg::High => Resolution::High,
        }
    }
}

/// An explicit color list wins over the theme.
fn resolve_colors(colors: Option<&str>, theme: &str, seed: u32) -> Result<Vec<Rgb>> {
    if let Some(list) = colors {
        return Ok(palette::parse_color_list(list)?);
    }
    if theme.eq_ignore_ascii_case("random") {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        return Ok(palette::random_colors(&mut rng, palette::RANDOM_PALETTE_SIZE));
    }
    match ColorTheme::from_name(theme) {
        Some(t) => Ok(t.colors()),
        None => bail!("unknown theme {:?}, run `kaleidoscope themes` for the list", theme),
    }
}

/// Several patterns need distinct seeds and distinct file names.
fn check_batch(count: usize, has_output: bool, has_seed: bool) -> Result<()> {
    if count > 1 && has_output {
        bail!(
            "--output names a single file; drop it to generate {} patterns",
            count
        );
    }
    if count > 1 && has_seed {
        bail!(
            "--seed repeats the same pattern; drop it to generate {} patterns",
            count
        );
    }
    Ok(())
}

fn configured_resolution(config: &KaleidoConfig) -> Resolution {
    Resolution::from_name(&config.output.resolution).unwrap_or_else(|| {
        warn!(
            resolution = %config.output.resolution,
            "unknown resolution in config, using medium"
        );
        Resolution::Medium
    })
}

fn save_report(
    image_path: &Path,
    params: &PatternParameters,
    fingerprint: String,
    degenerate: bool,
) -> Result<()> {
    let report = PatternReport {
        params,
        stats: PatternStats::from_params(params),
        fingerprint,
        degenerate,
    };
    let report_path = image_path.with_extension("json");
    fs::write(&report_path, serde_json::to_string_pretty(&report)?)?;
    println!("Saved parameters to {}", report_path.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kaleidoscope=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = KaleidoConfig::load(Path::new(&cli.config))?;

    match cli.command {
        Commands::Generate {
            complexity,
            segments,
            scale,
            zoom,
            rotation,
            theme,
            colors,
            seed,
            resolution,
            size,
            count,
            clamp,
            background,
            output,
            save_params,
        } => {
            check_batch(count, output.is_some(), seed.is_some())?;

            let grid_size = size.unwrap_or_else(|| {
                resolution
                    .map(ResolutionArg::to_resolution)
                    .unwrap_or_else(|| configured_resolution(&config))
                    .grid_size()
            });
            let theme = theme.unwrap_or_else(|| config.pattern.theme.clone());
            let background = background.unwrap_or_else(|| config.render.background.clone());
            let background = Rgb::from_hex(&background)?;
            let save_params = save_params || config.output.save_params;

            let generator = KaleidoscopeGenerator::new(background);
            let mode = seed.map(SeedMode::Fixed).unwrap_or(SeedMode::Random);
            let mut rng = rand::thread_rng();
            let mut session = SessionState::new();

            let output_dir = PathBuf::from(&config.output.directory);

            for _ in 0..count {
                let seed = session.regenerate(mode, &mut rng);

                let mut params = PatternParameters {
                    complexity: complexity.unwrap_or(config.pattern.complexity),
                    segments: segments.unwrap_or(config.pattern.segments),
                    scale: scale.unwrap_or(config.pattern.scale),
                    zoom: zoom.unwrap_or(config.pattern.zoom),
                    rotation_degrees: rotation.unwrap_or(config.pattern.rotation),
                    colors: resolve_colors(colors.as_deref(), &theme, seed)?,
                    seed,
                    grid_size,
                };
                if clamp {
                    params = params.clamped();
                }

                println!(
                    "Generating {} with seed {} ({}x{})...",
                    generator.name(),
                    seed,
                    grid_size,
                    grid_size
                );

                let (field, image) = generator.generate_with_field(&params)?;
                let stats = PatternStats::from_params(&params);
                println!(
                    "  {}: score {:.1}/100, {} colors",
                    stats.pattern_type, stats.complexity_score, stats.color_count
                );
                if field.is_degenerate() {
                    println!("  Field was flat; the pattern is a single color");
                }

                let output_path = match &output {
                    Some(path) => path.clone(),
                    None => {
                        fs::create_dir_all(&output_dir)?;
                        let name = session
                            .download_file_name()
                            .unwrap_or_else(|| download_file_name(seed));
                        output_dir.join(name)
                    }
                };

                image.save(&output_path)?;
                println!("Saved to {}", output_path.display());

                if save_params {
                    save_report(
                        &output_path,
                        &params,
                        field.fingerprint(),
                        field.is_degenerate(),
                    )?;
                }
            }
        }

        Commands::Themes => {
            for theme in ColorTheme::all() {
                let colors: Vec<String> = theme.colors().iter().map(|c| c.to_hex()).collect();
                println!("{:<12} {}", theme.name(), colors.join(" "));
            }
            println!("{:<12} {} seeded colors", "random", palette::RANDOM_PALETTE_SIZE);
        }

        Commands::Showcase {
            output_dir,
            seed,
            resolution,
        } => {
            let output_dir = output_dir
                .unwrap_or_else(|| PathBuf::from(&config.output.directory).join("showcase"));

            fs::create_dir_all(&output_dir)?;

            let background = Rgb::from_hex(&config.render.background)?;
            let generator = KaleidoscopeGenerator::new(background);
            let base = PatternParameters {
                complexity: config.pattern.complexity,
                segments: config.pattern.segments,
                scale: config.pattern.scale,
                zoom: config.pattern.zoom,
                rotation_degrees: config.pattern.rotation,
                seed,
                grid_size: resolution.to_resolution().grid_size(),
                ..Default::default()
            };

            println!("Generating showcase with seed {}...", seed);

            for theme in ColorTheme::all() {
                let params = PatternParameters {
                    colors: theme.colors(),
                    ..base.clone()
                };
                let image = generator.generate(&params)?;

                let filename = format!("{}_{}.{}", theme.name(), seed, generator.extension());
                image.save(&output_dir.join(&filename))?;
                println!("  Created {}", filename);
            }

            println!("Done! Showcase saved to {}", output_dir.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batches_reject_fixed_seed_and_single_output() {
        assert!(check_batch(1, true, true).is_ok());
        assert!(check_batch(3, false, false).is_ok());

        let err = check_batch(3, false, true).unwrap_err().to_string();
        assert!(err.contains("--seed"), "{err}");
        let err = check_batch(3, true, false).unwrap_err().to_string();
        assert!(err.contains("--output"), "{err}");
    }

    #[test]
    fn explicit_colors_win_over_theme() {
        let colors = resolve_colors(Some("#000000,#ffffff"), "neon", 1).unwrap();
        assert_eq!(colors, vec![Rgb::BLACK, Rgb::WHITE]);
        assert_eq!(resolve_colors(None, "ocean", 1).unwrap(), ColorTheme::Ocean.colors());
        assert!(resolve_colors(None, "plaid", 1).is_err());
    }
}
