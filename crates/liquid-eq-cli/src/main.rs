//! liquid-eq-curve - print the response curve of an equalizer setting
//!
//! Gains are given lowest band first, in dB. Missing bands stay at 0 dB and
//! out-of-range gains are clamped to the configured range.
//!
//! ## Command line
//!
//! ```text
//! liquid-eq-curve [--config PATH] [--preset NAME] [--points N] [--csv]
//!                 [--save-config PATH] [GAIN_DB...]
//! ```
//!
//! Set `RUST_LOG=debug` for filter details.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use liquid_eq_core::config::{default_config_path, load_config, save_config};
use liquid_eq_core::presets::PRESET_NAMES;
use liquid_eq_core::{EqualizerConfig, EqualizerState, FrequencySamplePoint, ResponseComposer};

const CONFIG_FILE: &str = "liquid-eq.yaml";

const USAGE: &str = "\
usage: liquid-eq-curve [--config PATH] [--preset NAME] [--points N] [--csv]
                       [--save-config PATH] [GAIN_DB...]";

#[derive(Debug, Default, PartialEq)]
struct Options {
    config_path: Option<PathBuf>,
    preset: Option<String>,
    points: Option<usize>,
    csv: bool,
    save_config: Option<PathBuf>,
    gains: Vec<f64>,
    help: bool,
}

fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        // Negative gains look like flags, so numbers win
        if let Ok(gain) = arg.parse::<f64>() {
            options.gains.push(gain);
            continue;
        }
        match arg.as_str() {
            "--config" => options.config_path = Some(value_for(&arg, args.next())?.into()),
            "--preset" => options.preset = Some(value_for(&arg, args.next())?),
            "--points" => {
                let raw = value_for(&arg, args.next())?;
                options.points = Some(
                    raw.parse()
                        .with_context(|| format!("--points expects a count, got '{}'", raw))?,
                );
            }
            "--csv" => options.csv = true,
            "--save-config" => options.save_config = Some(value_for(&arg, args.next())?.into()),
            "-h" | "--help" => options.help = true,
            other => bail!("unrecognized argument '{}'\n{}", other, USAGE),
        }
    }
    Ok(options)
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.with_context(|| format!("{} expects a value", flag))
}

/// "62", "1k", "16k": the tick label style of the band markers
fn format_frequency(frequency_hz: f64) -> String {
    if frequency_hz < 1000.0 {
        format!("{:.0}", frequency_hz)
    } else {
        format!("{:.0}k", frequency_hz / 1000.0)
    }
}

fn render(
    config: &EqualizerConfig,
    state: &EqualizerState,
    curve: &[FrequencySamplePoint],
    csv: bool,
) -> String {
    let mut out = String::new();
    if csv {
        out.push_str("frequency_hz,gain_db\n");
        for point in curve {
            let _ = writeln!(out, "{:.3},{:.4}", point.frequency_hz, point.gain_db);
        }
        return out;
    }

    let layout = config.layout();
    let bands: Vec<String> = state
        .bands()
        .iter()
        .enumerate()
        .map(|(i, gain)| format!("{}:{:+.1}", format_frequency(layout.center_frequency(i)), gain))
        .collect();
    let _ = writeln!(out, "# bands {}", bands.join(" "));
    for point in curve {
        let _ = writeln!(
            out,
            "{:>10.1} Hz {:>+8.2} dB",
            point.frequency_hz, point.gain_db
        );
    }
    out
}

fn run(options: Options) -> Result<String> {
    let config_path = options
        .config_path
        .unwrap_or_else(|| default_config_path(CONFIG_FILE));
    let mut config: EqualizerConfig = load_config(&config_path);
    if let Some(preset) = options.preset {
        config.preset = Some(preset);
    }
    if let Some(points) = options.points {
        config.response_points = points;
    }
    config
        .validate()
        .with_context(|| format!("invalid configuration (presets: {})", PRESET_NAMES.join(", ")))?;

    let mut state = EqualizerState::from_config(&config)?;
    if !options.gains.is_empty() {
        let written = state.set_bands(&options.gains)?;
        log::info!("Set {} of {} bands from the command line", written, state.band_count());
    }

    if let Some(path) = &options.save_config {
        save_config(&config, path)?;
    }

    let mut composer = ResponseComposer::new(config.layout());
    let curve = composer.compute_curve(
        state.bands(),
        &config.frequency_axis(),
        config.response_points,
        config.sample_rate_hz,
    )?;
    Ok(render(&config, &state, &curve, options.csv))
}

fn main() -> Result<()> {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = parse_args(std::env::args().skip(1))?;
    if options.help {
        println!("{}", USAGE);
        println!("presets: {}", PRESET_NAMES.join(", "));
        return Ok(());
    }

    print!("{}", run(options)?);
    Ok(())
}
