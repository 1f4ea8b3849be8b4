//! Loop Layout - Entry Point

use clap::Parser;
use loop_layout::config::Preset;
use loop_layout::simulation::ScrollSimulation;
use loop_layout::LoopLayout;
use std::path::PathBuf;
use tracing::info;

/// Loop Layout - simulate scrolling through an infinitely looping carousel
#[derive(Parser, Debug)]
#[command(name = "looplayout")]
#[command(version)]
#[command(about = "Simulate a scroll session over a looping carousel layout")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start from a named preset instead of the configured layout
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Number of items in the carousel
    #[arg(short = 'n', long, default_value_t = 20)]
    pub items: usize,

    /// Viewport width
    #[arg(long, default_value_t = 300.0)]
    pub width: f64,

    /// Viewport height
    #[arg(long, default_value_t = 100.0)]
    pub height: f64,

    /// Scroll distance between frames (negative scrolls backwards)
    #[arg(short, long, default_value_t = 230.0, allow_negative_numbers = true)]
    pub step: f64,

    /// Number of frames to simulate (must be positive)
    #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,

    /// Simulate active accessibility navigation
    #[arg(long)]
    pub accessibility: bool,

    /// Disable wrapping
    #[arg(long)]
    pub no_wrap: bool,

    /// Snap to the nearest item after the last frame
    #[arg(long)]
    pub settle: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = loop_layout::config::load_config_with_precedence(args.config.clone())?;
        let merged = loop_layout::config::merge_config(config_file);
        let with_env = loop_layout::config::apply_env_overrides(merged);

        // Wrap is only overridden when the flag was given
        let wrap_override = if args.no_wrap { Some(false) } else { None };
        loop_layout::config::apply_cli_overrides(with_env, args.preset, wrap_override)
    };
    config.layout.validate()?;

    loop_layout::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let mut simulation = ScrollSimulation::new(
        LoopLayout::new(config.layout),
        args.items,
        args.width,
        args.height,
    )
    .with_accessibility(args.accessibility);

    simulation.pass();
    for _ in 1..args.frames {
        simulation.scroll_by(args.step);
    }
    if args.settle {
        simulation.settle(args.step);
    }

    let report = simulation.report();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["looplayout", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["looplayout", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["looplayout"]);
        assert_eq!(args.config, None);
        assert_eq!(args.preset, None);
        assert_eq!(args.items, 20);
        assert_eq!(args.width, 300.0);
        assert_eq!(args.height, 100.0);
        assert_eq!(args.step, 230.0);
        assert_eq!(args.frames, 5);
        assert!(!args.accessibility);
        assert!(!args.no_wrap);
        assert!(!args.settle);
        assert!(!args.json);
    }

    #[test]
    fn test_preset_loop() {
        let args = Args::parse_from(["looplayout", "--preset", "loop"]);
        assert_eq!(args.preset, Some(Preset::Loop));
    }

    #[test]
    fn test_preset_dial() {
        let args = Args::parse_from(["looplayout", "--preset", "dial"]);
        assert_eq!(args.preset, Some(Preset::Dial));
    }

    #[test]
    fn test_preset_invalid_rejects() {
        let result = Args::try_parse_from(["looplayout", "--preset", "spiral"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_items_short_flag() {
        let args = Args::parse_from(["looplayout", "-n", "7"]);
        assert_eq!(args.items, 7);
    }

    #[test]
    fn test_negative_step() {
        let args = Args::parse_from(["looplayout", "--step", "-120.5"]);
        assert_eq!(args.step, -120.5);
    }

    #[test]
    fn test_frames_rejects_zero() {
        let result = Args::try_parse_from(["looplayout", "-f", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["looplayout", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "looplayout",
            "--preset",
            "loop",
            "--items",
            "12",
            "--width",
            "320",
            "--height",
            "120",
            "-f",
            "9",
            "--accessibility",
            "--no-wrap",
            "--settle",
            "--json",
        ]);
        assert_eq!(args.preset, Some(Preset::Loop));
        assert_eq!(args.items, 12);
        assert_eq!(args.width, 320.0);
        assert_eq!(args.height, 120.0);
        assert_eq!(args.frames, 9);
        assert!(args.accessibility);
        assert!(args.no_wrap);
        assert!(args.settle);
        assert!(args.json);
    }

    #[test]
    fn test_no_wrap_flows_through_config_precedence_chain() {
        use loop_layout::config::{apply_cli_overrides, apply_env_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            preset: Some(Preset::Loop),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert!(merged.layout.wrap, "Loop preset wraps by default");

        // LOOPLAYOUT_WRAP is not set here, so the layout is unchanged
        let with_env = apply_env_overrides(merged);
        assert_eq!(with_env.layout, loop_layout::config::LayoutConfig::plain_loop());

        let with_cli = apply_cli_overrides(with_env, None, Some(false));
        assert!(!with_cli.layout.wrap, "CLI --no-wrap overrides all other sources");
    }
}
