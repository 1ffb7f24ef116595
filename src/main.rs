//! Tag Cloud CLI
//!
//! Usage:
//!   tag-cloud [OPTIONS]
//!
//! Options:
//!   -p, --preset <NAME>   Built-in preset to render (default: mixed-random)
//!   -c, --config <FILE>   TOML file with [[preset]] tables
//!   -n, --count <N>       Override the number of shapes
//!   --seed <N>            Override the random seed for shape sizes
//!   --no-axes             Hide the lines through the cloud center
//!   -o, --output <FILE>   Write SVG to a file instead of stdout
//!   --list-presets        List available presets
//!   -h, --help            Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use tag_cloud::{render_preset, CloudError, CloudPreset, SvgConfig};

#[derive(Parser)]
#[command(name = "tag-cloud")]
#[command(about = "Lay out shapes in a circular cloud and render it as SVG")]
struct Cli {
    /// Preset name (built-in, or from --config)
    #[arg(short, long, default_value = "mixed-random")]
    preset: String,

    /// TOML file with [[preset]] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of shapes
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Hide the lines through the cloud center
    #[arg(long)]
    no_axes: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List available presets and exit
    #[arg(long)]
    list_presets: bool,
}

fn main() {
    tag_cloud::init_tracing();
    let cli = Cli::parse();

    let presets = match load_presets(&cli) {
        Ok(presets) => presets,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.list_presets {
        for preset in &presets {
            println!(
                "{:<16} {}x{}  {} shapes",
                preset.name, preset.width, preset.height, preset.count
            );
        }
        return;
    }

    if let Err(e) = run(&cli, presets) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_presets(cli: &Cli) -> Result<Vec<CloudPreset>, CloudError> {
    match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading presets");
            Ok(CloudPreset::from_file(path)?)
        }
        None => Ok(CloudPreset::builtins()),
    }
}

fn run(cli: &Cli, presets: Vec<CloudPreset>) -> Result<(), CloudError> {
    let mut preset = CloudPreset::find(presets, &cli.preset)?;
    if let Some(count) = cli.count {
        preset.count = count;
    }
    if let Some(seed) = cli.seed {
        preset.seed = seed;
    }

    if cli.no_axes {
        preset.style.show_axes = Some(false);
    }

    let svg = render_preset(&preset, &SvgConfig::default())?;

    match &cli.output {
        Some(path) => {
            fs::write(path, svg)?;
            tracing::info!(path = %path.display(), "wrote cloud");
        }
        None => println!("{}", svg),
    }
    Ok(())
}
