#![deny(unsafe_code)]
//! CLI binary for randcolor.
//!
//! Subcommands:
//! - `generate`: uniform random colors of one model
//! - `mutate`: random perturbations of a given color
//! - `list`: print models, their channels and operation kinds

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use randcolor_core::{AnyColor, ChannelOp, ColorModel, Opacity, Recipe, Rgb, Xorshift64};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "randcolor", about = "Uniform random colors and perturbations")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw colors uniformly from a model's whole valid space.
    Generate {
        /// Color model (rgb, cmy, cmyk, hsv, hsl, hsy, hcv, hcl, hcy).
        #[arg(short, long, required_unless_present = "config")]
        model: Option<String>,

        /// Number of colors.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Fixed opacity for every color.
        #[arg(long, conflicts_with = "random_opacity")]
        opacity: Option<f64>,

        /// Draw each color's opacity uniformly.
        #[arg(long)]
        random_opacity: bool,

        /// Read model, seed, count and opacity from a JSON recipe instead.
        #[arg(long, conflicts_with_all = ["model", "opacity", "random_opacity"])]
        config: Option<PathBuf>,
    },
    /// Perturb a color with shift, spread or lerp.
    Mutate {
        /// Model in which the perturbation runs.
        #[arg(short, long)]
        model: String,

        /// Starting color as hex (#rrggbb or #rrggbbaa).
        #[arg(short, long)]
        color: String,

        /// Channel name or abbreviation, or "all" for every color channel.
        #[arg(long, default_value = "all")]
        channel: String,

        /// Operation kind (shift, shift-range, spread, spread-range, lerp).
        #[arg(long, required_unless_present = "target")]
        op: Option<String>,

        /// Operation parameters as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Interpolate the whole color toward this hex color instead.
        #[arg(long, conflicts_with = "op")]
        target: Option<String>,

        /// Number of independent perturbations of the starting color.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// List color models, their channels and operation kinds.
    List,
}

fn parse_model(name: &str) -> Result<ColorModel, CliError> {
    name.parse::<ColorModel>().map_err(CliError::from)
}

fn print_colors(colors: &[AnyColor], json: bool) -> Result<(), CliError> {
    if json {
        let out: Vec<_> = colors
            .iter()
            .map(|c| serde_json::json!({"hex": c.to_rgb().to_hex(), "color": c}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for c in colors {
            let channels: Vec<String> = c
                .channels()
                .iter()
                .map(|(name, v)| format!("{name}={v:.4}"))
                .collect();
            println!("{}  {}  {}", c.to_rgb().to_hex(), c.model(), channels.join(" "));
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            if cli.json {
                let models: serde_json::Map<String, serde_json::Value> = ColorModel::ALL
                    .iter()
                    .map(|m| (m.name().to_string(), serde_json::json!(m.channel_names())))
                    .collect();
                let info = serde_json::json!({
                    "models": models,
                    "operations": ChannelOp::KINDS,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Models:");
                for m in ColorModel::ALL {
                    println!("  {:<5} {}", m.name(), m.channel_names().join(", "));
                }
                println!("Operations:");
                println!("  {}", ChannelOp::KINDS.join(", "));
            }
        }
        Command::Generate {
            model,
            count,
            seed,
            opacity,
            random_opacity,
            config,
        } => {
            let recipe = match (config, model) {
                (Some(path), _) => Recipe::load(&path)?,
                (None, Some(name)) => Recipe {
                    model: parse_model(&name)?,
                    seed,
                    count,
                    opacity: if random_opacity {
                        Opacity::Random
                    } else {
                        Opacity::Fixed(opacity.unwrap_or(1.0))
                    },
                },
                (None, None) => {
                    return Err(CliError::Input("either --model or --config is required".into()))
                }
            };
            let colors = recipe.generate()?;
            print_colors(&colors, cli.json)?;
        }
        Command::Mutate {
            model,
            color,
            channel,
            op,
            params,
            target,
            count,
            seed,
        } => {
            let model = parse_model(&model)?;
            let start = model.from_rgb(Rgb::from_hex(&color)?);
            let mut rng = Xorshift64::new(seed);

            let colors = match (target, op) {
                (Some(hex), _) => {
                    let goal = AnyColor::Rgb(Rgb::from_hex(&hex)?);
                    (0..count)
                        .map(|_| start.lerp_toward(&goal, &mut rng))
                        .collect::<Result<Vec<_>, _>>()?
                }
                (None, Some(kind)) => {
                    let params: serde_json::Value = serde_json::from_str(&params)
                        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
                    let op = ChannelOp::from_params(&kind, &params)?;
                    let channel = (!channel.eq_ignore_ascii_case("all")).then_some(channel.as_str());
                    log::debug!("applying {} to {} of {start:?}", op.kind(), channel.unwrap_or("all"));
                    (0..count)
                        .map(|_| start.mutate(channel, op, &mut rng))
                        .collect::<Result<Vec<_>, _>>()?
                }
                (None, None) => {
                    return Err(CliError::Input("either --op or --target is required".into()))
                }
            };
            print_colors(&colors, cli.json)?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
