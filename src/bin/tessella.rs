use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tessella::{
    config::Config,
    geometry::{Point, Rect, Size},
    log,
    replay::replay,
};

#[derive(Parser)]
struct Cli {
    /// Config file to read settings from. Defaults to ~/.tessella.toml if it
    /// exists.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a recorded trace and print the resulting tree.
    Replay { trace: PathBuf },

    /// Check that a trace replays cleanly and leaves a normalized tree.
    Validate { trace: PathBuf },

    /// Replay a trace and print the frame of every pane.
    Frames {
        trace: PathBuf,
        #[arg(long, default_value_t = 1280.0)]
        width: f64,
        #[arg(long, default_value_t = 800.0)]
        height: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let opt = Cli::parse();
    log::init_logging();

    let config = match &opt.config {
        Some(path) => Config::read(path)?,
        None => Config::load()?,
    };

    match opt.command {
        Command::Replay { trace } => {
            let manager = replay(&trace, config.settings)?;
            print!("{}", manager.draw_tree());
        }
        Command::Validate { trace } => {
            let manager = replay(&trace, config.settings)
                .with_context(|| format!("replaying {}", trace.display()))?;
            if let Some(root) = manager.root() {
                if !root.is_normalized() {
                    bail!("replay left a degenerate tree:\n{}", manager.draw_tree());
                }
            }
        }
        Command::Frames { trace, width, height } => {
            let manager = replay(&trace, config.settings)?;
            let screen = Rect::new(Point::new(0.0, 0.0), Size::new(width, height));
            for leaf in manager.calculate_layout(screen) {
                let Rect { origin, size } = leaf.frame;
                println!(
                    "{} {} {},{} {}x{}",
                    leaf.path, leaf.entry, origin.x, origin.y, size.width, size.height
                );
            }
        }
    }
    Ok(())
}
