use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing::{warn, Level};

use face_bind::load_blend_shapes;

use crate::manifest::ManifestFiles;
use crate::report::Report;

mod manifest;
mod report;

#[derive(Parser)]
#[command(about = "Show how a mesh's blend shapes bind to face tracking expressions")]
struct Options {
    /// JSON manifest: {"blendShapes": [...], "weightSlots": N}
    pub manifest: PathBuf,
    /// Override the number of weight slots on the destination mesh.
    #[arg(long, short = 's')]
    pub weight_slots: Option<usize>,
    #[arg(long)]
    pub json: bool,
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let files = ManifestFiles {
        weight_slots: options.weight_slots,
    };
    let Some(mesh) = runtime.block_on(load_blend_shapes(&files, options.manifest.as_path()))? else {
        bail!("no manifest at {}", options.manifest.display());
    };

    if mesh.index.is_empty() {
        warn!("{} has no named blend shapes", options.manifest.display());
    }

    let report = Report::build(&mesh);
    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}
