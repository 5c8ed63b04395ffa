use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;

use installer_assets::assets;

/// Generate the installer sidebar and header bitmaps.
#[derive(Parser, Debug)]
#[command(name = "installer-assets", version)]
struct Opts {
    /// Directory to write the bitmaps into, created if missing
    #[arg(long, value_name = "DIR", default_value = assets::DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Log rasterization details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Error> {
    let opts = Opts::parse();

    let level = if opts.verbose { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(level));

    assets::generate(&opts.out_dir, &assets::installer_assets())?;

    println!("Installer assets created in {}/", opts.out_dir.display());

    Ok(())
}
