use anyhow::Result;
use asset_gen::{
    favicon::generate_favicon,
    social::generate_social,
    splash::{generate_splash, SplashOptions},
    AssetLayout,
};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "asset-gen",
    about = "Generate the favicon, iOS splash screens and social images of the web frontend"
)]
struct Args {
    /// Root of the web repository (contains frontend/ and backend/).
    #[clap(long, value_name = "DIR", default_value = ".", global = true)]
    root: PathBuf,

    /// Print diagnostic detail (-v debug, -vv trace).
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pack the favicon PNGs in frontend/public into favicon.ico
    Favicon,
    /// Render every apple-splash image referenced by index.html
    Splash,
    /// Render the social preview cards with the logo badge
    Social,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let layout = AssetLayout::new(args.root);
    log::debug!("asset root: {}", layout.root().display());

    match args.command {
        Command::Favicon => {
            generate_favicon(&layout)?;
        }
        Command::Splash => {
            generate_splash(&layout, &SplashOptions::default())?;
        }
        Command::Social => {
            generate_social(&layout)?;
        }
    }

    Ok(())
}
