//! iOS splash screens.
//!
//! `index.html` links one `apple-touch-startup-image` per device, each named
//! after its pixel size (`apple-splash-2048x2732.png`,
//! `apple-splash-landscape-2732x2048.png`, ...). Every referenced file is
//! rendered from the hero photo with a cover resize.

use crate::{cover::cover_resize_crop, error::AssetError, layout::AssetLayout, png::save_png};
use anyhow::{Context, Result};
use image::DynamicImage;
use regex::Regex;
use std::{
    collections::BTreeSet,
    fs::{self, create_dir_all},
    path::{Path, PathBuf},
    process::{Command, Stdio},
    sync::OnceLock,
};

/// Where the PNG optimizer is expected to be installed.
pub const OPTIPNG_PATH: &str = "/opt/homebrew/bin/optipng";

#[derive(Debug, Clone)]
pub struct SplashOptions {
    pub optimizer: PathBuf,
}

impl Default for SplashOptions {
    fn default() -> Self {
        Self {
            optimizer: PathBuf::from(OPTIPNG_PATH),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerOutcome {
    /// The optimizer binary was not installed.
    Skipped,
    /// The optimizer ran once per file; `failures` exited non-zero.
    Ran { files: usize, failures: usize },
}

#[derive(Debug, Default)]
pub struct SplashReport {
    pub files: Vec<PathBuf>,
    pub optimizer: Option<OptimizerOutcome>,
}

fn splash_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"apple-splash[-\w]*-\d+x\d+\.png").expect("splash filename pattern is valid")
    })
}

fn dimensions_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d+)x(\d+)\.png$").expect("splash dimensions pattern is valid")
    })
}

/// Every distinct splash filename referenced by `html`, sorted.
pub fn extract_splash_filenames(html: &str) -> BTreeSet<String> {
    splash_pattern()
        .find_iter(html)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Width and height encoded in a splash filename, e.g. `2048x2732.png`.
pub fn parse_dimensions(filename: &str) -> Option<(u32, u32)> {
    let captures = dimensions_pattern().captures(filename)?;
    let width: u32 = captures[1].parse().ok()?;
    let height: u32 = captures[2].parse().ok()?;

    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}

/// Run the optimizer in place on each file, if it is installed.
pub fn run_optimizer(optimizer: &Path, files: &[PathBuf]) -> Result<OptimizerOutcome> {
    if !optimizer.exists() {
        println!(
            "\noptipng not found at {}\nYou can optimize these PNGs with optipng later.",
            optimizer.display()
        );
        return Ok(OptimizerOutcome::Skipped);
    }

    println!("\nRunning optipng on generated files...");
    let mut failures = 0;
    for file in files {
        log::debug!("{} -o7 {}", optimizer.display(), file.display());
        let status = Command::new(optimizer)
            .arg("-o7")
            .arg(file)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("Failed to run {}", optimizer.display()))?;

        if !status.success() {
            log::warn!("optipng exited with {status} for {}", file.display());
            failures += 1;
        }
    }
    println!("optipng completed");

    Ok(OptimizerOutcome::Ran {
        files: files.len(),
        failures,
    })
}

pub fn generate_splash(layout: &AssetLayout, options: &SplashOptions) -> Result<SplashReport> {
    let html_path = AssetError::require("index.html", layout.index_html())?;
    let hero_path = AssetError::require("hero source", layout.hero_source())?;

    let html = fs::read_to_string(&html_path)
        .with_context(|| format!("Failed to read {}", html_path.display()))?;
    let filenames = extract_splash_filenames(&html);
    if filenames.is_empty() {
        println!("No apple-splash references found in index.html");
        return Ok(SplashReport::default());
    }

    println!("Found {} splash references", filenames.len());
    for name in &filenames {
        println!("  {name}");
    }

    let hero = image::open(&hero_path).map_err(|source| AssetError::Decode {
        path: hero_path.clone(),
        source,
    })?;
    let hero = DynamicImage::ImageRgba8(hero.into_rgba8());

    let out_dir = layout.splash_dir();
    create_dir_all(&out_dir).context("Can't create splash directory")?;

    let mut files = Vec::new();
    for name in &filenames {
        let Some((width, height)) = parse_dimensions(name) else {
            println!("Skipping (no WxH found): {name}");
            continue;
        };

        println!("Generating {name} -> {width}x{height}");
        let splash = cover_resize_crop(&hero, width, height)?;
        let out_path = out_dir.join(name);
        save_png(&splash.into_rgba8(), &out_path)?;
        files.push(out_path);
    }

    println!("\nGenerated {} files", files.len());
    for path in &files {
        let size = fs::metadata(path)
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        println!("  {name} {size}");
    }

    let optimizer = run_optimizer(&options.optimizer, &files)?;

    Ok(SplashReport {
        files,
        optimizer: Some(optimizer),
    })
}
