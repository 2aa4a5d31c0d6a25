use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use thumbforge::{
    apply_preset, decode_image, render_thumbnail, save_png, AssetSlots, Canvas, FontLibrary,
    PresetId, SlotKind, ThumbnailSettings,
};

#[derive(Parser, Debug)]
#[command(name = "thumbforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a thumbnail as a PNG.
    Render(RenderArgs),
    /// List the built-in style presets.
    Presets,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Settings JSON file; missing fields take their defaults.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Apply a built-in preset (after loading --settings).
    #[arg(long)]
    preset: Option<String>,

    /// Background image (PNG/JPEG/...).
    #[arg(long)]
    background: Option<PathBuf>,

    /// Author image for the circular badge.
    #[arg(long)]
    author: Option<PathBuf>,

    /// Register a font file under a family name, as `family=path`.
    /// May be repeated.
    #[arg(long = "font", value_name = "FAMILY=PATH")]
    fonts: Vec<String>,

    /// Load every .ttf/.otf in a directory, family named after the file.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = thumbforge::DEFAULT_FILENAME)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Presets => cmd_presets(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut settings = match &args.settings {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read settings '{}'", path.display()))?;
            serde_json::from_str::<ThumbnailSettings>(&json)
                .with_context(|| format!("parse settings '{}'", path.display()))?
        }
        None => ThumbnailSettings::default(),
    };

    if let Some(name) = &args.preset {
        match PresetId::from_name(name) {
            Some(id) => apply_preset(&mut settings, id),
            None => tracing::warn!(preset = %name, "unknown preset, ignoring"),
        }
    }

    let mut assets = AssetSlots::new();
    if let Some(path) = &args.background {
        assets.assign(SlotKind::Background, decode_from_path(path)?);
    }
    if let Some(path) = &args.author {
        assets.assign(SlotKind::Author, decode_from_path(path)?);
    }

    let mut fonts = FontLibrary::new();
    if let Some(dir) = &args.fonts_dir {
        fonts
            .load_dir(dir)
            .with_context(|| format!("load fonts from '{}'", dir.display()))?;
    }
    for entry in &args.fonts {
        let (family, path) = entry
            .split_once('=')
            .with_context(|| format!("--font expects FAMILY=PATH, got '{entry}'"))?;
        fonts
            .load_file(family, Path::new(path))
            .with_context(|| format!("load font '{path}'"))?;
    }

    let frame = render_thumbnail(&settings, &assets, &fonts, Canvas::THUMBNAIL)?;

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    save_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    for id in PresetId::ALL {
        let json = serde_json::to_string(thumbforge::preset(id))?;
        println!("{:<10} {json}", id.name());
    }
    Ok(())
}

fn decode_from_path(path: &Path) -> anyhow::Result<thumbforge::PreparedImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let img =
        decode_image(&bytes).with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(img)
}
