// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command line host: replay gestures on an image, preview the mask, share the crop.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use image::ImageReader;

use snapmask::app::Gesture;
use snapmask::ui::raster::{FileShare, ImageSurface, RasterRenderer};
use snapmask::{Host, MaskConfig, OverlayMessage, OverlayRegistry, UpdateOutcome};

/// Select a region of an image the way the on-screen mask would, then share it.
#[derive(Parser, Debug, Clone)]
#[command(name = "snapmask", version, about)]
pub struct Args {
    /// Image to place beneath the mask.
    pub file: PathBuf,

    /// Pointer drag as X,Y points separated by ':' (repeatable).
    #[arg(long = "drag", value_name = "X,Y:X,Y")]
    pub drags: Vec<Gesture>,

    /// Expand the selection to the whole image after the drags.
    #[arg(long)]
    pub full_screen: bool,

    /// Pixels per container unit.
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    /// Write the rendered mask to this file.
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Directory for the shared snapshot.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Config file (JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Close the mask without sharing.
    #[arg(long)]
    pub cancel: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => MaskConfig::load(path),
        None => MaskConfig::load_default(),
    };

    let content = ImageReader::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?
        .decode()
        .with_context(|| format!("Failed to decode {}", args.file.display()))?;

    let mut surface = ImageSurface::new(content, args.scale);
    let mut sink = FileShare::new(args.out.clone().unwrap_or_else(|| config.output_dir()));
    let bounds = surface.bounds();
    log::info!(
        "Masking {} ({bounds:?}), snapshots go to {}",
        args.file.display(),
        sink.dir().display()
    );

    let closed = Rc::new(Cell::new(false));
    let mut registry = OverlayRegistry::new();
    let key = args.file.clone();
    {
        let overlay = registry.attach(key.clone(), bounds, None, &config)?;
        let flag = Rc::clone(&closed);
        overlay.set_on_close(move || flag.set(true));
        overlay.set_on_change(|rect| log::debug!("Selection changed to {rect:?}"));
    }

    let mut messages: Vec<OverlayMessage> =
        args.drags.iter().flat_map(Gesture::messages).collect();
    if args.full_screen {
        messages.push(OverlayMessage::FullScreen);
    }

    for message in messages {
        let mut host = Host::new(&mut surface, &mut sink);
        registry.dispatch(&key, message, &mut host)?;
    }

    let selection = registry
        .get(&key)
        .map(|overlay| overlay.selection())
        .context("Overlay closed before the final action")?;

    if let Some(preview) = &args.preview {
        if let Some(overlay) = registry.get(&key) {
            let mut renderer = RasterRenderer::new(surface.image(), surface.scale());
            overlay.draw(&mut renderer);
            renderer
                .save(preview)
                .with_context(|| format!("Failed to write preview {}", preview.display()))?;
        }
    }

    let final_message = if args.cancel {
        OverlayMessage::Cancel
    } else {
        OverlayMessage::Share
    };
    let outcome = {
        let mut host = Host::new(&mut surface, &mut sink);
        registry.dispatch(&key, final_message, &mut host)?
    };

    match outcome {
        UpdateOutcome::Dismissed if args.cancel => {
            println!(
                "cancelled at {} {} {} {}",
                selection.x, selection.y, selection.width, selection.height
            );
        }
        UpdateOutcome::Dismissed => {
            for path in sink.written() {
                println!("{}", path.display());
            }
        }
        UpdateOutcome::ShareAborted(e) => bail!("Share aborted: {e}"),
        other => bail!("Unexpected outcome {other:?}"),
    }

    log::debug!("Close callback fired: {}", closed.get());
    Ok(())
}
