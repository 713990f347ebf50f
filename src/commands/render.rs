//! Render subcommand handler

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use termsvg::cli::RenderArgs;
use termsvg::svg::load_frames;
use termsvg::{Config, SvgGenerator, Theme};

/// Load config and frames, generate the SVG and write it out.
pub fn handle_render(args: &RenderArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, args)?;

    let frames = load_frames(&args.frames)?;
    if frames.is_empty() {
        tracing::warn!(path = %args.frames.display(), "capture has no frames");
    }

    let svg = SvgGenerator::new(config).generate(&frames);

    match &args.output {
        Some(path) => {
            if !has_svg_extension(path) {
                tracing::warn!(path = %path.display(), "output file does not end in .svg");
            }
            fs::write(path, &svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = svg.len(), "wrote svg");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Apply command-line overrides on top of the loaded config.
pub fn apply_overrides(config: &mut Config, args: &RenderArgs) -> Result<()> {
    if let Some(name) = &args.theme {
        config.theme = Theme::by_name(name)?;
    }
    if let Some(bar) = args.window_bar {
        config.style.window_bar = bar;
    }
    if let Some(width) = args.width {
        config.style.width = width;
    }
    if let Some(height) = args.height {
        config.style.height = height;
    }
    if let Some(duration) = args.duration {
        config.style.duration = Some(duration);
    }
    Ok(())
}

/// Whether `path` has an `.svg` extension (any case).
pub fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}
