use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Error};

use crate::{
    bitmap,
    canvas::{Canvas, Color},
    gradient::{rasterize, GradientSpec, Orientation},
};

/// Navy, `#0f172a`.
pub const START_COLOR: Color = Color::new(15, 23, 42);

/// Purple, `#312e81`.
pub const END_COLOR: Color = Color::new(49, 46, 129);

pub const DEFAULT_OUT_DIR: &str = "build";

/// A one pixel high horizontal line drawn over the finished gradient.
///
/// The color is written as-is. There is no alpha channel in the output, so a translucent
/// highlight would end up fully opaque anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub row: usize,
    pub from: usize,
    pub to: usize,
    pub color: Color,
}

impl Highlight {
    pub fn apply(&self, canvas: &mut Canvas) {
        canvas.draw_hline(self.row, self.from, self.to, self.color);
    }
}

/// A single image to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub file_name: String,
    pub gradient: GradientSpec,
    pub highlight: Option<Highlight>,
}

impl Asset {
    pub fn new(file_name: impl Into<String>, gradient: GradientSpec) -> Self {
        Self {
            file_name: file_name.into(),
            gradient,
            highlight: None,
        }
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub fn render(&self) -> Canvas {
        let mut canvas = rasterize(&self.gradient);
        if let Some(highlight) = &self.highlight {
            highlight.apply(&mut canvas);
        }
        canvas
    }
}

/// The installer sidebar, 164x314 with a vertical gradient and a white line across row 50.
pub fn sidebar() -> Asset {
    Asset::new(
        "installer_sidebar.bmp",
        GradientSpec::new(164, 314, START_COLOR, END_COLOR, Orientation::Vertical),
    )
    .with_highlight(Highlight {
        row: 50,
        from: 20,
        to: 144,
        color: Color::white(),
    })
}

/// The installer header, 150x57 with a horizontal gradient.
pub fn header() -> Asset {
    Asset::new(
        "installer_header.bmp",
        GradientSpec::new(150, 57, START_COLOR, END_COLOR, Orientation::Horizontal),
    )
}

pub fn installer_assets() -> Vec<Asset> {
    vec![sidebar(), header()]
}

/// Render every asset into `out_dir`, creating the directory first if needed. Returns the paths
/// written, in order.
pub fn generate(out_dir: &Path, assets: &[Asset]) -> Result<Vec<PathBuf>, Error> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create directory `{}`", out_dir.display()))?;
    log::debug!("output directory `{}` ready", out_dir.display());

    let mut written = Vec::with_capacity(assets.len());
    for asset in assets {
        let path = out_dir.join(&asset.file_name);
        let canvas = asset.render();
        bitmap::save(&canvas, &path)?;
        log::info!(
            "wrote {}x{} `{}`",
            canvas.width(),
            canvas.height(),
            path.display()
        );
        written.push(path);
    }

    Ok(written)
}
