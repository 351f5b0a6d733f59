/*!
 * PDF page rasterization for the on-screen preview.
 *
 * Rendering goes through Google PDFium, which copes with CIDFonts, embedded
 * fonts and complex layouts that pure-Rust extraction cannot draw. Each
 * operation loads a fresh `Pdfium` handle because the upstream type is
 * `!Send`; the OS caches the underlying dlopen, so repeat loads are cheap.
 *
 * Images are used purely for display and never persisted to disk.
 */

use log::debug;
use pdfium_render::prelude::*;
use std::fs;
use std::path::Path;

use crate::errors::PdfError;

/// Maximum preview width in pixels
pub const MAX_PREVIEW_WIDTH: u32 = 1200;

/// Maximum preview height in pixels
pub const MAX_PREVIEW_HEIGHT: u32 = 800;

/// A single rasterized page, stored as raw RGBA so the view layer can turn
/// it into whatever texture type it needs
#[derive(Debug, Clone)]
pub struct PagePreview {
    /// Width in pixels, at most [`MAX_PREVIEW_WIDTH`]
    pub width: u32,
    /// Height in pixels, at most [`MAX_PREVIEW_HEIGHT`]
    pub height: u32,
    /// Tightly packed RGBA pixel data, `width * height * 4` bytes
    pub rgba: Vec<u8>,
}

/// Renders every page of a document to a bounded-size preview image.
///
/// A failure on any page fails the whole preview; there is no
/// partial-preview fallback.
pub trait PageRenderer: Send {
    /// Rasterize all pages of the document at `path`, in page order
    fn render_pages(&self, path: &Path) -> Result<Vec<PagePreview>, PdfError>;
}

/// Compute preview pixel dimensions for a page, shrinking (never enlarging)
/// to fit within [`MAX_PREVIEW_WIDTH`] x [`MAX_PREVIEW_HEIGHT`] while
/// preserving the aspect ratio.
///
/// PDF points map 1:1 to pixels before the fit, matching a 72 DPI render.
pub fn preview_dimensions(width_points: f32, height_points: f32) -> (u32, u32) {
    let raw_w = width_points.max(1.0);
    let raw_h = height_points.max(1.0);

    let scale = (MAX_PREVIEW_WIDTH as f32 / raw_w)
        .min(MAX_PREVIEW_HEIGHT as f32 / raw_h)
        .min(1.0);

    let w = ((raw_w * scale) as u32).clamp(1, MAX_PREVIEW_WIDTH);
    let h = ((raw_h * scale) as u32).clamp(1, MAX_PREVIEW_HEIGHT);
    (w, h)
}

/// PDFium-backed page renderer used by the desktop application.
///
/// Stateless; the library is loaded per render call and load failures
/// surface through the status line of the operation that needed them.
pub struct PdfiumPageRenderer;

impl PdfiumPageRenderer {
    /// Create a renderer
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfiumPageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the PDFium dynamic library.
///
/// Discovery order:
/// 1. `PDFIUM_DYNAMIC_LIB_PATH` env var (explicit path to the library file)
/// 2. Alongside the running executable
/// 3. System library search paths
fn load_pdfium() -> Result<Pdfium, PdfError> {
    if let Ok(path) = std::env::var("PDFIUM_DYNAMIC_LIB_PATH") {
        debug!("Loading PDFium from PDFIUM_DYNAMIC_LIB_PATH: {}", path);
        let bindings = Pdfium::bind_to_library(&path).map_err(|e| {
            PdfError::RendererUnavailable(format!("Failed to load PDFium from {}: {}", path, e))
        })?;
        return Ok(Pdfium::new(bindings));
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let lib_path =
                Pdfium::pdfium_platform_library_name_at_path(exe_dir.to_string_lossy().as_ref());
            if let Ok(bindings) = Pdfium::bind_to_library(&lib_path) {
                debug!("Loaded PDFium from executable directory");
                return Ok(Pdfium::new(bindings));
            }
        }
    }

    let bindings = Pdfium::bind_to_system_library().map_err(|e| {
        PdfError::RendererUnavailable(format!(
            "PDFium library not found. Set PDFIUM_DYNAMIC_LIB_PATH or install PDFium: {}",
            e
        ))
    })?;
    Ok(Pdfium::new(bindings))
}

impl PageRenderer for PdfiumPageRenderer {
    fn render_pages(&self, path: &Path) -> Result<Vec<PagePreview>, PdfError> {
        let bytes = fs::read(path)?;

        let pdfium = load_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(&bytes, None)
            .map_err(|e| PdfError::Parse(e.to_string()))?;

        let pages = document.pages();
        if pages.len() == 0 {
            return Err(PdfError::NoPages);
        }

        let mut previews = Vec::with_capacity(pages.len() as usize);
        for (index, page) in pages.iter().enumerate() {
            let (target_w, target_h) =
                preview_dimensions(page.width().value, page.height().value);

            let config = PdfRenderConfig::new()
                .set_target_width(target_w as i32)
                .set_maximum_height(target_h as i32);

            let bitmap = page
                .render_with_config(&config)
                .map_err(|e| PdfError::Render {
                    page: index,
                    reason: e.to_string(),
                })?;

            let rgba_image = bitmap.as_image().to_rgba8();
            let (width, height) = (rgba_image.width(), rgba_image.height());
            previews.push(PagePreview {
                width,
                height,
                rgba: rgba_image.into_raw(),
            });
        }

        debug!("Rendered {} preview pages from {:?}", previews.len(), path);
        Ok(previews)
    }
}

/// Mock renderer producing solid white pages, for tests and headless runs
/// that cannot load the PDFium binary
pub struct MockPageRenderer {
    page_count: usize,
}

impl MockPageRenderer {
    /// Create a mock that always yields `page_count` preview pages
    pub fn new(page_count: usize) -> Self {
        Self { page_count }
    }
}

impl PageRenderer for MockPageRenderer {
    fn render_pages(&self, _path: &Path) -> Result<Vec<PagePreview>, PdfError> {
        if self.page_count == 0 {
            return Err(PdfError::NoPages);
        }
        let (width, height) = preview_dimensions(612.0, 792.0);
        let rgba = vec![0xFF; (width * height * 4) as usize];
        Ok((0..self.page_count)
            .map(|_| PagePreview {
                width,
                height,
                rgba: rgba.clone(),
            })
            .collect())
    }
}
