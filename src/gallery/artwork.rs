// SPDX-License-Identifier: MPL-2.0
//! Artwork image resources.
//!
//! Artworks are embedded in the binary so the gallery never touches the
//! filesystem. SVG sources are rasterized with `resvg` at display size and
//! cropped to a square, raster sources are handed to Iced as encoded bytes.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use resvg::usvg;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct ArtworkAssets;

/// Opaque reference to an artwork image resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(Cow<'static, str>);

impl ImageRef {
    /// References an asset bundled under `assets/artworks/`.
    #[must_use]
    pub const fn embedded(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    fn is_svg(&self) -> bool {
        std::path::Path::new(self.name())
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    }

    /// Returns the raw bytes of the referenced asset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Artwork`] if no asset with that name is bundled.
    pub fn bytes(&self) -> Result<Cow<'static, [u8]>> {
        ArtworkAssets::get(self.name())
            .map(|file| file.data)
            .ok_or_else(|| Error::Artwork(format!("missing artwork asset: {}", self.name())))
    }

    /// Loads the image as an Iced handle, rasterizing SVGs to `size`×`size`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Artwork`] if the asset is missing or cannot be rendered.
    pub fn load(&self, size: u32) -> Result<Handle> {
        if self.is_svg() {
            let (width, height, pixels) = self.rasterize(size)?;
            Ok(Handle::from_rgba(width, height, pixels))
        } else {
            Ok(Handle::from_bytes(self.bytes()?.into_owned()))
        }
    }

    /// Rasterizes an SVG asset to `size`×`size` straight RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Artwork`] if the asset is missing, is not an SVG, or
    /// cannot be parsed.
    pub fn rasterize(&self, size: u32) -> Result<(u32, u32, Vec<u8>)> {
        if !self.is_svg() {
            return Err(Error::Artwork(format!("not an SVG asset: {}", self.name())));
        }
        rasterize_svg(&self.bytes()?, size)
    }
}

/// Renders an SVG so it covers a `size`×`size` square, centered and cropped.
///
/// Returns straight (non-premultiplied) RGBA pixels.
fn rasterize_svg(data: &[u8], size: u32) -> Result<(u32, u32, Vec<u8>)> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|err| Error::Artwork(err.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| Error::Artwork(format!("invalid raster size: {size}")))?;

    let source = tree.size();
    let target = size as f32;
    let scale = (target / source.width()).max(target / source.height());
    let dx = (target - source.width() * scale) / 2.0;
    let dy = (target - source.height() * scale) / 2.0;
    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(dx, dy);

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok((size, size, pixels))
}

/// Decoded artwork handles, keyed by image reference.
///
/// Handles are produced at the single display size the cache was built with.
#[derive(Debug, Default)]
pub struct ArtworkCache {
    size: u32,
    handles: HashMap<ImageRef, Handle>,
}

impl ArtworkCache {
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size,
            handles: HashMap::new(),
        }
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Loads `image` into the cache if it is not already there.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`ImageRef::load`]; nothing is cached on failure.
    pub fn ensure_loaded(&mut self, image: &ImageRef) -> Result<()> {
        if self.handles.contains_key(image) {
            return Ok(());
        }
        match image.load(self.size) {
            Ok(handle) => {
                debug!(artwork = image.name(), size = self.size, "artwork loaded");
                self.handles.insert(image.clone(), handle);
                Ok(())
            }
            Err(err) => {
                warn!(artwork = image.name(), %err, "failed to load artwork");
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn get(&self, image: &ImageRef) -> Option<&Handle> {
        self.handles.get(image)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }
}
