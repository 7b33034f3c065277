//! Per-frame map raster.
//!
//! The map is kept once at base resolution. Each frame needs it at the
//! current scale, but only the part under the viewport. When zoomed in far
//! enough that the viewport shows less than the whole map, the visible
//! region is cropped from the base image first and only that is scaled;
//! otherwise the whole map is scaled. Both paths scale base pixels by the
//! same factor and are blitted against the same rounded camera offset, so
//! they agree wherever they overlap. The crop starts on a whole base pixel;
//! the part of the offset that falls inside that pixel is carried by the
//! blit destination rather than by the crop.

use crate::geometry::Rect;
use crate::scale::round_px;
use glam::{IVec2, Vec2};
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// How to produce the visible raster for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterPlan {
    /// Crop `source` (base pixels) and scale it to `output`
    Extract { source: Rect, output: (u32, u32) },
    /// Scale the whole base map to `output`
    Whole { output: (u32, u32) },
}

impl RasterPlan {
    /// Screen position of the planned raster's top-left corner.
    ///
    /// Entities are translated by the rounded camera offset, so the raster
    /// is too: the whole map sits at that offset, and a crop sits where its
    /// first base pixel lands after scaling.
    pub fn dest(&self, net_factor: f32, offset: Vec2) -> IVec2 {
        let pixel_offset = IVec2::new(round_px(offset.x), round_px(offset.y));
        match self {
            RasterPlan::Extract { source, .. } => {
                let origin = IVec2::new(
                    round_px(source.x as f32 * net_factor),
                    round_px(source.y as f32 * net_factor),
                );
                origin + pixel_offset
            }
            RasterPlan::Whole { .. } => pixel_offset,
        }
    }
}

/// The raster to blit and where its top-left goes on screen
#[derive(Debug, Clone, Copy)]
pub struct RasterFrame<'a> {
    pub image: &'a RgbaImage,
    pub dest: IVec2,
}

pub struct MapRasterCache {
    base: RgbaImage,
    cached: Option<(RasterPlan, RgbaImage)>,
}

/// Crop origin and length along one axis, in base pixels.
///
/// `scroll` is how far the map is scrolled, in screen pixels. The crop covers
/// the viewport plus one base pixel for the sub-pixel remainder, and never
/// leaves the base image.
fn source_span(scroll: i32, net_factor: f32, viewport: f32, base: u32) -> (i32, i32) {
    let base = base as i32;
    let needed = ((viewport / net_factor).ceil() as i32).clamp(1, base);
    let origin = ((scroll as f32 / net_factor).floor() as i32).clamp(0, base - needed);
    let extent = (needed + 1).min(base - origin);
    (origin, extent)
}

/// Length after scaling by exactly `net_factor`
fn scaled_len(len: i32, net_factor: f32) -> u32 {
    round_px(len as f32 * net_factor).max(1) as u32
}

impl MapRasterCache {
    pub fn new(base: RgbaImage) -> Self {
        Self { base, cached: None }
    }

    pub fn base_image(&self) -> &RgbaImage {
        &self.base
    }

    /// Mutable access to the base map (e.g. to stamp decals). Drops the cached frame.
    pub fn base_image_mut(&mut self) -> &mut RgbaImage {
        self.invalidate();
        &mut self.base
    }

    pub fn base_size(&self) -> Vec2 {
        Vec2::new(self.base.width() as f32, self.base.height() as f32)
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Decide which path this frame takes. Pure; depends only on the arguments.
    ///
    /// Scrolling within one base pixel keeps the same plan, so the cached
    /// raster is reused and only the blit destination moves.
    pub fn plan(&self, net_factor: f32, offset: Vec2, viewport: Vec2) -> RasterPlan {
        let (base_w, base_h) = self.base.dimensions();
        let scaled = self.base_size() * net_factor;
        if viewport.x < scaled.x && viewport.y < scaled.y {
            let scroll = IVec2::new(-round_px(offset.x), -round_px(offset.y));
            let (x, width) = source_span(scroll.x, net_factor, viewport.x, base_w);
            let (y, height) = source_span(scroll.y, net_factor, viewport.y, base_h);
            RasterPlan::Extract {
                source: Rect::new(x, y, width, height),
                output: (scaled_len(width, net_factor), scaled_len(height, net_factor)),
            }
        } else {
            RasterPlan::Whole {
                output: (
                    round_px(scaled.x).max(1) as u32,
                    round_px(scaled.y).max(1) as u32,
                ),
            }
        }
    }

    /// The raster for this frame, rebuilt only when the plan differs from last frame's.
    pub fn visible_sub_image(&mut self, net_factor: f32, offset: Vec2, viewport: Vec2) -> RasterFrame<'_> {
        puffin::profile_function!();
        let plan = self.plan(net_factor, offset, viewport);
        let entry = match self.cached.take() {
            Some((cached, image)) if cached == plan => (cached, image),
            _ => (plan, self.render(plan)),
        };
        let (_, image) = self.cached.insert(entry);
        RasterFrame {
            image,
            dest: plan.dest(net_factor, offset),
        }
    }

    fn render(&self, plan: RasterPlan) -> RgbaImage {
        tracing::debug!(?plan, "rebuilding map raster");
        match plan {
            RasterPlan::Extract { source, output } => {
                let cropped = {
                    puffin::profile_scope!("crop_map");
                    imageops::crop_imm(
                        &self.base,
                        source.x as u32,
                        source.y as u32,
                        source.width as u32,
                        source.height as u32,
                    )
                    .to_image()
                };
                puffin::profile_scope!("scale_sub_image");
                imageops::resize(&cropped, output.0, output.1, FilterType::Nearest)
            }
            RasterPlan::Whole { output } => {
                puffin::profile_scope!("scale_whole_map");
                imageops::resize(&self.base, output.0, output.1, FilterType::Nearest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Each 64 px tile gets its own color so crops can be identified
    fn tiled_map(tiles_wide: u32, tiles_high: u32) -> RgbaImage {
        RgbaImage::from_fn(tiles_wide * 64, tiles_high * 64, |x, y| {
            Rgba([((x / 64) * 13 % 256) as u8, ((y / 64) * 13 % 256) as u8, 100, 255])
        })
    }

    #[test]
    fn test_whole_map_when_it_fits() {
        let cache = MapRasterCache::new(tiled_map(8, 8));
        let plan = cache.plan(1.0, Vec2::ZERO, Vec2::new(800.0, 600.0));
        assert_eq!(plan, RasterPlan::Whole { output: (512, 512) });
        let plan = cache.plan(0.25, Vec2::ZERO, Vec2::new(800.0, 600.0));
        assert_eq!(plan, RasterPlan::Whole { output: (128, 128) });
    }

    #[test]
    fn test_whole_map_when_only_one_axis_overflows() {
        let cache = MapRasterCache::new(tiled_map(20, 8));
        let plan = cache.plan(1.0, Vec2::ZERO, Vec2::new(800.0, 600.0));
        assert_eq!(plan, RasterPlan::Whole { output: (1280, 512) });
    }

    #[test]
    fn test_extract_when_zoomed_in() {
        let cache = MapRasterCache::new(tiled_map(32, 32));
        let plan = cache.plan(2.0, Vec2::new(-400.0, -300.0), Vec2::new(800.0, 600.0));
        assert_eq!(
            plan,
            RasterPlan::Extract {
                source: Rect::new(200, 150, 401, 301),
                output: (802, 602),
            }
        );
        assert_eq!(plan.dest(2.0, Vec2::new(-400.0, -300.0)), IVec2::ZERO);
    }

    #[test]
    fn test_extract_source_clamped_inside_base() {
        let cache = MapRasterCache::new(tiled_map(16, 16));
        // Offset past the far edge of the scaled map
        let plan = cache.plan(4.0, Vec2::new(-9000.0, -9000.0), Vec2::new(800.0, 600.0));
        match plan {
            RasterPlan::Extract { source, .. } => {
                assert_eq!(source.right(), 1024);
                assert_eq!(source.bottom(), 1024);
                assert!(source.x >= 0 && source.y >= 0);
            }
            other => panic!("expected extract, got {other:?}"),
        }
    }

    /// Screen pixel `(x, y)` as drawn by a raster frame blitted at its destination
    fn screen_pixel(frame: &RasterFrame<'_>, x: i32, y: i32) -> Rgba<u8> {
        *frame
            .image
            .get_pixel((x - frame.dest.x) as u32, (y - frame.dest.y) as u32)
    }

    #[test]
    fn test_extract_matches_whole_map_pixels() {
        let base = tiled_map(16, 16);
        let mut cache = MapRasterCache::new(base.clone());
        let offset = Vec2::new(-256.0, -128.0);
        let frame = cache.visible_sub_image(2.0, offset, Vec2::new(512.0, 384.0));
        assert_eq!(frame.dest, IVec2::ZERO);

        let whole = imageops::resize(&base, 2048, 2048, FilterType::Nearest);
        for (x, y) in [(10, 10), (300, 200), (500, 100), (60, 370)] {
            assert_eq!(
                screen_pixel(&frame, x, y),
                *whole.get_pixel((x + 256) as u32, (y + 128) as u32),
                "at ({x}, {y})"
            );
        }
    }

    #[test]
    fn test_extract_carries_offset_remainder() {
        // Offset of 6 px at 4x falls one and a half base pixels into the map
        let base = tiled_map(16, 16);
        let mut cache = MapRasterCache::new(base.clone());
        let offset = Vec2::new(-6.0, -6.0);
        let viewport = Vec2::new(800.0, 600.0);
        let frame = cache.visible_sub_image(4.0, offset, viewport);
        assert_eq!(frame.dest, IVec2::new(-2, -2));
        assert!(frame.image.width() as i32 + frame.dest.x >= 800);
        assert!(frame.image.height() as i32 + frame.dest.y >= 600);

        let whole = imageops::resize(&base, 4096, 4096, FilterType::Nearest);
        // 249/250 straddle the first tile seam on screen (scaled x 255/256)
        for x in [0, 249, 250, 799] {
            for y in [0, 249, 250, 599] {
                assert_eq!(
                    screen_pixel(&frame, x, y),
                    *whole.get_pixel((x + 6) as u32, (y + 6) as u32),
                    "at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_sub_pixel_pan_reuses_raster() {
        let mut cache = MapRasterCache::new(tiled_map(16, 16));
        let viewport = Vec2::new(800.0, 600.0);
        let first = cache.visible_sub_image(4.0, Vec2::new(-6.0, 0.0), viewport);
        let (first_ptr, first_dest) = (first.image.as_ptr(), first.dest);
        let second = cache.visible_sub_image(4.0, Vec2::new(-7.0, 0.0), viewport);
        assert_eq!(second.image.as_ptr(), first_ptr);
        assert_eq!(second.dest.x, first_dest.x - 1);
    }

    #[test]
    fn test_cache_reused_until_plan_changes() {
        let mut cache = MapRasterCache::new(tiled_map(8, 8));
        let viewport = Vec2::new(800.0, 600.0);
        let first = cache.visible_sub_image(1.0, Vec2::ZERO, viewport).image.as_ptr();
        let second = cache.visible_sub_image(1.0, Vec2::ZERO, viewport).image.as_ptr();
        assert_eq!(first, second);

        let frame = cache.visible_sub_image(2.0, Vec2::ZERO, viewport);
        assert_eq!(frame.image.dimensions(), (802, 602));
    }

    #[test]
    fn test_base_image_mut_invalidates() {
        let mut cache = MapRasterCache::new(tiled_map(4, 4));
        let viewport = Vec2::new(800.0, 600.0);
        cache.visible_sub_image(1.0, Vec2::ZERO, viewport);
        cache.base_image_mut().put_pixel(0, 0, Rgba([1, 2, 3, 255]));
        let frame = cache.visible_sub_image(1.0, Vec2::ZERO, viewport);
        assert_eq!(*frame.image.get_pixel(0, 0), Rgba([1, 2, 3, 255]));
    }
}
