use std::borrow::Cow;
use std::cell::OnceCell;

use ab_glyph::{Font, FontArc, FontRef, FontVec, OutlinedGlyph, ScaleFont, point};
use egui::{Color32, Pos2, emath::Rot2, vec2};
use image::{Rgba, RgbaImage};
use log::warn;

use super::Surface;

/// Software surface over an RGBA bitmap, used for export.
///
/// Glyphs are rasterized with the fonts egui ships, so stickers look the same
/// in an export as on screen.
pub struct RasterSurface {
    image: RgbaImage,
    fonts: OnceCell<Option<GlyphFonts>>,
}

impl RasterSurface {
    /// A fully transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            fonts: OnceCell::new(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let [r, g, b, a] = color;
        if a == 0 {
            return;
        }
        let dst = self.image.get_pixel(x, y).0;
        let src_a = a as f32 / 255.0;
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }
        let blend = |src: u8, dst: u8| {
            let src_f = src as f32 / 255.0;
            let dst_f = dst as f32 / 255.0;
            ((src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a * 255.0)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        self.image.put_pixel(
            x,
            y,
            Rgba([
                blend(r, dst[0]),
                blend(g, dst[1]),
                blend(b, dst[2]),
                (out_a * 255.0).round() as u8,
            ]),
        );
    }

    /// Pixel range covering `center ± radius`, clipped to the image
    fn clip_box(&self, center: Pos2, radius: f32) -> Option<(u32, u32, u32, u32)> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return None;
        }
        let min_x = (center.x - radius).floor().max(0.0);
        let min_y = (center.y - radius).floor().max(0.0);
        let max_x = (center.x + radius).ceil().min((width - 1) as f32);
        let max_y = (center.y + radius).ceil().min((height - 1) as f32);
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some((min_x as u32, min_y as u32, max_x as u32, max_y as u32))
    }

    fn disc(&mut self, center: Pos2, radius: f32, color: [u8; 4]) {
        let Some((min_x, min_y, max_x, max_y)) = self.clip_box(center, radius) else {
            return;
        };
        let radius_sq = radius * radius;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= radius_sq {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    fn segment(&mut self, start: Pos2, end: Pos2, width: f32, color: [u8; 4]) {
        let delta = end - start;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;
        let radius = (width / 2.0).max(0.5);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.disc(start + delta * t, radius, color);
        }
    }

    fn blit_coverage(&mut self, coverage: &Coverage, center: Pos2, rotation: f32, color: [u8; 4]) {
        let half = vec2(coverage.width as f32, coverage.height as f32) / 2.0;
        let Some((min_x, min_y, max_x, max_y)) = self.clip_box(center, half.length()) else {
            return;
        };
        let inverse = Rot2::from_angle(rotation.to_radians()).inverse();

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let offset = vec2(x as f32 + 0.5 - center.x, y as f32 + 0.5 - center.y);
                let source = inverse * offset + half;
                if source.x < 0.0 || source.y < 0.0 {
                    continue;
                }
                let (sx, sy) = (source.x as usize, source.y as usize);
                if sx >= coverage.width || sy >= coverage.height {
                    continue;
                }
                let cover = coverage.data[sy * coverage.width + sx];
                if cover <= 0.0 {
                    continue;
                }
                let alpha = (color[3] as f32 * cover).round().clamp(0.0, 255.0) as u8;
                self.blend_pixel(x, y, [color[0], color[1], color[2], alpha]);
            }
        }
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn fill(&mut self, color: Color32) {
        let color = color.to_srgba_unmultiplied();
        let (width, height) = self.image.dimensions();
        for y in 0..height {
            for x in 0..width {
                self.blend_pixel(x, y, color);
            }
        }
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let color = color.to_srgba_unmultiplied();
        for pair in points.windows(2) {
            self.segment(pair[0], pair[1], width, color);
        }
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        if radius <= 0.0 {
            return;
        }
        let color = color.to_srgba_unmultiplied();
        let half_width = (width / 2.0).max(0.5);
        let Some((min_x, min_y, max_x, max_y)) = self.clip_box(center, radius + half_width) else {
            return;
        };
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let distance = vec2(x as f32 + 0.5 - center.x, y as f32 + 0.5 - center.y).length();
                if (distance - radius).abs() <= half_width {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    fn glyph(&mut self, glyph: &str, center: Pos2, size: f32, rotation: f32, color: Color32) {
        if glyph.is_empty() || size <= 0.0 {
            return;
        }
        let coverage = match self.fonts.get_or_init(GlyphFonts::load_default) {
            Some(fonts) => fonts.rasterize(glyph, size),
            None => {
                warn!("No fonts available, skipping glyph {glyph:?}");
                return;
            }
        };
        if let Some(coverage) = coverage {
            self.blit_coverage(&coverage, center, rotation, color.to_srgba_unmultiplied());
        }
    }
}

/// Glyph coverage in `[0, 1]`, row-major
struct Coverage {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

/// egui's proportional font family, in fallback order
struct GlyphFonts {
    fonts: Vec<(FontArc, f32)>,
}

impl GlyphFonts {
    fn load_default() -> Option<Self> {
        let definitions = egui::FontDefinitions::default();
        let family = definitions.families.get(&egui::FontFamily::Proportional)?;

        let fonts: Vec<(FontArc, f32)> = family
            .iter()
            .filter_map(|name| definitions.font_data.get(name))
            .filter_map(|data| {
                let font = match &data.font {
                    Cow::Borrowed(bytes) => FontRef::try_from_slice_and_index(*bytes, data.index)
                        .map(FontArc::from)
                        .ok(),
                    Cow::Owned(bytes) => FontVec::try_from_vec_and_index(bytes.clone(), data.index)
                        .map(FontArc::from)
                        .ok(),
                }?;
                Some((font, data.tweak.scale))
            })
            .collect();

        if fonts.is_empty() { None } else { Some(Self { fonts }) }
    }

    /// First font in the family that has the character, like egui's fallback
    fn font_for(&self, ch: char) -> &(FontArc, f32) {
        self.fonts
            .iter()
            .find(|(font, _)| font.glyph_id(ch).0 != 0)
            .unwrap_or(&self.fonts[0])
    }

    /// Lay `text` out on a single line and rasterize it unrotated.
    ///
    /// The coverage spans the layout box (advance by line height), the same
    /// box egui centers a galley on, so a sticker lands where it is drawn on
    /// screen. Returns `None` when nothing has ink (e.g. whitespace).
    fn rasterize(&self, text: &str, size: f32) -> Option<Coverage> {
        let (primary, primary_scale) = &self.fonts[0];
        let line = primary.as_scaled(size * primary_scale);
        let mut caret = point(0.0, line.ascent());

        let mut outlines: Vec<OutlinedGlyph> = Vec::new();
        for ch in text.chars() {
            let (font, tweak_scale) = self.font_for(ch);
            let scaled = font.as_scaled(size * tweak_scale);
            let mut glyph = scaled.scaled_glyph(ch);
            glyph.position = caret;
            caret.x += scaled.h_advance(glyph.id);
            if let Some(outlined) = font.outline_glyph(glyph) {
                outlines.push(outlined);
            }
        }
        if outlines.is_empty() {
            return None;
        }

        let width = caret.x.ceil() as usize;
        let height = (line.ascent() - line.descent() + line.line_gap()).ceil() as usize;
        if width == 0 || height == 0 {
            return None;
        }

        let mut data = vec![0.0_f32; width * height];
        for outlined in &outlines {
            let bounds = outlined.px_bounds();
            let offset_x = bounds.min.x.round() as i64;
            let offset_y = bounds.min.y.round() as i64;
            outlined.draw(|x, y, cover| {
                let px = offset_x + x as i64;
                let py = offset_y + y as i64;
                if (0..width as i64).contains(&px) && (0..height as i64).contains(&py) {
                    let cell = &mut data[py as usize * width + px as usize];
                    *cell = cell.max(cover);
                }
            });
        }

        Some(Coverage { width, height, data })
    }
}
