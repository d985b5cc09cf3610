use egui::Color32;

/// Sticker glyphs are painted in a single ink; the emoji font is monochrome.
pub const STICKER_COLOR: Color32 = Color32::BLACK;

/// Alpha applied to the tool preview so it reads as a hint, not content.
pub const PREVIEW_ALPHA: u8 = 128;

/// Wrap an angle or hue into `[0, 360)`.
pub fn normalize_degrees(value: f32) -> f32 {
    let wrapped = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Fully saturated color for a hue in degrees, equivalent to `hsl(hue, 100%, 50%)`.
pub fn hue_color(hue: f32) -> Color32 {
    let h = normalize_degrees(hue) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();

    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };

    let to_u8 = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Color32::from_rgb(to_u8(r), to_u8(g), to_u8(b))
}

/// Same color with its alpha replaced, leaving the unmultiplied channels intact.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    Color32::from_rgba_unmultiplied(r, g, b, alpha)
}
