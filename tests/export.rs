use approx::assert_relative_eq;
use egui::{Color32, pos2, vec2};
use mako_paint::export::{MAX_EXPORT_DIMENSION, export_scale, render_to_image, save_png};
use mako_paint::renderer::{PaintOp, RecordingSurface};
use mako_paint::{EditorContext, ExportError, PaintConfig, Renderer, Scene, ToolPreview};

fn sample_drawing() -> EditorContext {
    let mut editor = EditorContext::default();
    editor.select_pen(2.0, 0.0);
    editor.on_pointer_down(pos2(10.0, 10.0));
    editor.on_pointer_move(pos2(60.0, 10.0));
    editor.on_pointer_up();

    editor.select_sticker("🔥", 3.0, 45.0);
    editor.on_pointer_down(pos2(128.0, 128.0));
    editor.on_pointer_up();
    editor
}

#[test]
fn test_scaled_render_multiplies_every_coordinate() {
    let editor = sample_drawing();
    let scale = 4.0;

    let mut base = RecordingSurface::new();
    Renderer::new().render(&mut base, &Scene::new(editor.drawables()));
    let mut scaled = RecordingSurface::new();
    Renderer::new()
        .with_scale(scale)
        .render(&mut scaled, &Scene::new(editor.drawables()));

    assert_eq!(base.ops().len(), scaled.ops().len());
    for (a, b) in base.ops().iter().zip(scaled.ops()) {
        match (a, b) {
            (PaintOp::Clear, PaintOp::Clear) => {}
            (
                PaintOp::Polyline { points: pa, width: wa, color: ca },
                PaintOp::Polyline { points: pb, width: wb, color: cb },
            ) => {
                assert_eq!(ca, cb);
                assert_relative_eq!(*wb, wa * scale);
                for (p, q) in pa.iter().zip(pb) {
                    assert_relative_eq!(q.x, p.x * scale);
                    assert_relative_eq!(q.y, p.y * scale);
                }
            }
            (
                PaintOp::Glyph { glyph: ga, center: pa, size: sa, rotation: ra, color: ca },
                PaintOp::Glyph { glyph: gb, center: pb, size: sb, rotation: rb, color: cb },
            ) => {
                assert_eq!(ga, gb);
                assert_eq!(ca, cb);
                assert_relative_eq!(pb.x, pa.x * scale);
                assert_relative_eq!(pb.y, pa.y * scale);
                assert_relative_eq!(*sb, sa * scale);
                // Angles are not scaled
                assert_relative_eq!(*rb, *ra);
            }
            other => panic!("mismatched paint ops: {other:?}"),
        }
    }
}

#[test]
fn test_scaled_render_multiplies_preview_outline() {
    let preview = ToolPreview::Thickness { position: pos2(20.0, 30.0), thickness: 6.0, hue: 240.0 };
    let scene = Scene::new(&[]).with_preview(Some(&preview), true);

    let mut base = RecordingSurface::new();
    Renderer::new().render(&mut base, &scene);
    let mut scaled = RecordingSurface::new();
    Renderer::new().with_scale(4.0).render(&mut scaled, &scene);

    let (
        PaintOp::CircleOutline { center: ca, radius: ra, width: wa, color: color_a },
        PaintOp::CircleOutline { center: cb, radius: rb, width: wb, color: color_b },
    ) = (&base.ops()[1], &scaled.ops()[1])
    else {
        panic!("expected preview outlines: {:?} / {:?}", base.ops(), scaled.ops());
    };
    assert_eq!(color_a, color_b);
    assert_relative_eq!(cb.x, ca.x * 4.0);
    assert_relative_eq!(cb.y, ca.y * 4.0);
    assert_relative_eq!(*ra, 3.0);
    assert_relative_eq!(*rb, 12.0);
    assert_relative_eq!(*wb, wa * 4.0);
}

#[test]
fn test_export_excludes_preview() {
    let mut editor = EditorContext::default();
    editor.on_pointer_move(pos2(20.0, 20.0));
    assert!(editor.preview_visible());

    let mut live = RecordingSurface::new();
    editor.render(&mut live);
    assert!(live.ops().iter().any(|op| matches!(op, PaintOp::CircleOutline { .. })));

    let image = editor.request_export(256, 256, None).unwrap();
    assert!(image.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn test_export_dimensions_and_background() {
    let editor = sample_drawing();
    let image = editor.request_export(1024, 1024, Some(Color32::WHITE)).unwrap();

    assert_eq!(image.dimensions(), (1024, 1024));
    // Far from any ink
    assert_eq!(image.get_pixel(1000, 20).0, [255, 255, 255, 255]);
    // On the red stroke, 4x from (30, 10)
    assert_eq!(image.get_pixel(120, 40).0, [255, 0, 0, 255]);
}

#[test]
fn test_export_without_background_is_transparent() {
    let editor = EditorContext::default();
    let image = editor.request_export(64, 32, None).unwrap();
    assert_eq!(image.dimensions(), (64, 32));
    assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn test_export_rejects_invalid_dimensions() {
    let editor = sample_drawing();
    for (w, h) in [(0, 256), (256, 0), (MAX_EXPORT_DIMENSION + 1, 256)] {
        let result = editor.request_export(w, h, None);
        assert!(
            matches!(result, Err(ExportError::InvalidDimensions { width, height }) if width == w && height == h)
        );
    }
}

#[test]
fn test_mismatched_aspect_uses_smaller_scale() {
    assert_relative_eq!(export_scale(vec2(256.0, 256.0), 1024, 512), 2.0);

    let image = render_to_image(&[], vec2(256.0, 256.0), 1024, 512, Some(Color32::BLACK)).unwrap();
    assert_eq!(image.dimensions(), (1024, 512));
}

#[test]
fn test_save_png_writes_decodable_file() {
    let config = PaintConfig::default();
    let editor = sample_drawing();
    let (width, height) = config.export_size();
    let image = editor
        .request_export(width, height, Some(config.background_color()))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.png");
    save_png(&image, &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (width, height));
    assert_eq!(decoded, image);
}

#[test]
fn test_save_png_reports_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("export.png");
    let image = EditorContext::default().request_export(8, 8, None).unwrap();

    let err = save_png(&image, &path).unwrap_err();
    assert!(matches!(err, ExportError::Encode(_)));
}
