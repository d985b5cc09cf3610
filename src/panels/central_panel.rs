use crate::PaintApp;
use crate::input::route_event;
use crate::renderer::PainterSurface;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.config.title.as_str());

        let (response, painter) =
            ui.allocate_painter(app.editor.canvas_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        for event in app.input.process_response(&response, canvas_rect) {
            route_event(&event, &mut app.editor);
        }

        // Opaque backdrop; the renderer paints on top of it
        painter.rect_filled(canvas_rect, 0.0, app.config.background_color());

        let painter = painter.with_clip_rect(canvas_rect);
        app.editor.render(&mut PainterSurface::new(&painter, canvas_rect));
    });
}
