use crate::PaintApp;
use crate::tools::ToolMode;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let is_pen = app.editor.tool().is_pen();
            let hue = app.editor.tool().hue();
            let rotation = app.editor.tool().rotation();

            ui.horizontal(|ui| {
                let thin = app.config.thin_thickness;
                let thick = app.config.thick_thickness;
                let thickness = app.editor.tool().thickness();
                if ui.selectable_label(is_pen && thickness == thin, "Thin").clicked() {
                    app.editor.select_pen(thin, hue);
                }
                if ui.selectable_label(is_pen && thickness == thick, "Thick").clicked() {
                    app.editor.select_pen(thick, hue);
                }
            });

            let mut thickness = app.editor.tool().thickness();
            if ui.add(egui::Slider::new(&mut thickness, 1.0..=30.0).text("Thickness")).changed() {
                app.editor.set_thickness(thickness);
            }
            let mut hue_value = hue;
            if ui.add(egui::Slider::new(&mut hue_value, 0.0..=359.0).text("Hue")).changed() {
                app.editor.set_hue(hue_value);
            }

            ui.separator();
            ui.heading("Stickers");

            let active_glyph = match app.editor.tool().mode() {
                ToolMode::Sticker { glyph, .. } => Some(glyph.clone()),
                ToolMode::Pen => None,
            };
            ui.horizontal_wrapped(|ui| {
                for glyph in app.config.stickers.clone() {
                    let selected = active_glyph.as_deref() == Some(glyph.as_str());
                    if ui.selectable_label(selected, glyph.as_str()).clicked() {
                        app.editor.select_sticker(&glyph, app.sticker_size, rotation);
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut app.custom_sticker);
                if ui.button("Use").clicked() {
                    // An empty field is declined by the editor and keeps the current tool
                    app.editor.select_sticker(&app.custom_sticker, app.sticker_size, rotation);
                }
            });

            if ui.add(egui::Slider::new(&mut app.sticker_size, 1.0..=8.0).text("Size")).changed() {
                if let Some(glyph) = &active_glyph {
                    app.editor.select_sticker(glyph, app.sticker_size, rotation);
                }
            }
            let mut rotation_value = rotation;
            if ui.add(egui::Slider::new(&mut rotation_value, 0.0..=359.0).text("Rotation")).changed() {
                app.editor.set_rotation(rotation_value);
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.add_enabled(app.editor.can_undo(), egui::Button::new("Undo")).clicked() {
                    app.editor.undo();
                }
                if ui.add_enabled(app.editor.can_redo(), egui::Button::new("Redo")).clicked() {
                    app.editor.redo();
                }
                if ui.button("Clear").clicked() {
                    app.editor.clear_all();
                }
            });

            ui.separator();

            if ui.button("Export").clicked() {
                app.export();
            }
            if let Some(status) = &app.status {
                ui.label(status.as_str());
            }
        });
}
