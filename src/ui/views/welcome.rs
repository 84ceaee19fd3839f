use crate::TestApp;
use crate::model::Category;
use egui::{Align, Button, Context, RichText, TextEdit};

use crate::ui::layout::{centered_panel, option_box};

pub fn ui_welcome(app: &mut TestApp, ctx: &Context) {
    centered_panel(ctx, 420.0, 540.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("👋 Smart Test Portal");
            ui.add_space(18.0);

            ui.label("Escribe tu nombre:");
            ui.add_space(5.0);
            ui.add_sized(
                [280.0, 28.0],
                TextEdit::singleline(&mut app.username_input).hint_text("Tu nombre"),
            );

            ui.add_space(14.0);
            ui.label("Elige una categoría:");
            ui.add_space(5.0);

            let content_width = ui.available_width();
            let btn_w = (content_width * 0.7).clamp(120.0, 320.0);

            // Una caja por categoría, con tic en la elegida
            for cat in Category::ALL {
                if option_box(ui, btn_w, cat.label(), app.category == cat) {
                    app.category = cat;
                    app.message.clear();
                }
                ui.add_space(5.0);
            }

            ui.add_space(12.0);
            let btn_start = ui.add_sized([btn_w, 40.0], Button::new("▶ Empezar test"));
            if btn_start.clicked() {
                app.empezar_test();
            }

            // Aviso bloqueante: banco ilegible, nombre vacío…
            if !app.message.is_empty() {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(&app.message)
                        .color(egui::Color32::YELLOW)
                        .strong(),
                );
            }
        });
    });
}
