use crate::TestApp;
use egui::{Button, CentralPanel, Context, ScrollArea};

use crate::ui::layout::{option_box, two_button_row};

pub fn ui_quiz(app: &mut TestApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let content_width = panel_width.min(440.0);
        let total_height = 150.0 + 245.0 + 48.0 + 48.0 + 24.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(60, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    if let Some(label) = app.progress_label() {
                        ui.heading(label);
                    }
                    ui.add_space(10.0);

                    // Enunciado con scroll acotado
                    let prompt_max_height = 150.0;
                    ScrollArea::vertical()
                        .max_height(prompt_max_height)
                        .max_width(panel_width)
                        .show(ui, |ui| {
                            if let Some(prompt) = app.current_prompt() {
                                ui.strong(prompt.to_owned());
                            }
                        });

                    ui.add_space(12.0);

                    // Cajas de opciones; la UI devuelve el clic y nada más
                    let mut clicked: Option<String> = None;
                    for row in app.option_rows() {
                        if option_box(ui, content_width, &row.text, row.selected) {
                            clicked = Some(row.text.clone());
                        }
                        ui.add_space(6.0);
                    }
                    if let Some(option) = clicked {
                        app.elegir_opcion(&option);
                    }

                    ui.add_space(10.0);

                    let next_label = if app.is_last_question() {
                        "Terminar ▶"
                    } else {
                        "Siguiente ▶"
                    };
                    let (anterior, siguiente) =
                        two_button_row(ui, content_width, "◀ Anterior", next_label);
                    if anterior {
                        app.pregunta_anterior();
                    }
                    if siguiente {
                        app.siguiente_pregunta();
                    }

                    ui.add_space(5.0);
                    let saltar = ui.add_sized([content_width, 30.0], Button::new("Saltar pregunta"));
                    if saltar.clicked() {
                        app.saltar_pregunta();
                    }

                    ui.add_space(8.0);
                    if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                });
            });

        ui.add_space(extra_space);
    });
}
