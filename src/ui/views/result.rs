use crate::TestApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Color32, Context, Grid, RichText, ScrollArea};

pub fn ui_result(app: &mut TestApp, ctx: &Context) {
    // Sin tarjeta no hay nada que pintar: vuelta a la bienvenida
    let Some(card) = app.result.clone() else {
        app.state = AppState::Welcome;
        return;
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 600.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let button_width = panel_width / 3.0;
        let button_height = 36.0;
        let total_height = 700.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;

        ui.add_space(extra_space);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 30))
                .show(ui, |ui| {
                    ui.set_width(panel_width / 1.2);

                    let (verdict_color, verdict_icon, verdict_text) = if card.is_pass() {
                        (
                            Color32::from_rgb(0x19, 0x87, 0x54),
                            "✔",
                            "¡Enhorabuena, has aprobado! 🎉",
                        )
                    } else {
                        (
                            Color32::from_rgb(0xdc, 0x35, 0x45),
                            "✖",
                            "¡Mucha suerte la próxima vez!",
                        )
                    };

                    ui.label(RichText::new(verdict_icon).size(40.0).color(verdict_color));
                    ui.add_space(6.0);
                    ui.heading("Tarjeta de resultados");
                    ui.add_space(6.0);
                    ui.label(format!("Nombre: {}", card.username));
                    ui.label(format!("Categoría: {}", card.category.label()));
                    ui.label(format!(
                        "Fecha: {}",
                        card.timestamp.format("%Y-%m-%d %H:%M:%S")
                    ));
                    ui.add_space(3.0);
                    ui.label(
                        RichText::new(format!(
                            "Puntuación: {} / {}  ({:.1}%)",
                            card.score,
                            card.total,
                            card.percentage()
                        ))
                        .color(verdict_color)
                        .strong(),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(verdict_text).color(verdict_color).strong());
                    ui.add_space(10.0);

                    let max_height = 320.0;
                    ScrollArea::vertical()
                        .max_height(max_height)
                        .max_width(panel_width)
                        .show(ui, |ui| {
                            Grid::new("result_rows_grid")
                                .striped(true)
                                .spacing([8.0, 4.0])
                                .show(ui, |ui| {
                                    ui.label("Pregunta");
                                    ui.label("Tu respuesta");
                                    ui.label("Correcta");
                                    ui.label("Estado");
                                    ui.end_row();

                                    for row in app.result_rows() {
                                        ui.label(format!("Q{}. {}", row.number, row.prompt));
                                        ui.label(if row.selected.is_empty() {
                                            "(sin responder)".to_owned()
                                        } else {
                                            row.selected.clone()
                                        });
                                        ui.label(&row.correct);
                                        ui.label(if row.is_correct {
                                            "✅ Acierto"
                                        } else {
                                            "❌ Fallo"
                                        });
                                        ui.end_row();
                                    }
                                });
                        });

                    ui.add_space(10.0);

                    // Aviso de guardado (o del fallo al guardar)
                    if let Some(path) = &app.saved_to {
                        ui.label(
                            RichText::new(format!("Resultado guardado en '{}'", path.display()))
                                .small(),
                        );
                    } else if !app.message.is_empty() {
                        ui.label(
                            RichText::new(&app.message)
                                .color(Color32::YELLOW)
                                .strong(),
                        );
                    }

                    ui.add_space(10.0);
                    if ui
                        .add_sized([button_width, button_height], Button::new("🔄 Reiniciar"))
                        .clicked()
                    {
                        app.reiniciar();
                    }
                });
        });
    });
}
