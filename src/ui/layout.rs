
use crate::TestApp;
use egui::{Button, CentralPanel, Context, Frame, RichText, Ui, Visuals};

pub fn top_panel(app: &mut TestApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🏁 Terminar test").clicked() {
                app.terminar_test();
            }
            if ui.button("🔄 Abandonar").clicked() {
                app.pedir_reinicio();
            }

            // Cuenta atrás a la derecha
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(remaining) = app.remaining_label() {
                    let text = RichText::new(format!("⏰ {remaining}")).strong();
                    if app.time_is_short() {
                        ui.label(text.color(egui::Color32::RED));
                    } else {
                        ui.label(text);
                    }
                }
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                // Ajusta anchura
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                // Ejecuta contenido
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space((ui.available_width() - panel_width) / 2.0);
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

/// Caja de opción al estilo casilla: tic delante cuando está elegida.
/// Devuelve si se ha hecho clic.
pub fn option_box(ui: &mut Ui, width: f32, text: &str, selected: bool) -> bool {
    let label = if selected {
        format!("✔ {text}")
    } else {
        text.to_string()
    };
    let mut button = Button::new(label).min_size(egui::vec2(width, 36.0));
    if selected {
        button = button.fill(ui.visuals().selection.bg_fill);
    }
    ui.add(button).clicked()
}
