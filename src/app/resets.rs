use super::*;

impl TestApp {
    /// Vuelve a la bienvenida descartando la sesión. La cuenta atrás se
    /// desarma primero para que no pueda disparar durante el reinicio.
    pub fn reiniciar(&mut self) {
        if let Some(timer) = &mut self.timer {
            timer.cancel();
        }
        self.session = None;
        self.timer = None;
        self.last_tick = None;
        self.result = None;
        self.saved_to = None;
        self.confirm_restart = false;
        self.message.clear();
        self.state = AppState::Welcome;
    }

    /// Reiniciar con sesión a medias pide confirmación
    pub fn pedir_reinicio(&mut self) {
        if self.session.as_ref().is_some_and(|s| !s.is_finished()) {
            self.confirm_restart = true;
        } else {
            self.reiniciar();
        }
    }

    pub fn confirm_restart(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres abandonar el test en curso? Las respuestas no se guardarán.");
                ui.horizontal(|ui| {
                    if ui.button("Sí, abandonar").clicked() {
                        self.reiniciar();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_restart = false;
                    }
                });
            });
    }
}
