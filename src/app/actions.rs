use super::*;
use crate::data::load_category;
use std::time::Instant;

impl TestApp {
    /// Arranca la sesión: carga el banco de la categoría elegida y valida
    /// nombre + banco. Si algo falla, el aviso se queda en la pantalla de
    /// bienvenida y no se cambia de estado.
    pub fn empezar_test(&mut self) {
        let questions = match load_category(&self.questions_dir, self.category) {
            Ok(qs) => qs,
            Err(err) => {
                log::warn!("no se pudo cargar el banco: {err}");
                self.message = format!("⚠ {err}");
                return;
            }
        };

        match Session::start(&self.username_input, self.category, questions) {
            Ok(session) => {
                log::info!(
                    "sesión iniciada: {} / {} ({} preguntas, {} s)",
                    session.username,
                    session.category.label(),
                    session.question_count(),
                    session.total_time_secs()
                );
                self.timer = Some(SessionTimer::new(session.total_time_secs()));
                self.last_tick = Some(Instant::now());
                self.session = Some(session);
                self.result = None;
                self.saved_to = None;
                self.message.clear();
                self.state = AppState::Quiz;
            }
            Err(err) => {
                self.message = format!("⚠ {err}");
            }
        }
    }

    /// La UI comunica el índice marcado; la sesión guarda el texto
    pub fn elegir_opcion(&mut self, option: &str) {
        if let Some(session) = &mut self.session {
            session.select(option);
            self.message.clear();
        }
    }
}
