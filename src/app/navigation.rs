use super::*;
use crate::report::save_result_card;
use std::time::Duration;

impl TestApp {
    /// Siguiente: exige opción elegida salvo que la sesión ya acabara.
    /// Al pasar la última pregunta se cierra la sesión.
    pub fn siguiente_pregunta(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        match session.advance() {
            Ok(()) => {
                self.message.clear();
                if self.session.as_ref().is_some_and(|s| s.is_finished()) {
                    self.concluir_sesion();
                }
            }
            Err(err) => {
                // Aviso no fatal: el usuario sigue en la misma pregunta
                self.message = format!("⚠ {err}");
            }
        }
    }

    /// Saltar: avance automático, registra "" si no hay elección
    pub fn saltar_pregunta(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        session.auto_advance();
        self.message.clear();
        if self.session.as_ref().is_some_and(|s| s.is_finished()) {
            self.concluir_sesion();
        }
    }

    pub fn pregunta_anterior(&mut self) {
        if let Some(session) = &mut self.session {
            session.retreat();
            self.message.clear();
        }
    }

    /// Terminar a medias, desde el botón de la barra superior
    pub fn terminar_test(&mut self) {
        if let Some(session) = &mut self.session {
            session.finish();
        }
        self.concluir_sesion();
    }

    /// Convierte tiempo de pared en ticks de 1 s para la cuenta atrás.
    /// Llamado al principio de cada frame mientras hay quiz en pantalla.
    pub fn drive_timer(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }
        let Some(last) = self.last_tick else {
            return;
        };
        let elapsed = last.elapsed().as_secs();
        if elapsed == 0 {
            return;
        }
        self.last_tick = Some(last + Duration::from_secs(elapsed));
        self.apply_ticks(elapsed);
    }

    /// Consume `n` ticks de 1 s; si la cuenta se agota, fuerza el fin
    /// de la sesión (una sola vez: el temporizador no puede redisparar).
    pub(crate) fn apply_ticks(&mut self, n: u64) {
        let mut expired = false;
        if let Some(timer) = &mut self.timer {
            for _ in 0..n {
                if timer.tick() {
                    expired = true;
                    break;
                }
            }
        }
        if expired {
            log::info!("tiempo agotado: se fuerza el fin de la sesión");
            if let Some(session) = &mut self.session {
                session.finish();
            }
            self.concluir_sesion();
        }
    }

    /// Única salida de `Quiz`: desarma la cuenta atrás antes de nada,
    /// calcula la tarjeta y la persiste. Un fallo de guardado no tumba
    /// la sesión: se avisa y se muestra el resultado igualmente.
    pub(crate) fn concluir_sesion(&mut self) {
        if let Some(timer) = &mut self.timer {
            timer.cancel();
        }
        self.last_tick = None;

        let Some(session) = &self.session else {
            return;
        };
        match ResultCard::from_session(session) {
            Ok(card) => {
                match save_result_card(&self.results_dir, &card) {
                    Ok(path) => {
                        self.saved_to = Some(path);
                    }
                    Err(err) => {
                        log::error!("no se pudo guardar la tarjeta: {err}");
                        self.message = format!("⚠ {err}");
                        self.saved_to = None;
                    }
                }
                self.result = Some(card);
                self.state = AppState::Result;
            }
            Err(err) => {
                // Solo alcanzable con un banco vacío, que start() ya rechaza
                self.message = format!("⚠ {err}");
                self.state = AppState::Welcome;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SECS_PER_QUESTION;
    use crate::timer::TimerState;
    use std::fs;

    fn app_with_bank(dir_name: &str, bank: &str) -> TestApp {
        let base = std::env::temp_dir().join(dir_name);
        let _ = fs::remove_dir_all(&base);
        let questions_dir = base.join("questions");
        fs::create_dir_all(&questions_dir).unwrap();
        fs::write(questions_dir.join("general.txt"), bank).unwrap();

        let mut app = TestApp::new();
        app.questions_dir = questions_dir;
        app.results_dir = base.join("results");
        app.username_input = "ana".to_owned();
        app
    }

    #[test]
    fn timeout_forces_finish_exactly_once() {
        let bank = "P1\nA | B\nA\nP2\nA | B\nB\n";
        let mut app = app_with_bank("smart_test_timeout_test", bank);
        app.empezar_test();
        assert_eq!(app.state, AppState::Quiz);

        let total = u64::from(2 * SECS_PER_QUESTION);
        app.apply_ticks(total);

        assert_eq!(app.state, AppState::Result);
        assert!(app.session.as_ref().unwrap().is_finished());
        assert_eq!(app.timer.as_ref().unwrap().state(), TimerState::Expired);

        // Sin respuestas: 0 aciertos, y la tarjeta quedó en disco
        let card = app.result.as_ref().unwrap();
        assert_eq!(card.score, 0);
        assert!(app.results_dir.join("ana_result.txt").exists());

        // Ticks posteriores no pueden volver a concluir nada
        let saved = app.saved_to.clone();
        app.apply_ticks(10);
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.saved_to, saved);

        let _ = fs::remove_dir_all(std::env::temp_dir().join("smart_test_timeout_test"));
    }

    #[test]
    fn manual_finish_cancels_pending_countdown() {
        let bank = "P1\nA | B\nA\n";
        let mut app = app_with_bank("smart_test_cancel_test", bank);
        app.empezar_test();

        app.terminar_test();
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.timer.as_ref().unwrap().state(), TimerState::Cancelled);

        // La cuenta cancelada ya no dispara aunque pasen más segundos
        app.apply_ticks(u64::from(SECS_PER_QUESTION) + 5);
        assert_eq!(app.state, AppState::Result);

        let _ = fs::remove_dir_all(std::env::temp_dir().join("smart_test_cancel_test"));
    }

    #[test]
    fn finishing_last_question_concludes_and_saves() {
        let bank = "P1\nA | B\nA\nP2\nA | B\nB\n";
        let mut app = app_with_bank("smart_test_flow_test", bank);
        app.empezar_test();

        // Avanzar sin elegir: aviso, sin cambio de pregunta
        app.siguiente_pregunta();
        assert!(!app.message.is_empty());
        assert_eq!(app.state, AppState::Quiz);

        app.elegir_opcion("A");
        app.siguiente_pregunta();
        app.elegir_opcion("B");
        app.siguiente_pregunta();

        assert_eq!(app.state, AppState::Result);
        let card = app.result.as_ref().unwrap();
        assert_eq!(card.score, 2);
        assert!(card.is_pass());

        let text = fs::read_to_string(app.results_dir.join("ana_result.txt")).unwrap();
        assert!(text.contains("Puntuación: 2 / 2 (100.0%)"));

        let _ = fs::remove_dir_all(std::env::temp_dir().join("smart_test_flow_test"));
    }
}
