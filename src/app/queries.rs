use super::*;

impl TestApp {
    pub fn in_session(&self) -> bool {
        self.session.is_some()
    }

    /// "Pregunta N de M" para la cabecera del quiz
    pub fn progress_label(&self) -> Option<String> {
        let session = self.session.as_ref()?;
        if session.is_finished() {
            return None;
        }
        Some(format!(
            "Pregunta {} de {}",
            session.current_index() + 1,
            session.question_count()
        ))
    }

    pub fn current_prompt(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.current_question())
            .map(|q| q.prompt.as_str())
    }

    /// "mm:ss" mientras la cuenta atrás siga armada
    pub fn remaining_label(&self) -> Option<String> {
        self.timer
            .as_ref()
            .filter(|t| t.is_running())
            .map(|t| t.remaining_label())
    }

    /// Queda poco tiempo: la cabecera se pinta en rojo
    pub fn time_is_short(&self) -> bool {
        self.timer
            .as_ref()
            .is_some_and(|t| t.is_running() && t.remaining() <= 30)
    }

    pub fn can_retreat(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.current_index() > 0)
    }

    /// El botón Siguiente pasa a "Terminar" en la última pregunta
    pub fn is_last_question(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.current_index() + 1 == s.question_count())
    }
}
