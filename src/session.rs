//! Máquina de estados de una sesión de test.
//!
//! No usa hilos ni reloj propio: la capa de pantalla llama a las
//! transiciones y el temporizador vive aparte (ver `timer`). El índice
//! actual siempre queda en `[0, question_count]`; llegar al final
//! equivale a `Finished`.

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::model::{Category, Question};

/// Segundos fijos por pregunta para calcular el tiempo total
pub const SECS_PER_QUESTION: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Finished,
}

/// Un intento de un usuario sobre un banco de preguntas, de principio a fin.
/// Se crea en `start` y se descarta al reiniciar.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub category: Category,
    questions: Vec<Question>,
    // índice 0-based -> opción elegida ("" = saltada / sin tiempo)
    answers: HashMap<usize, String>,
    current: usize,
    // Elección aún no registrada de la pregunta en pantalla
    selection: Option<String>,
    phase: Phase,
}

impl Session {
    /// Valida nombre y banco, y arranca en la primera pregunta.
    pub fn start(
        username: &str,
        category: Category,
        questions: Vec<Question>,
    ) -> Result<Self, ValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        if questions.is_empty() {
            return Err(ValidationError::EmptyBank(category.label().to_string()));
        }
        Ok(Self {
            username: username.to_string(),
            category,
            questions,
            answers: HashMap::new(),
            current: 0,
            selection: None,
            phase: Phase::InProgress,
        })
    }

    // Consultas

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &HashMap<usize, String> {
        &self.answers
    }

    /// `None` cuando la sesión ya terminó
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn total_time_secs(&self) -> u32 {
        self.questions.len() as u32 * SECS_PER_QUESTION
    }

    // Transiciones

    /// Marca la opción elegida para la pregunta en pantalla. No se
    /// registra en el mapa de respuestas hasta navegar o terminar.
    pub fn select(&mut self, option: &str) {
        if self.phase == Phase::InProgress {
            self.selection = Some(option.to_string());
        }
    }

    /// Siguiente (manual): exige una opción elegida.
    pub fn advance(&mut self) -> Result<(), ValidationError> {
        if self.phase == Phase::Finished {
            return Ok(());
        }
        match self.selection.as_deref() {
            Some(sel) if !sel.is_empty() => {
                self.step_forward();
                Ok(())
            }
            _ => Err(ValidationError::NoSelection),
        }
    }

    /// Siguiente (automático): una elección ausente se registra como "".
    pub fn auto_advance(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        if self.selection.is_none() {
            self.selection = Some(String::new());
        }
        self.step_forward();
    }

    /// Anterior: registra la elección si la hay (sin validar) y retrocede.
    /// En el índice 0 no hace nada con el índice.
    pub fn retreat(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        if self.selection.is_some() {
            self.record_selection();
        }
        if self.current > 0 {
            self.current -= 1;
            self.selection = self.answers.get(&self.current).cloned();
        }
    }

    /// Terminar desde cualquier índice, manual o por tiempo agotado.
    /// Idempotente: la segunda llamada no hace nada.
    pub fn finish(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        if self.selection.is_some() {
            self.record_selection();
        }
        self.current = self.questions.len();
        self.selection = None;
        self.phase = Phase::Finished;
    }

    fn step_forward(&mut self) {
        self.record_selection();
        self.current += 1;
        if self.current == self.questions.len() {
            self.phase = Phase::Finished;
            self.selection = None;
        } else {
            // Restaura la respuesta ya registrada al volver sobre una pregunta
            self.selection = self.answers.get(&self.current).cloned();
        }
    }

    fn record_selection(&mut self) {
        if let Some(sel) = self.selection.clone() {
            self.answers.insert(self.current, sel);
        }
    }
}
