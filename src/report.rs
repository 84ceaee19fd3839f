//! Puntuación y tarjeta de resultados.
//!
//! La tarjeta es una instantánea de solo lectura calculada una vez al
//! terminar la sesión; el fichero `<usuario>_result.txt` se sobreescribe
//! en cada intento (el último gana).

use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StorageError, ValidationError};
use crate::model::{Category, Question};
use crate::session::Session;

/// Aprobado con el 50% o más (inclusive)
pub const PASS_THRESHOLD: f32 = 50.0;

/// Marcador de pregunta sin respuesta en la tarjeta
pub const EMPTY_MARKER: &str = "(sin responder)";

/// Aciertos: respuestas registradas idénticas a la correcta.
/// Entradas ausentes o vacías no cuentan nunca.
pub fn score_answers(questions: &[Question], answers: &HashMap<usize, String>) -> usize {
    questions
        .iter()
        .enumerate()
        .filter(|(i, q)| {
            answers
                .get(i)
                .is_some_and(|sel| !sel.is_empty() && *sel == q.answer)
        })
        .count()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub prompt: String,
    pub selected: String, // "" = sin responder
    pub correct: String,
}

#[derive(Debug, Clone)]
pub struct ResultCard {
    pub username: String,
    pub category: Category,
    pub timestamp: DateTime<Local>,
    pub score: usize,
    pub total: usize,
    pub rows: Vec<ResultRow>,
}

impl ResultCard {
    /// Instantánea de la sesión con la fecha actual.
    pub fn from_session(session: &Session) -> Result<Self, ValidationError> {
        Self::with_timestamp(session, Local::now())
    }

    pub fn with_timestamp(
        session: &Session,
        timestamp: DateTime<Local>,
    ) -> Result<Self, ValidationError> {
        let total = session.question_count();
        // Guarda explícita: sin preguntas no hay porcentaje que calcular
        if total == 0 {
            return Err(ValidationError::EmptyBank(
                session.category.label().to_string(),
            ));
        }

        let answers = session.answers();
        let rows = session
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| ResultRow {
                prompt: q.prompt.clone(),
                selected: answers.get(&i).cloned().unwrap_or_default(),
                correct: q.answer.clone(),
            })
            .collect();

        Ok(Self {
            username: session.username.clone(),
            category: session.category,
            timestamp,
            score: score_answers(session.questions(), answers),
            total,
            rows,
        })
    }

    pub fn percentage(&self) -> f32 {
        100.0 * self.score as f32 / self.total as f32
    }

    pub fn is_pass(&self) -> bool {
        self.percentage() >= PASS_THRESHOLD
    }

    /// Transcripción determinista, línea a línea, en orden de pregunta.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        out.push_str("Tarjeta de resultados\n");
        out.push_str(&format!("Nombre: {}\n", self.username));
        out.push_str(&format!("Categoría: {}\n", self.category.label()));
        out.push_str(&format!(
            "Fecha: {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str(&format!(
            "Puntuación: {} / {} ({:.1}%)\n",
            self.score,
            self.total,
            self.percentage()
        ));
        out.push_str("\nDetalle por pregunta:\n");
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&format!("Q{}. {}\n", i + 1, row.prompt));
            let selected = if row.selected.is_empty() {
                EMPTY_MARKER
            } else {
                &row.selected
            };
            out.push_str(&format!("Tu respuesta: {selected}\n"));
            out.push_str(&format!("Respuesta correcta: {}\n\n", row.correct));
        }
        out
    }
}

/// Escribe `<usuario>_result.txt` en el directorio de resultados,
/// creándolo si hace falta. Sobreescribe el intento anterior.
pub fn save_result_card(dir: &Path, card: &ResultCard) -> Result<PathBuf, StorageError> {
    fs::create_dir_all(dir).map_err(|source| StorageError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(format!("{}_result.txt", card.username));
    fs::write(&path, card.transcript()).map_err(|source| StorageError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("tarjeta de resultados guardada en {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bank(answers: &[&str]) -> Vec<Question> {
        answers
            .iter()
            .enumerate()
            .map(|(i, ans)| Question {
                prompt: format!("Pregunta {i}"),
                options: vec!["A".into(), "B".into()],
                answer: (*ans).to_string(),
            })
            .collect()
    }

    #[test]
    fn recorded_match_scores_one() {
        let questions = bank(&["A"]);
        let answers = HashMap::from([(0, "A".to_string())]);
        assert_eq!(score_answers(&questions, &answers), 1);
    }

    #[test]
    fn missing_and_empty_answers_never_match() {
        let questions = bank(&["A"]);
        assert_eq!(score_answers(&questions, &HashMap::new()), 0);
        let empty = HashMap::from([(0, String::new())]);
        assert_eq!(score_answers(&questions, &empty), 0);
    }

    #[test]
    fn full_marks_pass_zero_fails_and_boundary_is_inclusive() {
        let questions = bank(&["A", "B"]);

        // 2 de 2
        let mut s = Session::start("ana", Category::General, questions.clone()).unwrap();
        s.select("A");
        s.advance().unwrap();
        s.select("B");
        s.advance().unwrap();
        let card = ResultCard::from_session(&s).unwrap();
        assert_eq!(card.percentage(), 100.0);
        assert!(card.is_pass());

        // 0 de 2
        let mut s = Session::start("ana", Category::General, questions.clone()).unwrap();
        s.finish();
        let card = ResultCard::from_session(&s).unwrap();
        assert_eq!(card.percentage(), 0.0);
        assert!(!card.is_pass());

        // 1 de 2: justo en el umbral, aprueba
        let mut s = Session::start("ana", Category::General, questions).unwrap();
        s.select("A");
        s.advance().unwrap();
        s.select("A"); // incorrecta
        s.advance().unwrap();
        let card = ResultCard::from_session(&s).unwrap();
        assert_eq!(card.percentage(), 50.0);
        assert!(card.is_pass());
    }

    #[test]
    fn transcript_lists_every_question_in_order() {
        let mut s = Session::start("ana", Category::Science, bank(&["A", "B"])).unwrap();
        s.select("A");
        s.advance().unwrap();
        s.finish();

        let ts = Local.with_ymd_and_hms(2026, 8, 6, 10, 30, 0).unwrap();
        let card = ResultCard::with_timestamp(&s, ts).unwrap();
        let text = card.transcript();

        let expected = "\
Tarjeta de resultados
Nombre: ana
Categoría: Ciencia
Fecha: 2026-08-06 10:30:00
Puntuación: 1 / 2 (50.0%)

Detalle por pregunta:
Q1. Pregunta 0
Tu respuesta: A
Respuesta correcta: A

Q2. Pregunta 1
Tu respuesta: (sin responder)
Respuesta correcta: B

";
        assert_eq!(text, expected);
    }

    #[test]
    fn save_overwrites_previous_attempt() {
        let dir = std::env::temp_dir().join("smart_test_report_test");
        let _ = fs::remove_dir_all(&dir);

        let mut s = Session::start("ana", Category::General, bank(&["A"])).unwrap();
        s.finish();
        let ts = Local.with_ymd_and_hms(2026, 8, 6, 10, 0, 0).unwrap();
        let card = ResultCard::with_timestamp(&s, ts).unwrap();

        let path = save_result_card(&dir, &card).unwrap();
        assert_eq!(path, dir.join("ana_result.txt"));

        // Segundo intento del mismo usuario: el último gana
        let mut s = Session::start("ana", Category::General, bank(&["A"])).unwrap();
        s.select("A");
        s.advance().unwrap();
        let card = ResultCard::with_timestamp(&s, ts).unwrap();
        save_result_card(&dir, &card).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Puntuación: 1 / 1"));
        let _ = fs::remove_dir_all(&dir);
    }
}
