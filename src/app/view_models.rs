use super::*;

impl TestApp {
    /// Cajas de opciones de la pregunta en pantalla, con el tic puesto.
    /// Lista explícita (texto, elegida): la UI solo pinta y devuelve clics.
    pub fn option_rows(&self) -> Vec<OptionRow> {
        let Some(session) = &self.session else {
            return vec![];
        };
        let Some(question) = session.current_question() else {
            return vec![];
        };
        let selection = session.selection();
        question
            .options
            .iter()
            .map(|opt| OptionRow {
                text: opt.clone(),
                selected: selection == Some(opt.as_str()),
            })
            .collect()
    }

    pub fn result_rows(&self) -> Vec<ResultRowView> {
        let Some(card) = &self.result else {
            return vec![];
        };
        card.rows
            .iter()
            .enumerate()
            .map(|(i, row)| ResultRowView {
                number: i + 1,
                prompt: row.prompt.clone(),
                selected: row.selected.clone(),
                correct: row.correct.clone(),
                is_correct: !row.selected.is_empty() && row.selected == row.correct,
            })
            .collect()
    }
}
