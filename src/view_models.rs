// src/view_models.rs

/// Una opción de la pregunta en pantalla, lista para pintar como caja
#[derive(Clone, Debug)]
pub struct OptionRow {
    pub text: String,
    pub selected: bool, // la caja lleva el tic ✔
}

/// Una fila del detalle en la pantalla de resultados
#[derive(Clone, Debug)]
pub struct ResultRowView {
    pub number: usize, // 1-based
    pub prompt: String,
    pub selected: String, // "" = sin responder
    pub correct: String,
    pub is_correct: bool,
}
