use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Category {
    General,
    Science,
    History,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::General, Category::Science, Category::History];

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "Cultura general",
            Category::Science => "Ciencia",
            Category::History => "Historia",
        }
    }

    /// Cada categoría tiene su fichero fijo dentro del directorio de bancos
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::General => "general.txt",
            Category::Science => "science.txt",
            Category::History => "history.txt",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,       // Enunciado
    pub options: Vec<String>, // Siempre 2 o más
    pub answer: String,       // Texto literal de la opción correcta
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}

// ¡Implementa Default!
impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}
