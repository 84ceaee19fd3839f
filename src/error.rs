// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errores al leer o parsear un banco de preguntas.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no se pudo leer el banco {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cada pregunta necesita al menos 2 opciones separadas por `|`
    #[error("registro en la línea {line_no}: hacen falta al menos 2 opciones")]
    TooFewOptions { line_no: usize },

    /// La respuesta correcta debe ser el texto literal de una opción
    #[error("registro en la línea {line_no}: la respuesta \"{answer}\" no figura entre las opciones")]
    AnswerNotInOptions { line_no: usize, answer: String },
}

/// Errores de validación de la sesión. Son avisos recuperables:
/// el usuario se queda en la pantalla actual.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("escribe tu nombre antes de empezar")]
    EmptyUsername,

    #[error("la categoría \"{0}\" no tiene preguntas")]
    EmptyBank(String),

    #[error("selecciona una opción antes de continuar")]
    NoSelection,
}

/// Errores al persistir la tarjeta de resultados. Abortan solo el
/// guardado, nunca la sesión en curso.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("no se pudo crear el directorio de resultados {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no se pudo escribir {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
