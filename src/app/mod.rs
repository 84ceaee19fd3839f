use crate::model::{AppState, Category};
use crate::report::ResultCard;
use crate::session::Session;
use crate::timer::SessionTimer;
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{OptionRow, ResultRowView};

/// Orquestador de pantallas: mapea el estado de la sesión a la pantalla
/// activa y las acciones de la UI a transiciones. La lógica de negocio
/// vive en `session`, `timer` y `report`.
#[derive(Serialize, Deserialize)]
pub struct TestApp {
    // Preferencias que sobreviven entre ejecuciones (solo relleno de UI)
    pub username_input: String,
    pub category: Category,
    pub questions_dir: PathBuf,
    pub results_dir: PathBuf,
    pub message: String,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub session: Option<Session>,
    // La cuenta atrás vive junto a la sesión; cancelarla es una llamada explícita
    #[serde(skip)]
    pub timer: Option<SessionTimer>,
    // Último instante convertido en ticks de 1 s
    #[serde(skip)]
    pub last_tick: Option<Instant>,
    #[serde(skip)]
    pub result: Option<ResultCard>,
    #[serde(skip)]
    pub saved_to: Option<PathBuf>,
    #[serde(skip)]
    pub confirm_restart: bool,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            username_input: String::new(),
            category: Category::General,
            questions_dir: PathBuf::from("questions"),
            results_dir: PathBuf::from("results"),
            message: String::new(),
            state: AppState::Welcome,
            session: None,
            timer: None,
            last_tick: None,
            result: None,
            saved_to: None,
            confirm_restart: false,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
