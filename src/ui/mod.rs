pub mod layout;
pub mod views;

use crate::app::TestApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for TestApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // La cuenta atrás se alimenta del reloj de pared al empezar el frame
        self.drive_timer();

        if matches!(self.state, AppState::Quiz) {
            top_panel(self, ctx);
            // Mantiene viva la cuenta atrás aunque no haya interacción
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las funciones de views/
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Result => views::result::ui_result(self, ctx),
        }

        if self.confirm_restart {
            self.confirm_restart(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
