use eframe::egui;
use smart_test::TestApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([600.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Smart Test Portal",
        options,
        Box::new(|cc| {
            // Restaura las preferencias de la última ejecución si las hay
            let app = cc
                .storage
                .and_then(|storage| eframe::get_value::<TestApp>(storage, eframe::APP_KEY))
                .unwrap_or_default();
            Ok(Box::new(app))
        }),
    )
}
