use prakriti_quiz::PrakritiApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Test de Prakriti",
        options,
        Box::new(|cc| {
            let app = PrakritiApp::new(cc.storage)?;
            Ok(Box::new(app))
        }),
    )
}
