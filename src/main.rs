pub mod app;
pub mod download;
pub mod fal;
pub mod receive;
pub mod settings;
pub mod ui;

impl eframe::App for app::StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive(ctx);
        self.navbar(ctx);
        egui_dock::DockArea::new(&mut self.tree)
            .show_close_buttons(true)
            .show(ctx, &mut self.context);
        self.context.toasts.show(ctx);
    }

    fn persist_egui_memory(&self) -> bool {
        true
    }
}

#[tokio::main]
async fn main() -> eframe::Result<()> {
    egui_logger::builder()
        .max_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    eframe::run_native(
        format!("Character Animation Studio {}", env!("CARGO_PKG_VERSION")).as_str(),
        eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 800.0])
                .with_drag_and_drop(true),
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(app::StudioApp::new(cc)))),
    )
}
