// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use pdfbabel::app_config::Config;
use pdfbabel::app_controller::AppController;
use pdfbabel::app_view::PdfTranslatorApp;
use pdfbabel::mail_composer::DesktopMailComposer;
use pdfbabel::preview_renderer::PdfiumPageRenderer;
use pdfbabel::translation_service::TranslationService;

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    let config = Config::default();
    config.validate()?;

    CustomLogger::init(config.log_level.to_level_filter())
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    // The GUI event loop owns the main thread; translation jobs run on this
    // runtime's workers and report back over a channel
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let _guard = runtime.enter();

    let service = TranslationService::from_config(&config);
    let controller = AppController::new(
        service,
        Box::new(PdfiumPageRenderer::new()),
        Box::new(DesktopMailComposer::new()),
        config.source_language,
        config.target_language,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_maximized(true),
        ..Default::default()
    };

    eframe::run_native(
        "PDF Translator",
        options,
        Box::new(|cc| Box::new(PdfTranslatorApp::new(cc, controller))),
    )
    .map_err(|e| {
        warn!("Window closed with error: {}", e);
        anyhow!("GUI error: {}", e)
    })
}
