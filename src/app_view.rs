/*!
 * egui projection of the controller state.
 *
 * The view owns no workflow state of its own. Each frame it polls the
 * controller for pending translation results, renders the widgets from the
 * controller's fields, and routes user actions back into controller
 * methods. Preview textures are the one piece of view-side state, rebuilt
 * whenever a new file is browsed.
 */

use eframe::egui;
use std::time::Duration;

use crate::app_controller::{AppController, StatusLevel};
use crate::language_utils::Language;

/// Desktop window wrapping the application controller
pub struct PdfTranslatorApp {
    controller: AppController,
    /// GPU textures for the preview pages, rebuilt on browse
    preview_textures: Vec<egui::TextureHandle>,
}

impl PdfTranslatorApp {
    /// Create the view around an initialized controller
    pub fn new(_cc: &eframe::CreationContext<'_>, controller: AppController) -> Self {
        Self {
            controller,
            preview_textures: Vec::new(),
        }
    }

    fn browse(&mut self, ctx: &egui::Context) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF Files", &["pdf"])
            .pick_file()
        {
            self.controller.browse(&path);
            self.rebuild_preview_textures(ctx);
        }
    }

    fn rebuild_preview_textures(&mut self, ctx: &egui::Context) {
        self.preview_textures = self
            .controller
            .preview()
            .iter()
            .enumerate()
            .map(|(index, page)| {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [page.width as usize, page.height as usize],
                    &page.rgba,
                );
                ctx.load_texture(format!("pdf_page_{}", index), image, Default::default())
            })
            .collect();
    }

    fn language_selector(
        ui: &mut egui::Ui,
        id: &str,
        current: Language,
    ) -> Option<Language> {
        let mut selected = current;
        egui::ComboBox::from_id_source(id)
            .selected_text(format!("{} ({})", current.code(), current.name()))
            .show_ui(ui, |ui| {
                for language in Language::ALL {
                    ui.selectable_value(
                        &mut selected,
                        language,
                        format!("{} ({})", language.code(), language.name()),
                    );
                }
            });
        (selected != current).then_some(selected)
    }

    fn status_color(level: StatusLevel) -> egui::Color32 {
        match level {
            StatusLevel::Info => egui::Color32::WHITE,
            StatusLevel::Success => egui::Color32::LIGHT_GREEN,
            StatusLevel::Error => egui::Color32::LIGHT_RED,
        }
    }
}

impl eframe::App for PdfTranslatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll();
        if self.controller.is_translating() {
            // Keep polling while a request is in flight
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("file_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("File path (PDF only):");
                ui.add(
                    egui::TextEdit::singleline(self.controller.path_input_mut())
                        .desired_width(400.0),
                );
                if ui.button("Browse").clicked() {
                    self.browse(ctx);
                }
            });
            ui.horizontal(|ui| {
                ui.label("Source Language:");
                if let Some(language) =
                    Self::language_selector(ui, "source_language", self.controller.source_language())
                {
                    self.controller.change_source_language(language);
                }
                ui.label("Target Language:");
                if let Some(language) =
                    Self::language_selector(ui, "target_language", self.controller.target_language())
                {
                    self.controller.change_target_language(language);
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let translating = self.controller.is_translating();
                if ui
                    .add_enabled(!translating, egui::Button::new("Start Translation"))
                    .clicked()
                {
                    self.controller.start_translation();
                }
                if ui
                    .add_enabled(!translating, egui::Button::new("Send via mail"))
                    .clicked()
                {
                    self.controller.send_mail();
                }
                if translating {
                    ui.spinner();
                }
                if let Some(status) = self.controller.status() {
                    ui.colored_label(Self::status_color(status.level), &status.text);
                }
            });
        });

        egui::SidePanel::right("preview_panel")
            .min_width(400.0)
            .show(ctx, |ui| {
                ui.heading("File Preview");
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for texture in &self.preview_textures {
                        ui.add(egui::Image::new(&*texture).shrink_to_fit());
                        ui.add_space(5.0);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Translation");
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(self.controller.translation_mut()),
                );
            });
        });
    }
}
