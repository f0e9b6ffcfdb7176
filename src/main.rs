use eframe::egui::{
    Button, CollapsingHeader, Color32, FontData, FontDefinitions, FontFamily, RichText, ScrollArea,
    TextEdit,
};
use eframe::{egui, Frame};
use itertools::Itertools;
use resume_matcher::i18n::{text, Key};
use resume_matcher::interpret::Analysis;
use resume_matcher::settings::Settings;
use resume_matcher::*;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::{panic, thread};

/// Fonts tried in order so that Japanese and Chinese text renders.
const CJK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
];

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("Could not read secrets file, using environment only: {e}");
        Settings {
            api_key: std::env::var(settings::API_KEY_VAR).ok(),
            ..Default::default()
        }
    });
    log::debug!("Loaded {settings:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };

    let (tx, rx) = std::sync::mpsc::channel();
    eframe::run_native(
        "Resume Matcher",
        options,
        Box::new(|cc| {
            install_cjk_fonts(&cc.egui_ctx);
            Ok(Box::new(MatcherGui {
                ui_lang: UiLang::default(),
                model: Model::default(),
                output_lang: OutputLang::default(),
                job_description: String::new(),
                resume: None,
                settings,
                tx,
                rx,
                status: None,
                analysis_thread: None,
            }))
        }),
    )
    .expect("eframe/egui run failed");
}

fn install_cjk_fonts(ctx: &egui::Context) {
    let Some((path, bytes)) = CJK_FONT_PATHS
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|bytes| (*p, bytes)))
    else {
        log::warn!("No CJK font found, Japanese and Chinese text may not render");
        return;
    };
    log::info!("Using CJK font {path}");

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
}

#[derive(Debug)]
struct UploadedResume {
    path: PathBuf,
    bytes: Vec<u8>,
}

#[derive(Debug)]
struct MatcherGui {
    ui_lang: UiLang,
    model: Model,
    output_lang: OutputLang,
    job_description: String,
    resume: Option<UploadedResume>,
    settings: Settings,
    tx: Sender<AnalysisStatus>,
    rx: Receiver<AnalysisStatus>,
    status: Option<AnalysisStatus>,
    analysis_thread: Option<thread::JoinHandle<()>>,
}

impl eframe::App for MatcherGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        while let Ok(status) = self.rx.try_recv() {
            match status {
                AnalysisStatus::Success(_) | AnalysisStatus::Error(_) => {
                    self.analysis_thread = None;
                }
                _ => {}
            }
            self.status = Some(status);
        }

        egui::SidePanel::left("selections").show(ctx, |ui| {
            ui.label(text(self.ui_lang, Key::UiLangLabel));
            for lang in UiLang::ALL {
                ui.radio_value(&mut self.ui_lang, lang, lang.display_name());
            }
            ui.separator();

            ui.label(text(self.ui_lang, Key::ModelLabel));
            egui::ComboBox::from_id_salt("model")
                .selected_text(self.model.id())
                .show_ui(ui, |ui| {
                    for model in Model::ALL {
                        ui.selectable_value(&mut self.model, model, model.id());
                    }
                });
            ui.separator();

            ui.label(text(self.ui_lang, Key::OutputLangLabel));
            for lang in OutputLang::ALL {
                ui.radio_value(&mut self.output_lang, lang, lang.directive());
            }
        });

        let ui_lang = self.ui_lang;
        let t = move |key| text(ui_lang, key);

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(t(Key::Title));
                ui.label(RichText::new(t(Key::Caption)).weak());
                ui.add_space(8.0);

                ui.label(t(Key::JdLabel));
                ui.add(
                    TextEdit::multiline(&mut self.job_description)
                        .hint_text(t(Key::JdPlaceholder))
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                );

                ui.horizontal(|ui| {
                    let btn = ui.button(t(Key::UploadLabel));

                    if let Some(resume) = self.resume.as_ref() {
                        ui.label(resume.path.display().to_string());
                    }

                    if btn.clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("PDF", &["pdf"])
                            .pick_file()
                        {
                            match std::fs::read(&path) {
                                Ok(bytes) => {
                                    log::info!(
                                        "Selected {} ({} bytes)",
                                        path.display(),
                                        bytes.len()
                                    );
                                    self.resume = Some(UploadedResume { path, bytes });
                                }
                                Err(e) => {
                                    self.resume = None;
                                    self.status = Some(AnalysisStatus::Error(
                                        AnalysisError::OtherError(e.into()),
                                    ));
                                }
                            }
                        }
                    }
                });

                let btn = ui.add_enabled(
                    self.analysis_thread.is_none(),
                    Button::new(t(Key::AnalyzeButton)).fill(Color32::from_rgb(255, 75, 75)),
                );
                if btn.clicked() {
                    self.start_analysis(ctx);
                }

                ui.add_space(8.0);
                self.show_status(ui);
            });
        });
    }
}

impl MatcherGui {
    fn start_analysis(&mut self, ctx: &egui::Context) {
        self.status = None;

        let request = AnalysisRequest {
            job_description: self.job_description.clone(),
            resume: self.resume.as_ref().map(|r| r.bytes.clone()),
            model: self.model,
            output_lang: self.output_lang,
        };
        let settings = self.settings.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();

        self.analysis_thread = Some(thread::spawn(move || {
            tx.send(AnalysisStatus::Started).unwrap();
            ctx.request_repaint();

            let analysis_res = panic::catch_unwind(|| -> Result<Analysis, AnalysisError> {
                let rt = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(|e| AnalysisError::OtherError(e.into()))?;
                rt.block_on(analyze(request, &settings))
            });
            let status = match analysis_res {
                Ok(Ok(analysis)) => AnalysisStatus::Success(analysis),
                Ok(Err(failure)) => AnalysisStatus::Error(failure),
                Err(_) => {
                    AnalysisStatus::Error(AnalysisError::OtherError(anyhow::anyhow!("Crash!")))
                }
            };
            tx.send(status).unwrap();
            ctx.request_repaint();
        }));
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        let t = |key| text(self.ui_lang, key);
        match self.status.as_ref() {
            Some(AnalysisStatus::Started) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(t(Key::SpinnerText));
                });
            }
            Some(AnalysisStatus::Success(analysis)) => {
                ui.colored_label(Color32::DARK_GREEN, t(Key::AnalysisDone));
                match analysis {
                    Analysis::Structured(value) => {
                        ui.heading(t(Key::ResultHeader));
                        json_tree(ui, "root", None, value);
                    }
                    Analysis::Raw(raw) => {
                        ui.heading(t(Key::ResultRawHeader));
                        let mut raw = raw.as_str();
                        ui.add(
                            TextEdit::multiline(&mut raw)
                                .code_editor()
                                .desired_width(f32::INFINITY),
                        );
                    }
                }
            }
            Some(AnalysisStatus::Error(error)) => {
                ui.colored_label(Color32::RED, error.localized(self.ui_lang));
            }
            None => {}
        }
    }
}

/// Renders a JSON value as an expanded, collapsible tree.
fn json_tree(ui: &mut egui::Ui, id: &str, key: Option<&str>, value: &Value) {
    let prefix = key.map(|k| format!("{k}: ")).unwrap_or_default();
    match value {
        Value::Object(map) => {
            CollapsingHeader::new(format!("{prefix}{{…}}"))
                .id_salt(id)
                .default_open(true)
                .show(ui, |ui| {
                    for (k, v) in map {
                        json_tree(ui, &format!("{id}.{k}"), Some(k), v);
                    }
                });
        }
        Value::Array(items) if items.iter().all(|v| !v.is_object() && !v.is_array()) => {
            CollapsingHeader::new(format!("{prefix}[{}]", items.len()))
                .id_salt(id)
                .default_open(true)
                .show(ui, |ui| {
                    ui.label(items.iter().map(scalar_text).map(|s| format!("• {s}")).join("\n"));
                });
        }
        Value::Array(items) => {
            CollapsingHeader::new(format!("{prefix}[{}]", items.len()))
                .id_salt(id)
                .default_open(true)
                .show(ui, |ui| {
                    for (i, v) in items.iter().enumerate() {
                        json_tree(ui, &format!("{id}[{i}]"), Some(&i.to_string()), v);
                    }
                });
        }
        scalar => {
            ui.label(format!("{prefix}{}", scalar_text(scalar)));
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
