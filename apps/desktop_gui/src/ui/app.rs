use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::RichText;
use intake_core::{IntakeAction, IntakeController, IntakeEffect, IntakeView};
use shared::{
    domain::{FailureNotice, Field, SubmissionResult, ViewState},
    profile::ProfileData,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{UiError, UiEvent},
    orchestration::dispatch_backend_command,
};
use crate::ui::theme;

const SUCCESS_BODY: &str = "Your details have been securely received. Taking the first step is often the hardest, and I appreciate you reaching out. I will review your message and contact you shortly.";
const FORM_INTRO: &str = "Please share a few details so I can better understand how to assist you. All information is kept strictly confidential.";

#[derive(Default)]
pub struct StartupConfig {
    pub profile: ProfileData,
    pub banner: Option<UiError>,
}

pub struct IntakeApp {
    controller: IntakeController,
    profile: ProfileData,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
    status_banner: Option<UiError>,
    theme_applied: bool,
}

impl IntakeApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            controller: IntakeController::new(),
            profile: startup.profile,
            cmd_tx,
            ui_rx,
            status: String::new(),
            status_banner: startup.banner,
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::SubmissionFinished(result) => {
                    self.status.clear();
                    self.apply(IntakeAction::SubmissionFinished(result));
                }
                UiEvent::Error(err) => {
                    tracing::error!(context = ?err.context(), "{}", err.message());
                    self.status_banner = Some(err);
                }
            }
        }
    }

    fn apply(&mut self, action: IntakeAction) {
        if action == IntakeAction::Submit && sending_blocked(self.status_banner.as_ref()) {
            tracing::debug!("submit ignored while the relay is unavailable");
            return;
        }
        if let Some(effect) = self.controller.dispatch(action) {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: IntakeEffect) {
        match effect {
            IntakeEffect::Submit(submission) => {
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SubmitIntake { submission },
                    &mut self.status,
                );
                // Nothing will ever answer an unqueued submission.
                if !queued {
                    self.controller
                        .finish_submission(SubmissionResult::NetworkFailure);
                }
            }
        }
    }
}

impl eframe::App for IntakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        let view = self.controller.view();
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(theme::CONTENT_MAX_WIDTH);
                    ui.add_space(24.0);
                    render_header(ui, &self.profile);
                    ui.separator();
                    render_about(ui, &self.profile);
                    render_specialties(ui, &self.profile);
                    render_contact_card(
                        ui,
                        &view,
                        &self.profile,
                        self.status_banner.as_ref(),
                        &mut actions,
                    );
                    if !self.status.is_empty() {
                        ui.add_space(8.0);
                        ui.weak(&self.status);
                    }
                    ui.add_space(24.0);
                });
            });
        });

        if let Some(notice) = view.notice {
            render_notice(ctx, notice, &mut actions);
        }

        for action in actions {
            self.apply(action);
        }

        let repaint_after = if view.view == ViewState::Submitting {
            std::time::Duration::from_millis(50)
        } else {
            std::time::Duration::from_millis(250)
        };
        ctx.request_repaint_after(repaint_after);
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(22.0).strong().color(theme::HEADING));
    ui.add_space(8.0);
}

fn render_header(ui: &mut egui::Ui, profile: &ProfileData) {
    ui.label(
        RichText::new(&profile.name)
            .size(34.0)
            .strong()
            .color(theme::HEADING),
    );
    ui.label(RichText::new(&profile.title).size(18.0).color(theme::MUTED));
    ui.add_space(24.0);
}

fn render_about(ui: &mut egui::Ui, profile: &ProfileData) {
    ui.add_space(16.0);
    section_heading(ui, "About My Practice");
    ui.label(RichText::new(&profile.about).size(16.0).color(theme::BODY));
    ui.add_space(24.0);
}

fn render_specialties(ui: &mut egui::Ui, profile: &ProfileData) {
    if profile.specialties.is_empty() {
        return;
    }
    section_heading(ui, "How I Can Help");
    ui.horizontal_wrapped(|ui| {
        for specialty in &profile.specialties {
            egui::Frame::NONE
                .fill(theme::CARD_BACKGROUND)
                .corner_radius(8.0)
                .stroke(egui::Stroke::new(1.0, theme::ACCENT))
                .inner_margin(egui::Margin::symmetric(14, 12))
                .show(ui, |ui| {
                    ui.label(RichText::new(specialty).color(theme::INK));
                });
        }
    });
    ui.add_space(24.0);
}

fn sending_blocked(banner: Option<&UiError>) -> bool {
    banner.is_some_and(UiError::blocks_submission)
}

fn render_contact_card(
    ui: &mut egui::Ui,
    view: &IntakeView,
    profile: &ProfileData,
    banner: Option<&UiError>,
    actions: &mut Vec<IntakeAction>,
) {
    egui::Frame::NONE
        .fill(theme::CARD_BACKGROUND)
        .corner_radius(12.0)
        .stroke(egui::Stroke::new(1.0, theme::DIVIDER))
        .inner_margin(egui::Margin::symmetric(24, 24))
        .show(ui, |ui| {
            if let Some(err) = banner {
                ui.colored_label(theme::ERROR, err.message());
                if err.blocks_submission() {
                    ui.colored_label(theme::ERROR, "Messages cannot be sent until this is fixed.");
                }
                ui.add_space(8.0);
            }
            match &view.view {
                ViewState::Success(name) => render_success(ui, name, actions),
                ViewState::Idle => render_get_in_touch(ui, profile, actions),
                ViewState::FormOpen | ViewState::Submitting => {
                    render_form(ui, view, sending_blocked(banner), actions)
                }
            }
        });
}

fn render_success(ui: &mut egui::Ui, submitted_name: &str, actions: &mut Vec<IntakeAction>) {
    ui.label(RichText::new("✨").size(40.0).color(theme::ACCENT));
    section_heading(ui, &format!("Thank You, {submitted_name}"));
    ui.label(RichText::new(SUCCESS_BODY).size(16.0).color(theme::BODY));
    ui.add_space(16.0);
    let button = egui::Button::new(RichText::new("Return to Profile").strong().color(theme::HEADING))
        .fill(theme::SECONDARY_BUTTON)
        .corner_radius(20.0);
    if ui.add(button).clicked() {
        actions.push(IntakeAction::ReturnToProfile);
    }
}

fn render_get_in_touch(ui: &mut egui::Ui, profile: &ProfileData, actions: &mut Vec<IntakeAction>) {
    section_heading(ui, "Get in Touch");
    ui.label(RichText::new(format!("Phone: {}", profile.contact.phone)).color(theme::BODY));
    ui.label(RichText::new(format!("Location: {}", profile.contact.address)).color(theme::BODY));
    ui.add_space(16.0);
    let button = egui::Button::new(
        RichText::new("Share Your Problem With Me")
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(theme::HEADING)
    .corner_radius(20.0);
    if ui.add(button).clicked() {
        actions.push(IntakeAction::OpenForm);
    }
}

fn render_form(
    ui: &mut egui::Ui,
    view: &IntakeView,
    sending_blocked: bool,
    actions: &mut Vec<IntakeAction>,
) {
    section_heading(ui, "Initial Intake Form");
    ui.label(RichText::new(FORM_INTRO).color(theme::MUTED));
    ui.add_space(12.0);

    // The failure notice is modal; nothing else is editable until it is dismissed.
    let enabled = view.controls_enabled && view.notice.is_none();

    ui.with_layout(egui::Layout::top_down_justified(egui::Align::Min), |ui| {
        field_input(ui, view, enabled, Field::Name, "Your Name", "", false, actions);
        field_input(
            ui,
            view,
            enabled,
            Field::Phone,
            "Your Phone Number",
            "e.g. 9876543210",
            false,
            actions,
        );
        field_input(
            ui,
            view,
            enabled,
            Field::Message,
            "What are you currently experiencing?",
            "Briefly describe what brings you here today...",
            true,
            actions,
        );
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        let can_send = enabled && !sending_blocked;
        let submit_fill = if view.controls_enabled && !sending_blocked {
            theme::HEADING
        } else {
            theme::MUTED
        };
        let submit = egui::Button::new(
            RichText::new(view.submit_label)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(submit_fill)
        .corner_radius(6.0);
        if ui.add_enabled(can_send, submit).clicked() {
            actions.push(IntakeAction::Submit);
        }

        let cancel = egui::Button::new(RichText::new("Cancel").color(theme::HEADING))
            .fill(theme::SECONDARY_BUTTON)
            .corner_radius(6.0);
        if ui.add_enabled(enabled, cancel).clicked() {
            actions.push(IntakeAction::Cancel);
        }
    });
}

#[allow(clippy::too_many_arguments)]
fn field_input(
    ui: &mut egui::Ui,
    view: &IntakeView,
    enabled: bool,
    field: Field,
    label: &str,
    hint: &str,
    multiline: bool,
    actions: &mut Vec<IntakeAction>,
) {
    ui.label(RichText::new(label).strong().color(theme::HEADING));

    let mut buf = view.fields.get(field).to_string();
    let edit = if multiline {
        egui::TextEdit::multiline(&mut buf).desired_rows(4)
    } else {
        egui::TextEdit::singleline(&mut buf)
    }
    .id_salt(field.as_str())
    .hint_text(hint)
    .desired_width(f32::INFINITY);

    let response = egui::Frame::NONE
        .stroke(theme::field_stroke(view.errors.contains(field)))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(4))
        .show(ui, |ui| ui.add_enabled(enabled, edit))
        .inner;

    if response.changed() {
        actions.push(IntakeAction::UpdateField { field, value: buf });
    }

    if let Some(message) = view.errors.get(field) {
        ui.label(RichText::new(message).small().color(theme::ERROR));
    }
    ui.add_space(8.0);
}

fn render_notice(ctx: &egui::Context, notice: FailureNotice, actions: &mut Vec<IntakeAction>) {
    egui::Window::new("Submission not sent")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(notice.message());
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                actions.push(IntakeAction::DismissNotice);
            }
        });
}
