//! Alias lookup application
//!
//! One form (username, nickname, trigger button) above one output region
//! (caption + body). Triggering issues a GET against the backend; the
//! completing future posts into a shared slot that `update` drains.
//!
//! Overlapping triggers are not serialized or cancelled: every trigger
//! spawns its own request and the slot keeps whichever result lands last.

use crate::api::ApiClient;
use crate::state::{Answer, LookupForm, ResponseSlot};
use eframe::egui;
use egui::{RichText, TextEdit};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Main application state
pub struct AliasLookupApp {
    // API client
    api: ApiClient,

    // Input fields
    form: LookupForm,

    // Output region
    answer: Answer,

    // Async result holder, shared with every spawned request
    responses: ResponseSlot,
    in_flight: Arc<AtomicUsize>,

    // Tokio runtime for native builds
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Arc<tokio::runtime::Runtime>,
}

impl AliasLookupApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        #[cfg(target_arch = "wasm32")]
        let base_url = {
            web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_else(|| "http://localhost:8080".to_string())
        };

        #[cfg(not(target_arch = "wasm32"))]
        let base_url = "http://localhost:8080".to_string();

        #[cfg(not(target_arch = "wasm32"))]
        let runtime = Arc::new(
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime"),
        );

        Self {
            api: ApiClient::new(&base_url),
            form: LookupForm::default(),
            answer: Answer::None,
            responses: ResponseSlot::default(),
            in_flight: Arc::new(AtomicUsize::new(0)),
            #[cfg(not(target_arch = "wasm32"))]
            runtime,
        }
    }

    /// Fired on each trigger activation. Usernames below the minimum length
    /// abort silently: no request, no UI change.
    fn trigger_lookup(&mut self) {
        if !self.form.is_submittable() {
            return;
        }

        let api = self.api.clone();
        let username = self.form.username.clone();
        let nickname = self.form.nickname.clone();
        let responses = self.responses.clone();
        let in_flight = self.in_flight.clone();

        tracing::debug!(%username, %nickname, "looking up ping aliases");
        in_flight.fetch_add(1, Ordering::SeqCst);

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                let res = api.ping_aliases(&username, &nickname).await;
                if let Err(e) = &res {
                    tracing::warn!(error = %e, "alias lookup failed");
                }
                responses.post(res);
                in_flight.fetch_sub(1, Ordering::SeqCst);
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.runtime.spawn(async move {
                let res = api.ping_aliases(&username, &nickname).await;
                if let Err(e) = &res {
                    tracing::warn!(error = %e, "alias lookup failed");
                }
                responses.post(res);
                in_flight.fetch_sub(1, Ordering::SeqCst);
            });
        }
    }

    fn check_responses(&mut self) {
        if let Some(result) = self.responses.take() {
            self.answer = Answer::from_result(result);
        }
    }
}

impl eframe::App for AliasLookupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_responses();

        // Keep repainting while requests are outstanding so their results
        // are picked up without waiting for the next input event.
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Discord ping aliases");
            ui.add_space(8.0);

            let mut submitted = false;

            ui.horizontal(|ui| {
                ui.label("Username");
                let response = ui.add(
                    TextEdit::singleline(&mut self.form.username).hint_text("your username"),
                );
                submitted |=
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            });

            ui.horizontal(|ui| {
                ui.label("Nickname");
                let response = ui.add(
                    TextEdit::singleline(&mut self.form.nickname)
                        .hint_text("server nickname (optional)"),
                );
                submitted |=
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            });

            if ui.button("Check").clicked() || submitted {
                self.trigger_lookup();
            }

            if let Some(title) = self.answer.title() {
                ui.add_space(8.0);
                ui.separator();
                ui.label(RichText::new(title).strong());
                ui.label(self.answer.body());
            }
        });
    }
}
