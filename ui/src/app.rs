use eyesentry_business::{AuthProvider, PageAccess};

use crate::{pages, state::State, widgets};

/// Auth-gated admin console shell.
pub struct EyeSentryApp {
    state: State,
}

impl EyeSentryApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for EyeSentryApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_api_events();

        let mut sign_out = false;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::env_version(ui);

                if let Some(user) = self.state.auth.current_user() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Sign out").clicked() {
                            sign_out = true;
                        }
                        ui.label(user.display_name());
                    });
                }
            });
        });

        if sign_out {
            self.state.sign_out();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let access = PageAccess::resolve(&self.state.auth);
            match access {
                PageAccess::Loading => pages::loading_page(ui),
                PageAccess::RedirectToLogin => pages::login_page(ui, &mut self.state),
                PageAccess::Ready(_) => pages::users_page(ui, &mut self.state),
            };
        });
    }
}
