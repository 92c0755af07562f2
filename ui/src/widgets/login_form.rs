//! Email and password sign-in form.

use egui::{Align, Button, Color32, Key, Layout, Response, TextEdit, Ui};

/// Red color for error status
const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Form fields. Cleared after a successful sign-in.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Renders the form. Returns `true` when the user submitted it, either
/// with the button or with Enter in the password field.
pub fn login_form(ui: &mut Ui, form: &mut LoginForm, error: Option<&str>) -> (Response, bool) {
    let mut submitted = false;

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            if let Some(err) = error {
                ui.colored_label(COLOR_RED, err);
                ui.add_space(8.0);
            }

            ui.horizontal(|ui| {
                ui.label("Email:");
                ui.add(
                    TextEdit::singleline(&mut form.email)
                        .desired_width(220.0)
                        .hint_text("admin@eyesentry.app"),
                );
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Password:");
                let password = ui.add(
                    TextEdit::singleline(&mut form.password)
                        .password(true)
                        .desired_width(220.0),
                );
                if password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    submitted = true;
                }
            });

            ui.add_space(16.0);

            if ui
                .add_enabled(form.is_complete(), Button::new("Sign In"))
                .clicked()
            {
                submitted = true;
            }
        })
        .response;

    (response, submitted && form.is_complete())
}
