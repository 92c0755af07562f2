use egui::{Align, Layout, Response, Ui};

use crate::state::State;
use crate::widgets::login_form;

pub const APP_TITLE: &str = "EyeSentry Admin";

/// Shown to signed-out users instead of any gated page.
pub fn login_page(ui: &mut Ui, state: &mut State) -> Response {
    let response = ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(20.0);
        ui.heading(APP_TITLE);
        ui.add_space(40.0);

        let (_, submitted) = login_form(ui, &mut state.login_form, state.auth.error());
        submitted
    });

    if response.inner {
        state.submit_sign_in(ui.ctx());
    }

    response.response
}

/// Shown while a sign-in request is in flight.
pub fn loading_page(ui: &mut Ui) -> Response {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(20.0);
        ui.heading(APP_TITLE);
        ui.add_space(40.0);

        ui.spinner();
        ui.label("Signing in...");
    })
    .response
}
