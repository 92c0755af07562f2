use eyesentry_utils::version_info;
use egui::{Color32, Response, Ui};

/// Displays the build channel and version, e.g. `stable:0.1.0` or
/// `dev:{commit}`.
pub fn env_version(ui: &mut Ui) -> Response {
    let display_text = version_info::format_env_version();
    let (channel, _) = version_info::env_version_info();

    let color = match channel {
        "stable" => Color32::GREEN,
        "staging" => Color32::from_rgb(255, 165, 0), // Orange
        "dev" => Color32::from_rgb(200, 200, 200),   // Light gray
        _ => Color32::WHITE,
    };

    ui.colored_label(color, display_text)
}
