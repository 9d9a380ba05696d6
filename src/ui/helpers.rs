// src/ui/helpers.rs
use crate::view_models::DoshaBar;
use egui::{Button, Color32, ProgressBar, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Botón de opción a ancho completo; la opción ya elegida se muestra seleccionada.
pub fn option_button(ui: &mut Ui, label: &str, width: f32, selected: bool) -> bool {
    ui.add_sized([width, 40.0], Button::new(label).selected(selected))
        .clicked()
}

pub fn dosha_color(bar: &DoshaBar) -> Color32 {
    if !bar.highlighted {
        return Color32::GRAY;
    }
    match bar.dosha {
        crate::model::Dosha::Vata => Color32::from_rgb(120, 160, 220),
        crate::model::Dosha::Pitta => Color32::from_rgb(220, 110, 70),
        crate::model::Dosha::Kapha => Color32::from_rgb(90, 170, 110),
    }
}

/// Barra horizontal con el porcentaje de un dosha
pub fn dosha_bar(ui: &mut Ui, bar: &DoshaBar, width: f32) {
    ui.add(
        ProgressBar::new(bar.fraction())
            .desired_width(width)
            .fill(dosha_color(bar))
            .text(bar.label()),
    );
}
