use eframe::egui;

/// Renders a spinner in place of `add_contents` while `is_loading` is set.
pub fn with_loader<R>(
    ui: &mut egui::Ui,
    is_loading: bool,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> Option<R> {
    if !is_loading {
        return Some(add_contents(ui));
    }

    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.add(egui::Spinner::new().size(32.0));
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Loading champions…").weak());
    });
    None
}
