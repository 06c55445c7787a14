use eframe::egui;

use crate::controller::pagination::{page_links, PageLink};

/// Previous/next buttons around the page links. Returns the page the user
/// picked this frame, if any.
pub fn pagination_controls(
    ui: &mut egui::Ui,
    total_pages: usize,
    current_page: usize,
) -> Option<usize> {
    if total_pages == 0 {
        return None;
    }

    let mut selected = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(current_page > 1, egui::Button::new("‹ Prev"))
            .clicked()
        {
            selected = Some(current_page - 1);
        }

        for link in page_links(total_pages, current_page) {
            match link {
                PageLink::Page(page) => {
                    let button = egui::Button::new(page.to_string()).selected(page == current_page);
                    if ui.add(button).clicked() {
                        selected = Some(page);
                    }
                }
                PageLink::Gap => {
                    ui.label("…");
                }
            }
        }

        if ui
            .add_enabled(current_page < total_pages, egui::Button::new("Next ›"))
            .clicked()
        {
            selected = Some(current_page + 1);
        }
    });
    selected
}
