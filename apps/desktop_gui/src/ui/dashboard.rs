//! The champions dashboard: search box, sort toggle, loading-aware grid, and
//! pagination.
//!
//! The dashboard owns only its [`DashboardState`]. Watchlist additions and
//! sort changes belong to the caller, so they come back as
//! [`DashboardIntent`]s to be handled after the frame's panels are drawn.

use eframe::egui;
use shared::{domain::Champion, sort::SortOrder};

use crate::controller::reducer::{DashboardAction, DashboardState};
use crate::ui::{grid::champs_grid, loader::with_loader, pagination::pagination_controls};

pub const DASHBOARD_TITLE: &str = "League of legends champions";
pub const SEARCH_PLACEHOLDER: &str = "Search champion by name";

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardIntent {
    AddToWatchlist(Champion),
    ChangeSortOrder,
}

pub struct Dashboard<'a> {
    pub champs: &'a [Champion],
    pub sort_order: SortOrder,
    pub is_loading: bool,
}

impl Dashboard<'_> {
    pub fn show(self, ui: &mut egui::Ui, state: &mut DashboardState) -> Vec<DashboardIntent> {
        let mut intents = Vec::new();

        ui.heading(DASHBOARD_TITLE);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("🔍");
            let mut search_text = state.search_text().to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut search_text)
                    .id_salt("search_champs_input")
                    .hint_text(SEARCH_PLACEHOLDER)
                    .desired_width(320.0),
            );
            if response.changed() {
                state.reduce(DashboardAction::SearchChanged(search_text));
            }

            if ui.button(sort_toggle_label(self.sort_order)).clicked() {
                intents.push(DashboardIntent::ChangeSortOrder);
            }
        });
        ui.separator();

        let view = state.view(self.champs);
        if !self.is_loading {
            ui.label(egui::RichText::new(format!("{} champions", view.total_count)).weak());
        }
        let grid_height = (ui.available_height() - 48.0).max(160.0);
        let added = with_loader(ui, self.is_loading, |ui| {
            egui::ScrollArea::vertical()
                .max_height(grid_height)
                .show(ui, |ui| champs_grid(ui, &view.page_items))
                .inner
        })
        .flatten();
        if let Some(champion) = added {
            intents.push(DashboardIntent::AddToWatchlist(champion));
        }

        ui.add_space(8.0);
        if let Some(page) = pagination_controls(ui, view.page_count, view.current_page) {
            state.reduce(DashboardAction::PageSelected(page));
        }

        intents
    }
}

/// "Sort by name" followed by the order icon, when there is an order.
pub fn sort_toggle_label(sort_order: SortOrder) -> String {
    match sort_order.icon() {
        Some(icon) => format!("Sort by name {}", icon.glyph()),
        None => "Sort by name".to_string(),
    }
}
