use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{
    domain::{Champion, ChampionId},
    sort::SortOrder,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::DashboardState;
use crate::controller::watchlist::{Watchlist, WATCHLIST_STORAGE_KEY};
use crate::ui::dashboard::{Dashboard, DashboardIntent};

/// App shell around the dashboard. Owns everything the dashboard only
/// borrows or asks for: the roster, its sort order, the loading flag, and
/// the watchlist.
pub struct ChampdexApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    roster: Vec<Champion>,
    sort_order: SortOrder,
    is_loading: bool,
    watchlist: Watchlist,
    dashboard: DashboardState,
    status: String,
    status_banner: Option<UiError>,
}

impl ChampdexApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        watchlist: Watchlist,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            roster: Vec::new(),
            sort_order: SortOrder::default(),
            is_loading: false,
            watchlist,
            dashboard: DashboardState::default(),
            status: "Starting…".to_string(),
            status_banner: None,
        };
        app.request_roster();
        app
    }

    fn request_roster(&mut self) {
        if dispatch_backend_command(&self.cmd_tx, BackendCommand::FetchRoster, &mut self.status) {
            self.is_loading = true;
        } else {
            self.status_banner = Some(UiError::from_message(
                UiErrorContext::General,
                self.status.clone(),
            ));
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::RosterLoading { source } => {
                self.is_loading = true;
                self.status = format!("Loading champions from {source}…");
            }
            UiEvent::RosterLoaded {
                source,
                mut champions,
            } => {
                self.sort_order.apply(&mut champions);
                tracing::info!(count = champions.len(), %source, "roster loaded");
                self.status = format!("Loaded {} champions from {source}", champions.len());
                self.roster = champions;
                self.is_loading = false;
                self.status_banner = None;
            }
            UiEvent::Error(err) => {
                tracing::warn!(context = ?err.context(), category = ?err.category(), "{}", err.message());
                self.is_loading = false;
                self.status = err.banner_text();
                self.status_banner = Some(err);
            }
        }
    }

    fn dispatch_intent(&mut self, intent: DashboardIntent) {
        match intent {
            DashboardIntent::AddToWatchlist(champion) => self.handle_watch_list(champion),
            DashboardIntent::ChangeSortOrder => self.change_sort_order(),
        }
    }

    fn handle_watch_list(&mut self, champion: Champion) {
        let name = champion.name.clone();
        if self.watchlist.add(champion) {
            tracing::debug!(champion = %name, "added to watchlist");
            self.status = format!("Added {name} to your watchlist");
        } else {
            self.status = format!("{name} is already on your watchlist");
        }
    }

    fn change_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
        self.sort_order.apply(&mut self.roster);
        tracing::debug!(order = ?self.sort_order.order, "sort order changed");
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        let mut reload = false;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("champdex").strong());
                ui.separator();
                ui.label(self.status.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(!self.is_loading, egui::Button::new("Reload"))
                        .clicked()
                    {
                        reload = true;
                    }
                });
            });
        });
        if reload {
            self.request_roster();
        }
    }

    fn show_watchlist_panel(&mut self, ctx: &egui::Context) {
        let mut removed: Option<ChampionId> = None;
        egui::SidePanel::right("watchlist_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading(format!("Watchlist ({})", self.watchlist.len()));
                ui.separator();
                if self.watchlist.is_empty() {
                    ui.label(egui::RichText::new("No champions yet").weak());
                    return;
                }
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for champion in self.watchlist.iter() {
                        ui.horizontal(|ui| {
                            ui.label(champion.name.as_str());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("Remove").clicked() {
                                        removed = Some(champion.id);
                                    }
                                },
                            );
                        });
                    }
                });
            });

        if let Some(champion) = removed.and_then(|id| self.watchlist.remove(id)) {
            self.status = format!("Removed {} from your watchlist", champion.name);
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };

        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(banner.banner_text()).color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }
}

impl eframe::App for ChampdexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_top_bar(ctx);
        self.show_watchlist_panel(ctx);

        let intents = egui::CentralPanel::default()
            .show(ctx, |ui| {
                self.show_status_banner(ui);
                Dashboard {
                    champs: &self.roster,
                    sort_order: self.sort_order,
                    is_loading: self.is_loading,
                }
                .show(ui, &mut self.dashboard)
            })
            .inner;
        for intent in intents {
            self.dispatch_intent(intent);
        }

        if self.is_loading {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.watchlist.to_json() {
            Ok(serialized) => storage.set_string(WATCHLIST_STORAGE_KEY, serialized),
            Err(err) => tracing::warn!("failed to serialize watchlist: {err}"),
        }
    }
}
