use eframe::egui;
use shared::domain::Champion;

const GRID_COLUMNS: usize = 4;
const CARD_WIDTH: f32 = 200.0;

/// Stat lines shown under the champion name; absent stats are skipped.
pub fn stat_lines(champion: &Champion) -> Vec<String> {
    [
        ("HP", champion.hp),
        ("Armor", champion.armor),
        ("Attack", champion.attackdamage),
        ("Move speed", champion.movespeed),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| format!("{label}: {v:.0}")))
    .collect()
}

/// Lays the champions out in rows of four cards. Returns the champion whose
/// "Add to watchlist" button was clicked this frame.
pub fn champs_grid(ui: &mut egui::Ui, champions: &[&Champion]) -> Option<Champion> {
    if champions.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new("No champions found").weak());
        });
        return None;
    }

    let mut added = None;
    egui::Grid::new("champs_grid")
        .num_columns(GRID_COLUMNS)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (index, champion) in champions.iter().enumerate() {
                if champion_card(ui, champion) {
                    added = Some((*champion).clone());
                }
                if (index + 1) % GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
    added
}

fn champion_card(ui: &mut egui::Ui, champion: &Champion) -> bool {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&champion.name).strong().size(16.0));
                for line in stat_lines(champion) {
                    ui.label(egui::RichText::new(line).small());
                }
                ui.add_space(4.0);
                ui.button("Add to watchlist").clicked()
            })
            .inner
        })
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_lines_skip_missing_values() {
        let mut champion = Champion::new(1, "Ahri");
        champion.hp = Some(590.4);
        champion.movespeed = Some(330.0);

        assert_eq!(stat_lines(&champion), vec!["HP: 590", "Move speed: 330"]);
        assert!(stat_lines(&Champion::new(2, "Zed")).is_empty());
    }
}
