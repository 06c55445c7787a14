//! Dashboard state: search text and current page, plus the derived view of
//! the roster those two select.

use shared::domain::Champion;

use crate::controller::pagination::{page_count, page_slice, CHAMPS_PER_PAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    SearchChanged(String),
    PageSelected(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    search_text: String,
    current_page: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            current_page: 1,
        }
    }
}

/// What the dashboard renders for one frame.
#[derive(Debug, PartialEq)]
pub struct DashboardView<'a> {
    pub page_items: Vec<&'a Champion>,
    pub total_count: usize,
    pub current_page: usize,
    pub page_count: usize,
}

impl DashboardState {
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn reduce(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::SearchChanged(text) => {
                self.search_text = text;
                self.current_page = 1;
            }
            // Bounds are not checked: a page past the end renders empty.
            DashboardAction::PageSelected(page) => {
                self.current_page = page;
            }
        }
    }

    pub fn view<'a>(&self, champions: &'a [Champion]) -> DashboardView<'a> {
        let matching = filter_champions(champions, &self.search_text);
        let total_count = matching.len();

        DashboardView {
            page_items: page_slice(&matching, self.current_page, CHAMPS_PER_PAGE).to_vec(),
            total_count,
            current_page: self.current_page,
            page_count: page_count(total_count, CHAMPS_PER_PAGE),
        }
    }
}

/// Champions whose name contains `search_text`, ignoring case. Blank search
/// text matches everything.
pub fn filter_champions<'a>(champions: &'a [Champion], search_text: &str) -> Vec<&'a Champion> {
    if search_text.trim().is_empty() {
        return champions.iter().collect();
    }

    let needle = search_text.to_lowercase();
    champions
        .iter()
        .filter(|champion| champion.name.to_lowercase().contains(&needle))
        .collect()
}
