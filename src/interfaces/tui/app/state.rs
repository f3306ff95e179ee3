//! Per-screen view state: list screens, the two pattern screens, and
//! the astro screen.

use ratatui::widgets::TableState;

use crate::analytics::AnalyticsTab;
use crate::models::{
    Pattern, PatronRedundancy, Sorteo, SorteoPatronRedundancy, SorteoPattern, Ticket,
};
use crate::models::AstroPatron;
use crate::utils::pagination::{Pager, matches_filter};

/// Local filter input cycled with `f` on the list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Date,
    Loteria,
    Jornada,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            FilterField::Date => FilterField::Loteria,
            FilterField::Loteria => FilterField::Jornada,
            FilterField::Jornada => FilterField::Date,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Date => "date",
            FilterField::Loteria => "loteria",
            FilterField::Jornada => "jornada",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub date: String,
    pub loteria: String,
    pub jornada: String,
    /// Which filter input is being edited, if any.
    pub editing: Option<FilterField>,
}

impl Filters {
    pub fn input_mut(&mut self) -> Option<&mut String> {
        match self.editing? {
            FilterField::Date => Some(&mut self.date),
            FilterField::Loteria => Some(&mut self.loteria),
            FilterField::Jornada => Some(&mut self.jornada),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.loteria.is_empty() && self.jornada.is_empty()
    }

    pub fn clear(&mut self) {
        self.date.clear();
        self.loteria.clear();
        self.jornada.clear();
        self.editing = None;
    }
}

/// Rows a list screen can filter locally.
pub trait FilterableRow {
    fn matches(&self, filters: &Filters) -> bool;
}

impl FilterableRow for Ticket {
    fn matches(&self, filters: &Filters) -> bool {
        matches_filter(&self.date.to_string(), &filters.date)
            && matches_filter(&self.loteria, &filters.loteria)
            && matches_filter(&self.jornada, &filters.jornada)
    }
}

impl FilterableRow for Sorteo {
    // Draws have no jornada; that filter input is ignored here.
    fn matches(&self, filters: &Filters) -> bool {
        matches_filter(&self.date.to_string(), &filters.date)
            && matches_filter(&self.loteria, &filters.loteria)
    }
}

/// Shared state of the tickets and sorteos screens: the fetched set,
/// local filters, a page window, and the table cursor.
pub struct ListScreen<T> {
    pub items: Vec<T>,
    pub visible: Vec<usize>,
    pub pager: Pager,
    pub table: TableState,
    pub selected: usize,
    pub loading: bool,
    pub filters: Filters,
    pub search_input: String,
    pub searching: bool,
    /// Second search criterion, used by the sorteo screen (serie).
    pub search_serie: String,
    pub search_field_serie: bool,
}

impl<T: FilterableRow> Default for ListScreen<T> {
    fn default() -> Self {
        let mut table = TableState::default();
        table.select(Some(0));
        Self {
            items: Vec::new(),
            visible: Vec::new(),
            pager: Pager::new(0),
            table,
            selected: 0,
            loading: false,
            filters: Filters::default(),
            search_input: String::new(),
            searching: false,
            search_serie: String::new(),
            search_field_serie: false,
        }
    }
}

impl<T: FilterableRow> ListScreen<T> {
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.refilter();
    }

    /// Recompute the visible rows and clamp pager and cursor.
    pub fn refilter(&mut self) {
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.matches(&self.filters))
            .map(|(i, _)| i)
            .collect();
        self.pager.retotal(self.visible.len());
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let page_len = self.page_rows().len();
        if self.selected >= page_len {
            self.selected = page_len.saturating_sub(1);
        }
        self.table.select(Some(self.selected));
    }

    /// Indices (into `items`) of the current page.
    pub fn page_rows(&self) -> &[usize] {
        self.pager.slice(&self.visible)
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.page_rows()
            .get(self.selected)
            .map(|&i| &self.items[i])
    }

    pub fn select_next(&mut self) {
        let page_len = self.page_rows().len();
        if page_len > 0 && self.selected + 1 < page_len {
            self.selected += 1;
            self.table.select(Some(self.selected));
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.table.select(Some(self.selected));
        }
    }

    pub fn next_page(&mut self) {
        self.pager.next();
        self.selected = 0;
        self.table.select(Some(0));
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
        self.selected = 0;
        self.table.select(Some(0));
    }

    /// Remove the selected row after a successful delete.
    pub fn remove_selected(&mut self) {
        if let Some(&item_index) = self.page_rows().get(self.selected) {
            self.items.remove(item_index);
            self.refilter();
        }
    }
}

/// Tab row on the pattern screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTab {
    Generators,
    Generated,
    Analysis,
}

impl DisplayTab {
    pub fn next(self) -> Self {
        match self {
            DisplayTab::Generators => DisplayTab::Generated,
            DisplayTab::Generated => DisplayTab::Analysis,
            DisplayTab::Analysis => DisplayTab::Generators,
        }
    }
}

/// Search controls shared by the pattern and astro screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    Date,
    Jornada,
}

/// State of the Patrones screen.
#[derive(Default)]
pub struct PatternScreen {
    pub search_date: String,
    pub search_jornada: usize,
    pub search_focus: Option<SearchFocus>,

    pub pattern: Option<Pattern>,
    pub redundancy: Vec<PatronRedundancy>,
    pub generators: Vec<Ticket>,
    pub generated: Vec<Ticket>,
    pub redundancy_selected: usize,
    pub loading: bool,

    pub display_tab: Option<DisplayTab>,
    pub analysis_tab: AnalyticsTab,
    pub redundancy_in_date: Vec<Pattern>,
    pub not_played: Vec<String>,
    pub void_patterns: Vec<Pattern>,
    pub column_totals: Vec<u32>,
    pub analysis_loading: bool,
}

impl PatternScreen {
    /// Failed search clears every derived view.
    pub fn clear(&mut self) {
        self.pattern = None;
        self.redundancy.clear();
        self.generators.clear();
        self.generated.clear();
        self.redundancy_selected = 0;
        self.display_tab = None;
        self.redundancy_in_date.clear();
        self.not_played.clear();
        self.void_patterns.clear();
        self.column_totals.clear();
        self.loading = false;
        self.analysis_loading = false;
    }

    pub fn selected_redundancy(&self) -> Option<&PatronRedundancy> {
        self.redundancy.get(self.redundancy_selected)
    }
}

/// State of the Sorteo-Patrones screen; no jornada dimension and the
/// column totals load eagerly with the pattern.
#[derive(Default)]
pub struct SorteoPatternScreen {
    pub search_date: String,
    pub search_editing: bool,

    pub pattern: Option<SorteoPattern>,
    pub redundancy: Vec<SorteoPatronRedundancy>,
    pub redundancy_selected: usize,
    pub loading: bool,

    pub analysis_tab: AnalyticsTab,
    pub redundancy_in_date: Vec<SorteoPattern>,
    pub not_played: Vec<String>,
    pub void_patterns: Vec<SorteoPattern>,
    pub column_totals: Vec<u32>,
    pub analysis_loading: bool,
}

impl SorteoPatternScreen {
    pub fn clear(&mut self) {
        self.pattern = None;
        self.redundancy.clear();
        self.redundancy_selected = 0;
        self.redundancy_in_date.clear();
        self.not_played.clear();
        self.void_patterns.clear();
        self.column_totals.clear();
        self.loading = false;
        self.analysis_loading = false;
    }
}

/// State of the Astro screen.
#[derive(Default)]
pub struct AstroScreen {
    pub search_date: String,
    pub search_jornada: usize,
    pub search_focus: Option<SearchFocus>,

    pub astro: Option<AstroPatron>,
    pub tickets: Vec<Ticket>,
    pub loading: bool,
}

impl AstroScreen {
    pub fn clear(&mut self) {
        self.astro = None;
        self.tickets.clear();
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ticket(date: &str, loteria: &str, jornada: &str) -> Ticket {
        Ticket {
            id: 1,
            number: "1234".into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            loteria: loteria.into(),
            jornada: jornada.into(),
            sign: None,
        }
    }

    #[test]
    fn test_loteria_filter_is_substring_case_insensitive() {
        let mut screen: ListScreen<Ticket> = ListScreen::default();
        screen.set_items(vec![
            ticket("2024-05-20", "Antioqueñita", "dia"),
            ticket("2024-05-20", "Paisita", "noche"),
        ]);

        screen.filters.loteria = "anti".into();
        screen.refilter();
        assert_eq!(screen.visible.len(), 1);
        assert_eq!(screen.selected_item().unwrap().loteria, "Antioqueñita");
    }

    #[test]
    fn test_filters_compose() {
        let mut screen: ListScreen<Ticket> = ListScreen::default();
        screen.set_items(vec![
            ticket("2024-05-20", "Paisita", "dia"),
            ticket("2024-05-20", "Paisita", "noche"),
            ticket("2024-05-21", "Paisita", "dia"),
        ]);

        screen.filters.date = "05-20".into();
        screen.filters.jornada = "dia".into();
        screen.refilter();
        assert_eq!(screen.visible, vec![0]);
    }

    #[test]
    fn test_pagination_over_filtered_set() {
        let mut screen: ListScreen<Ticket> = ListScreen::default();
        let items: Vec<Ticket> = (0..120)
            .map(|_| ticket("2024-05-20", "Paisita", "dia"))
            .collect();
        screen.set_items(items);

        assert_eq!(screen.pager.page_count(), 3);
        assert_eq!(screen.page_rows().len(), 50);
        screen.next_page();
        screen.next_page();
        assert_eq!(screen.page_rows().len(), 20);
    }

    #[test]
    fn test_remove_selected_drops_visible_row() {
        let mut screen: ListScreen<Ticket> = ListScreen::default();
        screen.set_items(vec![
            ticket("2024-05-20", "Paisita", "dia"),
            ticket("2024-05-21", "Chontico", "noche"),
        ]);
        screen.select_next();
        assert_eq!(screen.selected_item().unwrap().loteria, "Chontico");

        screen.remove_selected();
        assert_eq!(screen.items.len(), 1);
        assert_eq!(screen.visible.len(), 1);
        assert_eq!(screen.selected_item().unwrap().loteria, "Paisita");
    }

    #[test]
    fn test_pattern_screen_clear_wipes_everything() {
        let mut screen = PatternScreen::default();
        screen.pattern = Some(Pattern {
            id: Some(1),
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            jornada: "dia".into(),
            patron_numbers: vec![0; 10],
            fdg: None,
        });
        screen.not_played = vec!["12".into()];
        screen.display_tab = Some(DisplayTab::Analysis);

        screen.clear();
        assert!(screen.pattern.is_none());
        assert!(screen.not_played.is_empty());
        assert!(screen.display_tab.is_none());
    }

    #[test]
    fn test_display_tab_cycles() {
        assert_eq!(DisplayTab::Generators.next(), DisplayTab::Generated);
        assert_eq!(DisplayTab::Analysis.next(), DisplayTab::Generators);
    }
}
