use crate::data::filter::RangeBound;
use crate::data::samples::DatasetKind;
use crate::menu::MenuSelection;
use crate::scholar::task::PublicationsTask;

// ---------------------------------------------------------------------------
// Data Explorer view-local state
// ---------------------------------------------------------------------------

/// Dataset choice plus one bound per slider of that dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerState {
    pub dataset: DatasetKind,
    /// Parallel to `dataset.range_controls()`.
    pub bounds: Vec<RangeBound>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::for_dataset(DatasetKind::default())
    }
}

impl ExplorerState {
    /// Fresh state with every slider spanning its full domain.
    pub fn for_dataset(dataset: DatasetKind) -> Self {
        Self {
            dataset,
            bounds: dataset
                .range_controls()
                .iter()
                .map(|c| c.default_bound())
                .collect(),
        }
    }

    /// `(column, bound)` pairs for the filter, ANDed together.
    pub fn constraints(&self) -> Vec<(&'static str, RangeBound)> {
        self.dataset
            .range_controls()
            .iter()
            .zip(&self.bounds)
            .map(|(c, b)| (c.column, *b))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Current top-level view.
    pub menu: MenuSelection,

    /// Data Explorer selection and slider bounds.
    pub explorer: ExplorerState,

    /// Publications fetch for the current visit.
    pub publications: PublicationsTask,

    /// Status / error message shown in the top bar.
    pub status: Option<Status>,
}

/// One-line message for the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

impl AppState {
    /// Switch views. Returns false when `next` is already showing.
    ///
    /// Leaving a view discards its local state: filter bounds go back to
    /// their defaults and any publications fetch is abandoned.
    pub fn select_menu(&mut self, next: MenuSelection) -> bool {
        if next == self.menu {
            return false;
        }
        log::info!("View: {} → {}", self.menu.label(), next.label());
        self.menu = next;
        self.explorer = ExplorerState::default();
        self.publications.reset();
        self.status = None;
        true
    }

    /// Pick a dataset in the explorer; its sliders start at full range.
    pub fn select_dataset(&mut self, dataset: DatasetKind) {
        if dataset != self.explorer.dataset {
            self.explorer = ExplorerState::for_dataset(dataset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::samples::{HUMIDITY, TEMPERATURE};
    use crate::scholar::task::FetchState;

    #[test]
    fn weather_has_two_constraints() {
        let s = ExplorerState::for_dataset(DatasetKind::Weather);
        let c = s.constraints();
        assert_eq!(c.len(), 2);
        assert_eq!(c[0], (TEMPERATURE.column, RangeBound::new(-10.0, 40.0)));
        assert_eq!(c[1], (HUMIDITY.column, RangeBound::new(0.0, 100.0)));
    }

    #[test]
    fn leaving_a_view_resets_bounds() {
        let mut state = AppState::default();
        state.select_menu(MenuSelection::DataExplorer);
        state.select_dataset(DatasetKind::Astronomy);
        state.explorer.bounds[0] = RangeBound::new(-5.0, -1.0);

        assert!(state.select_menu(MenuSelection::Contact));
        assert!(state.select_menu(MenuSelection::DataExplorer));
        assert_eq!(state.explorer, ExplorerState::default());
    }

    #[test]
    fn reselecting_same_view_keeps_state() {
        let mut state = AppState::default();
        state.select_menu(MenuSelection::DataExplorer);
        state.explorer.bounds[0] = RangeBound::new(1.0, 2.0);
        assert!(!state.select_menu(MenuSelection::DataExplorer));
        assert_eq!(state.explorer.bounds[0], RangeBound::new(1.0, 2.0));
    }

    #[test]
    fn switching_dataset_resets_sliders() {
        let mut state = AppState::default();
        state.explorer.bounds[0] = RangeBound::new(3.0, 4.0);
        state.select_dataset(DatasetKind::Physics);
        assert_eq!(state.explorer.bounds[0], RangeBound::new(3.0, 4.0));
        state.select_dataset(DatasetKind::Weather);
        assert_eq!(state.explorer.bounds.len(), 2);
        state.select_dataset(DatasetKind::Physics);
        assert_eq!(state.explorer.bounds, vec![RangeBound::new(0.0, 10.0)]);
    }

    #[test]
    fn leaving_publications_drops_fetch_state() {
        let mut state = AppState::default();
        state.select_menu(MenuSelection::Publications);
        state.select_menu(MenuSelection::Profile);
        assert_eq!(state.publications.state(), &FetchState::Idle);
    }
}
