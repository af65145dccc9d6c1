// crates/tripmap-core/src/selection.rs

//! Single-country selection state.

use crate::model::CountryId;

/// Tracks which country, if any, is currently selected on the map.
///
/// At most one country is selected at a time; selection is UI-session
/// scoped and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(CountryId),
}

/// What an interaction with a country's boundary or marker produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The country became the selected one.
    Selected(CountryId),
    /// The country was already selected; the user wants its detail view.
    DetailRequested(CountryId),
}

impl Selection {
    /// Handles an interaction with country `id`.
    ///
    /// A repeated interaction with the currently selected country requests
    /// its detail view rather than deselecting; interacting with any other
    /// country moves the selection there.
    pub fn interact(&mut self, id: CountryId) -> Interaction {
        match *self {
            Selection::Selected(current) if current == id => Interaction::DetailRequested(id),
            _ => {
                *self = Selection::Selected(id);
                Interaction::Selected(id)
            }
        }
    }

    /// Clears the selection (detail view explicitly closed).
    pub fn close(&mut self) {
        *self = Selection::NoSelection;
    }

    pub fn selected(&self) -> Option<CountryId> {
        match *self {
            Selection::NoSelection => None,
            Selection::Selected(id) => Some(id),
        }
    }

    pub fn is_selected(&self, id: CountryId) -> bool {
        self.selected() == Some(id)
    }
}
