use crate::company::Company;
use crate::month::Month;
use serde::{Deserialize, Serialize};

/// The (company, month) pair controlling which slice of the dataset is
/// visualized. Immutable: selector events produce a new value through
/// [`Selection::apply`], never an in-place mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub company: Company,
    pub month: Month,
}

/// A user interaction with one of the two selector controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    CompanyPicked(Company),
    MonthPicked(Month),
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            company: Company::Apple,
            month: Month::November,
        }
    }
}

impl Selection {
    /// Fold a selector event into a new selection.
    pub fn apply(self, event: SelectionEvent) -> Selection {
        match event {
            SelectionEvent::CompanyPicked(company) => Selection { company, ..self },
            SelectionEvent::MonthPicked(month) => Selection { month, ..self },
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Selection, SelectionEvent};
    use crate::company::Company;
    use crate::month::Month;

    #[test]
    fn test_default_selection() {
        let selection = Selection::default();
        assert_eq!(selection.company, Company::Apple);
        assert_eq!(selection.month, Month::November);
    }

    #[test]
    fn test_company_pick_keeps_month() {
        let selection = Selection::default().apply(SelectionEvent::CompanyPicked(Company::Meta));
        assert_eq!(selection.company, Company::Meta);
        assert_eq!(selection.month, Month::November);
    }

    #[test]
    fn test_month_pick_keeps_company() {
        let selection = Selection::default().apply(SelectionEvent::MonthPicked(Month::March));
        assert_eq!(selection.company, Company::Apple);
        assert_eq!(selection.month, Month::March);
    }

    #[test]
    fn test_apply_is_value_level() {
        let before = Selection::default();
        let _after = before.apply(SelectionEvent::CompanyPicked(Company::Google));
        // `before` is untouched; apply consumed a copy.
        assert_eq!(before, Selection::default());
    }
}
