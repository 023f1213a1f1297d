use crate::core::page::Fragment;

/// The wildcard filter value: matches every card.
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone)]
pub struct FilterButton {
    pub value: String,
    pub active: bool,
}

/// A fixed set of filter buttons for one page's card list. Exactly one
/// button is active at a time; the first one starts active.
#[derive(Debug, Clone)]
pub struct FilterGroup {
    buttons: Vec<FilterButton>,
}

impl FilterGroup {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buttons: Vec<FilterButton> = values
            .into_iter()
            .map(|value| FilterButton {
                value: value.into(),
                active: false,
            })
            .collect();
        if let Some(first) = buttons.first_mut() {
            first.active = true;
        }
        Self { buttons }
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn active_value(&self) -> Option<&str> {
        self.buttons
            .iter()
            .find(|b| b.active)
            .map(|b| b.value.as_str())
    }

    /// Activates the button carrying `value`, deactivates its siblings, and
    /// re-evaluates the visibility of every card. Values not present in the
    /// group are ignored; in the page, filter values only ever come from the
    /// group's own buttons.
    pub fn activate(&mut self, value: &str, cards: &mut [Fragment]) {
        if !self.buttons.iter().any(|b| b.value == value) {
            return;
        }
        for button in &mut self.buttons {
            button.active = button.value == value;
        }
        apply_filter(value, cards);
    }
}

/// Shows every card matching `filter_value` and hides the rest. `"all"`
/// matches everything; anything else must equal the card's stored category
/// exactly (case-sensitive).
pub fn apply_filter(filter_value: &str, cards: &mut [Fragment]) {
    for card in cards {
        let visible =
            filter_value == FILTER_ALL || card.category.as_deref() == Some(filter_value);
        card.hidden = !visible;
    }
}
