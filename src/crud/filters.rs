//! Filter descriptors shown in the toolbar's filter panel.

/// One selectable filter: a record field and the values it may take.
///
/// The empty value stands for "All" and is always offered first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub field: &'static str,
    pub label: &'static str,
    pub options: Vec<FilterChoice>,
}

/// A value/label pair inside a [`FilterOption`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChoice {
    pub value: &'static str,
    pub label: &'static str,
}

impl FilterOption {
    pub fn new(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            options: Vec::new(),
        }
    }

    pub fn choice(mut self, value: &'static str, label: &'static str) -> Self {
        self.options.push(FilterChoice { value, label });
        self
    }

    /// Label for a stored value; unknown and empty values read as "All".
    pub fn label_for(&self, value: Option<&str>) -> &'static str {
        value
            .and_then(|v| self.options.iter().find(|c| c.value == v))
            .map(|c| c.label)
            .unwrap_or("All")
    }
}
