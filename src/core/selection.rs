use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Set of model names the user has chosen to display.
///
/// Kept as an insertion-ordered list without duplicates. An empty selection
/// means "no filter": every model is shown.
///
/// Serialized as a plain JSON list. Repeated names in a deserialized list
/// collapse onto their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FilterSelection {
    models: Vec<String>,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection by toggling each name in order.
    ///
    /// Repeated names cancel out, so the result never holds duplicates.
    #[must_use]
    pub fn from_toggles<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .fold(Self::new(), |selection, name| selection.toggled(name.as_ref()))
    }

    /// Returns a new selection with `model` removed when present, appended otherwise.
    ///
    /// `self` is left untouched so callers can compare old and new values.
    #[must_use]
    pub fn toggled(&self, model: &str) -> Self {
        let models = if self.is_selected(model) {
            self.models
                .iter()
                .filter(|selected| selected.as_str() != model)
                .cloned()
                .collect()
        } else {
            let mut models = Vec::with_capacity(self.models.len() + 1);
            models.extend(self.models.iter().cloned());
            models.push(model.to_owned());
            models
        };
        Self { models }
    }

    #[must_use]
    pub fn is_selected(&self, model: &str) -> bool {
        self.models.iter().any(|selected| selected == model)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(String::as_str)
    }

    /// Membership test used by filtering: an empty selection admits everything.
    #[must_use]
    pub fn admits(&self, model: &str) -> bool {
        self.is_empty() || self.is_selected(model)
    }
}

impl From<Vec<String>> for FilterSelection {
    fn from(models: Vec<String>) -> Self {
        let unique: IndexSet<String> = models.into_iter().collect();
        Self {
            models: unique.into_iter().collect(),
        }
    }
}

impl From<FilterSelection> for Vec<String> {
    fn from(selection: FilterSelection) -> Self {
        selection.models
    }
}
