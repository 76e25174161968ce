/// Selection state of a multi-select dropdown. Picking a value that is
/// already selected deselects it; order of selection is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelect<T> {
    selected: Vec<T>,
}

impl<T> Default for MultiSelect<T> {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
        }
    }
}

impl<T: PartialEq + Clone> MultiSelect<T> {
    pub fn toggle(&mut self, value: T) {
        if let Some(pos) = self.selected.iter().position(|v| *v == value) {
            self.selected.remove(pos);
        } else {
            self.selected.push(value);
        }
    }

    /// Adds the value unless it is already selected.
    pub fn select(&mut self, value: T) {
        if !self.selected.contains(&value) {
            self.selected.push(value);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    /// Labels of the selected values joined by ", ", or the placeholder
    /// when nothing is selected.
    pub fn display<F>(&self, placeholder: &str, label: F) -> String
    where
        F: Fn(&T) -> String,
    {
        if self.selected.is_empty() {
            placeholder.to_string()
        } else {
            self.selected.iter().map(label).collect::<Vec<_>>().join(", ")
        }
    }
}
