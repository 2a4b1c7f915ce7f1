/// At most one selected employee id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_owned());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(Selection::default().selected(), None);
    }

    #[test]
    fn select_replaces_previous() {
        let mut selection = Selection::default();
        selection.select("a");
        selection.select("b");
        assert_eq!(selection.selected(), Some("b"));
        assert!(!selection.is_selected("a"));

        selection.clear();
        assert_eq!(selection.selected(), None);
    }
}
