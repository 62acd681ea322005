/// The stack of labels from the top of the mountain to the stop being visited.
///
/// Labels borrow from the mountain, which is read-only for the whole search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route<'m> {
    labels: Vec<&'m str>,
}

impl<'m> Route<'m> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &'m str) {
        self.labels.push(label);
    }

    /// Drops everything past `depth` labels. No-op if the route is already that short.
    pub fn truncate_to(&mut self, depth: usize) {
        self.labels.truncate(depth);
    }

    pub fn depth(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[&'m str] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn truncate_is_idempotent() {
        let mut route = Route::new();
        route.push("D");
        route.push("B");
        route.push("A");
        route.truncate_to(1);
        assert_eq!(route.labels(), &["D"]);
        route.truncate_to(2);
        assert_eq!(route.depth(), 1);
        route.truncate_to(0);
        assert!(route.is_empty());
    }
}
