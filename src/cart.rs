/// Shopping list that missing ingredients are added to
pub trait ShoppingCart {
    /// Add items to the cart. Returns how many were actually added.
    fn add_missing_ingredients(&mut self, items: &[String]) -> usize;
}

/// Cart held in memory for the lifetime of a session
#[derive(Debug, Clone, Default)]
pub struct InMemoryCart {
    items: Vec<String>,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i.eq_ignore_ascii_case(item))
    }
}

impl ShoppingCart for InMemoryCart {
    fn add_missing_ingredients(&mut self, items: &[String]) -> usize {
        let mut added = 0;
        for item in items {
            if !self.contains(item) {
                self.items.push(item.clone());
                added += 1;
            }
        }
        added
    }
}
