//! A set built on a sorted vector, for element types that only promise
//! `Ord` — no hashing required.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomSet<T: Ord> {
    elements: Vec<T>,
}

impl<T: Ord + Clone> CustomSet<T> {
    pub fn new(input: &[T]) -> Self {
        let mut elements = input.to_vec();
        elements.sort();
        elements.dedup();
        CustomSet { elements }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: &T) -> bool {
        self.elements.binary_search(element).is_ok()
    }

    pub fn add(&mut self, element: T) {
        if let Err(insert_at) = self.elements.binary_search(&element) {
            self.elements.insert(insert_at, element);
        }
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.iter().all(|e| other.contains(e))
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.elements.iter().any(|e| other.contains(e))
    }

    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        CustomSet {
            elements: self
                .elements
                .iter()
                .filter(|e| other.contains(e))
                .cloned()
                .collect(),
        }
    }

    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        CustomSet {
            elements: self
                .elements
                .iter()
                .filter(|e| !other.contains(e))
                .cloned()
                .collect(),
        }
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut combined = self.elements.clone();
        combined.extend(other.elements.iter().cloned());
        CustomSet::new(&combined)
    }
}
