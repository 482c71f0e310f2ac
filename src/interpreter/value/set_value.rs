use ordered_float::OrderedFloat;

/// A finite collection of unique numeric values.
///
/// Elements are kept sorted in ascending order and deduplicated on
/// construction, so two sets with the same members always have the same
/// representation, compare equal element-wise, and display identically.
#[derive(Debug, Clone, PartialEq)]
pub struct SetValue {
    elements: Vec<f64>,
}

impl SetValue {
    /// Creates a set from arbitrary numeric values, sorting and removing
    /// duplicates.
    ///
    /// # Example
    /// ```
    /// use ami::interpreter::value::set_value::SetValue;
    ///
    /// let set = SetValue::new(vec![3.0, 1.0, 2.0, 2.0]);
    ///
    /// assert_eq!(set.to_string(), "{1, 2, 3}");
    /// ```
    #[must_use]
    pub fn new(mut elements: Vec<f64>) -> Self {
        elements.sort_by_key(|&x| OrderedFloat(x));
        elements.dedup_by(|a, b| OrderedFloat(*a) == OrderedFloat(*b));

        Self { elements }
    }

    /// Returns the number of elements in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the set has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.elements.get(index).copied()
    }

    /// Returns whether `x` is a member of the set.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.elements.iter().any(|&e| e == x)
    }

    /// Returns the union of two sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.elements.clone();
        merged.extend_from_slice(&other.elements);

        Self::new(merged)
    }

    /// Returns the intersection of two sets. Elements are taken from the
    /// left operand.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self { elements: self.elements
                             .iter()
                             .copied()
                             .filter(|&x| other.contains(x))
                             .collect(), }
    }

    /// Returns the difference of two sets: every element of `self` that is
    /// not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self { elements: self.elements
                             .iter()
                             .copied()
                             .filter(|&x| !other.contains(x))
                             .collect(), }
    }
}

impl std::fmt::Display for SetValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, value) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_sorts_and_deduplicates() {
        let set = SetValue::new(vec![5.0, 1.0, 3.0, 1.0, 5.0]);

        assert_eq!(set.to_string(), "{1, 3, 5}");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn union_merges_ascending() {
        let a = SetValue::new(vec![1.0, 2.0, 3.0]);
        let b = SetValue::new(vec![2.0, 3.0, 4.0]);

        assert_eq!(a.union(&b), SetValue::new(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn intersection_keeps_left_elements() {
        let a = SetValue::new(vec![1.0, 2.0, 3.0]);
        let b = SetValue::new(vec![2.0, 3.0, 4.0]);

        assert_eq!(a.intersection(&b), SetValue::new(vec![2.0, 3.0]));
    }

    #[test]
    fn difference_removes_shared_elements() {
        let a = SetValue::new(vec![1.0, 2.0, 3.0]);
        let b = SetValue::new(vec![2.0]);

        assert_eq!(a.difference(&b), SetValue::new(vec![1.0, 3.0]));
    }
}
