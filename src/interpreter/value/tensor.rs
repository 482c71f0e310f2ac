use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// A fixed-size numeric vector of two or three components.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Creates a vector from its components.
    ///
    /// # Errors
    /// - `TypeError` if the component count is not 2 or 3.
    pub fn new(components: Vec<f64>, col: usize) -> EvalResult<Self> {
        if !(2..=3).contains(&components.len()) {
            return Err(RuntimeError::TypeError { details: format!("a vector must have 2 or 3 components, found {}",
                                                                  components.len()),
                                                 col });
        }

        Ok(Self { components })
    }

    /// Returns the number of components.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns whether the vector has no components. Always false for a
    /// validly constructed vector.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Multiplies every component by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self { components: self.components.iter().map(|c| c * factor).collect(), }
    }

    /// Computes the dot product with another vector.
    ///
    /// # Errors
    /// - `TypeError` if the component counts differ.
    pub fn dot(&self, other: &Self, col: usize) -> EvalResult<f64> {
        if self.len() != other.len() {
            return Err(RuntimeError::TypeError { details: format!("dot product requires vectors of equal length, found {} and {}",
                                                                  self.len(),
                                                                  other.len()),
                                                 col });
        }

        Ok(self.components
               .iter()
               .zip(&other.components)
               .map(|(a, b)| a * b)
               .sum())
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.components.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// A matrix built from equal-length vector rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vector>,
}

impl Matrix {
    /// Creates a matrix from its rows.
    ///
    /// # Errors
    /// - `TypeError` if there are no rows or the rows differ in length.
    pub fn new(rows: Vec<Vector>, col: usize) -> EvalResult<Self> {
        let Some(first) = rows.first() else {
            return Err(RuntimeError::TypeError { details: "a matrix must have at least one row".to_string(),
                                                 col });
        };

        let width = first.len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(RuntimeError::TypeError { details: "matrix rows must all have the same length".to_string(),
                                                 col });
        }

        Ok(Self { rows })
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{row}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product_of_equal_length_vectors() {
        let a = Vector::new(vec![2.0, 3.0], 0).unwrap();
        let b = Vector::new(vec![5.0, 3.0], 0).unwrap();

        assert_eq!(a.dot(&b, 0).unwrap(), 19.0);
    }

    #[test]
    fn dot_product_length_mismatch_is_an_error() {
        let a = Vector::new(vec![1.0, 2.0], 0).unwrap();
        let b = Vector::new(vec![1.0, 2.0, 3.0], 0).unwrap();

        assert!(a.dot(&b, 0).is_err());
    }

    #[test]
    fn scaling_multiplies_each_component() {
        let v = Vector::new(vec![1.0, 2.0, 3.0], 0).unwrap();

        assert_eq!(v.scale(2.0), Vector::new(vec![2.0, 4.0, 6.0], 0).unwrap());
    }

    #[test]
    fn vectors_are_two_or_three_dimensional() {
        assert!(Vector::new(vec![1.0], 0).is_err());
        assert!(Vector::new(vec![1.0, 2.0, 3.0, 4.0], 0).is_err());
    }

    #[test]
    fn matrix_rows_must_align() {
        let a = Vector::new(vec![1.0, 2.0], 0).unwrap();
        let b = Vector::new(vec![3.0, 4.0, 5.0], 0).unwrap();

        assert!(Matrix::new(vec![a, b], 0).is_err());
    }
}
