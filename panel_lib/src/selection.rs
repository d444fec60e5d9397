//! Adapter letting handlers accept either one value or many.

/// One or more selected values, always stored as a sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<T>(Vec<T>);

impl<T> Selection<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection(vec![value])
    }
}

impl<T> From<Vec<T>> for Selection<T> {
    fn from(values: Vec<T>) -> Self {
        Selection(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_value_becomes_one_element() {
        let sel: Selection<i64> = 7_i64.into();
        assert_eq!(sel.into_vec(), vec![7]);
    }

    #[test]
    fn vec_is_kept_as_is() {
        let sel: Selection<i64> = vec![1_i64, 2, 3].into();
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.as_slice(), &[1, 2, 3]);
    }
}
