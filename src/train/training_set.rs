use crate::error::{Error, Result};

/// Borrowed, read-only view over paired input and expected-output tables.
///
/// Row `k` of `inputs` is trained toward row `k` of `expected`. Widths are
/// fixed by the type; construction checks the row counts.
#[derive(Debug, Clone, Copy)]
pub struct TrainingSet<'a, const F: usize, const O: usize> {
    inputs: &'a [[f64; F]],
    expected: &'a [[f64; O]],
}

impl<'a, const F: usize, const O: usize> TrainingSet<'a, F, O> {
    pub fn new(inputs: &'a [[f64; F]], expected: &'a [[f64; O]]) -> Result<TrainingSet<'a, F, O>> {
        if inputs.is_empty() {
            return Err(Error::InvalidTrainingSet("no samples".into()));
        }
        if inputs.len() != expected.len() {
            return Err(Error::InvalidTrainingSet(format!(
                "{} inputs but {} expected outputs",
                inputs.len(),
                expected.len()
            )));
        }
        Ok(TrainingSet { inputs, expected })
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Always false; an empty set is rejected by `new`.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn sample(&self, index: usize) -> (&'a [f64; F], &'a [f64; O]) {
        assert!(
            index < self.len(),
            "sample index {index} out of range for {} samples",
            self.len()
        );
        (&self.inputs[index], &self.expected[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a [f64; F], &'a [f64; O])> {
        self.inputs.iter().zip(self.expected.iter())
    }
}
