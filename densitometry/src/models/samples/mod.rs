use stats_rs::summary::{mean, Summary};

/// Qualifying pixel values of one image directory, in file then row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntensitySamples {
    values: Vec<u8>,
}

impl IntensitySamples {
    pub fn new(values: Vec<u8>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> Option<f64> {
        mean(&self.values)
    }

    pub fn summary(&self) -> Option<Summary> {
        Summary::from_values(&self.values)
    }
}

impl From<Vec<u8>> for IntensitySamples {
    fn from(values: Vec<u8>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<u8> for IntensitySamples {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
