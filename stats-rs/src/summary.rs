use serde::{Deserialize, Serialize};

/// Arithmetic mean of a sample, `None` when the sample is empty.
pub fn mean<T>(values: &[T]) -> Option<f64>
where
    T: Copy + Into<f64>,
{
    if values.is_empty() {
        return None;
    }

    let sum: f64 = values.iter().map(|&value| value.into()).sum();
    Some(sum / values.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn from_values<T>(values: &[T]) -> Option<Self>
    where
        T: Copy + Into<f64>,
    {
        let mean = mean(values)?;
        let (min, max) = values
            .iter()
            .map(|&value| value.into())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
                (min.min(value), max.max(value))
            });

        Some(Self {
            count: values.len(),
            mean,
            min,
            max,
        })
    }
}
