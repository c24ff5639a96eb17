//! Sample collection for one scrape pass

use super::catalog::Descriptor;

/// One emitted value with its label values, in descriptor label order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub descriptor: &'static Descriptor,
    pub value: f64,
    pub labels: Vec<String>,
}

/// Output sink for a scrape pass.
///
/// Collectors push samples here; the HTTP host renders the sink once the
/// pass has finished.
#[derive(Debug, Default)]
pub struct MetricSink {
    samples: Vec<MetricSample>,
}

impl MetricSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample.
    ///
    /// The number of label values must match the descriptor's label names;
    /// a mismatched sample is dropped and logged.
    pub fn push<I, S>(&mut self, descriptor: &'static Descriptor, value: f64, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != descriptor.labels.len() {
            log::error!(
                "Dropping sample for {}: expected {} label values, got {}",
                descriptor.name,
                descriptor.labels.len(),
                labels.len()
            );
            return;
        }

        self.samples.push(MetricSample {
            descriptor,
            value,
            labels,
        });
    }

    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples emitted for the named metric.
    #[cfg(test)]
    pub fn by_name(&self, name: &str) -> Vec<&MetricSample> {
        self.samples
            .iter()
            .filter(|s| s.descriptor.name == name)
            .collect()
    }

    /// Value of the first sample matching the metric name and label values.
    #[cfg(test)]
    pub fn value(&self, name: &str, labels: &[&str]) -> Option<f64> {
        self.samples
            .iter()
            .find(|s| s.descriptor.name == name && s.labels == labels)
            .map(|s| s.value)
    }
}
