//! Prometheus text exposition of a finished scrape pass

use std::collections::HashMap;

use prometheus::core::Collector;
use prometheus::{CounterVec, Encoder, GaugeVec, Opts, Registry, TextEncoder};

use super::catalog::{CATALOG, Descriptor, MetricKind};
use super::sink::MetricSample;
use crate::error::Result;

/// Content type of the rendered exposition
pub fn content_type() -> String {
    TextEncoder::new().format_type().to_string()
}

/// Render samples into the Prometheus text format.
///
/// A fresh registry is built for every call so series from an earlier scrape
/// never leak into this one. Families without samples are omitted. Repeated
/// gauge series keep the last value; repeated counter series add up.
pub fn render(samples: &[MetricSample]) -> Result<String> {
    let registry = Registry::new();

    #[cfg(target_os = "linux")]
    registry.register(Box::new(
        prometheus::process_collector::ProcessCollector::for_self(),
    ))?;

    let mut by_name: HashMap<&str, Vec<&MetricSample>> = HashMap::new();
    for sample in samples {
        by_name
            .entry(sample.descriptor.name)
            .or_default()
            .push(sample);
    }

    for descriptor in CATALOG.iter() {
        let Some(family) = by_name.get(descriptor.name) else {
            continue;
        };
        registry.register(build_family(descriptor, family)?)?;
    }

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()).into())
}

fn build_family(
    descriptor: &Descriptor,
    samples: &[&MetricSample],
) -> Result<Box<dyn Collector>> {
    let opts = Opts::new(descriptor.name, descriptor.help);

    match descriptor.kind {
        MetricKind::Gauge => {
            let vec = GaugeVec::new(opts, descriptor.labels)?;
            for sample in samples {
                let values: Vec<&str> = sample.labels.iter().map(String::as_str).collect();
                vec.get_metric_with_label_values(&values)?.set(sample.value);
            }
            Ok(Box::new(vec))
        }
        MetricKind::Counter => {
            let vec = CounterVec::new(opts, descriptor.labels)?;
            for sample in samples {
                let values: Vec<&str> = sample.labels.iter().map(String::as_str).collect();
                vec.get_metric_with_label_values(&values)?
                    .inc_by(sample.value.max(0.0));
            }
            Ok(Box::new(vec))
        }
    }
}
