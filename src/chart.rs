//! Radar chart adapter: turns the raw radar payload into per-category records

use crate::model::RadarData;
use log::warn;
use serde::Serialize;

/// One radar category with the candidate value and the industry benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub category: String,
    pub your_value: f64,
    pub industry_value: f64,
}

/// Build the ordered comparison records the chart views consume.
///
/// The payload is expected to carry exactly two series aligned with the
/// labels. When lengths disagree, the records truncate to the shortest
/// length; when fewer than two series are present, no records are produced.
/// Either way a warning is logged and rendering continues.
pub fn comparison_points(radar: &RadarData) -> Vec<RadarPoint> {
    if radar.datasets.len() < 2 {
        if !radar.labels.is_empty() || !radar.datasets.is_empty() {
            warn!(
                "Radar payload has {} series, expected 2; skipping chart",
                radar.datasets.len()
            );
        }
        return Vec::new();
    }

    let yours = &radar.datasets[0];
    let industry = &radar.datasets[1];
    let len = radar
        .labels
        .len()
        .min(yours.data.len())
        .min(industry.data.len());

    if len < radar.labels.len() || len < yours.data.len() || len < industry.data.len() {
        warn!(
            "Radar payload misaligned ({} labels, {} vs {} values); truncating to {}",
            radar.labels.len(),
            yours.data.len(),
            industry.data.len(),
            len
        );
    }

    radar
        .labels
        .iter()
        .take(len)
        .enumerate()
        .map(|(i, label)| RadarPoint {
            category: label.clone(),
            your_value: yours.data[i],
            industry_value: industry.data[i],
        })
        .collect()
}
