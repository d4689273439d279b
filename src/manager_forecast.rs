use serde::Serialize;
use crate::manager_owm::errors::WeatherError;
use crate::manager_owm::models::{Condition, ForecastSample};

/// Display horizon applied by callers on top of the grouped output,
/// the aggregation itself is horizon agnostic
pub const DISPLAY_HORIZON_DAYS: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

/// One display ready day, reduced from all forecast samples sharing a
/// calendar day key
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub dt: i64,
    pub temp: MinMax,
    pub weather: Vec<Condition>,
}

/// Returns the calendar day key of a sample: the first 10 characters of the
/// provider supplied dt_txt, i.e. its YYYY-MM-DD prefix. The key is taken
/// from the formatted string and never recomputed from the numeric
/// timestamp, so the provider's local/UTC convention is preserved as is
pub fn date_key_of(sample: &ForecastSample) -> &str {
    sample.dt_txt.get(..10).unwrap_or(&sample.dt_txt)
}

/// Groups a forecast time series into one summary per calendar day
///
/// Days are emitted in the order their key was first seen in the input,
/// which for a chronological series is chronological order. Each summary
/// carries the min/max temperature over the day and the timestamp and first
/// condition descriptor of the representative sample: the one at the upper
/// midpoint of the bucket, index bucket_len / 2, so a two sample day
/// reports its second sample. A representative without any condition
/// descriptor aborts the whole aggregation, there are no partial results
///
/// # Arguments
///
/// * 'samples' - raw forecast list as returned by the provider
pub fn group_by_day(samples: &[ForecastSample]) -> Result<Vec<DaySummary>, WeatherError> {
    let mut buckets: Vec<(&str, Vec<&ForecastSample>)> = Vec::new();

    for sample in samples {
        let key = date_key_of(sample);
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(sample),
            None => buckets.push((key, vec![sample])),
        }
    }

    let mut days: Vec<DaySummary> = Vec::with_capacity(buckets.len());

    for (_, bucket) in buckets {
        let min = bucket.iter().map(|s| s.main.temp).fold(f64::INFINITY, f64::min);
        let max = bucket.iter().map(|s| s.main.temp).fold(f64::NEG_INFINITY, f64::max);

        let representative = bucket[bucket.len() / 2];
        let condition = representative.weather.first()
            .ok_or_else(|| WeatherError::Aggregation(
                format!("sample at {} carries no condition descriptor", representative.dt_txt)))?;

        days.push(DaySummary {
            dt: representative.dt,
            temp: MinMax { min, max },
            weather: vec![condition.clone()],
        });
    }

    Ok(days)
}
