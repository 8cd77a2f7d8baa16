pub mod errors;
pub mod models;

use tokio::fs::read_to_string;
use crate::manager_wave::errors::WaveError;
use crate::manager_wave::models::FeatureCollection;

/// Returns the index of the first entry in the time series whose hour of day
/// matches the requested hour, or None when no entry matches.
///
/// Timestamps have the form "<date> <time>" separated by a single space, with
/// the time as "HH:MM:SS" or similar. The hour query is "HH:MM" or a bare
/// "HH", only the digits before the first ':' take part in the comparison and
/// they compare as strings. Entries without the expected shape are skipped so
/// a single bad reading does not block the lookup.
///
/// # Arguments
///
/// * 'time_series' - ordered timestamp strings of a feature
/// * 'hour' - requested hour of day
pub fn hour_index(time_series: &[String], hour: &str) -> Option<usize> {
    let wanted = match hour.split_once(':') {
        Some((hh, _)) => hh,
        None => hour,
    };

    for (index, stamp) in time_series.iter().enumerate() {
        if let Some(clock) = stamp.split(' ').nth(1) {
            if clock.split(':').next() == Some(wanted) {
                return Some(index);
            }
        }
    }

    None
}

/// Associates a wave height with every farm in the collection for the
/// given hour
///
/// The hour resolves once against the first feature's time series, all
/// features share the same series. The value at the resolved index is then
/// read from each feature's own wave_height series and stamped on the
/// feature as the wave_hour property.
///
/// # Arguments
///
/// * 'collection' - farm feature collection to annotate
/// * 'hour' - requested hour of day
pub fn associate_wave(collection: &mut FeatureCollection, hour: &str) -> Result<(), WaveError> {
    let first = collection.features.first()
        .ok_or_else(|| WaveError::MissingData("empty feature collection".to_string()))?;

    if first.properties.time.is_empty() {
        return Err(WaveError::MissingData("first feature has no time series".to_string()));
    }
    if first.properties.wave_height.is_empty() {
        return Err(WaveError::MissingData("first feature has no wave_height series".to_string()));
    }

    let index = hour_index(&first.properties.time, hour)
        .ok_or_else(|| WaveError::HourNotFound(hour.to_string()))?;

    for feature in collection.features.iter_mut() {
        let raw = feature.properties.wave_height.get(index)
            .ok_or_else(|| WaveError::Document(
                format!("wave_height series has no entry at index {}", index)
            ))?;

        let value: f64 = raw.trim().trim_matches('\'').parse()
            .map_err(|_| WaveError::Document(format!("non numeric wave height '{}'", raw)))?;

        feature.properties.wave_hour = Some(value);
    }

    Ok(())
}

/// Reads and parses the farm GeoJSON file
///
/// # Arguments
///
/// * 'path' - path to the farm feature collection file
pub async fn load_farms(path: &str) -> Result<FeatureCollection, WaveError> {
    let json = read_to_string(path).await?;
    let collection: FeatureCollection = serde_json::from_str(&json)?;

    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn series(stamps: &[&str]) -> Vec<String> {
        stamps.iter().map(|s| s.to_string()).collect()
    }

    fn sample_series() -> Vec<String> {
        series(&["2024-01-01 00:05:00", "2024-01-01 06:10:00", "2024-01-01 12:00:00"])
    }

    fn farm_collection(farms: &[(&str, &[&str])]) -> FeatureCollection {
        let features: Vec<Value> = farms.iter().map(|(name, waves)| json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [-0.32, 39.45] },
            "properties": {
                "name": name,
                "status": "active",
                "time": ["2024-01-01 00:05:00", "2024-01-01 06:10:00", "2024-01-01 12:00:00"],
                "wave_height": waves,
            }
        })).collect();

        serde_json::from_value(json!({ "type": "FeatureCollection", "features": features })).unwrap()
    }

    #[test]
    fn resolves_first_matching_hour() {
        let stamps = series(&["2024-01-01 06:10:00", "2024-01-01 06:40:00", "2024-01-01 07:00:00"]);
        assert_eq!(hour_index(&stamps, "06:30"), Some(0));
    }

    #[test]
    fn resolves_sample_scenarios() {
        assert_eq!(hour_index(&sample_series(), "06:30"), Some(1));
        assert_eq!(hour_index(&sample_series(), "23:00"), None);
    }

    #[test]
    fn minutes_do_not_take_part() {
        let stamps = series(&["2024-01-01 14:05:00"]);
        assert_eq!(hour_index(&stamps, "14:30"), hour_index(&stamps, "14:59"));
        assert_eq!(hour_index(&stamps, "14:30"), Some(0));
    }

    #[test]
    fn bare_hour_query_resolves() {
        assert_eq!(hour_index(&sample_series(), "12"), Some(2));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let stamps = series(&["garbage", "2024-01-01T06:10:00", "2024-01-01 06:10:00"]);
        assert_eq!(hour_index(&stamps, "06:00"), Some(2));
    }

    #[test]
    fn empty_series_resolves_to_none() {
        assert_eq!(hour_index(&[], "06:00"), None);
    }

    #[test]
    fn associates_value_at_resolved_index() {
        let mut farms = farm_collection(&[
            ("norte", &["0.10", "0.62", "1.30"]),
            ("centro", &["0.20", "0.72", "1.40"]),
            ("sur", &["0.30", "0.82", "1.50"]),
        ]);

        associate_wave(&mut farms, "06:30").unwrap();

        let values: Vec<f64> = farms.features.iter()
            .map(|f| f.properties.wave_hour.unwrap())
            .collect();
        assert_eq!(values, vec![0.62, 0.72, 0.82]);

        let names: Vec<&str> = farms.features.iter()
            .map(|f| f.properties.extra.get("name").and_then(Value::as_str).unwrap())
            .collect();
        assert_eq!(names, vec!["norte", "centro", "sur"]);
    }

    #[test]
    fn association_is_idempotent() {
        let mut farms = farm_collection(&[("norte", &["0.10", "0.62", "1.30"])]);

        associate_wave(&mut farms, "12:00").unwrap();
        let first_pass = farms.features[0].properties.wave_hour;
        associate_wave(&mut farms, "12:00").unwrap();

        assert_eq!(farms.features[0].properties.wave_hour, first_pass);
        assert_eq!(first_pass, Some(1.3));
    }

    #[test]
    fn quoted_values_parse() {
        let mut farms = farm_collection(&[("norte", &["'0.10'", "'0.62'", "'1.30'"])]);

        associate_wave(&mut farms, "06:00").unwrap();

        assert_eq!(farms.features[0].properties.wave_hour, Some(0.62));
    }

    #[test]
    fn unknown_hour_is_reported() {
        let mut farms = farm_collection(&[("norte", &["0.10", "0.62", "1.30"])]);

        let result = associate_wave(&mut farms, "23:00");

        assert!(matches!(result, Err(WaveError::HourNotFound(h)) if h == "23:00"));
    }

    #[test]
    fn empty_collection_is_missing_data() {
        let mut farms: FeatureCollection = serde_json::from_value(
            json!({ "type": "FeatureCollection", "features": [] })
        ).unwrap();

        assert!(matches!(associate_wave(&mut farms, "06:00"), Err(WaveError::MissingData(_))));
    }

    #[test]
    fn feature_without_series_is_missing_data() {
        let mut farms: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-0.32, 39.45] },
                "properties": { "name": "norte" }
            }]
        })).unwrap();

        assert!(matches!(associate_wave(&mut farms, "06:00"), Err(WaveError::MissingData(_))));
    }

    #[test]
    fn short_wave_series_is_a_document_error() {
        let mut farms = farm_collection(&[
            ("norte", &["0.10", "0.62", "1.30"]),
            ("centro", &["0.20"]),
        ]);

        assert!(matches!(associate_wave(&mut farms, "12:00"), Err(WaveError::Document(_))));
    }

    #[test]
    fn non_numeric_value_is_a_document_error() {
        let mut farms = farm_collection(&[("norte", &["0.10", "n/a", "1.30"])]);

        assert!(matches!(associate_wave(&mut farms, "06:00"), Err(WaveError::Document(_))));
    }

    #[test]
    fn display_properties_survive_serialization() {
        let mut farms = farm_collection(&[("norte", &["0.10", "0.62", "1.30"])]);
        associate_wave(&mut farms, "06:00").unwrap();

        let out = serde_json::to_value(&farms).unwrap();
        let properties = &out["features"][0]["properties"];

        assert_eq!(properties["name"], "norte");
        assert_eq!(properties["status"], "active");
        assert_eq!(properties["wave_hour"], 0.62);
    }
}
