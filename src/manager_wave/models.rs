use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
}

#[derive(Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: Value,
    pub properties: FarmProperties,
}

/// Properties of one farm record
///
/// The time and wave_height series are index aligned, the value at a given
/// position in wave_height belongs to the timestamp at the same position in
/// time. Display properties such as name or status pass through untouched.
#[derive(Serialize, Deserialize)]
pub struct FarmProperties {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub wave_height: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_hour: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
