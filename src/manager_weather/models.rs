use serde::Deserialize;

#[derive(Deserialize)]
pub struct TimeMachineResult {
    pub data: Vec<TimeMachinePoint>,
}

#[derive(Deserialize)]
pub struct TimeMachinePoint {
    pub temp: f64,
    pub wind_speed: f64,
    pub humidity: f64,
}
