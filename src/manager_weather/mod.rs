pub mod errors;
mod models;

use std::time::Duration;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use reqwest::Client;
use crate::cache::{read_cache_data, store_cache_data};
use crate::initialization::WeatherApi;
use crate::manager_weather::errors::WeatherError;
use crate::manager_weather::models::TimeMachineResult;
use crate::models::Observation;

/// Weather manager
///
pub struct Weather {
    client: Client,
    api_url: String,
    api_key: String,
}

impl Weather {

    /// Returns a new instance of Weather
    ///
    /// # Arguments
    ///
    /// * 'config' - weather API configuration struct
    pub fn new(config: &WeatherApi) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, api_url: config.api_url.to_string(), api_key: config.api_key.to_string() })
    }

    /// Returns the weather observation for a farm coordinate at the given
    /// date and hour
    ///
    /// Observations already fetched for the coordinate and date are served
    /// from the file cache, a repeated dashboard load does not hit the API
    /// again.
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the farm
    /// * 'lon' - longitude of the farm
    /// * 'date' - date in YYYY-MM-DD form
    /// * 'hour' - hour of day in HH:MM form
    /// * 'cache_dir' - directory to store/fetch existing data to/from
    pub async fn get_observation(&self, lat: f64, lon: f64, date: &str, hour: &str, cache_dir: &str) -> Result<Observation, WeatherError> {
        let date_time = parse_date_hour(date, hour)?;
        let prefix = format!("weather-{:.3}-{:.3}", lat, lon);

        let mut cached = read_cache_data(cache_dir, &prefix, date_time).await?.unwrap_or_default();
        if let Some(hit) = cached.iter().find(|o| o.timestamp == date_time) {
            return Ok(hit.clone());
        }

        let req = self.client.get(&self.api_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("dt", date_time.timestamp().to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(WeatherError(format!("{:?}", status)));
        }

        let json = req.text().await?;
        let result: TimeMachineResult = serde_json::from_str(&json)?;
        let observation = transform_observation(result, date_time)?;

        cached.push(observation.clone());
        store_cache_data(cache_dir, &prefix, date_time, &cached).await?;

        Ok(observation)
    }
}

/// Combines the date and hour strings into a local date time
///
/// # Arguments
///
/// * 'date' - date in YYYY-MM-DD form
/// * 'hour' - hour of day in HH:MM form
fn parse_date_hour(date: &str, hour: &str) -> Result<DateTime<Local>, WeatherError> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
    let time = NaiveTime::parse_from_str(hour, "%H:%M")?;

    day.and_time(time)
        .and_local_timezone(Local)
        .single()
        .ok_or_else(|| WeatherError(format!("ambiguous local time {} {}", date, hour)))
}

/// Picks the requested point out of a timemachine result
///
/// # Arguments
///
/// * 'result' - deserialized API response
/// * 'date_time' - the time the observation was requested for
fn transform_observation(result: TimeMachineResult, date_time: DateTime<Local>) -> Result<Observation, WeatherError> {
    let point = result.data.into_iter().next()
        .ok_or("empty timemachine result")?;

    Ok(Observation {
        timestamp: date_time,
        temp: point.temp,
        wind_speed: point.wind_speed,
        humidity: point.humidity,
    })
}
