use chrono::Local;
use actix_web::{get, post, web, HttpResponse, Responder};
use actix_files::NamedFile;
use log::error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs::read_to_string;
use crate::AppState;
use crate::initialization::Config;
use crate::manager_pipeline::{valid_date, Pipeline};
use crate::manager_wave::{associate_wave, load_farms};
use crate::manager_wave::errors::WaveError;
use crate::manager_wave::models::FeatureCollection;
use crate::manager_weather::Weather;
use crate::manager_weather::errors::WeatherError;

const DEFAULT_HOUR: &str = "00:00";

#[derive(Deserialize)]
struct DataParams {
    pub hour: Option<String>,
    pub date: Option<String>,
}

#[get("/get_data")]
pub async fn get_data(data: web::Data<AppState>, params: web::Query<DataParams>) -> impl Responder {
    let hour = params.hour.clone().unwrap_or_else(|| DEFAULT_HOUR.to_string());
    let date = params.date.clone().unwrap_or_else(current_date);

    match dashboard_payload(&data.config, &hour, &date).await {
        Ok(json) => HttpResponse::Ok().content_type("application/json").body(json),
        Err(WaveError::HourNotFound(hour)) => {
            HttpResponse::NotFound().body(format!("no wave data for hour {}", hour))
        },
        Err(e) => {
            error!("building dashboard data failed: {}", e);
            HttpResponse::InternalServerError().body("error reading dashboard data")
        },
    }
}

#[derive(Deserialize)]
struct RefreshForm {
    pub date: String,
    pub hour: Option<String>,
}

#[post("/refresh")]
pub async fn post_refresh(data: web::Data<AppState>, form: web::Form<RefreshForm>) -> impl Responder {
    if valid_date(&form.date).is_err() {
        return HttpResponse::BadRequest().body("date is not in YYYY-MM-DD format");
    }

    if let Err(e) = Pipeline::new(&data.config.scripts).refresh(&form.date).await {
        error!("data refresh failed: {}", e);
        return HttpResponse::InternalServerError().body("error running the refresh pipeline");
    }

    let hour = form.hour.as_deref().unwrap_or(DEFAULT_HOUR);
    HttpResponse::SeeOther()
        .insert_header(("Location", format!("/?hour={}&date={}", hour, form.date)))
        .finish()
}

#[derive(Deserialize)]
struct WeatherParams {
    pub lat: f64,
    pub lon: f64,
    pub hour: Option<String>,
    pub date: Option<String>,
}

#[get("/get_weather")]
pub async fn get_weather(data: web::Data<AppState>, params: web::Query<WeatherParams>) -> impl Responder {
    let hour = params.hour.clone().unwrap_or_else(|| DEFAULT_HOUR.to_string());
    let date = params.date.clone().unwrap_or_else(current_date);

    let json = async {
        let observation = Weather::new(&data.config.weather)?
            .get_observation(params.lat, params.lon, &date, &hour, &data.config.files.cache_dir).await?;

        serde_json::to_string(&observation).map_err(WeatherError::from)
    }.await;

    match json {
        Ok(json) => HttpResponse::Ok().content_type("application/json").body(json),
        Err(e) => {
            error!("weather lookup failed: {}", e);
            HttpResponse::InternalServerError().body("error fetching weather data")
        },
    }
}

#[get("/wave_med")]
pub async fn get_wave_grid(data: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(&data.config.files.wave_grid_file).await?)
}

fn current_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Builds the dashboard JSON body for the given hour and date
///
/// Loads the market coordinates and the farm collection fresh from disk,
/// associates the wave height for the hour and serializes the lot together
/// with the effective hour and date.
///
/// # Arguments
///
/// * 'config' - service configuration
/// * 'hour' - hour of day in HH:MM form
/// * 'date' - date in YYYY-MM-DD form
async fn dashboard_payload(config: &Config, hour: &str, date: &str) -> Result<String, WaveError> {
    let coordinates_json = read_to_string(&config.files.coordinates_file).await?;
    let coordinates: Value = serde_json::from_str(&coordinates_json)?;

    let mut farms = load_farms(&config.files.farms_file).await?;
    associate_wave(&mut farms, hour)?;

    #[derive(Serialize)]
    struct DashboardData<'a> {
        coordinates: Value,
        farms: FeatureCollection,
        hour: &'a str,
        date: &'a str,
    }

    let payload = DashboardData { coordinates, farms, hour, date };

    Ok(serde_json::to_string(&payload)?)
}
