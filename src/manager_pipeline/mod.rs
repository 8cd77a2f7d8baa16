pub mod errors;

use chrono::NaiveDate;
use log::info;
use tokio::process::Command;
use crate::initialization::Scripts;
use crate::manager_pipeline::errors::PipelineError;

const SEARCH_SCRIPT: &str = "search_wave_by_coord_recinto.py";
const INSERT_SCRIPT: &str = "insert_wave_into_recinto.py";

/// Runner for the external data refresh scripts
pub struct Pipeline {
    scripts_dir: String,
    python_bin: String,
}

impl Pipeline {
    /// Returns a new instance of the Pipeline struct
    ///
    /// # Arguments
    ///
    /// * 'config' - scripts configuration struct
    pub fn new(config: &Scripts) -> Self {
        Self {
            scripts_dir: config.dir.to_string(),
            python_bin: config.python_bin.to_string(),
        }
    }

    /// Refreshes the on disk wave data files for the given date
    ///
    /// Runs the search script with the date followed by the insert script,
    /// both in the configured scripts directory. The scripts own their
    /// internals, only the exit status and stderr are interpreted here.
    ///
    /// # Arguments
    ///
    /// * 'date' - date in YYYY-MM-DD form to refresh data for
    pub async fn refresh(&self, date: &str) -> Result<(), PipelineError> {
        valid_date(date)?;

        info!("refreshing wave data for {}", date);
        self.run_script(SEARCH_SCRIPT, &["date", date]).await?;
        self.run_script(INSERT_SCRIPT, &[]).await?;

        Ok(())
    }

    /// Runs one script to completion and captures its output
    ///
    /// # Arguments
    ///
    /// * 'script' - script file name within the scripts directory
    /// * 'args' - arguments passed after the script name
    async fn run_script(&self, script: &str, args: &[&str]) -> Result<(), PipelineError> {
        let output = Command::new(&self.python_bin)
            .arg(script)
            .args(args)
            .current_dir(&self.scripts_dir)
            .output().await?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(PipelineError::Script(
                format!("{} exited with {}: {}", script, output.status, stderr.trim())
            ))
        }
    }
}

/// Checks that the date has the expected YYYY-MM-DD form and is a real
/// calendar date
///
/// chrono alone accepts single digit months and days, the shape check keeps
/// the strict ten character form the scripts expect.
///
/// # Arguments
///
/// * 'date' - date string to check
pub fn valid_date(date: &str) -> Result<(), PipelineError> {
    let shaped = date.len() == 10
        && date.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if shaped && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(PipelineError::InvalidDate(date.to_string()))
    }
}
