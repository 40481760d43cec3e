//! Single-stream HTTP GET of a release archive.
//!
//! One synchronous transfer via libcurl, written sequentially to a staging
//! file. No ranges, no retries, no concurrency: a failed transfer aborts the
//! whole install.

use crate::error::InstallError;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Transfer tuning knobs, filled in from [`crate::config::BinstConfig`].
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub transfer_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            transfer_timeout: Duration::from_secs(600),
        }
    }
}

/// Downloads `url` with a single GET, writing the body to `dest`.
/// Returns the number of bytes written.
///
/// Follows redirects (release assets usually live behind one). Non-2xx
/// responses are [`InstallError::Http`]; transport failures are
/// [`InstallError::Download`].
pub fn download_to(url: &str, dest: &Path, opts: &FetchOptions) -> Result<u64, InstallError> {
    let mut file = File::create(dest)?;
    let mut written: u64 = 0;
    let mut write_err: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    let curl_err = |source: curl::Error| InstallError::Download {
        url: url.to_string(),
        source,
    };
    easy.url(url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(10).map_err(curl_err)?;
    easy.fail_on_error(false).map_err(curl_err)?;
    easy.connect_timeout(opts.connect_timeout).map_err(curl_err)?;
    easy.timeout(opts.transfer_timeout).map_err(curl_err)?;
    // Abort transfers that stall below 1 KiB/s for a minute.
    easy.low_speed_limit(1024).map_err(curl_err)?;
    easy.low_speed_time(Duration::from_secs(60)).map_err(curl_err)?;

    let perform_result = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match file.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(curl_err)?;
        transfer.perform()
    };
    if let Err(e) = perform_result {
        if let Some(io_err) = write_err.take() {
            return Err(InstallError::Io(io_err));
        }
        return Err(curl_err(e));
    }

    let code = easy.response_code().map_err(curl_err)?;
    if !(200..300).contains(&code) {
        return Err(InstallError::Http {
            url: url.to_string(),
            code,
        });
    }

    file.flush()?;
    tracing::debug!(url, bytes = written, "archive downloaded");
    Ok(written)
}
