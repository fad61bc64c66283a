//! Downloads and caches the CAIDA serial-2 AS relationship dataset.
//!
//! Only as-rel2 is fetched automatically; classification and pfx2as files
//! are taken from local paths. Snapshots are published monthly, so the
//! directory listing is scraped for the file matching the requested month
//! rather than guessing an exact filename.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use bzip2::read::BzDecoder;
use chrono::{Duration, Utc};
use log::info;
use reqwest::blocking::Client;
use scraper::{Html, Selector};

use crate::shared::DatasetUnavailableError;

const SERIAL_2_URL: &str = "http://data.caida.org/datasets/as-relationships/serial-2/";

pub struct RelationshipCollector {
    days_ago: u32,
    cache_dir: PathBuf,
}

impl RelationshipCollector {
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("astopo");
        RelationshipCollector {
            days_ago: 10,
            cache_dir,
        }
    }

    pub fn with_days_ago(mut self, days: u32) -> Self {
        self.days_ago = days;
        self
    }

    pub fn with_cache_dir(mut self, dir: PathBuf) -> Self {
        self.cache_dir = dir;
        self
    }

    /// Returns the path of a cached, decompressed as-rel2 file, fetching
    /// it first if this month's snapshot has not been cached yet.
    pub fn run(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        fs::create_dir_all(&self.cache_dir)?;

        let cached_path = self.cached_path();
        if cached_path.exists() {
            info!("Using cached as-rel2 data at {:?}", cached_path);
            return Ok(cached_path);
        }

        info!("Downloading CAIDA as-rel2 data...");
        let url = self.resolve_url()?;
        let bz2_data = self.download(&url)?;
        let decompressed = decompress_bz2(&bz2_data)?;
        fs::write(&cached_path, decompressed)?;

        info!("as-rel2 data cached at {:?}", cached_path);
        Ok(cached_path)
    }

    fn cached_path(&self) -> PathBuf {
        let date = Utc::now() - Duration::days(self.days_ago as i64);
        let filename = format!("{}.as-rel2.txt", date.format("%Y%m01"));
        self.cache_dir.join(filename)
    }

    /// Scrapes the serial-2 listing for the snapshot of the target month.
    fn resolve_url(&self) -> Result<String, Box<dyn std::error::Error>> {
        let date = Utc::now() - Duration::days(self.days_ago as i64);
        let target = format!("{}.as-rel2.txt.bz2", date.format("%Y%m01"));

        for href in self.listing_hrefs(SERIAL_2_URL)? {
            if href.contains(&target) {
                return Ok(format!("{}{}", SERIAL_2_URL, href));
            }
        }
        Err(Box::new(DatasetUnavailableError {
            url: format!("{}{}", SERIAL_2_URL, target),
        }))
    }

    fn listing_hrefs(&self, url: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let client = Client::new();
        let body = client.get(url).send()?.text()?;

        let document = Html::parse_document(&body);
        let selector = Selector::parse("a").map_err(|e| e.to_string())?;

        Ok(document
            .select(&selector)
            .filter_map(|a| a.value().attr("href"))
            .map(String::from)
            .collect())
    }

    fn download(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let response = Client::new().get(url).send()?;
        if !response.status().is_success() {
            return Err(format!("Failed to download {}: {}", url, response.status()).into());
        }
        Ok(response.bytes()?.to_vec())
    }
}

impl Default for RelationshipCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn decompress_bz2(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = BzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;
    Ok(decompressed)
}
