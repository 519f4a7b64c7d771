//! GBFS (General Bikeshare Feed Specification) feeds.
//!
//! The board needs two feeds from a bike-share system:
//! - `station_information`: static station list (id, name, location)
//! - `station_status`: live counts of bikes and free docks per station
//!
//! Both are fetched as untyped JSON and read leniently by the
//! availability layer; see [`feed`] for the envelope helpers.

mod client;
mod error;
pub mod feed;
mod mock;

use std::future::Future;

use serde_json::Value;

pub use client::{
    DEFAULT_CLIENT_IDENTIFIER, DEFAULT_INFORMATION_URL, DEFAULT_STATUS_URL, GbfsClient,
    GbfsConfig,
};
pub use error::FeedError;
pub use mock::{INFORMATION_FILE, MockFeeds, STATUS_FILE};

/// Source of the two station feeds.
///
/// This abstraction allows the board to be tested with canned payloads.
pub trait FeedProvider {
    /// Fetch the `station_information` feed.
    fn station_information(&self) -> impl Future<Output = Result<Value, FeedError>> + Send;

    /// Fetch the `station_status` feed.
    fn station_status(&self) -> impl Future<Output = Result<Value, FeedError>> + Send;
}

/// The feed source chosen at startup.
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// Live HTTP feeds
    Live(GbfsClient),
    /// Payloads loaded from disk
    Mock(MockFeeds),
}

impl FeedProvider for FeedSource {
    async fn station_information(&self) -> Result<Value, FeedError> {
        match self {
            FeedSource::Live(client) => client.station_information().await,
            FeedSource::Mock(feeds) => feeds.station_information().await,
        }
    }

    async fn station_status(&self) -> Result<Value, FeedError> {
        match self {
            FeedSource::Live(client) => client.station_status().await,
            FeedSource::Mock(feeds) => feeds.station_status().await,
        }
    }
}
