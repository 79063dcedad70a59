//! Classification module
//!
//! Turns one fetched page of raw records into a [`ClassifiedResult`]:
//! drops the over-fetch sentinel, derives page cursors, and buckets
//! records into open views and a closed-primary count.
//!
//! [`ClassifiedResult`]: crate::types::ClassifiedResult

mod classifier;

pub use classifier::classify;
