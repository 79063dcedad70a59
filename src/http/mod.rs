//! HTTP client module
//!
//! Provides the single-request HTTP client and the response gate that
//! turns a response into records or an error.
//!
//! # Features
//!
//! - **One request per call**: no retries, no backoff
//! - **Status gate**: non-success responses become `Error::HttpStatus`
//! - **Transport settings**: optional timeout, user agent, default headers

mod client;

pub use client::{
    check_response, default_user_agent, HttpClient, HttpClientConfig, HttpClientConfigBuilder,
};

#[cfg(test)]
mod tests;
