//! Quote freshness: generation-ordered feed and periodic poller.

pub mod feed;
pub mod poller;
