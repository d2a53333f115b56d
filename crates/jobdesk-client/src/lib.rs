//! # JobDesk Client
//!
//! [`SchedulerApi`](jobdesk_protocols::SchedulerApi) over HTTP using reqwest.

mod client;

pub use client::HttpSchedulerClient;
