pub mod cli;
pub mod client;
pub mod common;
pub mod gateway;
pub mod runner;

pub use client::{ProxyClient, ProxyResponse};
pub use common::*;
pub use runner::ScenarioRunner;
