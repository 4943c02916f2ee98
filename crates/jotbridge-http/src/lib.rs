//! HTTP layer for the jotbridge verification kit
//!
//! Client side: [`http::client::ProxyClient`] posts fixture payloads to an
//! ESB proxy endpoint with `Action`-header routing, and
//! [`http::runner::ScenarioRunner`] drives the scenario suite over it.
//!
//! Server side: a stub connector gateway that emulates the ESB-proxied
//! Jotform connector closely enough to exercise every scenario locally.

pub mod http;
