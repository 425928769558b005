#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport and lookup invoker for the 3D Secure verification flow.
//!
//! This crate submits lookup requests built with the [`threeds`] core crate
//! to a payment gateway over HTTP and routes the asynchronous outcome to the
//! caller's registered listeners.
//!
//! # Overview
//!
//! Construct a [`gateway::GatewayTransport`] for the merchant's gateway URL,
//! wrap it in a [`session::VerificationSession`] together with the gateway
//! [`Configuration`](threeds::config::Configuration) and one or more
//! listeners, then call [`verify::perform_verification`]. The call returns
//! immediately; the lookup runs on a spawned task and resolves through the
//! listeners.
//!
//! # Modules
//!
//! - [`constants`] - Gateway endpoint paths
//! - [`gateway`] - Reqwest-backed gateway transport
//! - [`session`] - Session tying transport, configuration, and listeners together
//! - [`transport`] - The transport seam consumed by the invoker
//! - [`verify`] - The lookup invoker
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod constants;
pub mod gateway;
pub mod session;
pub mod transport;
pub mod verify;
