#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the card-payment 3D Secure verification lookup flow.
//!
//! This crate provides the request model, wire serialization, and result
//! types used when asking a payment gateway whether 3D Secure authentication
//! is required for a tokenized payment method. It is transport-agnostic;
//! the HTTP client lives in a separate crate.
//!
//! # Overview
//!
//! A caller builds a [`request::VerificationRequest`] for a payment method
//! nonce and amount, optionally attaching customer contact details and a
//! billing address. The request is rendered into the gateway's lookup wire
//! format by [`wire::LookupRequestBody`] and submitted by a transport layer.
//! The gateway's answer deserializes into [`lookup::LookupResponse`], which
//! carries the ACS handoff fields when a challenge is required.
//!
//! # Modules
//!
//! - [`config`] - Gateway configuration and the 3D Secure feature flag
//! - [`error`] - Error taxonomy for a verification attempt
//! - [`listener`] - Listener trait for asynchronous lookup outcomes
//! - [`lookup`] - Lookup response wire types
//! - [`request`] - Verification request model
//! - [`wire`] - Lookup request body serialization

pub mod config;
pub mod error;
pub mod listener;
pub mod lookup;
pub mod request;
pub mod wire;
