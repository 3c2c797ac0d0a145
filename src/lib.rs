//! ReferralCandy Connect - Storefront Referral Integration
//!
//! This crate bridges a storefront platform and the ReferralCandy referral
//! service: credential settings, referral removal on order cancellation or
//! refund, and the signed post-purchase widget markup.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
