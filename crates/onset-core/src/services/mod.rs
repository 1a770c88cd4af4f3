//! Core services - the storefront's business logic layer.
//!
//! This module contains the orchestrators that sit between ports (trait
//! interfaces) and domain logic. Services here are pure orchestrators -
//! they don't know about concrete store implementations.

mod catalog_service;
mod storefront;

pub use catalog_service::{CatalogPhase, CatalogService, LoadOutcome, SeedReason};
pub use storefront::StorefrontCore;
