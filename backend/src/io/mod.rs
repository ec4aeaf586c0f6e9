//! # IO Module
//!
//! The interface layer that exposes the domain to clients, currently a REST
//! API consumed by the web frontend.

pub mod rest;
