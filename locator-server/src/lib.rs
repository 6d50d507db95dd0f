//! Bike-share station locator server.
//!
//! Shows the stations of a city bike scheme with live availability, lets
//! the user search them, and finds the one nearest to the user.

pub mod cache;
pub mod config;
pub mod domain;
pub mod feed;
pub mod locator;
pub mod web;
