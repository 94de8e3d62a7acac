//! Data module for card-check
//!
//! Contains the card validity rules and their named constants.

pub mod rules;
