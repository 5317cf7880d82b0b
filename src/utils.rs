//! Utilities that are used across the `satherapist` subcommands.

pub mod display;
