//! Shared assertions for the integration tests.

#![allow(dead_code)]

pub mod value_assertions;
