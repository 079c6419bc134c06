//! Grading engine for VAT centralization exercises.
//!
//! A learner picks the VAT accounts of a trial balance, transfers and reverses
//! them into a journal entry, adds the centralizing line for the net VAT
//! position, and submits the entry. [`validation::validate`] decides whether the
//! entry is correct and explains every failed rule.

pub mod actors;
pub mod catalog;
pub mod engine;
pub mod journal;
pub mod models;
pub mod session;
pub mod storage;
pub mod types;
pub mod validation;
