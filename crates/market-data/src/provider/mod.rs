//! Provider clients.
//!
//! Each provider keeps its own payload shape under its module; the
//! shapes are reconciled by [`crate::normalize`], never unioned directly.

pub mod fmp;
pub mod yahoo;
