// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.

pub mod types;

pub use types::ImageEntry;
