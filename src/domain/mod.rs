// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core toast types.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `serde` derives on identifiers it depends only on `std`, so it
//! stays independent of the UI and the timing machinery.
//!
//! # Modules
//!
//! - [`toast`]: Toast types ([`Notification`](toast::Notification),
//!   [`Category`](toast::Category), [`ToastId`](toast::ToastId),
//!   [`DismissTimeout`](toast::DismissTimeout))

pub mod toast;
