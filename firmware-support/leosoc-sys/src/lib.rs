// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), no_std)]

pub mod bringup;
pub mod config;
pub mod devices;
pub mod gpio;
pub mod hart;
pub mod led;
pub mod memory_map;
pub mod mmio;
pub mod sync;
pub mod trng;
pub mod uart;
