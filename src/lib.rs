// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod dashboard;
pub mod enrich;
pub mod feed;
pub mod models;
pub mod session;
pub mod summary;
pub mod utils;
