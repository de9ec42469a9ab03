// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.grosz", "Grosz", "grosz"));

/// Bearer-token session, passed explicitly into the API client instead of
/// living in ambient global storage. The token is persisted under the
/// platform data dir so it survives between invocations; the in-memory copy
/// sits behind a mutex so a 401 can revoke it for every request still in
/// flight within the same process.
#[derive(Debug)]
pub struct Session {
    token: Mutex<Option<String>>,
    path: PathBuf,
}

impl Session {
    pub fn default_path() -> Result<PathBuf> {
        let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
            .context("Could not determine platform-specific data dir")?;
        let data_dir = proj.data_dir();
        fs::create_dir_all(data_dir).context("Failed to create data dir")?;
        Ok(data_dir.join("session.token"))
    }

    /// Loads whatever token is on disk; a missing or empty file means
    /// "not logged in", never an error.
    pub fn load(path: PathBuf) -> Self {
        let token = fs::read_to_string(&path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            token: Mutex::new(token),
            path,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.lock().expect("session token lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn store(&self, token: &str) -> Result<()> {
        fs::write(&self.path, token)
            .with_context(|| format!("Write session token to {}", self.path.display()))?;
        *self.token.lock().expect("session token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    /// Revokes the session after a 401: the token is forgotten in memory, so
    /// no later request in the same process can attach it, and the persisted
    /// copy is removed.
    pub fn invalidate(&self) {
        self.token
            .lock()
            .expect("session token lock poisoned")
            .take();
        if self.path.exists() {
            if let Err(err) = fs::remove_file(&self.path) {
                warn!(%err, path = %self.path.display(), "could not remove session token");
            }
        }
    }

    /// Explicit logout; same effect as a 401 invalidation.
    pub fn clear(&self) {
        self.invalidate();
    }
}
