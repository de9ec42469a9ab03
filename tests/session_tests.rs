// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use grosz::session::Session;

#[test]
fn missing_file_means_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::load(dir.path().join("session.token"));
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
}

#[test]
fn stored_token_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.token");

    let session = Session::load(path.clone());
    session.store("tok-123").unwrap();
    assert_eq!(session.token().as_deref(), Some("tok-123"));

    let reloaded = Session::load(path);
    assert_eq!(reloaded.token().as_deref(), Some("tok-123"));
}

#[test]
fn token_is_trimmed_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.token");
    std::fs::write(&path, "  tok-456\n").unwrap();
    assert_eq!(Session::load(path).token().as_deref(), Some("tok-456"));
}

#[test]
fn invalidate_removes_persisted_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.token");

    let session = Session::load(path.clone());
    session.store("tok-789").unwrap();
    session.invalidate();

    assert!(!path.exists());
    assert!(!Session::load(path).is_authenticated());
}

#[test]
fn invalidate_revokes_token_in_memory_too() {
    // A revoked token must not be attached to any later request in the same
    // process, so invalidation has to clear more than the file on disk.
    let dir = tempfile::tempdir().unwrap();
    let session = Session::load(dir.path().join("session.token"));
    session.store("tok-revoked").unwrap();
    assert!(session.is_authenticated());

    session.invalidate();
    assert!(session.token().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn clear_forgets_token_in_memory_too() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::load(dir.path().join("session.token"));
    session.store("tok-000").unwrap();
    session.clear();
    assert!(!session.is_authenticated());
}
