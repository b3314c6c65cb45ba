//! Checkpoint Tests - Save/Restore Engine State
//!
//! Critical invariants tested:
//! - Continuity: restored generator continues the exact sequence
//! - Integrity: tampered snapshots are rejected
//! - Isolation: restoring never disturbs the original generator

use rsu_core::{CheckpointError, EngineSnapshot, Rsu, XorShiftEngine};

#[test]
fn test_restore_continues_sequence() {
    let mut original = Rsu::from_seed(12345);
    for _ in 0..10 {
        original.next_raw();
    }

    let snapshot = original.snapshot();
    let mut restored = Rsu::restore(&snapshot).unwrap();

    for _ in 0..100 {
        assert_eq!(original.next_raw(), restored.next_raw());
    }
}

#[test]
fn test_restore_does_not_rerun_warmup() {
    let engine = XorShiftEngine::new(42);
    let restored = XorShiftEngine::restore(&engine.snapshot()).unwrap();
    assert_eq!(engine.state(), restored.state());
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut rng = Rsu::from_seed(7);
    rng.next_float();

    let json = rng.snapshot().to_json().unwrap();
    let parsed = EngineSnapshot::from_json(&json).unwrap();
    assert_eq!(parsed, rng.snapshot());

    let mut restored = Rsu::restore(&parsed).unwrap();
    assert_eq!(restored.next_float(), rng.next_float());
}

#[test]
fn test_tampered_json_rejected() {
    let snapshot = Rsu::from_seed(7).snapshot();
    let mut tampered = snapshot.clone();
    tampered.state[0] ^= 1;

    let json = serde_json::to_string(&tampered).unwrap();
    let err = EngineSnapshot::from_json(&json).unwrap_err();
    match err {
        CheckpointError::ChecksumMismatch { expected, actual } => {
            assert_eq!(expected, snapshot.checksum);
            assert_ne!(actual, snapshot.checksum);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_malformed_json_rejected() {
    let err = EngineSnapshot::from_json("{\"state\": [1, 2]}").unwrap_err();
    assert!(matches!(err, CheckpointError::Serialization(_)));
}

#[test]
fn test_restore_rejects_bad_checksum() {
    let snapshot = EngineSnapshot {
        state: [1, 2, 3, 4],
        checksum: "deadbeef".to_string(),
    };
    assert!(Rsu::restore(&snapshot).is_err());
}

#[test]
fn test_snapshot_does_not_advance() {
    let mut a = Rsu::from_seed(99);
    let mut b = Rsu::from_seed(99);
    let _ = a.snapshot();
    assert_eq!(a.next_raw(), b.next_raw());
}
