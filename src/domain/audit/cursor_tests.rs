// src/domain/audit/cursor_tests.rs
use crate::domain::audit::cursor::AuditLogCursor;
use chrono::Utc;
use uuid::Uuid;

#[test]
fn cursor_encode_decode_roundtrip() {
    let now = Utc::now();
    let id = Uuid::new_v4();
    let token = AuditLogCursor::new(now, id).encode();
    let decoded = AuditLogCursor::decode(&token).expect("decode should succeed");
    assert_eq!(decoded.id, id);
    assert_eq!(decoded.created_at.timestamp(), now.timestamp());
}

#[test]
fn cursor_rejects_garbage() {
    assert!(AuditLogCursor::decode("not base64 at all!").is_err());
    let no_separator = base64::Engine::encode(
        &base64::engine::general_purpose::URL_SAFE_NO_PAD,
        b"2024-01-01T00:00:00Z",
    );
    assert!(AuditLogCursor::decode(&no_separator).is_err());
}
