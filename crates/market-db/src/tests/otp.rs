use chrono::{Duration, Utc};

use super::test_db;
use crate::otp::timestamp;

#[test]
fn test_issued_code_verifies_exactly_once() {
    let db = test_db();
    let code = db.issue_otp("a@b.com").unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    assert!(db.verify_otp("a@b.com", &code).unwrap());
    assert!(!db.verify_otp("a@b.com", &code).unwrap());
}

#[test]
fn test_expired_code_never_verifies() {
    let db = test_db();
    let past = timestamp(Utc::now() - Duration::seconds(10));
    db.insert_otp("a@b.com", "482913", &past).unwrap();
    assert!(!db.verify_otp("a@b.com", "482913").unwrap());
}

#[test]
fn test_wrong_code_and_unknown_target_fail_without_mutation() {
    let db = test_db();
    let code = db.issue_otp("a@b.com").unwrap();

    assert!(!db.verify_otp("a@b.com", "000000").unwrap());
    assert!(!db.verify_otp("nobody@else.com", &code).unwrap());

    // The real code remains consumable after the failed attempts.
    assert!(db.verify_otp("a@b.com", &code).unwrap());
}

#[test]
fn test_most_recent_matching_code_wins() {
    let db = test_db();
    let future = timestamp(Utc::now() + Duration::seconds(60));
    db.insert_otp("a@b.com", "111111", &future).unwrap();
    db.insert_otp("a@b.com", "111111", &future).unwrap();

    // Duplicate codes: the newer row is consumed first, the older row
    // stays valid until it expires.
    assert!(db.verify_otp("a@b.com", "111111").unwrap());
    assert!(db.verify_otp("a@b.com", "111111").unwrap());
    assert!(!db.verify_otp("a@b.com", "111111").unwrap());
}

#[test]
fn test_multiple_outstanding_codes_per_target() {
    let db = test_db();
    let first = db.issue_otp("chat-42").unwrap();
    let second = db.issue_otp("chat-42").unwrap();

    assert!(db.verify_otp("chat-42", &second).unwrap());
    if first != second {
        assert!(db.verify_otp("chat-42", &first).unwrap());
    }
}
