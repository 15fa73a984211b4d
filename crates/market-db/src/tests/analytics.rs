use super::test_db;

#[test]
fn test_user_snapshots_append_current_count() {
    let db = test_db();
    let bot_id = db.add_bot("Greeter", 5000, "/tmp/a.zip").unwrap();

    db.open_bot("hash-a", bot_id).unwrap();
    db.record_user_snapshot("hash-a").unwrap();
    db.open_bot("hash-a", bot_id).unwrap();
    db.record_user_snapshot("hash-a").unwrap();

    let snaps = db.get_user_snapshots("hash-a").unwrap();
    assert_eq!(snaps.len(), 2);
    assert_eq!(snaps[0].bot_count, 1);
    assert_eq!(snaps[1].bot_count, 2);
}

#[test]
fn test_global_snapshot_counts() {
    let db = test_db();
    let bot_id = db.add_bot("Greeter", 5000, "/tmp/a.zip").unwrap();

    // Two users, three opens, one toggled off.
    db.insert_user_if_absent("hash-a").unwrap();
    db.insert_user_if_absent("hash-b").unwrap();
    db.open_bot("hash-a", bot_id).unwrap();
    let off = db.open_bot("hash-a", bot_id).unwrap();
    db.open_bot("hash-b", bot_id).unwrap();
    db.toggle_activation(off).unwrap();

    db.record_global_snapshot().unwrap();

    let snaps = db.get_global_snapshots().unwrap();
    assert_eq!(snaps.len(), 1);
    assert_eq!(snaps[0].users, 2);
    assert_eq!(snaps[0].bots, 3);
    assert_eq!(snaps[0].active_bots, 2);
}

#[test]
fn test_snapshots_are_append_only_history() {
    let db = test_db();
    db.record_global_snapshot().unwrap();
    db.record_global_snapshot().unwrap();
    assert_eq!(db.get_global_snapshots().unwrap().len(), 2);
}
