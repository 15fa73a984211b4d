use super::test_db;
use crate::DbError;

#[test]
fn test_open_and_list() {
    let db = test_db();
    let bot_id = db.add_bot("Greeter", 5000, "/tmp/a.zip").unwrap();
    let id = db.open_bot("hash-a", bot_id).unwrap();
    assert!(id > 0);

    let mine = db.get_user_activations("hash-a").unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].bot_name, "Greeter");
    assert!(mine[0].active);

    assert!(db.get_user_activations("hash-b").unwrap().is_empty());
}

#[test]
fn test_same_template_can_be_opened_twice() {
    let db = test_db();
    let bot_id = db.add_bot("Greeter", 5000, "/tmp/a.zip").unwrap();
    db.open_bot("hash-a", bot_id).unwrap();
    db.open_bot("hash-a", bot_id).unwrap();
    assert_eq!(db.count_user_activations("hash-a").unwrap(), 2);
}

#[test]
fn test_toggle_twice_restores_state() {
    let db = test_db();
    let bot_id = db.add_bot("Greeter", 5000, "/tmp/a.zip").unwrap();
    let id = db.open_bot("hash-a", bot_id).unwrap();

    let owner = db.toggle_activation(id).unwrap();
    assert_eq!(owner, "hash-a");
    assert!(!db.get_user_activations("hash-a").unwrap()[0].active);

    db.toggle_activation(id).unwrap();
    assert!(db.get_user_activations("hash-a").unwrap()[0].active);
}

#[test]
fn test_toggle_missing_row_is_not_found() {
    let db = test_db();
    assert!(matches!(
        db.toggle_activation(999),
        Err(DbError::NotFound(_))
    ));
}

#[test]
fn test_delete_removes_one_row_and_second_delete_is_noop() {
    let db = test_db();
    let bot_id = db.add_bot("Greeter", 5000, "/tmp/a.zip").unwrap();
    let keep = db.open_bot("hash-a", bot_id).unwrap();
    let gone = db.open_bot("hash-a", bot_id).unwrap();

    assert_eq!(db.delete_activation(gone).unwrap(), Some("hash-a".into()));
    assert_eq!(db.count_user_activations("hash-a").unwrap(), 1);
    assert_eq!(db.get_user_activations("hash-a").unwrap()[0].id, keep);

    assert_eq!(db.delete_activation(gone).unwrap(), None);
    assert_eq!(db.count_user_activations("hash-a").unwrap(), 1);
}
