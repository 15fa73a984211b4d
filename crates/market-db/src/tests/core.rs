use super::test_db;

#[test]
fn test_open_and_migrate() {
    let db = test_db();
    assert_eq!(db.count_users().unwrap(), 0);
    assert!(db.get_all_bots().unwrap().is_empty());
}

#[test]
fn test_users_insert_if_absent() {
    let db = test_db();
    db.insert_user_if_absent("hash-a").unwrap();
    db.insert_user_if_absent("hash-a").unwrap();
    db.insert_user_if_absent("hash-b").unwrap();
    assert_eq!(db.count_users().unwrap(), 2);
}

#[test]
fn test_bot_catalog() {
    let db = test_db();
    let id = db.add_bot("Greeter", 5000, "/tmp/abc.zip").unwrap();
    assert!(id > 0);

    let bots = db.get_all_bots().unwrap();
    assert_eq!(bots.len(), 1);
    assert_eq!(bots[0].name, "Greeter");
    assert_eq!(bots[0].price, 5000);
    assert_eq!(db.count_bots().unwrap(), 1);
}
