use bookshelf_core::db::{open_db, open_db_in_memory};
use bookshelf_core::{
    books_from_json, books_to_json, Book, LibraryStore, RepoError, SqliteLibraryStore,
    LIBRARY_STORAGE_KEY,
};
use rusqlite::{params, Connection};

fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Dune", "Frank Herbert", "412", false),
        Book::new("Emma", "Jane Austen", "474", true),
    ]
}

fn write_raw(conn: &Connection, key: &str, value: &str) {
    conn.execute(
        "INSERT INTO local_storage (key, value) VALUES (?1, ?2);",
        params![key, value],
    )
    .unwrap();
}

#[test]
fn restore_without_saved_data_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLibraryStore::new(&conn);

    assert_eq!(store.key(), LIBRARY_STORAGE_KEY);
    assert!(store.restore_local().unwrap().is_empty());
}

#[test]
fn save_then_restore_reproduces_equal_sequence() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLibraryStore::new(&conn);

    store.save_local(&sample_books()).unwrap();

    assert_eq!(store.restore_local().unwrap(), sample_books());
}

#[test]
fn save_overwrites_previous_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLibraryStore::new(&conn);

    store.save_local(&sample_books()).unwrap();
    store.save_local(&sample_books()[..1]).unwrap();

    assert_eq!(store.restore_local().unwrap(), sample_books()[..1].to_vec());
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM local_storage;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn stored_value_uses_flat_json_list_shape() {
    let conn = open_db_in_memory().unwrap();
    SqliteLibraryStore::new(&conn)
        .save_local(&sample_books())
        .unwrap();

    let raw: String = conn
        .query_row(
            "SELECT value FROM local_storage WHERE key = 'library';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"title": "Dune", "author": "Frank Herbert", "pages": "412", "isRead": false},
            {"title": "Emma", "author": "Jane Austen", "pages": "474", "isRead": true}
        ])
    );
}

#[test]
fn stores_with_different_keys_are_isolated() {
    let conn = open_db_in_memory().unwrap();
    let main = SqliteLibraryStore::new(&conn);
    let other = SqliteLibraryStore::with_key(&conn, "library-archive");

    main.save_local(&sample_books()).unwrap();

    assert!(other.restore_local().unwrap().is_empty());
    assert_eq!(main.restore_local().unwrap().len(), 2);
}

#[test]
fn restore_accepts_null_and_fills_missing_fields() {
    let conn = open_db_in_memory().unwrap();
    write_raw(&conn, "nothing", "null");
    write_raw(&conn, "partial", r#"[{"title":"Beloved","isRead":true}]"#);

    assert!(SqliteLibraryStore::with_key(&conn, "nothing")
        .restore_local()
        .unwrap()
        .is_empty());
    assert_eq!(
        SqliteLibraryStore::with_key(&conn, "partial")
            .restore_local()
            .unwrap(),
        vec![Book::new("Beloved", "Unknown", "0", true)]
    );
}

#[test]
fn restore_keeps_duplicate_titles_from_storage() {
    let conn = open_db_in_memory().unwrap();
    write_raw(
        &conn,
        LIBRARY_STORAGE_KEY,
        r#"[{"title":"Twin","author":"A"},{"title":"Twin","author":"B"}]"#,
    );

    let books = SqliteLibraryStore::new(&conn).restore_local().unwrap();
    assert_eq!(books.len(), 2);
}

#[test]
fn restore_rejects_malformed_payload() {
    let conn = open_db_in_memory().unwrap();
    write_raw(&conn, LIBRARY_STORAGE_KEY, "{not json");

    let err = SqliteLibraryStore::new(&conn).restore_local().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn snapshot_survives_reopening_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookshelf.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        SqliteLibraryStore::new(&conn)
            .save_local(&sample_books())
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(
        SqliteLibraryStore::new(&conn).restore_local().unwrap(),
        sample_books()
    );
}

#[test]
fn json_codec_round_trips_text_fields_verbatim() {
    let books = vec![
        Book::new("", "", "", false),
        Book::new("\"Quoted\" title", "Ünïcode", "about 300", true),
    ];

    let decoded = books_from_json(&books_to_json(&books).unwrap()).unwrap();
    assert_eq!(decoded, books);
}
