// End-to-end dispatch tests: text line in, response text out.

use roster_core::{Column, Record};
use roster_engine::{dispatch, Registry};
use roster_store::TableStore;
use tempfile::TempDir;

async fn registry_with_one_account(dir: &TempDir) -> Registry {
    let path = dir.path().join("registry.json");
    {
        let mut store = TableStore::open(&path, "accounts").unwrap();
        let mut record = Record::empty();
        record.set(Column::Name, "Adi4386");
        record.set(Column::Rank, "plat 1");
        store.table_mut().push(record);
        store.save().unwrap();
    }
    Registry::open(&path, "accounts").unwrap()
}

#[tokio::test]
async fn test_dispatch_search_rank() {
    let dir = TempDir::new().unwrap();
    let registry = registry_with_one_account(&dir).await;

    let response = dispatch(&registry, "search_rank Plat 1").await.unwrap();
    assert!(response.contains("Row 2:"));
    assert!(response.contains("name=Adi4386"));
}

#[tokio::test]
async fn test_dispatch_show_rank_case_insensitive_command() {
    let dir = TempDir::new().unwrap();
    let registry = registry_with_one_account(&dir).await;

    let response = dispatch(&registry, "Show_Rank adi4386").await.unwrap();
    assert_eq!(response, "The rank for 'Adi4386' is: plat 1");
}

#[tokio::test]
async fn test_dispatch_update_name_full_round() {
    let dir = TempDir::new().unwrap();
    let registry = registry_with_one_account(&dir).await;

    let response = dispatch(&registry, "update_name adi4386 rank ascendant 3")
        .await
        .unwrap();
    assert_eq!(
        response,
        "Updated row 2 where name='adi4386', column 'rank' to 'ascendant 3'."
    );

    let response = dispatch(&registry, "show_rank adi4386").await.unwrap();
    assert_eq!(response, "The rank for 'Adi4386' is: ascendant 3");
}

#[tokio::test]
async fn test_dispatch_parse_failures_become_responses() {
    let dir = TempDir::new().unwrap();
    let registry = registry_with_one_account(&dir).await;

    let response = dispatch(&registry, "delete_row 2").await.unwrap();
    assert!(response.starts_with("Unknown command 'delete_row'."));

    let response = dispatch(&registry, "update_cell two rank gold 1")
        .await
        .unwrap();
    assert_eq!(response, "Row number 'two' is not a number.");

    let response = dispatch(&registry, "update_name adi4386").await.unwrap();
    assert_eq!(response, "Usage: update_name <name> <column> <new value>");
}
