use super::*;

#[tokio::test]
async fn put_then_get_round_trips() {
    let store = MemoryStore::new();
    let message = Message::new("id-1", "hello");
    store.put(&message).await.expect("put");

    let fetched = store.get("id-1").await.expect("get");
    assert_eq!(fetched, Some(message));
}

#[tokio::test]
async fn get_reports_absent_key_as_none() {
    let store = MemoryStore::new();
    let fetched = store.get("never-created").await.expect("get");
    assert!(fetched.is_none());
}

#[tokio::test]
async fn put_overwrites_existing_entry_for_same_uuid() {
    let store = MemoryStore::new();
    store.put(&Message::new("id-1", "first")).await.expect("put");
    store.put(&Message::new("id-1", "second")).await.expect("put");

    let all = store.scan_all().await.expect("scan");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].message, "second");
}

#[tokio::test]
async fn scan_all_returns_every_entry() {
    let store = MemoryStore::new();
    store.put(&Message::new("a", "one")).await.expect("put");
    store.put(&Message::new("b", "two")).await.expect("put");
    store.put(&Message::new("c", "three")).await.expect("put");

    let mut texts: Vec<String> = store
        .scan_all()
        .await
        .expect("scan")
        .into_iter()
        .map(|m| m.message)
        .collect();
    texts.sort();
    assert_eq!(texts, ["one", "three", "two"]);
}

#[test]
fn converts_item_with_both_string_attributes() {
    let mut item = HashMap::new();
    item.insert(UUID_ATTR.to_string(), AttributeValue::S("id-9".into()));
    item.insert(MESSAGE_ATTR.to_string(), AttributeValue::S("text".into()));

    let message = message_from_item(item).expect("item");
    assert_eq!(message, Message::new("id-9", "text"));
}

#[test]
fn rejects_item_missing_the_message_attribute() {
    let mut item = HashMap::new();
    item.insert(UUID_ATTR.to_string(), AttributeValue::S("id-9".into()));

    let error = message_from_item(item).expect_err("malformed item");
    assert!(matches!(
        error,
        StoreError::MalformedItem {
            attribute: MESSAGE_ATTR
        }
    ));
}

#[test]
fn rejects_item_with_non_string_uuid_attribute() {
    let mut item = HashMap::new();
    item.insert(UUID_ATTR.to_string(), AttributeValue::N("42".into()));
    item.insert(MESSAGE_ATTR.to_string(), AttributeValue::S("text".into()));

    let error = message_from_item(item).expect_err("malformed item");
    assert!(matches!(
        error,
        StoreError::MalformedItem {
            attribute: UUID_ATTR
        }
    ));
}
