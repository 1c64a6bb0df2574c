use flatdoc::collection::Document;
use flatdoc::doc;
use flatdoc::filter::{all, by_id, field};
use flatdoc_int_test::test_util::{cleanup, create_test_context, insert_test_documents, run_test};
use std::fs;

#[test]
fn test_delete_many_removes_all_matches() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;

            let removed = users.delete_many(doc!{ "role": "hr" })?;
            assert_eq!(removed, 2);

            let remaining = users.find(all())?;
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].get_str("first_name"), Some("fn2"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_keeps_order_of_survivors() {
    run_test(
        create_test_context,
        |ctx| {
            let items = ctx.store().collection("items");
            for i in 0..6 {
                items.insert_one(doc!{ "n": i, "even": i % 2 == 0 })?;
            }

            assert_eq!(items.delete_many(field("even").eq(true))?, 3);

            let numbers: Vec<i64> = items
                .find(all())?
                .iter()
                .filter_map(|document| document.get("n").and_then(|n| n.as_i64()))
                .collect();
            assert_eq!(numbers, vec![1, 3, 5]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_without_match_returns_zero() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;
            let before = fs::read_to_string(ctx.path())?;

            assert_eq!(users.delete_many(doc!{ "role": "admin" })?, 0);
            assert_eq!(fs::read_to_string(ctx.path())?, before);

            let missing = ctx.store().collection("missing");
            assert_eq!(missing.delete_many(all())?, 0);
            assert!(!ctx.store().has_collection("missing")?);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_with_empty_filter_clears_collection() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;

            assert_eq!(users.delete_many(None::<Document>)?, 3);
            assert!(users.find(all())?.is_empty());
            // the collection itself stays in the file
            assert!(ctx.store().has_collection("users")?);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_by_id() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            let keep = users.insert_one(doc!{ "name": "keep" })?;
            let dropped = users.insert_one(doc!{ "name": "drop" })?;

            assert_eq!(users.delete_many(by_id(&dropped))?, 1);
            assert!(users.find_one(by_id(&dropped))?.is_none());
            assert!(users.find_one(by_id(&keep))?.is_some());
            Ok(())
        },
        cleanup,
    )
}
