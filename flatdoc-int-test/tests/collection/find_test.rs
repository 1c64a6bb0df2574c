use flatdoc::collection::{limit_to, order_by, skip_by, Document, FindOptions};
use flatdoc::common::SortOrder;
use flatdoc::doc;
use flatdoc::filter::{all, by_id, field};
use flatdoc_int_test::test_util::{cleanup, create_test_context, insert_test_documents, run_test};

fn first_names(documents: &[Document]) -> Vec<&str> {
    documents
        .iter()
        .filter_map(|document| document.get_str("first_name"))
        .collect()
}

#[test]
fn test_find_all_in_insertion_order() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;

            let documents = users.find(all())?;
            assert_eq!(first_names(&documents), vec!["fn1", "fn2", "fn3"]);

            let documents = users.find(None::<Document>)?;
            assert_eq!(documents.len(), 3);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_with_query_document() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;

            let hr = users.find(doc!{ "role": "hr" })?;
            assert_eq!(first_names(&hr), vec!["fn1", "fn3"]);

            let hr_ln2 = users.find(doc!{ "role": "hr", "last_name": "ln2" })?;
            assert_eq!(first_names(&hr_ln2), vec!["fn3"]);

            let nobody = users.find(doc!{ "role": "admin" })?;
            assert!(nobody.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_matches_whole_values() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;

            let in_pune = users.find(doc!{ "address": { "city": "Pune", "zip": "411001" } })?;
            assert_eq!(first_names(&in_pune), vec!["fn1"]);

            // a partial sub-document is not a match
            let partial = users.find(doc!{ "address": { "city": "Pune" } })?;
            assert!(partial.is_empty());

            let rustaceans = users.find(field("skills").eq(vec!["rust"]))?;
            assert_eq!(first_names(&rustaceans), vec!["fn2"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_numbers_by_value() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;

            assert_eq!(first_names(&users.find(field("age").eq(31.0))?), vec!["fn1"]);
            assert_eq!(first_names(&users.find(field("age").eq(45.5))?), vec!["fn3"]);
            assert!(users.find(field("age").eq("31"))?.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_null_matches_missing_and_null() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;
            users.insert_one(doc!{ "first_name": "fn4" })?;

            let no_address = users.find(field("address").is_null())?;
            assert_eq!(first_names(&no_address), vec!["fn3", "fn4"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_one_returns_first_match() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;

            let first_hr = users.find_one(doc!{ "role": "hr" })?.expect("an hr user");
            assert_eq!(first_hr.get_str("first_name"), Some("fn1"));

            assert!(users.find_one(doc!{ "role": "admin" })?.is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_one_id_matches_on_string_form() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            users.insert_one(doc!{ "_id": 42, "name": "numeric" })?;
            let id = users.insert_one(doc!{ "name": "generated" })?;

            let numeric = users.find_one(doc!{ "_id": "42" })?.expect("numeric id");
            assert_eq!(numeric.get_str("name"), Some("numeric"));

            let numeric = users.find_one(doc!{ "_id": 42 })?.expect("numeric id");
            assert_eq!(numeric.get_str("name"), Some("numeric"));

            let generated = users.find_one(doc!{ "_id": id.to_string() })?.expect("generated id");
            assert_eq!(generated.get_str("name"), Some("generated"));

            assert!(users.find_one(by_id("missing"))?.is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_on_unknown_collection_is_empty() {
    run_test(
        create_test_context,
        |ctx| {
            let unknown = ctx.store().collection("does_not_exist");
            assert!(unknown.find(all())?.is_empty());
            assert!(unknown.find_one(all())?.is_none());
            assert!(!ctx.store().has_collection("does_not_exist")?);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_with_options() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;

            let by_age_desc =
                users.find_with_options(all(), &order_by("age", SortOrder::Descending))?;
            assert_eq!(first_names(&by_age_desc), vec!["fn3", "fn1", "fn2"]);

            let page = users.find_with_options(
                all(),
                &order_by("age", SortOrder::Ascending).skip(1).limit(1),
            )?;
            assert_eq!(first_names(&page), vec!["fn1"]);

            let hr_tail = users.find_with_options(doc!{ "role": "hr" }, &skip_by(1))?;
            assert_eq!(first_names(&hr_tail), vec!["fn3"]);

            let head = users.find_with_options(all(), &limit_to(2))?;
            assert_eq!(first_names(&head), vec!["fn1", "fn2"]);

            let everything = users.find_with_options(all(), &FindOptions::new())?;
            assert_eq!(everything.len(), 3);
            Ok(())
        },
        cleanup,
    )
}
