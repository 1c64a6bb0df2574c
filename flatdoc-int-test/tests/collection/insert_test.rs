use flatdoc::collection::DocumentId;
use flatdoc::doc;
use flatdoc::filter::{all, by_id};
use flatdoc::DocumentStore;
use flatdoc_int_test::test_util::{cleanup, create_test_context, create_test_docs, run_test};
use std::collections::HashSet;

#[test]
fn test_insert_and_find_by_assigned_id() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            let document = doc!{ "email": "a@x.com", "name": "A", "role": "student" };

            let id = users.insert_one(document.clone())?;
            let found = users.find_one(by_id(&id))?.expect("inserted document");

            let mut expected = document;
            expected.put("_id", id.as_str());
            assert_eq!(found, expected);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_many_documents_yields_distinct_ids() {
    run_test(
        create_test_context,
        |ctx| {
            let questions = ctx.store().collection("questions");
            let mut ids = HashSet::new();
            for i in 0..50 {
                let id = questions.insert_one(doc!{ "role": "dev", "content": format!("q{}", i) })?;
                ids.insert(id);
            }

            assert_eq!(ids.len(), 50);
            assert_eq!(questions.find(all())?.len(), 50);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_preserves_field_order_and_types() {
    run_test(
        create_test_context,
        |ctx| {
            let reports = ctx.store().collection("reports");
            let id = reports.insert_one(doc!{
                "student_id": "s-1",
                "score": 87,
                "ratio": 0.25,
                "passed": true,
                "mentor": null,
                "strengths": ["clarity", { "depth": 2 }],
                "details": { "summary": "ok", "tags": [] }
            })?;

            let stored = reports.find_one(by_id(&id))?.expect("stored report");
            assert_eq!(
                stored.fields(),
                vec![
                    "student_id", "score", "ratio", "passed", "mentor", "strengths", "details",
                    "_id",
                ]
            );
            assert_eq!(stored.get("ratio").and_then(|v| v.as_f64()), Some(0.25));
            assert_eq!(stored.get("mentor"), Some(&flatdoc::serde_json::Value::Null));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_with_existing_id_keeps_it() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            let id = users.insert_one(doc!{ "_id": "user-1", "email": "a@x.com" })?;
            assert_eq!(id, DocumentId::from("user-1"));

            let found = users.find_one(doc!{ "_id": "user-1" })?.expect("user");
            assert_eq!(found.get_str("email"), Some("a@x.com"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_inserted_document_survives_restart() {
    run_test(
        create_test_context,
        |ctx| {
            let ids: Vec<DocumentId> = create_test_docs()
                .into_iter()
                .map(|document| ctx.store().collection("users").insert_one(document))
                .collect::<Result<_, _>>()?;

            let reopened = DocumentStore::open(ctx.path())?;
            let users = reopened.collection("users");
            for id in &ids {
                assert!(users.find_one(by_id(id))?.is_some());
            }
            assert_eq!(users.find(all())?.len(), ids.len());
            Ok(())
        },
        cleanup,
    )
}
