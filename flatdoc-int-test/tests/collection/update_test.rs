use flatdoc::doc;
use flatdoc::filter::{all, by_id, field};
use flatdoc::serde_json::json;
use flatdoc_int_test::test_util::{cleanup, create_test_context, insert_test_documents, run_test};
use std::fs;

#[test]
fn test_update_sets_fields_of_first_match_only() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;

            let updated =
                users.update_one(doc!{ "role": "hr" }, &doc!{ "$set": { "team": "core" } })?;
            assert!(updated);

            let with_team = users.find(doc!{ "team": "core" })?;
            assert_eq!(with_team.len(), 1);
            assert_eq!(with_team[0].get_str("first_name"), Some("fn1"));

            let fn3 = users.find_one(doc!{ "first_name": "fn3" })?.expect("fn3");
            assert!(!fn3.contains_key("team"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_keeps_other_fields_and_order() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            let id = users.insert_one(doc!{ "email": "a@x.com", "name": "A", "role": "student" })?;

            assert!(users.update_one(by_id(&id), &doc!{ "$set": { "name": "B", "score": 9 } })?);

            let updated = users.find_one(by_id(&id))?.expect("updated user");
            assert_eq!(updated.fields(), vec!["email", "name", "role", "_id", "score"]);
            assert_eq!(updated.get_str("name"), Some("B"));
            assert_eq!(updated.get_str("email"), Some("a@x.com"));
            assert_eq!(updated.get("score"), Some(&json!(9)));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_without_match_leaves_file_untouched() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            insert_test_documents(&users)?;
            let before = fs::read_to_string(ctx.path())?;

            let updated = users.update_one(
                field("email").eq("nobody@x.com"),
                &doc!{ "$set": { "name": "Z" } },
            )?;
            assert!(!updated);
            assert_eq!(fs::read_to_string(ctx.path())?, before);

            let missing = ctx.store().collection("missing");
            assert!(!missing.update_one(all(), &doc!{ "$set": { "name": "Z" } })?);
            assert!(!ctx.store().has_collection("missing")?);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_ignores_unsupported_operators() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            let id = users.insert_one(doc!{ "name": "A", "visits": 1 })?;

            let updated = users.update_one(
                by_id(&id),
                &doc!{ "$inc": { "visits": 1 }, "$set": { "name": "B" }, "name": "C" },
            )?;
            assert!(updated);

            let user = users.find_one(by_id(&id))?.expect("user");
            assert_eq!(user.get_str("name"), Some("B"));
            assert_eq!(user.get("visits"), Some(&json!(1)));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_never_rewrites_id() {
    run_test(
        create_test_context,
        |ctx| {
            let users = ctx.store().collection("users");
            let id = users.insert_one(doc!{ "name": "A" })?;

            let update = doc!{ "$set": { "_id": "other", "name": "B" } };
            assert!(users.update_one(by_id(&id), &update)?);

            assert!(users.find_one(by_id("other"))?.is_none());
            let user = users.find_one(by_id(&id))?.expect("user keeps its id");
            assert_eq!(user.get_str("name"), Some("B"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_with_nested_value() {
    run_test(
        create_test_context,
        |ctx| {
            let reports = ctx.store().collection("reports");
            let id = reports.insert_one(doc!{ "student_id": "s-1" })?;

            let summary = json!({ "strengths": ["clarity"], "score": { "overall": 7.5 } });
            let update = doc!{ "$set": { "summary": summary.clone() } };
            assert!(reports.update_one(by_id(&id), &update)?);

            let report = reports.find_one(doc!{ "summary": summary })?.expect("report");
            assert_eq!(report.get_str("student_id"), Some("s-1"));
            Ok(())
        },
        cleanup,
    )
}
