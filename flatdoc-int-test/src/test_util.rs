use flatdoc::collection::{Collection, Document};
use flatdoc::doc;
use flatdoc::errors::FlatDocResult;
use flatdoc::DocumentStore;
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};
use std::{env, fs};

/// Runs `test` between `before` and `after`.
///
/// `after` runs even when the test fails or panics, so temp files are
/// removed; the failure is reported afterwards.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> FlatDocResult<()>,
    B: Fn() -> FlatDocResult<TestContext>,
    A: Fn(TestContext) -> FlatDocResult<()>,
{
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };

    let test_ctx = ctx.clone();
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| test(test_ctx)));

    if let Err(e) = after(ctx) {
        eprintln!("Warning: after run failed: {:?}", e);
    }

    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => panic!("Test failed: {:?}", e),
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

#[derive(Clone)]
pub struct TestContext {
    path: PathBuf,
    store: DocumentStore,
}

impl TestContext {
    pub fn new(path: PathBuf, store: DocumentStore) -> Self {
        Self { path, store }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> DocumentStore {
        self.store.clone()
    }
}

/// A unique backing-file path inside its own directory under the temp dir.
pub fn random_path() -> PathBuf {
    let id = uuid::Uuid::new_v4();
    env::temp_dir()
        .join(format!("flatdoc-test-{}", id))
        .join("database.json")
}

pub fn create_test_context() -> FlatDocResult<TestContext> {
    let path = random_path();
    let store = DocumentStore::open(&path)?;
    Ok(TestContext::new(path, store))
}

pub fn cleanup(ctx: TestContext) -> FlatDocResult<()> {
    if let Some(dir) = ctx.path().parent() {
        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
    }
    Ok(())
}

pub fn create_test_docs() -> Vec<Document> {
    vec![
        doc!{
            "first_name": "fn1",
            "last_name": "ln1",
            "email": "fn1@example.com",
            "role": "hr",
            "age": 31,
            "skills": ["sql", "hiring"],
            "address": { "city": "Pune", "zip": "411001" }
        },
        doc!{
            "first_name": "fn2",
            "last_name": "ln2",
            "email": "fn2@example.com",
            "role": "student",
            "age": 22,
            "skills": ["rust"],
            "address": { "city": "Delhi", "zip": "110001" }
        },
        doc!{
            "first_name": "fn3",
            "last_name": "ln2",
            "email": "fn3@example.com",
            "role": "hr",
            "age": 45.5,
            "skills": [],
            "address": null
        },
    ]
}

pub fn insert_test_documents(collection: &Collection) -> FlatDocResult<()> {
    for document in create_test_docs() {
        collection.insert_one(document)?;
    }
    Ok(())
}
