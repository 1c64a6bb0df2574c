// doc constants
pub const DOC_ID: &str = "_id";

// update operators
pub const SET_OPERATOR: &str = "$set";

// store constants
pub const DEFAULT_FILE_PATH: &str = "database.json";
pub const DEFAULT_COLLECTIONS: [&str; 2] = ["users", "job_roles"];
pub const TEMP_FILE_EXTENSION: &str = "tmp";
