pub mod branch_name;

/// Characters and sequences git forbids in ref names
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Prefix of branch refs, relative to the metadata directory
pub const REF_PREFIX: &str = "refs/heads/";
