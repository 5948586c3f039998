// Wide diff row field encoding
pub const LEFT_VALUE_SUFFIX: &str = "_a";
pub const RIGHT_VALUE_SUFFIX: &str = "_b";
pub const CHANGED_FLAG_PREFIX: &str = "is_diff_";
pub const EXCLUSIVE_LEFT_FIELD: &str = "is_exclusive_a";
pub const EXCLUSIVE_RIGHT_FIELD: &str = "is_exclusive_b";

// Output document format version, bump on any wire-shape change
pub const JSON_DIFF_VERSION: &str = "1.0.0";
