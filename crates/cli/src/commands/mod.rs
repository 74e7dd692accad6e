pub(crate) mod admin;
pub(crate) mod query;
pub(crate) mod serve;
