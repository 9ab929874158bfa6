pub(crate) mod id;
pub mod tables;
pub(crate) mod resolve;
