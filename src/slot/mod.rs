pub(crate) mod display;
pub(crate) mod kind;
pub(crate) mod layout;
