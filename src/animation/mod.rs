pub(crate) mod animator;
pub(crate) mod dissolve;
pub(crate) mod ease;
pub(crate) mod scheduler;
pub(crate) mod state;
