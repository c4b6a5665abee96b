pub(crate) mod border;
pub(crate) mod geometry;
