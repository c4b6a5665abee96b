pub(crate) mod oscillate;
pub(crate) mod scroll;
pub(crate) mod ticker;
