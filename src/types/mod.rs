pub mod pollen_kind;
pub mod record;
pub mod severity;
