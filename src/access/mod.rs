pub mod dict;
pub mod list;
pub mod record;
pub mod value;
