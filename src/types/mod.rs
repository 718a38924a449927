pub mod errors;
pub mod mod_record;
