pub mod analyzer;
pub mod cleanup;
pub mod crash_logs;
pub mod extractor;
pub mod inspector;
pub mod locate;
