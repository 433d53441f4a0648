pub mod backup;
pub mod log;
pub mod seed;
