pub mod backup;
pub mod del;
pub mod edit;
pub mod log;
pub mod stats;
pub mod track;
