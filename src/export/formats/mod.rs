pub mod ranking;
pub mod track;
