pub mod dataset;
pub mod describe;
pub mod histogram;
