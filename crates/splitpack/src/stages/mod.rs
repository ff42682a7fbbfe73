pub mod generate;
pub mod link;
pub mod partition;
pub mod scan;
