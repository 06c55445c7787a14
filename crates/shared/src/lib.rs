pub mod domain;
pub mod sort;
