pub mod solids;
pub mod triangle;
pub mod vector;
