pub mod directory;
pub mod identity;
pub mod rows;
