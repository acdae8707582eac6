pub mod caller;
pub mod deletion;
pub mod directory;
pub mod row;
pub mod search;
