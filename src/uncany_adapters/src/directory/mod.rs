mod dto;
pub mod neis_school_directory;

pub use neis_school_directory::NeisSchoolDirectory;
