pub mod student;
pub mod course;
pub mod grade;

pub use student::*;
pub use course::*;
pub use grade::*;
