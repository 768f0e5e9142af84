pub mod course;
pub mod toc;
