pub mod section;

pub use section::Section;
