//! Small building blocks shared by the render functions: the submission
//! spinner and the theme-aware styles.

pub mod spinner;
pub mod styling;
