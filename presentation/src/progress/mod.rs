//! Progress reporting while an inquiry is processed

pub mod reporter;
