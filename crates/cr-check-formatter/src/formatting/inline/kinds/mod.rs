pub mod emphasis;

pub use emphasis::Emphasis;
