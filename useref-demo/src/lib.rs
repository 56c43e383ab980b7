pub mod component;
pub mod paths;

pub use component::UseRefExample;
