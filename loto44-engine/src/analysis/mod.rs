pub mod chaos;
pub mod frequency;
pub mod patterns;
pub mod rotor;
