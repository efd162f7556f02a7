pub mod alphabet;
pub mod builder;
pub mod entries;
pub mod fields;
pub mod gate;
pub mod preprocess;
pub mod selectors;

pub use alphabet::GlyphAlphabet;
pub use builder::build_record;
pub use gate::HeuristicGate;

#[cfg(test)]
mod tests;
