//! Domain Layer - Core Entity Trait
//!
//! Every agenda record carries an identifier that is unique across the
//! whole meeting (sections and their children share one id space).

/// Core trait for agenda entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Ord;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
