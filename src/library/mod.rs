//! Card library: templates, properties, and frozen groups.
//!
//! Set up once before play; immutable afterwards. Card instances take a
//! deep property snapshot at creation, so the library can outlive any
//! number of games.

pub mod properties;
pub mod registry;
pub mod template;

pub use properties::{Properties, PropertyKey, PropertyValue};
pub use registry::{CardGroup, CardLibrary, GroupId};
pub use template::{CardTemplate, FaceTemplate, TypeId};
