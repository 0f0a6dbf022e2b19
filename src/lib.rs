//! # gymcat
//!
//! A small, fast parser for exercise-catalog XML documents: categories of
//! exercises with descriptions, animated-image references, ordered steps,
//! tips, and muscle-group labels.
//!
//! Exercises are validated against an image catalog while parsing. An
//! exercise whose image reference cannot be resolved is dropped from the
//! result, and the raw reference text is reported in
//! [`Catalog::missing_images`] so callers can surface it as a non-fatal
//! warning.
//!
//! ## Quick Start
//!
//! ```
//! use gymcat::{ImageCatalog, parse_catalog};
//!
//! let xml = r#"
//! <catalog>
//!   <category name="Legs">
//!     <exercise>
//!       <name>Squat</name>
//!       <description>Basic barbell squat.</description>
//!       <image>squat.gif</image>
//!       <steps>
//!         <step number="1">Lower until thighs are parallel.</step>
//!         <step number="2">Drive back up.</step>
//!       </steps>
//!       <tips>
//!         <tip>Keep the back neutral.</tip>
//!       </tips>
//!       <primary-muscle>Quadriceps</primary-muscle>
//!     </exercise>
//!   </category>
//! </catalog>"#;
//!
//! let images = ImageCatalog::from_names(["squat"]);
//! let catalog = parse_catalog(xml, &images).unwrap();
//!
//! assert_eq!(catalog.exercises.len(), 1);
//! assert_eq!(catalog.exercises[0].category, "Legs");
//! assert_eq!(catalog.exercises[0].steps.len(), 2);
//! assert!(catalog.missing_images.is_empty());
//! ```
//!
//! ## Resolvers
//!
//! Image references are resolved through the [`ImageResolver`] trait,
//! implemented for [`ImageCatalog`], for plain closures, and by
//! [`AcceptAll`] (inspection tooling with no image catalog at hand):
//!
//! ```
//! use gymcat::{AcceptAll, parse_catalog};
//!
//! let xml = "<catalog><exercise><name>Plank</name><image>plank.gif</image></exercise></catalog>";
//! let catalog = parse_catalog(xml, &AcceptAll).unwrap();
//! assert_eq!(catalog.exercises[0].title, "Plank");
//! ```

pub mod catalog;
pub mod error;
pub mod resolver;
pub(crate) mod util;

pub use catalog::{Catalog, Exercise, Step, parse_catalog, parse_catalog_bytes, read_catalog};
pub use error::{Error, Result};
pub use resolver::{AcceptAll, ImageCatalog, ImageHandle, ImageResolver};
