mod parser;
mod reader;

pub use parser::parse_catalog;
pub use reader::{parse_catalog_bytes, read_catalog};

use crate::resolver::ImageHandle;

/// A parsed exercise catalog.
///
/// Produced once, synchronously, by a full document traversal; it is not
/// mutated afterwards. Every exercise element in the source document is
/// either present in [`exercises`](Self::exercises) or accounted for by an
/// entry in [`missing_images`](Self::missing_images).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    /// Raw image-reference text that failed to resolve, in document order.
    pub missing_images: Vec<String>,
}

/// A single exercise. Only exercises whose image reference resolved make
/// it into the catalog, so `image` is always a live handle.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Exercise {
    /// Name of the nearest enclosing category; empty if the exercise
    /// appeared before any category was declared.
    pub category: String,
    pub title: String,
    pub description: String,
    pub image: ImageHandle,
    /// Steps in declaration order. The `number` field is the declared
    /// attribute value and is never used for sorting.
    pub steps: Vec<Step>,
    pub tips: Vec<String>,
    pub primary_muscle: String,
    pub secondary_muscles: String,
}

/// One numbered instruction within an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Step {
    pub number: u32,
    pub description: String,
}

impl Step {
    pub fn new(number: u32, description: impl Into<String>) -> Self {
        Self {
            number,
            description: description.into(),
        }
    }
}

impl Catalog {
    /// Number of exercises that survived image validation.
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Distinct category names in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for exercise in &self.exercises {
            let name = exercise.category.as_str();
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    /// Exercises belonging to the given category.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Exercise> {
        self.exercises
            .iter()
            .filter(move |e| e.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(category: &str, title: &str) -> Exercise {
        Exercise {
            category: category.to_string(),
            title: title.to_string(),
            description: String::new(),
            image: 1,
            steps: Vec::new(),
            tips: Vec::new(),
            primary_muscle: String::new(),
            secondary_muscles: String::new(),
        }
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let catalog = Catalog {
            exercises: vec![
                exercise("Legs", "Squat"),
                exercise("Chest", "Bench Press"),
                exercise("Legs", "Lunge"),
            ],
            missing_images: Vec::new(),
        };
        assert_eq!(catalog.categories(), vec!["Legs", "Chest"]);
    }

    #[test]
    fn test_in_category() {
        let catalog = Catalog {
            exercises: vec![
                exercise("Legs", "Squat"),
                exercise("Chest", "Bench Press"),
                exercise("Legs", "Lunge"),
            ],
            missing_images: Vec::new(),
        };
        let legs: Vec<_> = catalog.in_category("Legs").map(|e| e.title.as_str()).collect();
        assert_eq!(legs, vec!["Squat", "Lunge"]);
        assert_eq!(catalog.in_category("Back").count(), 0);
    }
}
