//! Property tests for the parser's accounting and filtering invariants.

use gymcat::{ImageCatalog, Step, parse_catalog};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct StepPlan {
    number: i32,
    description: String,
}

#[derive(Debug, Clone)]
struct ExercisePlan {
    resolvable: bool,
    steps: Vec<StepPlan>,
    tips: Vec<String>,
}

fn step_plan() -> impl Strategy<Value = StepPlan> {
    (-2i32..8, "[A-Za-z]{0,8}").prop_map(|(number, description)| StepPlan {
        number,
        description,
    })
}

fn exercise_plan() -> impl Strategy<Value = ExercisePlan> {
    (
        any::<bool>(),
        prop::collection::vec(step_plan(), 0..5),
        prop::collection::vec("[A-Za-z]{1,8}", 0..3),
    )
        .prop_map(|(resolvable, steps, tips)| ExercisePlan {
            resolvable,
            steps,
            tips,
        })
}

/// Render plans as a catalog document. Exercise `i` gets title `E{i}` and
/// image reference `ex{i}.gif` so results can be matched back to plans.
fn render(plans: &[ExercisePlan]) -> String {
    let mut xml = String::from("<catalog><category name=\"Generated\">");
    for (i, plan) in plans.iter().enumerate() {
        xml.push_str(&format!("<exercise><name>E{i}</name><image>ex{i}.gif</image><steps>"));
        for step in &plan.steps {
            xml.push_str(&format!(
                "<step number=\"{}\">{}</step>",
                step.number, step.description
            ));
        }
        xml.push_str("</steps><tips>");
        for tip in &plan.tips {
            xml.push_str(&format!("<tip>{tip}</tip>"));
        }
        xml.push_str("</tips></exercise>");
    }
    xml.push_str("</category></catalog>");
    xml
}

fn images_for(plans: &[ExercisePlan]) -> ImageCatalog {
    ImageCatalog::from_names(
        plans
            .iter()
            .enumerate()
            .filter(|(_, p)| p.resolvable)
            .map(|(i, _)| format!("ex{i}")),
    )
}

/// Plan index an emitted exercise came from, recovered from its title.
fn plan_index(title: &str) -> usize {
    title[1..].parse().expect("generated title")
}

proptest! {
    #[test]
    fn every_exercise_emitted_or_missing(plans in prop::collection::vec(exercise_plan(), 0..10)) {
        let catalog = parse_catalog(&render(&plans), &images_for(&plans)).unwrap();

        prop_assert_eq!(catalog.len() + catalog.missing_images.len(), plans.len());

        // Missing references keep raw pre-normalization text in document order
        let expected_missing: Vec<String> = plans
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.resolvable)
            .map(|(i, _)| format!("ex{i}.gif"))
            .collect();
        prop_assert_eq!(&catalog.missing_images, &expected_missing);

        // And no exercise appears on both sides
        for exercise in &catalog.exercises {
            prop_assert!(plans[plan_index(&exercise.title)].resolvable);
        }
    }

    #[test]
    fn steps_are_filtered_but_never_reordered(plans in prop::collection::vec(exercise_plan(), 0..10)) {
        let catalog = parse_catalog(&render(&plans), &images_for(&plans)).unwrap();

        for exercise in &catalog.exercises {
            let plan = &plans[plan_index(&exercise.title)];

            let expected: Vec<Step> = plan
                .steps
                .iter()
                .filter(|s| s.number > 0 && !s.description.is_empty())
                .map(|s| Step::new(s.number as u32, s.description.clone()))
                .collect();
            prop_assert_eq!(&exercise.steps, &expected);

            prop_assert_eq!(&exercise.tips, &plan.tips);
        }
    }

    #[test]
    fn emitted_steps_are_always_valid(plans in prop::collection::vec(exercise_plan(), 0..10)) {
        let catalog = parse_catalog(&render(&plans), &images_for(&plans)).unwrap();

        for exercise in &catalog.exercises {
            for step in &exercise.steps {
                prop_assert!(step.number > 0);
                prop_assert!(!step.description.is_empty());
            }
        }
    }
}
