//! Streaming parser for the exercise-catalog XML format.
//!
//! The format is a shallow hierarchy: a root element holding `category`
//! elements (with a `name` attribute), each holding `exercise` elements
//! whose leaves carry the textual fields plus `steps`/`step` and
//! `tips`/`tip` containers.
//!
//! The parser makes a single forward pass over the event stream with a
//! per-exercise accumulator. Malformed attributes degrade to defaults
//! (0, empty string) rather than aborting the pass; only document-level
//! XML errors are fatal.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::catalog::{Catalog, Exercise, Step};
use crate::error::{Error, Result};
use crate::resolver::{ImageHandle, ImageResolver};

/// Leaf elements whose text content is routed into the current exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaf {
    Name,
    Description,
    Image,
    Step,
    Tip,
    PrimaryMuscle,
    SecondaryMuscle,
}

/// Per-exercise accumulator, reset whenever an `exercise` element opens.
#[derive(Default)]
struct Draft {
    title: String,
    description: String,
    image: Option<ImageHandle>,
    steps: Vec<Step>,
    tips: Vec<String>,
    primary_muscle: String,
    secondary_muscles: String,
}

/// Parse an exercise catalog from an XML string.
///
/// Image references are normalized (whitespace trimmed, `@drawable/`
/// prefix and `.gif` suffix stripped) and looked up through `resolver`.
/// Exercises whose reference does not resolve are dropped; the raw
/// reference text is appended to [`Catalog::missing_images`] instead.
///
/// # Example
///
/// ```
/// use gymcat::{ImageCatalog, parse_catalog};
///
/// let xml = "<catalog><exercise><name>Squat</name>\
///            <image>@drawable/squat</image></exercise></catalog>";
/// let catalog = parse_catalog(xml, &ImageCatalog::from_names(["squat"])).unwrap();
/// assert_eq!(catalog.exercises[0].title, "Squat");
/// ```
pub fn parse_catalog<R: ImageResolver>(xml: &str, resolver: &R) -> Result<Catalog> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut catalog = Catalog::default();
    let mut category = String::new();
    let mut draft = Draft::default();
    let mut in_steps = false;
    let mut in_tips = false;
    let mut step_number: u32 = 0;
    let mut leaf: Option<Leaf> = None;
    let mut buf_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name();
                let opened = match local_name(name.as_ref()) {
                    b"category" => {
                        category = name_attr(&e);
                        None
                    }
                    b"exercise" => {
                        draft = Draft::default();
                        None
                    }
                    b"steps" => {
                        in_steps = true;
                        None
                    }
                    b"tips" => {
                        in_tips = true;
                        None
                    }
                    b"step" => {
                        step_number = number_attr(&e);
                        Some(Leaf::Step)
                    }
                    b"name" => Some(Leaf::Name),
                    b"description" => Some(Leaf::Description),
                    b"image" => Some(Leaf::Image),
                    b"tip" => Some(Leaf::Tip),
                    b"primary-muscle" => Some(Leaf::PrimaryMuscle),
                    b"secondary-muscle" => Some(Leaf::SecondaryMuscle),
                    _ => None,
                };
                if let Some(field) = opened {
                    leaf = Some(field);
                    buf_text.clear();
                }
            }
            Ok(Event::Empty(e)) => {
                // Self-closing leaves carry no text and contribute nothing;
                // a self-closing category still updates the current label.
                if local_name(e.name().as_ref()) == b"category" {
                    category = name_attr(&e);
                }
            }
            Ok(Event::Text(e)) => {
                if leaf.is_some() {
                    buf_text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if leaf.is_some()
                    && let Some(resolved) = resolve_entity(&String::from_utf8_lossy(e.as_ref()))
                {
                    buf_text.push_str(&resolved);
                }
            }
            Ok(Event::End(e)) => {
                if let Some(field) = leaf.take() {
                    let text = std::mem::take(&mut buf_text);
                    route_text(field, text, &mut draft, &mut catalog, resolver, RouteCtx {
                        in_steps,
                        in_tips,
                        step_number,
                    });
                }

                match local_name(e.name().as_ref()) {
                    b"steps" => in_steps = false,
                    b"tips" => in_tips = false,
                    b"exercise" => {
                        let done = std::mem::take(&mut draft);
                        if let Some(image) = done.image {
                            catalog.exercises.push(Exercise {
                                category: category.clone(),
                                title: done.title,
                                description: done.description,
                                image,
                                steps: done.steps,
                                tips: done.tips,
                                primary_muscle: done.primary_muscle,
                                secondary_muscles: done.secondary_muscles,
                            });
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    Ok(catalog)
}

/// Container state needed to decide whether step/tip text counts.
struct RouteCtx {
    in_steps: bool,
    in_tips: bool,
    step_number: u32,
}

/// Commit accumulated leaf text into the draft exercise.
///
/// Steps are filtered here: a step survives only with a positive declared
/// number and non-empty text. Unresolved image references are recorded in
/// `missing_images` immediately, independent of whether the surrounding
/// exercise is later emitted.
fn route_text<R: ImageResolver>(
    field: Leaf,
    text: String,
    draft: &mut Draft,
    catalog: &mut Catalog,
    resolver: &R,
    ctx: RouteCtx,
) {
    match field {
        Leaf::Name => draft.title = text,
        Leaf::Description => draft.description = text,
        Leaf::Image => {
            if !text.is_empty() {
                match resolver.resolve(normalize_image_ref(&text)) {
                    Some(handle) => draft.image = Some(handle),
                    None => catalog.missing_images.push(text),
                }
            }
        }
        Leaf::Step => {
            if ctx.in_steps && ctx.step_number > 0 && !text.is_empty() {
                draft.steps.push(Step::new(ctx.step_number, text));
            }
        }
        Leaf::Tip => {
            if ctx.in_tips && !text.is_empty() {
                draft.tips.push(text);
            }
        }
        Leaf::PrimaryMuscle => draft.primary_muscle = text,
        Leaf::SecondaryMuscle => draft.secondary_muscles = text,
    }
}

/// Normalize a declared image reference for resolver lookup: trim
/// whitespace, strip an `@drawable/` prefix and a `.gif` suffix.
fn normalize_image_ref(raw: &str) -> &str {
    let name = raw.trim();
    let name = name.strip_prefix("@drawable/").unwrap_or(name);
    name.strip_suffix(".gif").unwrap_or(name)
}

/// `name` attribute of a category element, empty string if absent.
fn name_attr(e: &BytesStart) -> String {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"name" {
            return String::from_utf8_lossy(&attr.value).into_owned();
        }
    }
    String::new()
}

/// `number` attribute of a step element; missing or non-numeric values
/// become 0, which disqualifies the step at close time.
fn number_attr(e: &BytesStart) -> u32 {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"number" {
            return String::from_utf8_lossy(&attr.value)
                .trim()
                .parse()
                .unwrap_or(0);
        }
    }
    0
}

/// Extract local name from a namespaced XML name (e.g., "gc:step" -> "step").
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

/// Resolve XML entity references.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    if let Some(hex) = entity.strip_prefix("#x") {
        if let Ok(code) = u32::from_str_radix(hex, 16)
            && let Some(c) = char::from_u32(code)
        {
            return Some(c.to_string());
        }
    } else if let Some(dec) = entity.strip_prefix('#')
        && let Ok(code) = dec.parse::<u32>()
        && let Some(c) = char::from_u32(code)
    {
        return Some(c.to_string());
    }

    None
}
