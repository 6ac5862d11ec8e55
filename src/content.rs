//! The static resource content owned by the site: the two documents with a
//! dedicated formatter, the plain-text starter blob for everything else, and
//! file-name derivation for the save collaborator.
//!
//! The formatter treats all of this as caller-supplied configuration; the
//! copyright year is passed in by the caller so nothing here reads the
//! clock.

use crate::document::{Document, Section};
use crate::info::Info;

pub const BRAND: &str = "HealthTrack";

fn footer(year: i32) -> String {
    format!("(c) {year} {BRAND}. Built for students in India.")
}

/// The "Beginner Workout Chart" resource: weekly template plus exercise
/// reference, one section per plan.
pub fn workout_chart(year: i32) -> Document {
    let mut doc = Document::new(
        format!("{BRAND} Beginner Workout Chart"),
        "Weekly template and exercise reference for hostel and home training",
        footer(year),
    );
    doc.add_section(Section::new(
        "10-Min Morning Reset",
        [
            "Wake up, energise, and prime your mind with a fast full-body flow.",
            "3 rounds: 30s work / 15s rest",
            "Jumping jacks, bodyweight squats, plank",
            "No equipment needed",
        ],
    ));
    doc.add_section(Section::new(
        "Hostel / Home Workout",
        [
            "Complete routine using only bodyweight or a single pair of dumbbells.",
            "Upper/lower split, 3 days per week",
            "Push-ups, hinges, rows, split squats",
            "Optional backpack load for extra resistance",
        ],
    ));
    doc.add_section(Section::new(
        "Student Fat-Loss Circuit",
        [
            "Short, intense circuits to burn calories while keeping muscle.",
            "EMOM or Tabata templates",
            "Burpees, mountain climbers, swings",
            "4 sessions per week, 20 minutes each",
        ],
    ));
    doc.add_section(Section::new(
        "Flexibility & Mobility",
        [
            "Feel lighter with daily 10-15 minute mobility and stretch protocols.",
            "Neck and shoulders, hips, ankles",
            "Breathing finishers",
            "Great for desk posture during exam weeks",
        ],
    ));
    doc.add_section(Section::new(
        "Beginner Strength Plan",
        [
            "Build a solid base with safe, progressive sessions.",
            "3 days per week, full body",
            "Goblet squats, RDLs, rows, presses",
            "Linear progression: add a little load or a rep every session",
        ],
    ));
    doc
}

/// The "Budget Meal Plan" resource: a 7-day rotation with a shopping list,
/// built around cheap protein-rich Indian staples.
pub fn meal_plan(year: i32) -> Document {
    let mut doc = Document::new(
        format!("{BRAND} Budget Meal Plan"),
        "7-day plan with shopping list, under Rs 200 a day",
        footer(year),
    );
    doc.add_section(Section::new(
        "Budget Student Meals",
        [
            "Build every plate from carbs + protein + veggies.",
            "Cook once, eat twice: double the dal or rice and refrigerate half.",
            "Mess food counts: add a boiled egg or a bowl of curd to balance it.",
        ],
    ));
    doc.add_section(Section::new(
        "Protein-Rich Staples",
        [
            "Eggs, paneer, curd, dal, chana, rajma, tofu, chicken: easy wins.",
            "Soak chana or rajma overnight so they cook fast after classes.",
            "Aim for a protein source in every meal, not just dinner.",
        ],
    ));
    doc.add_section(Section::new(
        "7-Day Rotation",
        [
            "Day 1: poha with peanuts, dal-chawal, egg bhurji with rotis",
            "Day 2: overnight oats with curd, rajma-chawal, paneer bhurji wrap",
            "Day 3: upma with veggies, chana masala with rice, dal and rotis",
            "Day 4: egg sandwich, curd rice with pickle, tofu stir-fry with rice",
            "Day 5: besan chilla, dal-chawal, chicken curry with rotis",
            "Day 6: poha with sprouts, paneer rice bowl, khichdi with curd",
            "Day 7: oats pancakes, chana salad with lemon, dal makhani with rice",
        ],
    ));
    doc.add_section(Section::new(
        "Tiffin Options",
        [
            "Packable rotis with paneer bhurji",
            "Poha or upma in a steel box stays fresh through morning lectures",
            "Overnight oats: milk or curd, oats, banana, a spoon of peanut butter",
        ],
    ));
    doc.add_section(Section::new(
        "Hydration",
        [
            "2-3 litres a day; keep a bottle on your desk and sip while studying.",
            "Add electrolytes (a pinch of salt and lemon) after hard sessions.",
        ],
    ));
    doc.add_section(Section::new(
        "Shopping List",
        [
            "Grains: rice, poha, oats, atta, besan",
            "Protein: eggs, dal, chana, rajma, paneer, curd, tofu",
            "Produce: onions, tomatoes, bananas, lemons, seasonal veggies",
            "Extras: peanuts, pickle, tea, salt, oil",
        ],
    ));
    doc
}

/// PDF metadata for a generated document
pub fn info_for(document: &Document) -> Info {
    Info::new()
        .with_title(&document.title)
        .with_author(BRAND)
        .with_subject(&document.subtitle)
        .with_keywords("fitness, nutrition, students, india")
}

/// The free starter blob for resources without a dedicated formatter
pub fn placeholder_text(title: &str) -> String {
    format!(
        "{BRAND} - {title}\n\n\
         This is a free starter resource for Indian students. \
         Detailed PDFs are coming soon."
    )
}

/// Derived file name for a generated document, `<resource-slug>.pdf`
pub fn file_name(title: &str) -> String {
    format!("{}.pdf", slug::slugify(title))
}

/// Derived file name for a plain-text placeholder resource
pub fn placeholder_file_name(title: &str) -> String {
    format!("{}.txt", slug::slugify(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_documents_are_well_formed() {
        assert!(workout_chart(2026).validate().is_ok());
        assert!(meal_plan(2026).validate().is_ok());
    }

    #[test]
    fn footer_carries_the_supplied_year() {
        assert!(workout_chart(2026).footer.contains("2026"));
        assert!(meal_plan(1999).footer.contains("1999"));
    }

    #[test]
    fn file_names_are_slugged() {
        assert_eq!(
            file_name("Beginner Workout Chart"),
            "beginner-workout-chart.pdf"
        );
        assert_eq!(
            placeholder_file_name("Study + Fitness Guide"),
            "study-fitness-guide.txt"
        );
    }

    #[test]
    fn placeholder_mentions_the_brand_and_title() {
        let text = placeholder_text("Study + Fitness Guide");
        assert!(text.starts_with("HealthTrack - Study + Fitness Guide"));
    }
}
