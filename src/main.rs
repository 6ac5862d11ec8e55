use chrono::Datelike;
use clap::{Parser, Subcommand};
use healthtrack_pdf::{content, layout, render, DocError, Document, HelveticaMetrics};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "healthtrack-pdf", version, about = "Generate HealthTrack's downloadable student resources")]
struct Args {
    /// Directory the generated files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[command(subcommand)]
    resource: Resource,
}

#[derive(Subcommand)]
enum Resource {
    /// The beginner workout chart (weekly template + exercise reference)
    WorkoutChart,
    /// The budget meal plan (7-day plan with shopping list)
    MealPlan,
    /// The study + fitness guide (plain-text starter resource)
    StudyGuide,
    /// Every resource
    All,
}

fn main() -> Result<(), DocError> {
    env_logger::init();
    let args = Args::parse();
    let year = chrono::Local::now().year();

    match args.resource {
        Resource::WorkoutChart => {
            generate(&content::workout_chart(year), "Beginner Workout Chart", &args.out_dir)?;
        }
        Resource::MealPlan => {
            generate(&content::meal_plan(year), "Budget Meal Plan", &args.out_dir)?;
        }
        Resource::StudyGuide => {
            save_placeholder("Study + Fitness Guide", &args.out_dir)?;
        }
        Resource::All => {
            generate(&content::workout_chart(year), "Beginner Workout Chart", &args.out_dir)?;
            generate(&content::meal_plan(year), "Budget Meal Plan", &args.out_dir)?;
            save_placeholder("Study + Fitness Guide", &args.out_dir)?;
        }
    }

    Ok(())
}

/// Format a document and hand its pages to the PDF sink under the resource's
/// derived file name
fn generate(document: &Document, resource: &str, out_dir: &Path) -> Result<(), DocError> {
    let pages = layout::format(document, &HelveticaMetrics)?;
    let path = out_dir.join(content::file_name(resource));
    let file = File::create(&path)?;
    render::write(&pages, Some(&content::info_for(document)), file)?;
    log::info!("wrote {} ({} page(s))", path.display(), pages.len());
    Ok(())
}

/// Resources without a dedicated formatter ship as a plain-text starter blob
fn save_placeholder(resource: &str, out_dir: &Path) -> Result<(), DocError> {
    let path = out_dir.join(content::placeholder_file_name(resource));
    std::fs::write(&path, content::placeholder_text(resource))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
