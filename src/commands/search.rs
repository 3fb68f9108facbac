use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::{resolve_active, truncate, Envelope};
use crate::search::engine::{SearchEngine, SearchResults};

pub fn run(file: &Path, query: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let profile = resolve_active(file, json)?;
    let engine = SearchEngine::new(&profile);

    let results = match engine.search(query) {
        Ok(results) => results,
        Err(err) => {
            if json {
                Envelope::<()>::fail(&err.to_string()).print()?;
            } else {
                println!("{}", err.to_string().red());
            }
            std::process::exit(1);
        }
    };

    if json {
        return Envelope::ok(&results).print();
    }

    print_results(&results, limit.unwrap_or(20));
    Ok(())
}

fn print_results(results: &SearchResults, display_limit: usize) {
    println!("{}", "Search Results".bold());
    println!("{}", "=".repeat(60));
    println!("Query: \"{}\"", results.query);
    println!("Found: {} matches", results.total_matches());
    println!();

    if results.is_empty() {
        println!("{}", "No matches found.".yellow());
        return;
    }

    if let Some(summary) = &results.profile {
        println!("{}", "Profile".cyan().bold());
        println!("  {}", summary.name.cyan());
        if let Some(title) = &summary.title {
            println!("  {}", title);
        }
        if let Some(bio) = &summary.bio {
            println!("  {}", truncate(bio, 80).dimmed());
        }
        println!();
    }

    if !results.projects.is_empty() {
        println!("{}", "Projects".cyan().bold());
        for project in results.projects.iter().take(display_limit) {
            println!("  {} [{}]", project.title.cyan(), project.status);
            println!("  {}", truncate(&project.description, 80).dimmed());
        }
        print_overflow(results.projects.len(), display_limit);
        println!();
    }

    if !results.skills.is_empty() {
        println!("{}", "Skills".cyan().bold());
        for skill in results.skills.iter().take(display_limit) {
            println!("  {} ({}, {})", skill.name.cyan(), skill.level, skill.category);
        }
        print_overflow(results.skills.len(), display_limit);
        println!();
    }

    if !results.work.is_empty() {
        println!("{}", "Work".cyan().bold());
        for work in results.work.iter().take(display_limit) {
            println!("  {} at {}", work.position.cyan(), work.company);
            if let Some(description) = &work.description {
                println!("  {}", truncate(description, 80).dimmed());
            }
        }
        print_overflow(results.work.len(), display_limit);
        println!();
    }

    if !results.education.is_empty() {
        println!("{}", "Education".cyan().bold());
        for education in results.education.iter().take(display_limit) {
            let field = education.field.as_deref().unwrap_or("");
            println!(
                "  {} [{} {}]",
                education.institution.cyan(),
                education.degree,
                field
            );
        }
        print_overflow(results.education.len(), display_limit);
    }
}

fn print_overflow(total: usize, display_limit: usize) {
    if total > display_limit {
        println!(
            "  {}",
            format!("... and {} more", total - display_limit).dimmed()
        );
    }
}
