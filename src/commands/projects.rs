use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::{resolve_active, truncate, Envelope};
use crate::search::engine::{PagedProjects, SearchEngine};

pub fn run(
    file: &Path,
    skill: Option<&str>,
    page: usize,
    limit: usize,
    json: bool,
) -> Result<()> {
    let profile = resolve_active(file, json)?;
    let engine = SearchEngine::new(&profile);

    let result = match engine.projects_by_skill(skill, page, limit) {
        Ok(result) => result,
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
        return Envelope::ok_paged(&result.data, result.pagination).print();
    }

    print_page(&result, skill);
    Ok(())
}

fn print_page(result: &PagedProjects, skill: Option<&str>) {
    println!("{}", "Projects".bold());
    println!("{}", "=".repeat(60));
    if let Some(skill) = skill {
        println!("Skill filter: \"{}\"", skill);
    }
    println!(
        "Page {} of {} ({} projects)",
        result.pagination.page, result.pagination.pages, result.pagination.total
    );
    println!();

    if result.data.is_empty() {
        println!("{}", "No projects on this page.".yellow());
        return;
    }

    for project in &result.data {
        println!("{} [{}]", project.title.cyan(), project.status);
        println!("  {}", truncate(&project.description, 80).dimmed());
        if !project.skills.is_empty() {
            println!("  {}", project.skills.join(", "));
        }
        if let Some(start) = project.start_date {
            match project.end_date {
                Some(end) => println!("  {} to {}", start, end),
                None => println!("  {} to present", start),
            }
        }
        println!();
    }
}
