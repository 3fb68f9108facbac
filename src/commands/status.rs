use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use serde::Serialize;

use super::resolve_active;
use crate::core::profile::ProjectStatus;
use crate::search::engine::SearchEngine;

#[derive(Serialize)]
struct ProfileStatus {
    name: String,
    email: String,
    total_entities: usize,
    skills: usize,
    projects: usize,
    work_entries: usize,
    education_entries: usize,
    category_distribution: HashMap<String, usize>,
    level_distribution: HashMap<String, usize>,
    project_status_distribution: HashMap<String, usize>,
    current_position: Option<String>,
    warnings: Vec<Warning>,
}

#[derive(Serialize)]
struct Warning {
    target: String,
    warning_type: String,
    message: String,
}

pub fn run(file: &Path, brief: bool, json: bool) -> Result<()> {
    let profile = resolve_active(file, json)?;
    let engine = SearchEngine::new(&profile);

    let mut category_dist: HashMap<String, usize> = HashMap::new();
    for (category, skills) in engine.skills_by_category().groups() {
        category_dist.insert(category.to_string(), skills.len());
    }

    let mut level_dist: HashMap<String, usize> = HashMap::new();
    for skill in &profile.skills {
        *level_dist.entry(skill.level.to_string()).or_insert(0) += 1;
    }

    let mut project_dist: HashMap<String, usize> = HashMap::new();
    for project in &profile.projects {
        *project_dist.entry(project.status.to_string()).or_insert(0) += 1;
    }

    let today = Local::now().date_naive();
    let mut warnings = Vec::new();

    for project in &profile.projects {
        if project.status == ProjectStatus::InProgress {
            if let Some(end) = project.end_date {
                if end < today {
                    warnings.push(Warning {
                        target: project.title.clone(),
                        warning_type: "stale_project".to_string(),
                        message: format!("still in-progress but end date {} has passed", end),
                    });
                }
            }
        }
    }

    if profile.current_work().is_none() && !profile.work.is_empty() {
        warnings.push(Warning {
            target: "work".to_string(),
            warning_type: "no_current_position".to_string(),
            message: "no work entry is flagged as current".to_string(),
        });
    }

    let status = ProfileStatus {
        name: profile.name.clone(),
        email: profile.email.clone(),
        total_entities: profile.entity_count(),
        skills: profile.skills.len(),
        projects: profile.projects.len(),
        work_entries: profile.work.len(),
        education_entries: profile.education.len(),
        category_distribution: category_dist,
        level_distribution: level_dist,
        project_status_distribution: project_dist,
        current_position: profile
            .current_work()
            .map(|w| format!("{} at {}", w.position, w.company)),
        warnings,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print_status(&status, brief);
    }

    Ok(())
}

fn print_status(status: &ProfileStatus, brief: bool) {
    println!("{}", "Profile Status".bold());
    println!("{}", "=".repeat(50));
    println!();
    println!("Profile: {} <{}>", status.name, status.email);
    if let Some(position) = &status.current_position {
        println!("Currently: {}", position);
    }
    println!();

    println!("{}", "Entity counts".cyan());
    println!("{}", "-".repeat(30));
    println!("   {:<12} {:>4}", "Skills", status.skills);
    println!("   {:<12} {:>4}", "Projects", status.projects);
    println!("   {:<12} {:>4}", "Work", status.work_entries);
    println!("   {:<12} {:>4}", "Education", status.education_entries);
    println!("   {:<12} {:>4}", "Total", status.total_entities);
    println!();

    if brief {
        println!("Categories: {:?}", status.category_distribution);
        println!("Levels: {:?}", status.level_distribution);
        println!("Projects: {:?}", status.project_status_distribution);
    } else {
        print_distribution("Skill categories", &status.category_distribution, status.skills);
        print_distribution("Skill levels", &status.level_distribution, status.skills);
        print_distribution(
            "Project status",
            &status.project_status_distribution,
            status.projects,
        );
    }

    if !status.warnings.is_empty() {
        println!();
        println!("{}", "⚠️  Needs attention".yellow());
        println!("{}", "-".repeat(30));
        for w in &status.warnings {
            println!("   {}: {}", w.target, w.message);
        }
    }

    println!();
    println!("{}", "=".repeat(50));
}

fn print_distribution(title: &str, dist: &HashMap<String, usize>, total: usize) {
    println!("{}", title.cyan());
    println!("{}", "-".repeat(30));
    for (key, count) in dist {
        let pct = if total > 0 {
            (*count as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        println!("   {:<14} {:>4} ({:.0}%)", key, count, pct);
    }
    println!();
}
