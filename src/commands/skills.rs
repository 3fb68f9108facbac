use std::path::Path;

use anyhow::Result;
use colored::{ColoredString, Colorize};

use super::{resolve_active, Envelope};
use crate::core::profile::{Skill, SkillCategory, SkillLevel};
use crate::search::engine::SearchEngine;

pub fn run(file: &Path, category: Option<&str>, top: Option<usize>, json: bool) -> Result<()> {
    let category = match category {
        Some(raw) => match raw.parse::<SkillCategory>() {
            Ok(category) => Some(category),
            Err(err) => {
                if json {
                    Envelope::<()>::fail(&err).print()?;
                } else {
                    println!("{}", err.red());
                }
                std::process::exit(1);
            }
        },
        None => None,
    };

    let profile = resolve_active(file, json)?;
    let engine = SearchEngine::new(&profile);

    if let Some(limit) = top {
        let ranked = match engine.top_skills(limit) {
            Ok(ranked) => ranked,
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
            return Envelope::ok(&ranked).print();
        }

        println!("{}", format!("Top {} Skills", ranked.len()).bold());
        println!("{}", "=".repeat(50));
        for (rank, skill) in ranked.iter().enumerate() {
            println!(
                "  {:>2}. {} {} [{}]",
                rank + 1,
                skill.name.cyan(),
                level_badge(skill.level),
                skill.category
            );
        }
        return Ok(());
    }

    if let Some(category) = category {
        let skills = engine.skills_in_category(category);

        if json {
            return Envelope::ok(&skills).print();
        }

        println!("{}", format!("Skills: {}", category).bold());
        println!("{}", "=".repeat(50));
        if skills.is_empty() {
            println!("{}", "No skills in this category.".yellow());
        } else {
            print_skill_list(&skills);
        }
        return Ok(());
    }

    let grouped = engine.skills_by_category();

    if json {
        return Envelope::ok(&grouped).print();
    }

    println!("{}", "Skills by Category".bold());
    println!("{}", "=".repeat(50));

    if grouped.is_empty() {
        println!("{}", "No skills recorded.".yellow());
        return Ok(());
    }

    for (category, skills) in grouped.groups() {
        println!();
        println!("{} ({})", category.to_string().cyan().bold(), skills.len());
        print_skill_list(skills);
    }

    Ok(())
}

fn print_skill_list(skills: &[Skill]) {
    for skill in skills {
        println!("  {:<20} {}", skill.name, level_badge(skill.level));
    }
}

fn level_badge(level: SkillLevel) -> ColoredString {
    match level {
        SkillLevel::Expert => level.as_str().green(),
        SkillLevel::Advanced => level.as_str().cyan(),
        SkillLevel::Intermediate => level.as_str().yellow(),
        SkillLevel::Beginner => level.as_str().red(),
    }
}
