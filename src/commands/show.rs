use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::{resolve_active, Envelope};

pub fn run(file: &Path, json: bool) -> Result<()> {
    let profile = resolve_active(file, json)?;

    if json {
        return Envelope::ok(&profile).print();
    }

    println!("{}", profile.display_name().bold());
    if let Some(title) = &profile.title {
        println!("{}", title.cyan());
    }
    println!("{}", "=".repeat(60));

    println!("Email: {}", profile.email);
    if let Some(location) = &profile.location {
        println!("Location: {}", location);
    }
    if let Some(phone) = &profile.phone {
        println!("Phone: {}", phone);
    }
    if let Some(bio) = &profile.bio {
        println!();
        println!("{}", bio);
    }

    if let Some(work) = profile.current_work() {
        println!();
        println!(
            "Currently: {} at {}",
            work.position.cyan(),
            work.company.cyan()
        );
    }

    println!();
    println!(
        "{} skills, {} projects, {} work entries, {} education entries",
        profile.skills.len(),
        profile.projects.len(),
        profile.work.len(),
        profile.education.len()
    );

    if let Some(links) = &profile.links {
        let urls = links.urls();
        if !urls.is_empty() {
            println!();
            println!("{}", "Links:".cyan());
            for (name, url) in urls {
                println!("  {:<10} {}", name, url.dimmed());
            }
        }
    }

    Ok(())
}
