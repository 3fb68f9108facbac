use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::core::schema::validate_profile;
use crate::core::store::ProfileStore;

#[derive(Serialize)]
struct ValidationResult {
    total_records: usize,
    field_errors: usize,
    document_errors: usize,
    records_with_errors: Vec<RecordError>,
    document_issues: Vec<String>,
}

#[derive(Serialize)]
struct RecordError {
    email: String,
    errors: Vec<String>,
}

pub fn run(file: &Path, json: bool) -> Result<()> {
    let store = ProfileStore::load(file)?;

    let mut result = ValidationResult {
        total_records: store.profiles().len(),
        field_errors: 0,
        document_errors: 0,
        records_with_errors: Vec::new(),
        document_issues: Vec::new(),
    };

    for profile in store.profiles() {
        let violations = validate_profile(profile);
        if violations.is_empty() {
            continue;
        }
        result.field_errors += violations.len();
        result.records_with_errors.push(RecordError {
            email: profile.email.clone(),
            errors: violations.iter().map(|v| v.to_string()).collect(),
        });
    }

    let document_violations = store.check_integrity();
    result.document_errors = document_violations.len();
    result.document_issues = document_violations.iter().map(|v| v.to_string()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }

    if result.field_errors > 0 || result.document_errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report(result: &ValidationResult) {
    println!("{}", "Profile Validation Report".bold());
    println!("{}", "=".repeat(60));
    println!();
    println!("Total records: {}", result.total_records);
    println!();

    if result.records_with_errors.is_empty() && result.document_issues.is_empty() {
        println!("{}", "✓ No violations found!".green());
        return;
    }

    if !result.records_with_errors.is_empty() {
        println!("{}", "Violations:".red().bold());
        println!("{}", "-".repeat(60));

        for record in &result.records_with_errors {
            println!();
            println!("{} {}", "RECORD:".cyan(), record.email);
            for err in &record.errors {
                println!("  {} {}", "•".red(), err);
            }
        }
        println!();
    }

    if !result.document_issues.is_empty() {
        println!("{}", "Document issues:".red().bold());
        println!("{}", "-".repeat(60));
        for issue in &result.document_issues {
            println!("  {} {}", "•".red(), issue);
        }
        println!();
    }

    println!("{}", "Summary:".bold());
    println!(
        "  Field errors: {}",
        if result.field_errors > 0 {
            result.field_errors.to_string().red()
        } else {
            result.field_errors.to_string().green()
        }
    );
    println!(
        "  Document errors: {}",
        if result.document_errors > 0 {
            result.document_errors.to_string().red()
        } else {
            result.document_errors.to_string().green()
        }
    );
}
