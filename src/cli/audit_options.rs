use crate::validator::validate_answer_options;
use crate::Result;
use colored::Colorize;

/// Audit a list of answer options. Returns whether no issues were found.
pub fn run(options: &[String], json: bool) -> Result<bool> {
    let issues = validate_answer_options(options);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "issues": issues }))?
        );
    } else if issues.is_empty() {
        println!("{}", "✅ Answer options look balanced".green());
    } else {
        println!("{}", format!("⚠ {} issue(s) found:", issues.len()).yellow().bold());
        for issue in &issues {
            println!("   - {}", issue);
        }
    }

    Ok(issues.is_empty())
}
