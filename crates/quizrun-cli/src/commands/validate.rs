//! The `quizrun validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizrun_core::parser;

pub fn execute(problems_path: PathBuf) -> Result<()> {
    let sets = if problems_path.is_dir() {
        parser::load_problem_directory(&problems_path)?
    } else {
        let set = parser::parse_problem_file(&problems_path)?;
        vec![(problems_path, set)]
    };

    let mut total_warnings = 0;

    for (path, set) in &sets {
        println!("Problem set: {} ({} problems)", path.display(), set.len());

        let warnings = parser::validate_problem_set(set);
        for w in &warnings {
            let prefix = w
                .problem
                .map(|n| format!("  [problem {n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All problem sets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
