//! The `quizrun list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use quizrun_core::parser;

pub fn execute(problems_path: PathBuf) -> Result<()> {
    let set = parser::parse_problem_file(&problems_path)?;

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Answer"]);

    for (index, problem) in set.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            problem.question.clone(),
            problem.answer.clone(),
        ]);
    }

    println!("{table}");
    println!("{} problem(s)", set.len());

    Ok(())
}
