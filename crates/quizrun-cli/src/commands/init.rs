//! The `quizrun init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizrun.toml").exists() {
        println!("quizrun.toml already exists, skipping.");
    } else {
        std::fs::write("quizrun.toml", SAMPLE_CONFIG)?;
        println!("Created quizrun.toml");
    }

    if std::path::Path::new("problems.yaml").exists() {
        println!("problems.yaml already exists, skipping.");
    } else {
        std::fs::write("problems.yaml", SAMPLE_PROBLEMS)?;
        println!("Created problems.yaml");
    }

    println!("\nNext steps:");
    println!("  1. Edit problems.yaml with your own questions");
    println!("  2. Run: quizrun validate --problems problems.yaml");
    println!("  3. Run: quizrun run --problems problems.yaml --limit 10");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizrun configuration

problems = "problems.yaml"
limit_secs = 10
"#;

const SAMPLE_PROBLEMS: &str = r#"problems:
  - question: What is the capital of UK
    answer: London
  - question: What is 5 + 10
    answer: "15"
  - question: Which planet is known as the Red Planet
    answer: Mars
"#;
