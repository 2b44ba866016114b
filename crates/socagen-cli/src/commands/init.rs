//! The `socagen init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create socagen.toml
    if std::path::Path::new("socagen.toml").exists() {
        println!("socagen.toml already exists, skipping.");
    } else {
        std::fs::write("socagen.toml", SAMPLE_CONFIG)?;
        println!("Created socagen.toml");
    }

    // Create example questionnaire and answers
    std::fs::create_dir_all("questionnaires")?;
    let questionnaire_path = std::path::Path::new("questionnaires/example.json");
    if questionnaire_path.exists() {
        println!("questionnaires/example.json already exists, skipping.");
    } else {
        std::fs::write(questionnaire_path, EXAMPLE_QUESTIONNAIRE)?;
        println!("Created questionnaires/example.json");
    }

    let answers_path = std::path::Path::new("questionnaires/example-answers.json");
    if answers_path.exists() {
        println!("questionnaires/example-answers.json already exists, skipping.");
    } else {
        std::fs::write(answers_path, EXAMPLE_ANSWERS)?;
        println!("Created questionnaires/example-answers.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit socagen.toml with your API token");
    println!("  2. Run: socagen validate --questionnaire questionnaires/example.json");
    println!("  3. Run: socagen assess --questionnaire questionnaires/example.json --answers questionnaires/example-answers.json --student Asha --class 12");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# socagen configuration

[generators.hf]
type = "hf"
api_key = "${HF_API_TOKEN}"

[generators.ollama]
type = "ollama"
base_url = "http://localhost:11434"

default_generator = "hf"
default_model = "google/flan-t5-base"
default_temperature = 0.0
max_new_tokens = 300
results_file = "./results.json"
"#;

const EXAMPLE_QUESTIONNAIRE: &str = r#"{
  "questions": [
    {
      "id": "mechanics1",
      "type": "mcq",
      "prompt": "A body in uniform circular motion has constant...",
      "weight": 2,
      "options": ["velocity", "speed", "acceleration", "momentum"],
      "answer_key": 1
    },
    {
      "id": "study_mode",
      "type": "mcq",
      "prompt": "How do you prefer to study?",
      "options": ["Alone", "In a group", "With a tutor"]
    },
    {
      "id": "confidence",
      "type": "scale",
      "prompt": "Rate your confidence in calculus",
      "min": 1,
      "max": 5
    },
    {
      "id": "routine",
      "type": "short",
      "prompt": "Describe your weekly study routine"
    }
  ]
}
"#;

const EXAMPLE_ANSWERS: &str = r#"{
  "mechanics1": "speed",
  "study_mode": 0,
  "confidence": 4,
  "routine": "Two hours of physics every evening, mock tests on weekends."
}
"#;
