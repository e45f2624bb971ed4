use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gluten_core::SymptomReport;
use gluten_observability::{init_tracing, AppMetrics};
use gluten_reference::ReferenceData;
use gluten_service::GuideService;

#[derive(Debug, Parser)]
#[command(name = "gluten-guide")]
#[command(about = "Gluten Guide CLI")]
struct Cli {
    #[arg(long, env = "GLUTEN_PRODUCT_CSV", default_value = "data/product.csv")]
    product_csv: PathBuf,

    #[arg(long, env = "GLUTEN_CHAT_CSV", default_value = "data/chat_data.csv")]
    chat_csv: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a product's gluten status.
    Barcode { barcode: String },
    /// Ask the chatbot; starts an interactive session when no message is given.
    Chat { message: Option<String> },
    /// Check a symptom description against the gluten-related rules.
    Symptoms {
        #[arg(long, default_value = "")]
        symptoms: String,
        #[arg(long, default_value = "")]
        illness: String,
        #[arg(long, default_value = "")]
        duration: String,
        #[arg(long, default_value = "")]
        diet: String,
        #[arg(long, default_value = "")]
        period: String,
    },
    /// Print a weekly plan for Vegetarian, Non-Vegetarian or anything else.
    Diet {
        #[arg(long)]
        diet_type: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing("gluten_cli");
    let cli = Cli::parse();

    let data = ReferenceData::load(&cli.product_csv, &cli.chat_csv);
    let service = GuideService::new(Arc::new(data), AppMetrics::shared());

    match cli.command {
        Command::Barcode { barcode } => {
            println!("{}", service.check_barcode(Some(&barcode)));
        }
        Command::Chat { message: Some(message) } => {
            println!("{}", service.chat_message(&message));
        }
        Command::Chat { message: None } => run_chat(&service)?,
        Command::Symptoms {
            symptoms,
            illness,
            duration,
            diet,
            period,
        } => {
            let report = SymptomReport {
                illness,
                symptoms,
                duration,
                diet,
                period,
            };
            println!("{}", service.analyze_symptoms(&report));
        }
        Command::Diet { diet_type, name } => {
            let plan = service.generate_diet(name, diet_type.as_deref());
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}

fn run_chat(service: &GuideService) -> Result<()> {
    println!("Gluten Guide chat mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        println!("\n{}\n", service.chat_message(message));
    }

    Ok(())
}
