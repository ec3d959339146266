// ScriptSmith CLI entry point

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::{error, info};

use scriptsmith_core::brain::LocalAnalyzer;
use scriptsmith_core::config::AppConfig;
use scriptsmith_core::fs_manager::PortablePathManager;
use scriptsmith_core::humanize::relative_to_now;
use scriptsmith_core::logging::init_tracing;
use scriptsmith_core::store::SqliteProjectStore;
use scriptsmith_core::workflow::{GenerateRequest, SaveRequest, ScriptWorkflow};

type Workflow = ScriptWorkflow<LocalAnalyzer, SqliteProjectStore>;

#[derive(Parser)]
#[command(name = "scriptsmith", version, about = "Topic ideas and new scripts from a viral script")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Where the original script comes from
#[derive(Args)]
struct ScriptInput {
    /// Read the script from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
}

impl ScriptInput {
    fn read(&self) -> Result<String> {
        match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Suggest topics for a script
    Suggest {
        #[command(flatten)]
        input: ScriptInput,
    },
    /// Generate a new script for one of the suggested topics
    Generate {
        #[command(flatten)]
        input: ScriptInput,
        /// Id of the suggested topic
        #[arg(short, long)]
        topic: u8,
    },
    /// Save a script (and optionally a generated one) as a project
    Save {
        #[command(flatten)]
        input: ScriptInput,
        /// Project name
        #[arg(short, long, default_value = "")]
        name: String,
        /// Also generate a script for this topic id and store it
        #[arg(short, long)]
        topic: Option<u8>,
    },
    /// List saved projects, newest first
    List,
    /// Print a saved project
    Show { id: String },
    /// Rename a saved project
    Rename { id: String, name: String },
    /// Delete a saved project
    Delete { id: String },
    /// Write a project's generated script to the export directory
    Export { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    init_tracing(&config.logging)?;

    PortablePathManager::init(&config.data_dir)
        .with_context(|| format!("Failed to initialize {}", config.data_dir.display()))?;

    let store = SqliteProjectStore::open(&config.storage).await?;
    let workflow = ScriptWorkflow::new(LocalAnalyzer::new(), store, config.export_dir.clone());

    if let Err(e) = run(cli.command, &workflow).await {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(command: Command, workflow: &Workflow) -> Result<()> {
    match command {
        Command::Suggest { input } => {
            let response = workflow.suggest_topics(&input.read()?).await?;
            for topic in response.topics() {
                println!("[{}] {}\n    {}", topic.id, topic.title, topic.description);
            }
        }
        Command::Generate { input, topic } => {
            let raw = input.read()?;
            let response = workflow.suggest_topics(&raw).await?;
            let selected = response.report.topic(topic).cloned();
            let script = workflow
                .generate_script(GenerateRequest {
                    selected_topic: selected,
                    original: response.script.as_str().to_string(),
                })
                .await?;
            print!("{}", script);
        }
        Command::Save { input, name, topic } => {
            let raw = input.read()?;
            let mut request = SaveRequest {
                name,
                original: raw.trim().to_string(),
                ..Default::default()
            };

            if let Some(id) = topic {
                let response = workflow.suggest_topics(&raw).await?;
                let selected = response.report.topic(id).cloned();
                let script = workflow
                    .generate_script(GenerateRequest {
                        selected_topic: selected.clone(),
                        original: response.script.as_str().to_string(),
                    })
                    .await?;
                request.original = response.script.as_str().to_string();
                request.selected_topic = selected;
                request.generated = Some(script.into_string());
            }

            let project = workflow.save_project(request).await?;
            println!("{}", project.id);
        }
        Command::List => {
            let projects = workflow.list_projects().await?;
            if projects.is_empty() {
                println!("저장된 프로젝트가 없습니다");
            }
            for project in projects {
                println!(
                    "{}  {}  ({})",
                    project.id,
                    project.name,
                    relative_to_now(project.updated_at)
                );
            }
        }
        Command::Show { id } => {
            let loaded = workflow.load_project(&id).await?;
            let project = loaded.project;
            println!("# {}", project.name);
            if let Some(topic) = loaded.selected_topic {
                println!("주제: {}", topic.title);
            }
            println!("\n{}", project.original);
            if let Some(generated) = project.generated {
                println!("\n---\n{}", generated);
            }
        }
        Command::Rename { id, name } => {
            let project = workflow.rename_project(&id, &name).await?;
            info!("Renamed {}", project.id);
            println!("{}", project.name);
        }
        Command::Delete { id } => {
            if workflow.delete_project(&id).await? {
                println!("프로젝트가 삭제되었습니다");
            } else {
                println!("프로젝트를 찾을 수 없습니다");
            }
        }
        Command::Export { id } => {
            let project = workflow.load_project(&id).await?.project;
            let text = project.generated.unwrap_or_default();
            let path = workflow.export_script(&text, &project.name)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
