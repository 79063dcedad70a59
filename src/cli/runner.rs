//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs};
use crate::config::{load_config, RecordsConfig};
use crate::error::Result;
use crate::retriever::Retriever;
use crate::types::{ClassifiedResult, RetrievalOptions};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let retriever = Retriever::new(config)?;

        match &self.cli.command {
            Commands::Fetch(args) => self.fetch(&retriever, args).await,
            Commands::Url(args) => self.url(&retriever, args),
        }
    }

    /// Load the config file if given, then apply command-line overrides
    fn load_config(&self) -> Result<RecordsConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => RecordsConfig::default(),
        };

        if let Some(base_path) = &self.cli.base_path {
            config.base_path.clone_from(base_path);
        }

        config.validate()?;
        debug!(base_path = %config.base_path, "Loaded config");
        Ok(config)
    }

    async fn fetch(&self, retriever: &Retriever, args: &PageArgs) -> Result<()> {
        let options = RetrievalOptions::from(args);
        debug!(base_path = %retriever.config().base_path, ?options, "Fetching page");
        let result = retriever.try_retrieve(&options).await?;

        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputFormat::Pretty => print!("{}", render_pretty(&result)),
        }
        Ok(())
    }

    fn url(&self, retriever: &Retriever, args: &PageArgs) -> Result<()> {
        let url = retriever.request_url(&RetrievalOptions::from(args))?;

        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "url": url.as_str() }));
            }
            OutputFormat::Pretty => println!("{url}"),
        }
        Ok(())
    }
}

fn page_label(page: Option<u32>) -> String {
    page.map_or_else(|| "-".to_string(), |p| p.to_string())
}

/// Human-readable rendering of a classified page
pub fn render_pretty(result: &ClassifiedResult) -> String {
    let ids: Vec<String> = result.ids.iter().map(ToString::to_string).collect();
    let mut out = format!("Records ({}): {}\n", ids.len(), ids.join(", "));

    out.push_str(&format!("Open ({}):\n", result.open.len()));
    for record in &result.open {
        let marker = if record.is_primary { " (primary)" } else { "" };
        out.push_str(&format!("  #{} {}{}\n", record.id, record.color, marker));
    }

    out.push_str(&format!(
        "Closed primary: {}\n",
        result.closed_primary_count
    ));
    out.push_str(&format!(
        "Previous page: {}\n",
        page_label(result.previous_page)
    ));
    out.push_str(&format!("Next page: {}\n", page_label(result.next_page)));
    out
}
