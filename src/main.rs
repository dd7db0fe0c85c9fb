use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use schemaform::{FileLoader, FormPipeline};

/// Render an HTML form from a JSON Schema document.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Root schema document path, resolved against the base directory.
    schema: String,

    /// Base directory for schema documents referenced via `$ref`.
    #[arg(short, long, default_value = ".")]
    base: PathBuf,

    /// Write the output here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the field descriptor tree as JSON instead of HTML.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let pipeline = FormPipeline::new(FileLoader::new(&args.base));
    let output = if args.json {
        let fields = pipeline.build(&args.schema).await?;
        serde_json::to_string_pretty(&fields)?
    } else {
        pipeline.render_html(&args.schema).await?
    };

    match args.output {
        Some(path) => tokio::fs::write(&path, output)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{output}"),
    }

    Ok(())
}
