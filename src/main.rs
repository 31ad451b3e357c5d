use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use tabula::cli::{CliArgs, Input, Job, Render};
use tabula::config::TabulaConfig;
use tabula::csv::{parse, serialize, Table};
use tabula::properties::{parse_properties, serialize_properties};

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
        Input::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn render<T: serde::Serialize>(
    value: &T,
    render: Render,
    native: impl FnOnce() -> String,
) -> Result<String> {
    Ok(match render {
        Render::Json => serde_json::to_string_pretty(value).context("Failed to encode JSON")?,
        Render::Yaml => serde_yaml::to_string(value).context("Failed to encode YAML")?,
        Render::Native => native(),
    })
}

fn run(job: Job) -> Result<String> {
    match job {
        Job::Csv {
            input,
            dialect,
            headers,
            render: mode,
        } => {
            let text = read_input(&input)?;
            let dialect = dialect.resolve(&input, &text);
            let grid = parse(&text, dialect);

            if headers {
                let table = Table::from_grid_with_headers(grid);
                render(&table, mode, || table.to_csv(dialect))
            } else {
                render(&grid, mode, || serialize(&grid, dialect))
            }
        }
        Job::Properties {
            input,
            render: mode,
        } => {
            let text = read_input(&input)?;
            let props = parse_properties(&text);
            render(&props, mode, || serialize_properties(&props))
        }
    }
}

fn main() -> Result<()> {
    tabula::tracing::init();

    let args = CliArgs::parse();
    let config = TabulaConfig::load();
    let job = args.into_job(&config).map_err(anyhow::Error::msg)?;
    tracing::debug!("Running {:?}", job);

    let output = run(job)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end_matches('\n')).context("Failed to write output")?;
    Ok(())
}
