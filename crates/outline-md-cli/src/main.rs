use anyhow::{Context, Result};
use clap::Parser;
use outline_md_config::Config;
use outline_md_engine::{RenderConfig, parse_outline, render};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "outline-md", version)]
#[command(about = "Convert text exported from an outliner into Markdown format")]
#[command(after_help = "Must choose 'Asterisks' in the export panel. By default, \
lines of the first level of indentation are converted to heading 1, and lines of \
the second level to heading 2.")]
struct Args {
    /// Exported outline text. Read from --file or stdin when omitted.
    #[arg(value_name = "EXPORTED")]
    content: Option<String>,

    /// Read the exported outline from a file
    #[arg(long, short = 'f', value_name = "PATH", conflicts_with = "content")]
    file: Option<PathBuf>,

    /// Write Markdown to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Starting Markdown heading level (1-6), e.g. 1 means heading 1 (#)
    #[arg(long, value_name = "LVL", value_parser = parse_start_heading)]
    start_heading: Option<usize>,

    /// Depth of sub-headings, e.g. 1 means at most heading 2 (##)
    #[arg(long, value_name = "DEPTH")]
    heading_depth: Option<usize>,

    /// Config file to use instead of ~/.config/outline-md/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the parsed outline nodes as JSON instead of Markdown
    #[arg(long)]
    dump_nodes: bool,

    /// Save the effective heading settings to the config file and exit
    #[arg(long)]
    save_config: bool,
}

fn parse_start_heading(value: &str) -> Result<usize, String> {
    let level: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !(1..=RenderConfig::MAX_START_HEADING).contains(&level) {
        return Err(format!(
            "heading level must be between 1 and {}",
            RenderConfig::MAX_START_HEADING
        ));
    }
    Ok(level)
}

fn config_file(path: Option<&Path>) -> PathBuf {
    match path {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
        None => Config::config_path(),
    }
}

fn load_config(path: &Path) -> Result<Config> {
    log::debug!("Loading config from {}", path.display());
    let loaded = Config::load_from_path(path)?;
    Ok(loaded.unwrap_or_else(|| {
        log::debug!("No config file found, using defaults");
        Config::default()
    }))
}

fn render_config(args: &Args, config: &Config) -> RenderConfig {
    let defaults = config.render_config();
    RenderConfig::new(
        args.start_heading.unwrap_or(defaults.start_heading),
        args.heading_depth.unwrap_or(defaults.heading_depth),
    )
}

fn read_input(args: &Args) -> Result<String> {
    if let Some(content) = &args.content {
        return Ok(content.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config_path = config_file(args.config.as_deref());
    let config = load_config(&config_path)?;
    let settings = render_config(&args, &config);
    log::debug!(
        "start_heading={} heading_depth={}",
        settings.start_heading,
        settings.heading_depth
    );

    if args.save_config {
        Config::from_render_config(&settings).save_to_path(&config_path)?;
        log::info!("Saved config to {}", config_path.display());
        return Ok(());
    }

    let input = read_input(&args)?;
    let nodes = match parse_outline(input.lines()) {
        Ok(nodes) => nodes,
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    };

    let text = if args.dump_nodes {
        let mut json = serde_json::to_string_pretty(&nodes)?;
        json.push('\n');
        json
    } else {
        render(&nodes, &settings)
    };

    write_output(args.output.as_deref(), &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_heading_must_be_positive() {
        assert_eq!(parse_start_heading("2"), Ok(2));
        assert_eq!(parse_start_heading("6"), Ok(6));
        assert!(parse_start_heading("0").is_err());
        assert!(parse_start_heading("7").is_err());
        assert!(parse_start_heading("18446744073709551615").is_err());
        assert!(parse_start_heading("two").is_err());
    }

    #[test]
    fn flags_override_config_values() {
        let args = Args::parse_from(["outline-md", "--heading-depth", "0", "* x"]);
        let config = Config {
            start_heading: 3,
            heading_depth: 2,
        };
        assert_eq!(render_config(&args, &config), RenderConfig::new(3, 0));
    }

    #[test]
    fn content_and_file_conflict() {
        let result = Args::try_parse_from(["outline-md", "--file", "in.txt", "* x"]);
        assert!(result.is_err());
    }
}
