//! Metacontent CLI.
//!
//! Run with no arguments from the project root, before the Elm build, to
//! regenerate `src/MetaContent.elm` from the modules in `src/Content/`.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use miette::IntoDiagnostic;

use metacontent::{GenerateReport, Generator, GeneratorConfig};

mod ui;

#[derive(Parser)]
#[command(name = "metacontent")]
#[command(about = "Generates the aggregate MetaContent module from the content modules")]
struct Cli {
    /// Directory holding one file per content module [default: src/Content]
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Path of the generated module [default: src/MetaContent.elm]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File suffix stripped to form module names [default: .elm]
    #[arg(long)]
    suffix: Option<String>,

    /// Namespace the content modules are imported from [default: Content]
    #[arg(long)]
    namespace: Option<String>,

    /// Name of the generated module [default: MetaContent]
    #[arg(long)]
    module: Option<String>,

    /// Print the generated module instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Print a JSON summary instead of the styled one
    #[arg(long, conflicts_with = "stdout")]
    json: bool,

    /// Log discovery and generation steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            content_dir: self.content_dir.clone().unwrap_or(defaults.content_dir),
            out_path: self.output.clone().unwrap_or(defaults.out_path),
            suffix: self.suffix.clone().unwrap_or(defaults.suffix),
            content_namespace: self.namespace.clone().unwrap_or(defaults.content_namespace),
            module_name: self.module.clone().unwrap_or(defaults.module_name),
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let generator = Generator::new(cli.config());

    if cli.stdout {
        let (document, _) = generator.render()?;
        print!("{}", document.contents);
        return Ok(());
    }

    let start = Instant::now();
    let spinner = if !cli.json && atty::is(atty::Stream::Stdout) {
        Some(ui::spinner("Generating content dispatch..."))
    } else {
        None
    };

    let result = generator.generate();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let report = result?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
        println!("{}", json);
        return Ok(());
    }

    print_summary(&report, start.elapsed().as_millis());
    Ok(())
}

/// Prints the success message, the discovered modules and any lints.
fn print_summary(report: &GenerateReport, duration_ms: u128) {
    let file_name = report
        .output
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| report.output.display().to_string());

    ui::success(&format!("Successfully generated {}!", file_name));
    println!();

    ui::box_header("CONTENT");
    ui::box_line("");
    for (index, unit) in report.units.iter().enumerate() {
        ui::unit_line(index, unit.as_str());
    }
    if report.units.is_empty() {
        ui::box_line("   (none)");
    }
    ui::box_line("");
    ui::box_footer();
    println!();

    for lint in &report.lints {
        ui::warning(&lint.message());
    }

    ui::dim(&format!("{} ({} bytes)", report.output.display(), report.bytes));
    ui::timing("Done", duration_ms);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["metacontent"]).unwrap();
        let config = cli.config();

        assert_eq!(config.content_dir, PathBuf::from("src/Content"));
        assert_eq!(config.out_path, PathBuf::from("src/MetaContent.elm"));
        assert_eq!(config.suffix, ".elm");
        assert_eq!(config.content_namespace, "Content");
        assert_eq!(config.module_name, "MetaContent");
        assert!(!cli.stdout && !cli.json && !cli.verbose);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "metacontent",
            "--content-dir",
            "app/Widgets",
            "-o",
            "app/Meta.elm",
            "--module",
            "Meta",
        ])
        .unwrap();
        let config = cli.config();

        assert_eq!(config.content_dir, PathBuf::from("app/Widgets"));
        assert_eq!(config.out_path, PathBuf::from("app/Meta.elm"));
        assert_eq!(config.module_name, "Meta");
        assert_eq!(config.content_namespace, "Content");
    }

    #[test]
    fn json_conflicts_with_stdout() {
        assert!(Cli::try_parse_from(["metacontent", "--json", "--stdout"]).is_err());
    }
}
