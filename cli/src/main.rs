//! scrolly CLI - scrollytelling article compiler

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use scrolly::sink::{ArtifactSink, ImageStager, LocalImageStager, LocalSink};
use scrolly::{Behavior, DurationMode, JsonFormat, Scrolly, ScrollyResult};

#[derive(Parser)]
#[command(name = "scrolly")]
#[command(version)]
#[command(about = "Compile scrollytelling articles to HTML, CSS, and GSAP animation code", long_about = None)]
struct Cli {
    /// Input article (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output root directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build index.html, css/styles.css and js/animation.js
    Build {
        /// Input article (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output root directory; the article goes to <DIR>/<articleId>
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Report artifact locations under this URL instead of local paths
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        #[command(flatten)]
        compile: CompileArgs,
    },

    /// Print the layout stylesheet
    Css {
        /// Input article (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        compile: CompileArgs,
    },

    /// Print the animation program
    #[command(alias = "js")]
    Script {
        /// Input article (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        compile: CompileArgs,
    },

    /// Print the HTML skeleton
    Html {
        /// Input article (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        compile: CompileArgs,
    },

    /// Print the compiled scroll plan as JSON
    Plan {
        /// Input article (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        compile: CompileArgs,
    },

    /// Validate an article and show its structure
    Check {
        /// Input article (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        compile: CompileArgs,
    },

    /// List supported transitions
    Transitions,

    /// Copy images next to an article, refusing to overwrite
    Stage {
        /// Article id
        #[arg(value_name = "ARTICLE_ID")]
        article_id: String,

        /// Image files to stage
        #[arg(value_name = "IMAGE", required = true)]
        images: Vec<PathBuf>,

        /// Output root directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

/// Options shared by every command that compiles an article.
#[derive(Args, Clone, Default)]
struct CompileArgs {
    /// Scroll distance of one step, in percent of the viewport height
    #[arg(long, value_name = "PERCENT")]
    step: Option<u32>,

    /// Scroll distance of one pinned step, in percent (defaults to --step)
    #[arg(long, value_name = "PERCENT")]
    pin_step: Option<u32>,

    /// Scroll the document instead of a .scroller container
    #[arg(long)]
    no_scroller: bool,

    /// Use each animation's duration instead of fixed 0.33s segments
    #[arg(long)]
    use_durations: bool,

    /// Log every trigger callback in the browser console
    #[arg(long)]
    trace: bool,

    /// Reject component ids not shaped like <pageId>-<frameId>-<localId>
    #[arg(long)]
    strict_ids: bool,

    /// Directory or URL images are served from
    #[arg(long, value_name = "PATH")]
    image_base: Option<String>,

    /// Mirror that serves the animation libraries
    #[arg(long, env = "SCROLLY_CDN_URL", value_name = "URL")]
    cdn_mirror: Option<String>,
}

impl CompileArgs {
    fn builder(&self) -> Scrolly {
        let mut scrolly = Scrolly::new();
        if let Some(step) = self.step {
            scrolly = scrolly.with_step_percent(step);
        }
        if let Some(pin_step) = self.pin_step {
            scrolly = scrolly.with_pin_step_percent(pin_step);
        }
        if self.no_scroller {
            scrolly = scrolly.without_scroller();
        }
        if self.use_durations {
            scrolly = scrolly.with_duration_mode(DurationMode::FromAnimation);
        }
        if self.trace {
            scrolly = scrolly.with_trace_callbacks();
        }
        if self.strict_ids {
            scrolly = scrolly.strict_ids();
        }
        if let Some(base) = &self.image_base {
            scrolly = scrolly.with_image_base(base.as_str());
        }
        if let Some(mirror) = &self.cdn_mirror {
            scrolly = scrolly.with_cdn_mirror(mirror);
        }
        scrolly
    }

    fn load(&self, input: &Path) -> Result<ScrollyResult, Box<dyn std::error::Error>> {
        Ok(self.builder().parse(input)?)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build {
            input,
            output,
            base_url,
            compile,
        }) => cmd_build(&input, output.as_deref(), base_url.as_deref(), &compile),
        Some(Commands::Css {
            input,
            output,
            compile,
        }) => compile
            .load(&input)
            .and_then(|r| Ok(r.stylesheet()?))
            .and_then(|css| emit(&css, output.as_deref())),
        Some(Commands::Script {
            input,
            output,
            compile,
        }) => compile
            .load(&input)
            .and_then(|r| Ok(r.animation_program()?))
            .and_then(|js| emit(&js, output.as_deref())),
        Some(Commands::Html {
            input,
            output,
            compile,
        }) => compile
            .load(&input)
            .and_then(|r| Ok(r.html()?))
            .and_then(|html| emit(&html, output.as_deref())),
        Some(Commands::Plan {
            input,
            output,
            compact,
            compile,
        }) => cmd_plan(&input, output.as_deref(), compact, &compile),
        Some(Commands::Check {
            input,
            json,
            compile,
        }) => cmd_check(&input, json, &compile),
        Some(Commands::Transitions) => {
            cmd_transitions();
            Ok(())
        }
        Some(Commands::Stage {
            article_id,
            images,
            output,
        }) => cmd_stage(&article_id, &images, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: build if input is provided
            if let Some(input) = cli.input {
                cmd_build(&input, cli.output.as_deref(), None, &CompileArgs::default())
            } else {
                println!("{}", "Usage: scrolly <FILE> [OUTPUT]".yellow());
                println!("       scrolly --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("output")
}

fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_build(
    input: &Path,
    output: Option<&Path>,
    base_url: Option<&str>,
    compile: &CompileArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = output.map(Path::to_path_buf).unwrap_or_else(default_output);

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing article...");
    let result = compile.load(input)?;
    pb.inc(1);

    pb.set_message("Compiling...");
    let bundle = result.bundle()?;
    pb.inc(1);

    pb.set_message("Writing artifacts...");
    let mut sink = LocalSink::new(&root);
    if let Some(url) = base_url {
        sink = sink.with_base_url(url);
    }
    let locations = sink.commit(&result.article.id, &bundle)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    let last = locations.len().saturating_sub(1);
    for (i, location) in locations.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), location.location);
    }
    println!(
        "\n{} pages, {} triggers",
        bundle.stats.page_count, bundle.stats.trigger_count
    );

    Ok(())
}

fn cmd_plan(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    compile: &CompileArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = compile.load(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = result.plan_json(format)?;
    emit(&json, output)
}

fn cmd_check(
    input: &Path,
    json: bool,
    compile: &CompileArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = compile.load(input)?;
    let bundle = result.bundle()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bundle.stats)?);
        return Ok(());
    }

    let plan = result.plan()?;
    let article = result.article();

    println!("{}", "Article".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Id".bold(), article.id);
    if !article.title.is_empty() {
        println!("{}: {}", "Title".bold(), article.title);
    }

    println!();
    println!("{}", "Pages".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (page, page_plan) in article.pages.iter().zip(&plan.pages) {
        let mode = if page.pinnable { "pinned" } else { "static" };
        println!(
            "{} {} ({}, {} frames)",
            "Page".bold(),
            page.id,
            page.layout.template,
            page.frames.len()
        );
        for slot in &page_plan.slots {
            println!(
                "  {} {}: {}",
                "├─".dimmed(),
                slot.position,
                slot.component_ids.join(", ")
            );
        }
        match &page_plan.pin {
            Some(pin) => println!(
                "  {} {} triggers, pinned for {}%",
                "└─".dimmed(),
                page_plan.trigger_count(),
                pin.distance()
            ),
            None => println!("  {} {}", "└─".dimmed(), mode),
        }
    }

    println!();
    println!("{}", "Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Pages".bold(), bundle.stats.page_count);
    println!("{}: {}", "Pinned".bold(), bundle.stats.pinned_page_count);
    println!("{}: {}", "Frames".bold(), bundle.stats.frame_count);
    println!("{}: {}", "Text".bold(), bundle.stats.text_count);
    println!("{}: {}", "Images".bold(), bundle.stats.image_count);
    println!("{}: {}", "Triggers".bold(), bundle.stats.trigger_count);
    println!("\n{}", "OK".green().bold());

    Ok(())
}

fn cmd_transitions() {
    for name in Behavior::names() {
        println!("{}", name);
    }
}

fn cmd_stage(
    article_id: &str,
    images: &[PathBuf],
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = output.map(Path::to_path_buf).unwrap_or_else(default_output);
    let stager = LocalImageStager::new(&root);

    for path in images {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| format!("Not a file: {}", path.display()))?;
        let bytes = fs::read(path)?;
        let reference = stager.stage(article_id, &filename, &bytes)?;
        println!("{} {}", "Staged".green(), reference);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "scrolly".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Scrollytelling article compiler");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = r#"{
        "articleId": "demo",
        "title": "Demo",
        "pages": [{
            "id": "001",
            "pinnable": true,
            "layout": {"template": "single"},
            "frames": [{"id": "1", "components": [
                {"id": "001-1-1", "type": "text", "position": "center",
                 "animation": "fade", "contentHtml": "<p>Hi</p>"}
            ]}]
        }]
    }"#;

    #[test]
    fn test_cli_parses_build() {
        let cli = Cli::try_parse_from([
            "scrolly", "build", "a.json", "-o", "out", "--step", "80", "--trace",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Build {
                output, compile, ..
            }) => {
                assert_eq!(output, Some(PathBuf::from("out")));
                assert_eq!(compile.step, Some(80));
                assert!(compile.trace);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_build_writes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("article.json");
        fs::write(&input, ARTICLE).unwrap();
        let out = dir.path().join("out");

        cmd_build(&input, Some(&out), None, &CompileArgs::default()).unwrap();

        assert!(out.join("demo/index.html").exists());
        assert!(out.join("demo/css/styles.css").exists());
        assert!(out.join("demo/js/animation.js").exists());
    }

    #[test]
    fn test_stage_refuses_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("cat.png");
        fs::write(&image, b"png").unwrap();
        let out = dir.path().join("out");

        cmd_stage("demo", &[image.clone()], Some(&out)).unwrap();
        assert!(cmd_stage("demo", &[image], Some(&out)).is_err());
    }
}
