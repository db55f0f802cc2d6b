use anyhow::Result;
use callwrap::cli::{Cli, OutputFormat};
use callwrap::config::Config;
use callwrap::demos::{Demo, DemoContext};
use callwrap::options::WrapOptions;
use callwrap::output::Output;
use callwrap::summary;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Print the wrapper statistics collected by the demos
fn print_summary(ctx: &DemoContext, format: OutputFormat) -> Result<()> {
    let text = match format {
        OutputFormat::Text => summary::render_text(ctx.stats()),
        OutputFormat::Json => summary::render_json(ctx.stats())? + "\n",
    };
    ctx.output.emit(&text)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.format == OutputFormat::Json && !args.summary {
        anyhow::bail!("--format json only applies to the summary; add -c/--summary");
    }

    init_tracing(args.debug);

    if args.list {
        for demo in Demo::all() {
            println!("{}", demo.name());
        }
        return Ok(());
    }

    let config = Config::load(args.config.as_deref())?;
    let options = match &args.options {
        Some(expr) => WrapOptions::from_expr(expr)?,
        None => config.wrap,
    };
    let log_file = args.log_file.unwrap_or(config.output.log_file);
    tracing::debug!(%options, log_file = %log_file.display(), "configuration resolved");

    let output = Output::stdout();
    let mut ctx = DemoContext::new(output.clone(), options, log_file);

    let demos = if args.demos.is_empty() {
        Demo::all().to_vec()
    } else {
        args.demos
    };
    for demo in demos {
        demo.run(&mut ctx)?;
    }

    if args.summary {
        print_summary(&ctx, args.format)?;
    }

    output.flush()?;
    Ok(())
}
