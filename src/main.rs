use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crisp_accent::backends::{all_backends, render_all, write_artifacts};
use crisp_accent::cli::Args;
use crisp_accent::{derive_accent, preview, AccentError, DeriveConfig, DeriveOptions};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = DeriveOptions {
        name: args.name.clone(),
        force: args.force,
        config: DeriveConfig {
            max_repair_steps: args.max_repair_steps,
            ..DeriveConfig::default()
        },
    };

    let report = match derive_accent(&args.hex, &options) {
        Ok(report) => report,
        Err(err @ AccentError::AccessibilityGateBlocked { .. }) => {
            return Err(anyhow::Error::new(err).context("no tokens written; use --force to override"));
        }
        Err(err) => return Err(err.into()),
    };

    if args.stdout {
        for (file_name, contents) in render_all(&report)? {
            println!("/* {file_name} */");
            println!("{contents}");
        }
        eprint!("{}", report.summary());
    } else {
        let paths = write_artifacts(&report, &args.out_dir)
            .with_context(|| format!("failed to write artifacts to {}", args.out_dir.display()))?;
        println!("Generated:");
        for (path, backend) in paths.iter().zip(all_backends()) {
            println!("  {} ({})", path.display(), backend.name());
        }
        println!();
        print!("{}", report.summary());
    }

    if report.repair.steps() > 0 {
        eprintln!(
            "Note: accent-hover darkened {} extra step(s) to reach {:.2}:1",
            report.repair.steps(),
            report.repair.check.rounded_ratio()
        );
    }
    if report.forced {
        eprintln!("Warning: --force emitted tokens that fail a contrast check");
    }

    if args.preview {
        println!();
        print!("{}", preview::render(&report));
    }

    Ok(())
}
