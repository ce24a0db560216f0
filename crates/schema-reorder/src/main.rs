use std::io::Write as _;
use std::process::ExitCode;

use bpaf::Bpaf;
use schema_reorder::{ReorderArgs, RunOutcome};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version, generate(cli))]
/// Reorder the configureRules properties of a JSON schema into their canonical order
struct Cli {
    #[bpaf(external(schema_reorder::reorder_args))]
    args: ReorderArgs,
}

fn init_tracing() {
    if let Ok(filter) = tracing_subscriber::EnvFilter::try_from_env("SCHEMA_REORDER_LOG") {
        tracing_subscriber::registry()
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true)
                    .with_indent_lines(true)
                    .with_verbose_exit(true)
                    .with_verbose_entry(true)
                    .with_timer(tracing_tree::time::Uptime::default())
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    }
}

fn main() -> ExitCode {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();
    init_tracing();

    let cli = cli().run();
    let args = cli.args;

    match schema_reorder::run(&args) {
        Ok(outcome) => {
            let mut stdout = std::io::stdout().lock();
            let printed =
                schema_reorder::write_outcome(&mut stdout, &args.file, &outcome, args.verbose)
                    .and_then(|()| stdout.flush());
            if let Err(e) = printed {
                eprintln!("Error: failed to write summary: {e}");
                return ExitCode::from(2);
            }
            if matches!(outcome, RunOutcome::Unordered(_)) {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parses_file_and_check() -> anyhow::Result<()> {
        let parsed = cli()
            .run_inner(&["--check", "schema.json"])
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        assert!(parsed.args.check);
        assert_eq!(parsed.args.file, PathBuf::from("schema.json"));
        Ok(())
    }

    #[test]
    fn cli_rejects_unknown_flag() {
        assert!(cli().run_inner(&["--frobnicate"]).is_err());
    }
}
