use bqview::mirror;
use bqview_rest::{Configuration, RestWarehouse};
use clap::Parser as _;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// Recreate a dataset of passthrough views in a view project.
///
/// Deletes and recreates the dataset in the view project, creates one
/// `SELECT *` view per table of the source dataset, and synchronizes the
/// authorized view entries on the source dataset. Destination data is
/// dropped without confirmation.
#[derive(Debug, clap::Parser)]
#[command(name = "bqviewctl")]
#[command(about = "Recreates a BigQuery view dataset and its authorized views")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Project that owns the source dataset
    source_project_id: String,

    /// Project that receives the view dataset
    view_project_id: String,

    /// Dataset to mirror
    dataset: String,
}

/// Maps a leading literal `help` argument onto `--help`, so it prints usage
/// and exits zero like the flags do.
fn help_literal(mut args: Vec<std::ffi::OsString>) -> Vec<std::ffi::OsString> {
    if args.get(1).is_some_and(|arg| arg == "help") {
        args[1] = "--help".into();
    }
    args
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse_from(help_literal(std::env::args_os().collect()));

    let mut configuration = Configuration::new();
    // Stands in for application-default credentials; requests go out
    // unauthenticated when unset, which only works against an emulator.
    if let Ok(token) = std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN") {
        configuration.bearer_access_token = Some(token);
    }
    let warehouse = RestWarehouse::new(configuration);

    println!(
        "Mirroring dataset {} from project {} into project {}",
        cli.dataset, cli.source_project_id, cli.view_project_id
    );

    let summary = mirror::mirror_dataset(
        &warehouse,
        &warehouse,
        &cli.source_project_id,
        &cli.view_project_id,
        &cli.dataset,
    )
    .await?;

    println!("  tables found:   {}", summary.tables);
    println!("  views created:  {}", summary.views_created);
    println!("  views failed:   {}", summary.views_failed);
    println!("  grants removed: {}", summary.grants_removed);
    println!("  grants added:   {}", summary.grants_added);

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};

    use super::Cli;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_prints_usage() {
        let err = Cli::try_parse_from(["bqviewctl"]).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_help_flags_print_usage() {
        for flag in ["-h", "--help"] {
            let err = Cli::try_parse_from(["bqviewctl", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn test_help_literal_prints_usage() {
        let args = super::help_literal(vec!["bqviewctl".into(), "help".into()]);
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_help_literal_only_leading() {
        // `help` is only special as the first argument; elsewhere it is a
        // regular identifier.
        let args = super::help_literal(vec![
            "bqviewctl".into(),
            "analytics-prod".into(),
            "views-prod".into(),
            "help".into(),
        ]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.dataset, "help");
    }

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["bqviewctl", "analytics-prod", "views-prod", "sales"])
            .unwrap();
        assert_eq!(cli.source_project_id, "analytics-prod");
        assert_eq!(cli.view_project_id, "views-prod");
        assert_eq!(cli.dataset, "sales");
    }

    #[test]
    fn test_incomplete_arguments_rejected() {
        let err = Cli::try_parse_from(["bqviewctl", "analytics-prod"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
