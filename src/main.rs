use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use scriptset::cmd;
use scriptset::cmd::plan::PlanOptions;
use scriptset::pipeline::PlanStep;
use scriptset::target::BuildTarget;
use std::path::PathBuf;
use std::process;

/// Script resource sets for bundling and <script> tags
///
/// scriptset reads one declaration of named script sets and renders either
/// the tags for a page or the descriptors for the concatenation and
/// minification tools.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Declaration file (.json, .js or .toml); discovered in the current
    /// directory when omitted
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render <script> tags for the given sets
    Tags {
        /// Set names, in page order
        #[arg(required = true, value_name = "SET")]
        names: Vec<String>,

        /// Build target (prod serves minified bundles)
        #[arg(short, long, value_enum, default_value_t = BuildTarget::Dev)]
        target: BuildTarget,
    },

    /// Emit concatenation/minification descriptors as JSON
    Plan {
        /// Base path the descriptors are resolved against
        #[arg(short, long, default_value = ".")]
        base: String,

        /// Build target (prod bundles and minifies everything)
        #[arg(short, long, value_enum, default_value_t = BuildTarget::Dev)]
        target: BuildTarget,

        /// Part of the plan to emit
        #[arg(short, long, value_enum, default_value_t = PlanStep::All)]
        step: PlanStep,

        /// Write the JSON to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// List declared sets
    List {
        /// Show the files of each set
        #[arg(short, long)]
        files: bool,
    },

    /// Validate the declaration
    Check,

    /// Create a scripts.json declaration
    Init {
        /// Template to use: starter, empty
        #[arg(short, long, default_value = "starter")]
        template: String,

        /// Overwrite an existing scripts.json
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let config = cli.config.as_deref();

    let result = match &cli.command {
        Some(Commands::Tags { names, target }) => cmd::cmd_tags(config, names, *target),
        Some(Commands::Plan {
            base,
            target,
            step,
            out,
        }) => {
            let options = PlanOptions {
                base,
                target: *target,
                step: *step,
            };
            cmd::cmd_plan(config, &options, out.as_deref())
        }
        Some(Commands::List { files }) => cmd::cmd_list(config, *files),
        Some(Commands::Check) => cmd::cmd_check(config),
        Some(Commands::Init { template, force }) => cmd::cmd_init(template, *force),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell, &mut Cli::command(), &mut std::io::stdout());
            Ok(())
        }
        None => {
            print!("{}", overview());
            Ok(())
        }
    };

    if let Err(e) = result {
        use scriptset::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}

/// Help shown when no command is given
fn overview() -> String {
    let mut text = format!("scriptset v{}\n", env!("CARGO_PKG_VERSION"));
    text.push_str("Script resource sets for bundling and <script> tags\n\n");
    text.push_str("Usage: scriptset <COMMAND>\n\n");
    text.push_str("Commands:\n");
    text.push_str("  tags         Render <script> tags for the given sets\n");
    text.push_str("  plan         Emit concatenation/minification descriptors\n");
    text.push_str("  list         List declared sets\n");
    text.push_str("  check        Validate the declaration\n");
    text.push_str("  init         Create a scripts.json declaration\n");
    text.push_str("  completions  Generate shell completions\n");
    text.push_str("\nRun 'scriptset <COMMAND> --help' for more information on a command.\n");
    text
}
