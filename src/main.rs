use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use edugate::cli;
use edugate::state::{AppState, init_app_state};
use edugate_config::{AuthConfig, SessionConfig};
use edugate_observability::init_logging;

#[derive(Parser)]
#[command(name = "edugate")]
#[command(about = "Edugate - School management console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with a demo account
    Login {
        /// Username (prompted if not provided)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Check one or more permission tokens against the current session
    Can {
        /// Permission tokens, e.g. `students fees`
        #[arg(required = true)]
        tokens: Vec<String>,

        /// Require every token instead of any one of them
        #[arg(long)]
        all: bool,
    },
    /// Ask the route guard whether a view may be opened
    Open {
        /// Route path, e.g. `/students`
        path: String,
    },
    /// Show the navigation menu for the current session
    Menu,
    /// Print the role to permission mapping
    Roles,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let log_guard = init_logging();

    let cli = Cli::parse();

    let result = match init_app_state(&SessionConfig::from_env(), AuthConfig::from_env()) {
        Ok(state) => run(&state, cli.command).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {:#}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}

async fn run(state: &AppState, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login { username, password } => {
            cli::handle_login(state, username, password).await
        }
        Commands::Logout => cli::handle_logout(state),
        Commands::Whoami => {
            cli::handle_whoami(state);
            Ok(())
        }
        Commands::Can { tokens, all } => {
            cli::handle_can(state, &tokens, all);
            Ok(())
        }
        Commands::Open { path } => cli::handle_open(state, &path),
        Commands::Menu => {
            cli::handle_menu(state);
            Ok(())
        }
        Commands::Roles => {
            cli::handle_roles(state);
            Ok(())
        }
    }
}
