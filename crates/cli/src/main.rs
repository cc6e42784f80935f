use clap::{CommandFactory, Parser, Subcommand};
use ec2ctl_aws::AwsCliProvider;
use ec2ctl_core::commands;

#[derive(Parser)]
#[command(name = "ec2ctl")]
#[command(about = "Manage EC2 instances by Name tag via the AWS CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the EC2 instance list
    List,
    /// Start an EC2 instance by Name tag
    Start {
        #[arg(help = "The instance Name tag value")]
        name: Option<String>,
    },
    /// Stop an EC2 instance by Name tag
    Stop {
        #[arg(help = "The instance Name tag value")]
        name: Option<String>,
    },
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return;
    };

    let aws = AwsCliProvider::new();
    let result = match command {
        Commands::List => commands::list::list_instances(&aws).await,
        Commands::Start { name: Some(name) } => commands::start::start_instance(&aws, &name).await,
        Commands::Stop { name: Some(name) } => commands::stop::stop_instance(&aws, &name).await,
        Commands::Start { name: None } | Commands::Stop { name: None } => {
            println!("Please provide the instance Name.");
            return;
        }
        Commands::Other(_) => {
            println!("Invalid command. Use 'list', 'start', 'stop', or '--help'.");
            return;
        }
    };

    // Failures are reported on stdout; the process exits 0 either way.
    if let Err(error) = result {
        println!("{error}");
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_target(false)
        .init();
}
