use clap::Parser;
use delegator::cli::{
    agents, handle_completions, handle_config_init, route, Cli, Commands, ConfigCommands,
};
use delegator::registry::AgentRegistry;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => delegator::cli::serve::run_serve(args).await,
        Commands::Route(args) => route::handle_route(&args).map(|output| println!("{}", output)),
        Commands::Agents(args) => {
            let registry = AgentRegistry::builtin();
            agents::handle_agents(&args, &registry).map(|output| println!("{}", output))
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
