//! qrcon Admin CLI
//!
//! Sends one rcon command to a game server and prints the reply text.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use qrcon::{ClientConfig, PrintTarget, RconClient};

/// qrcon admin console
#[derive(Parser, Debug)]
#[command(name = "qrcon")]
#[command(about = "Admin console for legacy Quake-derived game servers")]
#[command(version)]
struct Args {
    /// Config file (YAML); flags override file values
    #[arg(short, long)]
    config: Option<String>,

    /// Server address (host:port)
    #[arg(short, long)]
    server: Option<String>,

    /// Rcon password
    #[arg(short, long)]
    password: Option<String>,

    /// Local bind address (host:port)
    #[arg(short, long)]
    bind: Option<String>,

    /// Receive timeout in milliseconds
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add an IP to the server ban list
    AddIp {
        /// The IP to ban
        ip: String,
    },

    /// Remove an IP from the server ban list
    RemoveIp {
        /// The IP to unban
        ip: String,
    },

    /// Kick the player in a slot
    Kick {
        /// Player slot
        slot: u8,
    },

    /// Ban the player in a slot
    Ban {
        /// Player slot
        slot: u8,
    },

    /// Show the server status report
    Status {
        /// Request the untruncated report
        #[arg(long)]
        full: bool,
    },

    /// List connected player slots
    Players,

    /// Broadcast a chat line as the server
    Say {
        /// The message to broadcast
        message: String,
    },

    /// Whisper a chat line to one slot
    Tell {
        /// Player slot
        slot: u8,

        /// The message to whisper
        message: String,
    },

    /// Restart the current round
    NewRound,

    /// Change the map
    Map {
        /// Map name
        name: String,
    },

    /// Change the game mode, optionally switching map at the same time
    Mode {
        /// Mode id
        id: u32,

        /// Optional map name
        map: Option<String>,
    },

    /// Print a message to a player's screen or console
    Print {
        /// Player slot, or "all"
        target: String,

        /// The message to print
        message: String,

        /// Print to the console only
        #[arg(long)]
        console: bool,
    },

    /// Send a raw console command
    Raw {
        /// The command line, passed through verbatim
        #[arg(required = true)]
        line: Vec<String>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    // File config first, flags on top
    let mut config = match &args.config {
        Some(path) => match ClientConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => ClientConfig::default(),
    };

    if let Some(server) = args.server {
        config.remote_addr = server;
    }
    if let Some(password) = args.password {
        config.password = password;
    }
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.timeout_ms = timeout_ms;
    }

    let mut client = match RconClient::connect(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to connect: {}", e);
            std::process::exit(1);
        }
    };

    let response = match args.command {
        Commands::AddIp { ip } => client.add_ip(&ip),
        Commands::RemoveIp { ip } => client.remove_ip(&ip),
        Commands::Kick { slot } => client.kick(slot),
        Commands::Ban { slot } => client.ban(slot),
        Commands::Status { full } => client.status(!full),
        Commands::Players => {
            let slots = client.player_slots();
            let listed: Vec<String> = slots.iter().map(u8::to_string).collect();
            println!("{}", listed.join(" "));
            return;
        }
        Commands::Say { message } => client.say(&message),
        Commands::Tell { slot, message } => client.tell(slot, &message),
        Commands::NewRound => client.new_round(),
        Commands::Map { name } => client.map(&name),
        Commands::Mode { id, map } => client.mode(id, map.as_deref()),
        Commands::Print {
            target,
            message,
            console,
        } => {
            let target = match parse_target(&target) {
                Some(target) => target,
                None => {
                    tracing::error!("Print target must be a slot number or \"all\"");
                    std::process::exit(1);
                }
            };
            client.print(target, &message, console)
        }
        Commands::Raw { line } => client.send(&line.join(" ")),
    };

    if !response.is_empty() {
        print!("{}", response);
    }
}

/// Parse a print target: a slot number or the literal "all"
fn parse_target(target: &str) -> Option<PrintTarget> {
    if target == "all" {
        return Some(PrintTarget::All);
    }

    target.parse().ok().map(PrintTarget::Slot)
}
