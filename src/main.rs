use arenaserver::server;
use arenaserver::{Arena, ArenaHandle, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load immutable config before anything logs
    let config = Config::from_env();
    setup_logging(&config)?;
    log::info!("Starting arena server with {:?}", config);

    // One arena, owned by its loop; connections talk to it through the handle
    let (arena, arena_task) = ArenaHandle::spawn(Arena::with_system_clock(), config.command_capacity);

    // Losing the loop leaves every connection without a world: treat as fatal
    tokio::select! {
        result = server::start_server(&config, arena) => result?,
        joined = arena_task => {
            match joined {
                Ok(arena) => log::error!("Arena loop stopped with {} players", arena.len()),
                Err(e) => log::error!("Arena loop failed: {}", e),
            }
            return Err("arena loop exited".into());
        }
    }

    Ok(())
}

fn setup_logging(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Utc::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(config.log_level)
        .chain(std::io::stdout());

    if let Some(path) = &config.log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}
