use anyhow::Context;
use clap::{Arg, Command};
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::{path::Path, sync::Arc};
use tokio::net::TcpListener;

use loot_data::{DropTableDatabase, ItemDatabase};
use loot_server::{
    game::{
        services::{HeadlessEntityFactory, MemoryInventory},
        GameConfig, GameData, GameWorld,
    },
    protocol::LootServer,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let command = Command::new("loot-server")
        .about("Loot drop table and lifecycle server")
        .arg(
            Arg::new("config")
                .long("config")
                .help("JSON game config file, defaults are used for anything missing.")
                .takes_value(true),
        )
        .arg(
            Arg::new("items")
                .long("items")
                .help("Item database JSON file.")
                .takes_value(true)
                .default_value("data/items.json"),
        )
        .arg(
            Arg::new("drop-tables")
                .long("drop-tables")
                .help("Drop table JSON file.")
                .takes_value(true)
                .default_value("data/drop_tables.json"),
        )
        .arg(
            Arg::new("listen")
                .long("listen")
                .help("Address to accept client connections on.")
                .takes_value(true)
                .default_value("127.0.0.1:29100"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .takes_value(true)
                .default_value("info")
                .value_parser(["off", "error", "warn", "info", "debug", "trace"]),
        );
    let matches = command.get_matches();

    let log_level = match matches.value_of("log-level") {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    TermLogger::init(
        log_level,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .add_filter_ignore_str("bevy")
            .build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("failed to initialise logger")?;

    let game_config = match matches.value_of("config") {
        Some(path) => GameConfig::load(Path::new(path))
            .with_context(|| format!("failed to load game config {}", path))?,
        None => GameConfig::default(),
    };
    game_config.validate()?;

    let items_path = matches.value_of("items").unwrap_or("data/items.json");
    let items = Arc::new(
        ItemDatabase::load(Path::new(items_path))
            .with_context(|| format!("failed to load item database {}", items_path))?,
    );

    let drop_tables_path = matches
        .value_of("drop-tables")
        .unwrap_or("data/drop_tables.json");
    let drop_tables = Arc::new(
        DropTableDatabase::load(Path::new(drop_tables_path))
            .with_context(|| format!("failed to load drop tables {}", drop_tables_path))?,
    );
    info!(
        "Loaded {} items and {} drop tables",
        items.len(),
        drop_tables.len()
    );
    for creature_type in drop_tables.creature_types() {
        debug!("Drop table registered for {}", creature_type);
    }

    let listen_address = matches.value_of("listen").unwrap_or("127.0.0.1:29100");
    let listener = TcpListener::bind(listen_address)
        .await
        .with_context(|| format!("failed to listen on {}", listen_address))?;

    let inventory = Arc::new(MemoryInventory::new(
        items.clone(),
        game_config.inventory_slots,
    ));
    let game_data = GameData::new(items, drop_tables);
    let entity_factory = match game_config.entity_limit {
        Some(limit) => HeadlessEntityFactory::with_limit(limit),
        None => HeadlessEntityFactory::new(),
    };
    let runtime = tokio::runtime::Handle::current();

    let (game_control_tx, game_control_rx) = crossbeam_channel::unbounded();
    std::thread::spawn(move || {
        GameWorld::new(game_control_rx).run(
            game_config,
            game_data,
            inventory,
            Box::new(entity_factory),
            runtime,
        );
    });

    let mut loot_server = LootServer::new(listener, game_control_tx)?;
    loot_server.run().await;
    Ok(())
}
