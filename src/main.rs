use anyhow::Context;
use clap::Parser;
use person_lookup::config::{build_query_handler, Command};
use person_lookup::utils::logger;
use person_lookup::{
    CliConfig, FixedQueryHandler, LookupConfig, LookupError, ParcelAdderBuilder, Person,
    PersonQuery,
};

fn run(config: &CliConfig, file: Option<&LookupConfig>) -> Result<String, LookupError> {
    match &config.command {
        Command::Find { name } => {
            let person = FixedQueryHandler::new().find_details(name)?;
            Ok(to_json(&person))
        }
        Command::Query {
            name, blacklist, ..
        } => {
            let handler = build_query_handler(blacklist.as_deref(), file)?;
            let person = handler.execute_query(name)?;
            Ok(to_json(&person))
        }
        Command::Sum { x, y } => {
            let total = ParcelAdderBuilder::new().build().sum(*x, *y)?;
            Ok(total.to_string())
        }
    }
}

fn to_json(person: &Person) -> String {
    serde_json::to_string_pretty(person).unwrap_or_else(|_| format!("{:?}", person))
}

fn fail(e: LookupError) -> ! {
    tracing::error!("❌ Lookup failed: {}", e);
    eprintln!("❌ {}", e);
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 配置檔可能帶有日誌設定，所以先讀取
    let file = config.config_file();
    let (level, file_json) = match &file {
        Ok(Some(file)) => (file.log_level(), file.json_logs()),
        _ => (None, false),
    };

    // 初始化日誌
    if config.json_logs || file_json {
        logger::init_json_logger(if config.verbose { Some("debug") } else { level });
    } else {
        logger::init_cli_logger(config.verbose, level);
    }

    tracing::info!("Starting person-lookup CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let file = file.context("failed to load config file")?;

    match run(&config, file.as_ref()) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => fail(e),
    }
}
