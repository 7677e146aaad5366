use clap::Parser;
use dictionary_import::app::commands;
use dictionary_import::core::ConfigProvider;
use dictionary_import::utils::{logger, validation::Validate};
use dictionary_import::{
    CliConfig, Command, DictionaryApiClient, DictionaryImporter, ImportSettings,
    JsonFileEntryStore, LocalStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let settings = match ImportSettings::resolve(&cli).and_then(|settings| {
        settings.validate()?;
        Ok(settings)
    }) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let client = match DictionaryApiClient::from_config(&settings) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Cannot build dictionary API client: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(settings.store_path().to_string());
    let store = JsonFileEntryStore::with_file_name(storage, settings.store_file_name());
    let importer = DictionaryImporter::new(client, store);

    match &cli.command {
        Command::Word { word } => {
            let outcome = commands::import_word(&importer, word).await;
            commands::report(&outcome);
        }
    }

    Ok(())
}
