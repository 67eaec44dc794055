use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(long, value_name = "PATH", help = "Set custom data path")]
    data_path: Option<String>,
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    let storage = DataStorage::new();
    let mut config = Config::read_from(&storage)?;

    match args.data_path {
        Some(path) => {
            let resolved = config.set_data_path(&storage, &path)?;
            msg_success!(Message::DataPathSet(resolved.display().to_string()));
        }
        None => {
            let data_path = config.data_path(&storage);
            msg_print!(Message::CurrentConfiguration);
            msg_print!(Message::ConfiguredDataPath(data_path.display().to_string()));
            let resolved = std::fs::canonicalize(&data_path).unwrap_or(data_path);
            msg_print!(Message::ResolvedDataPath(resolved.display().to_string()));
        }
    }
    Ok(())
}
