//! Check command implementation

use anyhow::Result;
use flow_config::resolve::layout::NAMESPACE_MASK;
use flow_config::settings::Settings;
use flow_config::source::ConfigSource;
use flow_config::store::FileStore;
use flow_config::utils::file_name;

pub fn run(settings: &Settings) -> Result<()> {
    let store = settings.store();
    let root = store.root().display().to_string();

    if !store.is_dir() {
        anyhow::bail!("Configuration root {} does not exist", root);
    }
    println!("Configuration root {} exists", root);
    println!("Configuration root contains {} files", store.file_count()?);

    let files = store.list(NAMESPACE_MASK, false)?;
    println!("Configuration root contains {} files that match the mask {}", files.len(), NAMESPACE_MASK);

    for (idx, entry) in files.iter().enumerate() {
        println!("  {:>3}. {}", idx + 1, file_name(&entry.path));
    }

    for entry in &files {
        match ConfigSource::load(&store, &entry.path, true) {
            Ok(Some(source)) => println!(
                "Config file '{}' ({} style) - {} headers, {} keys",
                file_name(&entry.path),
                source.style(),
                source.headers().len(),
                source.key_count()
            ),
            Ok(None) => println!("Config file '{}' disappeared during check", file_name(&entry.path)),
            Err(err) => println!("Failed parsing config file '{}': {}", file_name(&entry.path), err),
        }
    }

    Ok(())
}
