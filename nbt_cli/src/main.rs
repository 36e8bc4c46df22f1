use anyhow::Result;
use nbt_engine::StreamSinkConfig;
use nbt_types::{Compound, NamedTag, TagList, TagType};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const ENV_VAR_OUT_PATH: &str = "NBT_OUT_PATH";

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let out_path = env::var(ENV_VAR_OUT_PATH).map_or_else(
        |_| env::temp_dir().join("nbt").join("sample.nbt"),
        PathBuf::from,
    );
    let conf = StreamSinkConfig::from_env()?;

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let doc = sample_doc()?;
    let expected_len = nbt_engine::encoded_len(&doc)?;

    let file = File::create(&out_path)?;
    let file = nbt_engine::to_writer_with_config(&doc, file, &conf)?;
    file.sync_all()?;

    tracing::info!(path = ?out_path, bytes = expected_len, "wrote sample document");

    Ok(())
}

fn sample_doc() -> Result<NamedTag> {
    let mut pos = TagList::empty(TagType::Double);
    for coord in [12.5f64, 64.0, -3.25] {
        pos.push(coord)?;
    }

    let mut inventory = TagList::empty(TagType::Compound);
    for (slot, id, count) in [(0i8, "minecraft:stone", 64i8), (1, "minecraft:torch", 16)] {
        let item = Compound::new()
            .with("Slot", slot)
            .with("id", id)
            .with("Count", count);
        inventory.push(item)?;
    }

    let player = Compound::new()
        .with("Name", "Steve")
        .with("Health", 20.0f32)
        .with("XpTotal", 1395i32)
        .with("LastPlayed", 1_700_000_000_000i64)
        .with("Pos", pos)
        .with("Inventory", inventory)
        .with("Seen", vec![0i8, 1, 1, 0])
        .with("UUID", vec![0x1234i32, -1, 7, 42])
        .with("Checksums", vec![i64::MIN, 0, i64::MAX]);

    Ok(NamedTag::new("", Compound::new().with("Data", player)))
}
