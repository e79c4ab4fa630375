use anyhow::Context;
use sheet_demo::{default_script, run, screen_size_from_env};
use snapsheet::BottomSheetConfig;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let screen = screen_size_from_env()?;
    let config = BottomSheetConfig::new(screen);
    config.validate().context("screen cannot host a sheet")?;

    let outcome = run(config, &default_script(config.min_position()))?;
    log::info!(
        "finished after {} frames: y={:.1} active={}",
        outcome.frames,
        outcome.translate_y,
        outcome.active
    );
    Ok(())
}
