use anyhow::{bail, Result};
use ponde::precision::min_shape_ratio;
use ponde::RenderConfig;

pub fn run(config: &RenderConfig) -> Result<()> {
    config.style()?;
    match config.shape() {
        Ok(_) => {
            println!(
                "✓ a = {}, b = {}: b/a = {:.6} > sin(pi/8) = {:.6}",
                config.a,
                config.b,
                config.b / config.a,
                min_shape_ratio()
            );
            Ok(())
        }
        Err(e) => bail!("✗ {}", e),
    }
}
