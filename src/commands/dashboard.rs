//! `dashboard` handler.

use anyhow::Result;

use instamon::theme::current_theme;

use super::Context;

pub fn handle(ctx: &Context) -> Result<()> {
    let theme = current_theme();
    let dashboard = &ctx.config.dashboard;

    if !dashboard.is_linked() {
        println!(
            "{}",
            theme.error_text("No dashboard linked yet.")
        );
        println!(
            "{}",
            theme.secondary_text(&format!(
                "Set [dashboard] url in {}",
                ctx.config_path.display()
            ))
        );
        return Ok(());
    }

    println!("{}", theme.accent_text(dashboard.url.trim()));
    println!("{}", theme.secondary_text(&dashboard.iframe()));
    Ok(())
}
