//! Config command implementation: changes to the vimrc

use crate::cli::{ConfigArgs, ConfigSubcommand};
use crate::config::Settings;
use crate::error::Result;
use crate::ui::display;
use crate::vimrc::{Vimrc, preferred_editor};

/// Run config command
pub fn run(settings: &Settings, args: ConfigArgs) -> Result<()> {
    let vimrc = Vimrc::new(&settings.vimrc_path);

    match args.command {
        ConfigSubcommand::Add { text } => {
            vimrc.append(&text.join(" "))?;
            display::success(format!("Added to {}", vimrc.path().display()));
            Ok(())
        }
        ConfigSubcommand::Edit => vimrc.edit(&preferred_editor()),
    }
}
