pub mod args;
mod setup;

pub use args::AppArgs;
pub use setup::SetupError;

use crate::menu::MenuController;
use crate::ui::run_tui;
use anyhow::Result;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp { args, save_slot } = setup::prepare(args)?;

    let menu = MenuController::new(save_slot.exists());
    let outcome = run_tui(menu, args.title).await?;

    if let Some(message) = outcome.message() {
        println!("{}", message);
    }

    Ok(())
}
