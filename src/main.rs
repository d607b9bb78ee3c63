use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use log::error;

use bsod_icon::config::IconPlan;
use bsod_icon::error::RunError;
use bsod_icon::logger;
use bsod_icon::packager::IconUtil;

fn generate() -> anyhow::Result<PathBuf> {
    let root = env::current_dir().context("cannot determine project root")?;
    let plan = IconPlan::for_root(&root);
    let icns = bsod_icon::run(&plan, &IconUtil::default())?;
    Ok(icns)
}

fn main() -> ExitCode {
    logger::init();
    match generate() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            let code = e.downcast_ref::<RunError>().map_or(1, RunError::exit_code);
            ExitCode::from(code)
        }
    }
}
