#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use peeksheet::cli::CliArgs;
use peeksheet::config::SheetConfig;
use peeksheet::config_paths::ensure_all_config_dirs;
use peeksheet::runtime::App;

fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    peeksheet::tracing::init();
    ensure_all_config_dirs();

    let startup = CliArgs::parse()
        .into_config(SheetConfig::load())
        .map_err(|e| anyhow::anyhow!(e))?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup);

    event_loop.run_app(&mut app)?;

    Ok(())
}
