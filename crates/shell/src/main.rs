//! Copilot Shell - a minimal desktop shell for GitHub Copilot.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use inject::{ButtonFinderConfig, CleanupConfig};
use policy::PolicyConfig;
use shell::bridge::ShellEvent;
use shell::dialog::DialogController;
use shell::platform::SystemOpener;
use shell::storage::ProfileStorage;
use shell::{Surface, SurfaceConfig};

/// Default window size, matching the page's narrowest comfortable layout.
const WINDOW_WIDTH: u32 = 980;
const WINDOW_HEIGHT: u32 = 658;

/// Copilot Shell - GitHub Copilot as a desktop app
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Use an ephemeral data store instead of the persistent profile
    #[arg(long)]
    ephemeral: bool,

    /// Profile directory override
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Window width
    #[arg(long, default_value = "980")]
    width: u32,

    /// Window height
    #[arg(long, default_value = "658")]
    height: u32,

    /// Open the webview devtools
    #[arg(long)]
    devtools: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Copilot Shell v{}", shell::VERSION);

    // Storage is fail-fast: any error aborts startup with a diagnostic.
    let storage = if args.ephemeral {
        ProfileStorage::ephemeral()
    } else {
        ProfileStorage::persistent(args.data_dir.clone())
            .context("could not initialize profile storage")?
    };
    if let Some(dir) = storage.data_dir() {
        info!("Profile directory: {}", dir.display());
    }
    let mut web_context = storage.web_context();

    let event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("GitHub Copilot")
        .with_inner_size(LogicalSize::new(args.width, args.height))
        .with_min_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)
        .context("could not create window")?;

    info!("Loading {}", shell::ENTRY_URL);
    let surface = Surface::build(
        &window,
        SurfaceConfig::default().with_devtools(args.devtools),
        PolicyConfig::default(),
        CleanupConfig::default(),
        ButtonFinderConfig::default(),
        Arc::new(SystemOpener),
        &mut web_context,
        proxy,
    )
    .context("could not create browser surface")?;

    let dialogs = DialogController::with_native_dialogs();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        // The window must outlive the surface embedded in it.
        let _ = &window;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Window closed, shutting down");
                *control_flow = ControlFlow::Exit;
            }
            Event::UserEvent(ShellEvent::NavigationCompleted) => {
                surface.apply_post_navigation();
            }
            Event::UserEvent(ShellEvent::Dialog {
                request,
                confirm_id,
            }) => {
                if let Some(script) = dialogs.handle(&request, confirm_id) {
                    surface.evaluate(&script);
                }
            }
            _ => {}
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = Args::parse_from(["copilot-shell"]);
        assert!(!args.ephemeral);
        assert!(!args.verbose);
        assert_eq!(args.width, 980);
        assert_eq!(args.height, 658);
    }

    #[test]
    fn test_args_ephemeral() {
        let args = Args::parse_from(["copilot-shell", "--ephemeral", "--verbose"]);
        assert!(args.ephemeral);
        assert!(args.verbose);
    }

    #[test]
    fn test_args_data_dir() {
        let args = Args::parse_from(["copilot-shell", "--data-dir", "/tmp/profile"]);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/profile")));
    }
}
