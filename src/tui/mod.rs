pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::config::Config;
use crate::domain::{PageState, PageVariant};

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: &AppContext, config: &Config, variant: PageVariant) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, config, variant).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Tui,
    ctx: &AppContext,
    config: &Config,
    variant: PageVariant,
) -> Result<()> {
    let page = PageState::new(
        variant,
        config.page.settings(),
        config.page.initial_happiness(),
    );
    let mut tui_app = TuiApp::new(page, ctx.source.clone());
    let event_handler = EventHandler::new(Duration::from_millis(100));

    tui_app.start(&config.page);

    loop {
        terminal.draw(|frame| layout::render(frame, &tui_app, config))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = config.keybindings.get_action(&key);
                match action {
                    Action::Quit => {
                        tui_app.should_quit = true;
                    }
                    other => {
                        if let Some(msg) = other.to_msg() {
                            tui_app.dispatch(msg);
                        }
                    }
                }
            }
            AppEvent::Resize => {}
            AppEvent::Tick => tui_app.tick(),
        }

        tui_app.drain_messages();

        if tui_app.should_quit {
            break;
        }
    }

    tui_app.stop();
    Ok(())
}
