use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

use crate::app::Result;
use crate::domain::PageMsg;

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for terminal input.
    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Windows reports releases as well as presses.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(AppEvent::Key(key));
                }
                Event::Resize(_, _) => return Ok(AppEvent::Resize),
                _ => {}
            }
        }
        Ok(AppEvent::Tick)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Pet,
    RequestFact,
    RequestImage,
    NextTab,
    PrevTab,
    CarouselNext,
    CarouselPrev,
    OpenImage,
    None,
}

impl Action {
    /// The page message this action stands for. `Quit` and `None` have none.
    pub fn to_msg(self) -> Option<PageMsg> {
        match self {
            Action::Pet => Some(PageMsg::Pet),
            Action::RequestFact => Some(PageMsg::RequestFact),
            Action::RequestImage => Some(PageMsg::RequestImage),
            Action::NextTab => Some(PageMsg::NextTab),
            Action::PrevTab => Some(PageMsg::PrevTab),
            Action::CarouselNext => Some(PageMsg::CarouselNext),
            Action::CarouselPrev => Some(PageMsg::CarouselPrev),
            Action::OpenImage => Some(PageMsg::OpenImage),
            Action::Quit | Action::None => None,
        }
    }
}
