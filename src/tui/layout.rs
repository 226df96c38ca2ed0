use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::config::{ColorConfig, Config, KeybindingConfig};
use crate::domain::content::{
    self, BREEDS, BREEDS_SUBTITLE, CHARACTERISTICS, CHARACTERISTICS_SUBTITLE,
};
use crate::domain::{PageVariant, Tab};
use crate::tui::app::TuiApp;

pub fn render(frame: &mut Frame, app: &TuiApp, config: &Config) {
    let colors = &config.colors;
    let variant = app.page.variant;

    let mut constraints = vec![
        Constraint::Length(3), // Title
        Constraint::Length(5), // Image(s)
        Constraint::Length(3), // Like button
    ];
    if variant.shows_happiness() {
        constraints.push(Constraint::Length(3));
    }
    if variant.fetches_remote() {
        constraints.push(Constraint::Length(5));
    }
    constraints.push(Constraint::Min(8)); // Tabs
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut next = chunks.iter().copied();
    let mut area = || next.next().unwrap_or_default();

    render_title(frame, area(), colors);
    render_images(frame, app, area(), colors);
    render_like_button(frame, app, area(), colors, &config.keybindings);
    if variant.shows_happiness() {
        render_happiness(frame, app, area(), colors);
    }
    if variant.fetches_remote() {
        render_fact(frame, app, area(), colors, &config.keybindings);
    }
    render_tabs(frame, app, area(), colors);
    render_status_bar(frame, app, area(), colors, &config.keybindings);
}

fn card(title: String, colors: &ColorConfig) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
}

fn render_title(frame: &mut Frame, area: Rect, colors: &ColorConfig) {
    let title = Paragraph::new(content::TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(colors.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}

fn render_images(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    if app.page.variant.fetches_remote() {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        render_gallery(frame, app, halves[0], colors);
        render_remote_image(frame, app, halves[1], colors);
    } else {
        render_gallery(frame, app, area, colors);
    }
}

fn render_gallery(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let image = app.page.gallery_image();
    let carousel = &app.page.carousel;

    let title = match app.page.variant {
        PageVariant::Classic => " Hero ".to_string(),
        _ => format!(" Gallery [{}/{}] ", carousel.index() + 1, carousel.len().max(1)),
    };

    let text = Text::from(vec![
        Line::from(Span::styled(
            image.caption,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(image.url, Style::default().fg(colors.link))),
    ]);

    let paragraph = Paragraph::new(text)
        .block(card(title, colors))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_remote_image(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let (caption, stamp) = match &app.page.image {
        Some(image) => (
            "Random cat".to_string(),
            format!("fetched {}", image.fetched_at.format("%H:%M:%S")),
        ),
        None => ("Placeholder".to_string(), "no picture yet".to_string()),
    };

    let text = Text::from(vec![
        Line::from(vec![
            Span::styled(caption, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" ({})", stamp)),
        ]),
        Line::from(Span::styled(
            app.page.remote_image_url().to_string(),
            Style::default().fg(colors.link),
        )),
    ]);

    let paragraph = Paragraph::new(text)
        .block(card(" Random Cat ".to_string(), colors))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_like_button(
    frame: &mut Frame,
    app: &TuiApp,
    area: Rect,
    colors: &ColorConfig,
    keys: &KeybindingConfig,
) {
    let line = Line::from(vec![
        Span::styled("♥ ", Style::default().fg(colors.heart)),
        Span::styled(
            format!("Like this cat! ({})", app.page.likes),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  [{}]", KeybindingConfig::hint(&keys.pet))),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn render_happiness(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let happiness = app.page.happiness;
    let label = format!("{}% · {}", happiness.level(), happiness.mood());

    let gauge = Gauge::default()
        .block(card(" Happiness ".to_string(), colors))
        .gauge_style(Style::default().fg(colors.gauge))
        .percent(u16::from(happiness.level()))
        .label(label);

    frame.render_widget(gauge, area);
}

fn render_fact(
    frame: &mut Frame,
    app: &TuiApp,
    area: Rect,
    colors: &ColorConfig,
    keys: &KeybindingConfig,
) {
    let (title, text) = match &app.page.fact {
        Some(fact) => (
            format!(" Cat Fact ({}) ", fact.fetched_at.format("%H:%M:%S")),
            Text::from(Span::styled(
                fact.value.clone(),
                Style::default().fg(colors.fact),
            )),
        ),
        None => (
            " Cat Fact ".to_string(),
            Text::from(format!(
                "Press {} for a cat fact",
                KeybindingConfig::hint(&keys.request_fact)
            )),
        ),
    };

    let paragraph = Paragraph::new(text)
        .block(card(title, colors))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let tabs = Tabs::new(Tab::ALL.iter().map(|tab| tab.title()))
        .select(app.page.tab.index())
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(colors.tab_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, chunks[0]);

    let (title, subtitle, items): (&str, &str, Vec<ListItem>) = match app.page.tab {
        Tab::Characteristics => (
            " Fascinating Cat Characteristics ",
            CHARACTERISTICS_SUBTITLE,
            CHARACTERISTICS
                .iter()
                .map(|trait_text| ListItem::new(format!("• {}", trait_text)))
                .collect(),
        ),
        Tab::Breeds => (
            " Captivating Cat Breeds ",
            BREEDS_SUBTITLE,
            BREEDS
                .iter()
                .map(|breed| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{}:", breed.name),
                            Style::default()
                                .fg(colors.breed_name)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!(" {}", breed.description)),
                    ]))
                })
                .collect(),
        ),
    };

    let block = card(title.to_string(), colors);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let subtitle = Paragraph::new(Span::styled(
        subtitle,
        Style::default().add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(subtitle, body[0]);
    frame.render_widget(List::new(items), body[1]);
}

fn render_status_bar(
    frame: &mut Frame,
    app: &TuiApp,
    area: Rect,
    colors: &ColorConfig,
    keys: &KeybindingConfig,
) {
    let base = Style::default().fg(colors.status_fg).bg(colors.status_bg);

    let (status, style) = if let Some(error) = app.page.visible_error() {
        (error.to_string(), base.fg(colors.error))
    } else if let Some(ref msg) = app.status_message {
        (msg.clone(), base)
    } else {
        (help_line(app.page.variant, keys), base)
    };

    frame.render_widget(Paragraph::new(status).style(style), area);
}

fn help_line(variant: PageVariant, keys: &KeybindingConfig) -> String {
    let hint = KeybindingConfig::hint;
    let mut parts = vec![format!("{}:Like", hint(&keys.pet))];
    if variant.fetches_remote() {
        parts.push(format!("{}:Fact", hint(&keys.request_fact)));
        parts.push(format!("{}:Image", hint(&keys.request_image)));
    }
    if variant != PageVariant::Classic {
        parts.push(format!(
            "{}/{}:Gallery",
            hint(&keys.carousel_prev),
            hint(&keys.carousel_next)
        ));
    }
    parts.push(format!("{}:Tabs", hint(&keys.next_tab)));
    parts.push(format!("{}:Open", hint(&keys.open_image)));
    parts.push(format!("{}:Quit", hint(&keys.quit)));
    parts.join("  ")
}
