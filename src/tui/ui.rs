//! Stateless rendering of a session view.

use pocket_games::{
    GameKind, GameView, LossReason, MachineState, NumbersRound, Outcome, SessionView, SnakeRound,
    WordleRound,
};
use pocket_numbers::Level;
use pocket_snake::{ArenaSettings, ITEM_SIZE, ItemKind, SEGMENT_SIZE};
use pocket_wordle::{MAX_ROUNDS, Tag, WORD_LEN};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Wrap,
        canvas::{Canvas, Rectangle},
    },
};
use strum::IntoEnumIterator;

/// Slots drawn per row of the Number Challenge board.
const SLOTS_PER_ROW: usize = 5;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, view: &SessionView<'_>, slot_cursor: usize, notice: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = match view.kind {
        Some(kind) => format!("Pocket Games - {}", kind),
        None => "Pocket Games".to_string(),
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    match view.game {
        None => draw_menu(frame, chunks[1]),
        Some(GameView::Numbers { level, round }) => match round {
            Some(round) if view.state != MachineState::Configuring => {
                draw_numbers(frame, chunks[1], round, slot_cursor, view.state)
            }
            _ => draw_levels(frame, chunks[1], level),
        },
        Some(GameView::Wordle { round }) => match round {
            Some(round) => draw_wordle(frame, chunks[1], round, view.state),
            None => draw_prompt(
                frame,
                chunks[1],
                "Press Enter to load the word lists and start",
            ),
        },
        Some(GameView::Snake { settings, round }) => match round {
            Some(round) => draw_snake(frame, chunks[1], &settings, round),
            None => draw_prompt(
                frame,
                chunks[1],
                "Press Enter to start, then any key sets the chain moving",
            ),
        },
    }

    let (status, color) = match notice {
        Some(notice) => (notice.to_string(), Color::Red),
        None => (status_line(view), Color::Yellow),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn status_line(view: &SessionView<'_>) -> String {
    match view.state {
        MachineState::Menu => "1-3: Choose a game | Esc: Quit".to_string(),
        MachineState::Configuring => match view.kind {
            Some(GameKind::Numbers) => {
                "1-5: Play level | Up/Down: Highlight | Enter: Start | Esc: Menu".to_string()
            }
            _ => "Enter: Start | Esc: Menu".to_string(),
        },
        MachineState::Playing => match view.kind {
            Some(GameKind::Numbers) => {
                "Left/Right: Slot | Enter/Space: Place | Esc: Back".to_string()
            }
            Some(GameKind::Wordle) => {
                "Type a word | Backspace: Erase | Enter: Guess | Esc: Back".to_string()
            }
            _ => "Arrows: Steer | Esc: Back".to_string(),
        },
        MachineState::Won => "You won! Enter/r: Replay | m: Menu | Esc: Back".to_string(),
        MachineState::Lost => {
            let reason = match view.outcome {
                Some(Outcome::Lost(reason)) => loss_text(reason),
                _ => "Game over",
            };
            format!("{} Enter/r: Replay | m: Menu | Esc: Back", reason)
        }
    }
}

fn loss_text(reason: LossReason) -> &'static str {
    match reason {
        LossReason::NoValidPlacement => "That number fits nowhere.",
        LossReason::RoundsExhausted => "Out of guesses.",
        LossReason::SelfCollision => "The chain bit itself.",
        LossReason::OutOfBounds => "The chain hit the wall.",
        LossReason::BodyTooShort => "Penalty with only the head left.",
    }
}

fn draw_prompt(frame: &mut Frame, area: Rect, text: &str) {
    let prompt = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(prompt, area);
}

fn draw_menu(frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = GameKind::iter()
        .map(|kind| ListItem::new(format!("{}  {}", kind.menu_key(), kind)))
        .collect();
    let menu = List::new(items).block(Block::default().borders(Borders::ALL).title("Games"));
    frame.render_widget(menu, area);
}

fn draw_levels(frame: &mut Frame, area: Rect, highlighted: Level) {
    let items: Vec<ListItem> = Level::iter()
        .map(|level| ListItem::new(format!("{}  ({} slots)", level, level.slots())))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Choose a level"))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Level::iter().position(|level| level == highlighted));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_numbers(
    frame: &mut Frame,
    area: Rect,
    round: &NumbersRound,
    cursor: usize,
    state: MachineState,
) {
    let legal = if state == MachineState::Playing {
        round.legal_slots()
    } else {
        Vec::new()
    };
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Next number: {}", round.current()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let slots = round.slots().as_slice();
    for (row, chunk) in slots.chunks(SLOTS_PER_ROW).enumerate() {
        let spans: Vec<Span> = chunk
            .iter()
            .enumerate()
            .map(|(offset, value)| {
                let index = row * SLOTS_PER_ROW + offset;
                let text = match value {
                    Some(value) => format!("[{:>4}]", value),
                    None => format!("[{:>4}]", format!("#{}", index + 1)),
                };
                let mut style = match value {
                    Some(_) => Style::default().fg(Color::White),
                    None if legal.contains(&index) => Style::default().fg(Color::Green),
                    None => Style::default().fg(Color::DarkGray),
                };
                if index == cursor && state == MachineState::Playing {
                    style = style.bg(Color::White).fg(Color::Black);
                }
                Span::styled(format!("{} ", text), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(round.level().to_string()));
    frame.render_widget(board, area);
}

fn tag_style(tag: Tag) -> Style {
    let bg = match tag {
        Tag::Correct => Color::Green,
        Tag::Misplaced => Color::Yellow,
        Tag::Absent => Color::DarkGray,
    };
    Style::default().bg(bg).fg(Color::Black).add_modifier(Modifier::BOLD)
}

fn draw_wordle(frame: &mut Frame, area: Rect, round: &WordleRound, state: MachineState) {
    let board = round.board();
    let mut lines = Vec::with_capacity(MAX_ROUNDS + 2);
    for index in 0..MAX_ROUNDS {
        let spans: Vec<Span> = match board.rounds().get(index) {
            Some(guess) => {
                let letters = guess.letters();
                (0..WORD_LEN)
                    .map(|i| {
                        let letter = letters
                            .get(i)
                            .map_or('_', |&b| char::from(b).to_ascii_uppercase());
                        let style = match guess.tags() {
                            Some(tags) => tag_style(tags[i]),
                            None if *round.invalid() => Style::default().fg(Color::Red),
                            None => Style::default(),
                        };
                        Span::styled(format!(" {} ", letter), style)
                    })
                    .collect()
            }
            None => vec![Span::styled(
                " _ ".repeat(WORD_LEN),
                Style::default().fg(Color::DarkGray),
            )],
        };
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    if *round.invalid() {
        lines.push(Line::from(Span::styled(
            "Not in the word list",
            Style::default().fg(Color::Red),
        )));
    } else if state == MachineState::Lost {
        lines.push(Line::from(format!(
            "The word was {}",
            board.secret().as_str().to_uppercase()
        )));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Guesses"));
    frame.render_widget(widget, area);
}

fn draw_snake(frame: &mut Frame, area: Rect, settings: &ArenaSettings, round: &SnakeRound) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);

    let arena = round.arena();
    let header = if *round.moving() {
        format!("Score: {}   Length: {}", arena.score(), arena.chain().len())
    } else {
        "Press any key to start moving".to_string()
    };
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), chunks[0]);

    let width = f64::from(settings.bounds.width);
    let height = f64::from(settings.bounds.height);
    let square = |x: f32, y: f32, size: f32, color: Color| Rectangle {
        x: f64::from(x - size / 2.0),
        y: height - f64::from(y + size / 2.0),
        width: f64::from(size),
        height: f64::from(size),
        color,
    };

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL))
        .marker(Marker::Block)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for item in [arena.reward(), arena.penalty()] {
                let color = match item.kind {
                    ItemKind::Reward => Color::Green,
                    ItemKind::Penalty => Color::Red,
                };
                ctx.draw(&square(item.position.x, item.position.y, ITEM_SIZE, color));
            }
            for (i, segment) in arena.chain().segments().iter().enumerate() {
                let color = if i == 0 { Color::Yellow } else { Color::Blue };
                ctx.draw(&square(segment.x, segment.y, SEGMENT_SIZE, color));
            }
        });
    frame.render_widget(canvas, chunks[1]);
}
