use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use reno_core::{chapters, step_info, StepId, WizardViewModel, FINAL_VIDEO, STEPS};
use reno_engine::{format_file_size, FilePreview};

use super::{Focus, UiContext};

const PROMPT_PLACEHOLDER: &str =
    "e.g. cut this footage into a five minute quick-edit course, stress the conclusions";

pub fn draw(frame: &mut Frame, view: &WizardViewModel, ctx: &UiContext) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(10), Constraint::Length(3)]).areas(frame.area());

    // The first step is a full-bleed hero screen; the stage rail appears
    // from step 2 onward, matching the original layout.
    let main = if view.step == StepId::Upload {
        body
    } else {
        let [rail, main] =
            Layout::horizontal([Constraint::Length(30), Constraint::Min(20)]).areas(body);
        draw_step_rail(frame, view, rail);
        main
    };

    match view.step {
        StepId::Upload => draw_upload(frame, view, ctx, main),
        StepId::Confirm => draw_confirm(frame, view, ctx, main),
        StepId::Suggestions => draw_suggestions(frame, main),
        StepId::ClipPreview => draw_clip_preview(frame, main),
        StepId::FinalPreview => draw_final_preview(frame, view, main),
    }

    draw_footer(frame, view, ctx, footer);

    if view.analyzing {
        draw_analysis_overlay(frame);
    }
}

fn draw_step_rail(frame: &mut Frame, view: &WizardViewModel, area: Rect) {
    let items: Vec<ListItem> = STEPS
        .iter()
        .map(|info| {
            let active = info.id == view.step;
            let done = info.id < view.step;
            let marker = if active {
                "> "
            } else if done {
                "+ "
            } else {
                "  "
            };
            let title_style = if active {
                Style::default().add_modifier(Modifier::BOLD)
            } else if done {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("Step {} ", info.id.number()), Style::default().fg(Color::DarkGray)),
                    Span::styled(info.title, title_style),
                ]),
                Line::from(Span::styled(
                    format!("    {}", info.description),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Flow"));
    frame.render_widget(list, area);
}

fn draw_upload(frame: &mut Frame, view: &WizardViewModel, ctx: &UiContext, area: Rect) {
    let [hero, prompt, lists] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(6),
    ])
    .areas(area);

    let hero_text = Paragraph::new(vec![
        Line::from(Span::styled(
            "R E N O",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Build your AI course: pick footage, describe the cut, review the plan.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(hero_text, hero);

    let prompt_line = if view.prompt.is_empty() {
        Line::from(Span::styled(
            PROMPT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(view.prompt.as_str())
    };
    let prompt_widget = Paragraph::new(prompt_line)
        .block(focusable_block("Brief", ctx.focus == Focus::Prompt));
    frame.render_widget(prompt_widget, prompt);

    let [browser_area, selection_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(lists);

    draw_browser(frame, ctx, browser_area);
    draw_selection(frame, view, ctx, selection_area, ctx.focus == Focus::Selection);
}

fn draw_browser(frame: &mut Frame, ctx: &UiContext, area: Rect) {
    let title = format!("Media ({})", ctx.media_dir.display());
    let block = focusable_block(&title, ctx.focus == Focus::Browser);

    if ctx.browser.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No video files found here. Press r to rescan.",
            Style::default().fg(Color::DarkGray),
        ))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = ctx
        .browser
        .iter()
        .map(|file| {
            ListItem::new(Line::from(vec![
                Span::raw(file.display_name.clone()),
                Span::styled(
                    format!("  {}", format_file_size(file.size_bytes)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    let mut state = ListState::default();
    state.select(Some(ctx.browser_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_selection(
    frame: &mut Frame,
    view: &WizardViewModel,
    ctx: &UiContext,
    area: Rect,
    focused: bool,
) {
    let title = format!("Selected ({}/6)", view.files.len());
    let block = focusable_block(&title, focused);

    if view.files.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "Nothing selected yet. Add up to six videos from the browser.",
            Style::default().fg(Color::DarkGray),
        ))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .files
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::raw(row.display_name.clone()),
                Span::styled(
                    format!("  {}", format_file_size(row.size_bytes)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    let mut state = ListState::default();
    state.select(Some(ctx.selection_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_confirm(frame: &mut Frame, view: &WizardViewModel, ctx: &UiContext, area: Rect) {
    let [files_area, brief_area] =
        Layout::vertical([Constraint::Min(6), Constraint::Length(5)]).areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Confirm footage");

    if view.files.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No footage yet. Go back one step to upload.",
            Style::default().fg(Color::DarkGray),
        ))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(empty, files_area);
    } else {
        let items: Vec<ListItem> = view
            .files
            .iter()
            .map(|row| {
                // The derived preview stands in for a playable video element.
                let preview = row.preview.as_ref().map(|reference| {
                    FilePreview::new(row.display_name.clone(), row.size_bytes, reference.clone())
                });
                let (size_label, status) = match &preview {
                    Some(preview) => (preview.size_label.clone(), "Ready"),
                    None => (format_file_size(row.size_bytes), "Pending"),
                };
                let reference_line = match &preview {
                    Some(preview) => Line::from(Span::styled(
                        format!("    {}", preview.reference),
                        Style::default().fg(Color::DarkGray),
                    )),
                    None => Line::from(Span::styled(
                        "    deriving preview...",
                        Style::default().fg(Color::DarkGray),
                    )),
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw("> "),
                        Span::styled(
                            row.display_name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  {size_label}  [{status}]"),
                            Style::default().fg(Color::Gray),
                        ),
                    ]),
                    reference_line,
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol("> ")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        let mut state = ListState::default();
        state.select(Some(ctx.selection_index));
        frame.render_stateful_widget(list, files_area, &mut state);
    }

    let brief = if view.prompt.trim().is_empty() {
        Span::styled(
            "No brief given; the course will follow the default template.",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(view.prompt.as_str())
    };
    let brief_widget = Paragraph::new(Line::from(brief))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Brief"));
    frame.render_widget(brief_widget, brief_area);
}

fn draw_suggestions(frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = chapters()
        .iter()
        .map(|chapter| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("CHAPTER {}", chapter.id),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    chapter.title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(chapter.summary, Style::default().fg(Color::Gray))),
                Line::raw(""),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("AI chapter plan (read-only)"),
    );
    frame.render_widget(list, area);
}

fn draw_clip_preview(frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = chapters()
        .iter()
        .map(|chapter| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        chapter.title,
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} - {}", chapter.start, chapter.end),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("    |> {}", crate::assets::asset_path(chapter.clip)),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(Span::styled(chapter.summary, Style::default().fg(Color::Gray))),
                Line::raw(""),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Chapter clips"),
    );
    frame.render_widget(list, area);
}

fn draw_final_preview(frame: &mut Frame, view: &WizardViewModel, area: Rect) {
    let [info_area, player_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    // The original shows 4 when nothing was selected; kept as-is.
    let video_count = if view.files.is_empty() { 4 } else { view.files.len() };
    let info = Paragraph::new(vec![
        Line::from(format!("Videos            {video_count}")),
        Line::from(format!("Chapters          {}", view.chapter_count)),
        Line::from("Suggested length  about 6 minutes"),
        Line::from("Style             tight and efficient"),
    ])
    .block(Block::default().borders(Borders::ALL).title("Course info"));
    frame.render_widget(info, info_area);

    let player = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("|> {}", crate::assets::asset_path(FINAL_VIDEO)),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            "mocked portrait player, playback simulated",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Final cut"));
    frame.render_widget(player, player_area);
}

fn draw_footer(frame: &mut Frame, view: &WizardViewModel, ctx: &UiContext, area: Rect) {
    let hints = match (view.step, ctx.focus) {
        (StepId::Upload, Focus::Prompt) => "Tab focus | type to edit the brief | Esc quit",
        (StepId::Upload, Focus::Browser) => {
            "Tab focus | Up/Down pick | Enter add | r rescan | n next | Esc quit"
        }
        (StepId::Upload, Focus::Selection) => {
            "Tab focus | Up/Down pick | d remove | n next | Esc quit"
        }
        (StepId::Confirm, _) => "n start analysis | b back | Up/Down pick | d remove | q quit",
        (StepId::FinalPreview, _) => "finish is mocked | b back | q quit",
        _ => "n next | b back | q quit",
    };

    let mut status = format!(
        "Step {}/{}  {}",
        view.step_number,
        STEPS.len(),
        step_info(view.step).title
    );
    if let Some(stats) = &view.last_add {
        status.push_str(&format!(
            "  |  last add: {} added, {} dropped",
            stats.added, stats.dropped
        ));
    }

    let footer = Paragraph::new(vec![
        Line::from(status),
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

fn draw_analysis_overlay(frame: &mut Frame) {
    let area = centered_rect(44, 5, frame.area());
    frame.render_widget(Clear, area);
    let overlay = Paragraph::new(vec![
        Line::from(Span::styled(
            "AI is analyzing the footage...",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "hang tight for a moment",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Analyzing"));
    frame.render_widget(overlay, area);
}

fn focusable_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(style)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
