use anyhow::Result;
use chrono::NaiveDate;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::fs;
use std::path::Path;

use crate::types::{Category, Task};
use crate::week::{long_date_es, short_day_label, tasks_for_date, week_window};

/// Render the board to a static HTML file
pub fn generate_html(tasks: &[Task], today: NaiveDate, path: &Path) -> Result<()> {
    let html = render_page(tasks, today);
    fs::write(path, html.into_string())?;
    Ok(())
}

pub fn render_page(tasks: &[Task], today: NaiveDate) -> Markup {
    let week = week_window(today);
    let pending = tasks.iter().filter(|t| !t.completed).count();

    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Mi Agenda Personal" }
                style { (PreEscaped(CSS)) }
            }
            body {
                header.topbar {
                    h1 { "Mi Agenda Personal" }
                    div.topbar-side {
                        span.current-date { (long_date_es(today)) }
                        button.theme-toggle #"theme-toggle" type="button" title="Cambiar tema" {
                            "\u{1F319}"
                        }
                    }
                }
                div.container {
                    form.add-form action="/tasks" method="post" {
                        input.add-input
                            type="text"
                            name="text"
                            placeholder="Nueva tarea..."
                            autocomplete="off"
                            autofocus;
                        select.add-category name="category" {
                            @for cat in Category::ALL {
                                option value=(cat.as_str()) { (cat.icon()) " " (cat.label()) }
                            }
                        }
                        button.add-button type="submit" { "Agregar" }
                    }
                    div.week-board {
                        @for day in week {
                            (render_day_column(tasks, day, today))
                        }
                    }
                    div.stats {
                        (pending) " pendientes · " (tasks.len()) " en total"
                    }
                }
                script { (PreEscaped(JAVASCRIPT)) }
            }
        }
    }
}

fn render_day_column(tasks: &[Task], day: NaiveDate, today: NaiveDate) -> Markup {
    let items = tasks_for_date(tasks, day);

    html! {
        div.day-column .today[day == today] {
            div.day-header { (short_day_label(day)) }
            @if items.is_empty() {
                div.empty-day { "Sin tareas" }
            } @else {
                @for task in items {
                    (render_task(task))
                }
            }
        }
    }
}

fn render_task(task: &Task) -> Markup {
    html! {
        div.task .completed[task.completed] {
            span.task-category title=(task.category.label()) { (task.category.icon()) }
            span.task-text { (task.text) }
            div.task-actions {
                form action={ "/tasks/" (task.id) "/toggle" } method="post" {
                    button.task-button.toggle type="submit" title="Completar" { "\u{2713}" }
                }
                form action={ "/tasks/" (task.id) "/advance" } method="post" {
                    button.task-button.advance type="submit" title="Pasar a mañana" { "\u{2192}" }
                }
                form action={ "/tasks/" (task.id) "/delete" } method="post" {
                    button.task-button.delete type="submit" title="Eliminar" { "\u{2715}" }
                }
            }
        }
    }
}

const CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root {
    --bg: #f4f1ea;
    --surface: #ffffff;
    --text: #2b2b2b;
    --muted: #8a8578;
    --border: #ddd8cc;
    --accent: #c94d37;
    --accent-soft: #f3ddd8;
    --done: #7a9e7e;
}

[data-theme="dark"] {
    --bg: #1d1f24;
    --surface: #282b33;
    --text: #e8e6e0;
    --muted: #8b8fa0;
    --border: #3a3e49;
    --accent: #e07a5f;
    --accent-soft: #453531;
    --done: #81b29a;
}

body {
    font-family: 'Georgia', 'Times New Roman', serif;
    background: var(--bg);
    color: var(--text);
    min-height: 100vh;
    line-height: 1.5;
}

.topbar {
    display: flex;
    align-items: baseline;
    justify-content: space-between;
    padding: 24px 32px 16px;
    border-bottom: 2px solid var(--accent);
}

.topbar h1 {
    font-size: 1.6em;
    font-weight: 700;
    letter-spacing: -0.01em;
}

.topbar-side {
    display: flex;
    align-items: center;
    gap: 16px;
}

.current-date {
    color: var(--muted);
    font-style: italic;
    text-transform: capitalize;
}

.theme-toggle {
    background: none;
    border: 1px solid var(--border);
    border-radius: 50%;
    width: 36px;
    height: 36px;
    cursor: pointer;
    font-size: 1em;
}

.theme-toggle:hover {
    border-color: var(--accent);
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 24px 32px 48px;
}

.add-form {
    display: flex;
    gap: 8px;
    margin-bottom: 28px;
}

.add-input {
    flex: 1;
    padding: 10px 14px;
    font: inherit;
    color: var(--text);
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 6px;
}

.add-input:focus {
    outline: 2px solid var(--accent);
    border-color: transparent;
}

.add-category {
    padding: 10px;
    font: inherit;
    color: var(--text);
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 6px;
    cursor: pointer;
}

.add-button {
    padding: 10px 22px;
    font: inherit;
    font-weight: 700;
    color: #fff;
    background: var(--accent);
    border: none;
    border-radius: 6px;
    cursor: pointer;
}

.add-button:hover {
    filter: brightness(1.1);
}

.week-board {
    display: flex;
    gap: 12px;
    overflow-x: auto;
    padding-bottom: 8px;
}

.day-column {
    flex: 1;
    min-width: 150px;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 12px;
}

.day-column.today {
    border-color: var(--accent);
    box-shadow: 0 0 0 1px var(--accent);
}

.day-header {
    font-weight: 700;
    text-transform: capitalize;
    color: var(--muted);
    margin-bottom: 12px;
    padding-bottom: 8px;
    border-bottom: 1px solid var(--border);
}

.day-column.today .day-header {
    color: var(--accent);
}

.empty-day {
    color: var(--muted);
    font-style: italic;
    font-size: 0.85em;
}

.task {
    background: var(--bg);
    border: 1px solid var(--border);
    border-radius: 6px;
    padding: 8px 10px;
    margin-bottom: 8px;
    font-size: 0.9em;
}

.task.completed .task-text {
    text-decoration: line-through;
    color: var(--muted);
}

.task.completed {
    background: var(--accent-soft);
}

.task-category {
    margin-right: 6px;
}

.task-actions {
    display: flex;
    gap: 4px;
    margin-top: 6px;
}

.task-actions form {
    display: inline;
}

.task-button {
    border: 1px solid var(--border);
    background: var(--surface);
    color: var(--text);
    border-radius: 4px;
    width: 26px;
    height: 24px;
    cursor: pointer;
    font-size: 0.85em;
}

.task-button.toggle:hover {
    color: var(--done);
    border-color: var(--done);
}

.task-button.advance:hover {
    color: var(--accent);
    border-color: var(--accent);
}

.task-button.delete:hover {
    color: #c0392b;
    border-color: #c0392b;
}

.stats {
    margin-top: 24px;
    color: var(--muted);
    font-size: 0.85em;
    font-style: italic;
}

@media (max-width: 768px) {
    .topbar {
        flex-direction: column;
        gap: 4px;
        align-items: flex-start;
    }

    .container {
        padding: 16px;
    }
}
"#;

const JAVASCRIPT: &str = r#"
// Theme choice lives in the browser only; it never touches the task data.
const THEME_KEY = 'agendita-theme';

function applyTheme(theme) {
    document.documentElement.setAttribute('data-theme', theme);
    const toggle = document.getElementById('theme-toggle');
    if (toggle) {
        toggle.textContent = theme === 'dark' ? '☀️' : '🌙';
    }
}

function currentTheme() {
    return localStorage.getItem(THEME_KEY) || 'light';
}

document.getElementById('theme-toggle').addEventListener('click', () => {
    const next = currentTheme() === 'dark' ? 'light' : 'dark';
    localStorage.setItem(THEME_KEY, next);
    applyTheme(next);
});

applyTheme(currentTheme());
"#;
