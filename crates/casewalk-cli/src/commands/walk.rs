use crate::render::{write_selector, write_step};
use crate::support::{exit_error, load_config_or_exit, open_corpus_or_exit};
use casewalk_kernel::normalize;
use casewalk_nav::{NavAction, NavState, resolve};
use casewalk_store::CaseStore;
use std::io::{self, BufRead, Write};

pub fn run(case_id: Option<String>, cases: Option<String>, config: Option<String>) {
    let config = load_config_or_exit(config.as_deref());
    let store = open_corpus_or_exit(&config.cases_dir(cases.as_deref()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(&store, case_id.as_deref(), stdin.lock(), &mut out)
        .unwrap_or_else(|e| exit_error(format!("failed to run session: {e}")));
}

enum Input {
    Action(NavAction),
    Quit,
    Blank,
    Unknown(String),
}

/// Drives one interactive session over arbitrary line input, so tests can
/// script it with a cursor instead of a live terminal.
pub fn run_session(
    store: &CaseStore,
    initial: Option<&str>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut state = NavState::selecting();
    if let Some(id) = initial {
        state = state.apply(NavAction::Pick(id.to_string()));
    }
    state = render_view(store, state, out)?;

    for line in input.lines() {
        let line = line?;
        match parse_input(&line) {
            Input::Action(action) => {
                state = state.apply(action);
                state = render_view(store, state, out)?;
            }
            Input::Quit => break,
            Input::Blank => continue,
            Input::Unknown(text) => {
                writeln!(out, "  unknown command: {text}")?;
            }
        }
    }

    Ok(())
}

fn render_view(
    store: &CaseStore,
    state: NavState,
    out: &mut impl Write,
) -> io::Result<NavState> {
    let (step, id) = match (state.step(), state.active_case.clone()) {
        (Some(step), Some(id)) => (step, id),
        _ => {
            write_selector(out, store.list_cases())?;
            return Ok(state);
        }
    };

    let Some(raw) = store.load_case(&id) else {
        writeln!(out)?;
        writeln!(out, "  case not found: {id}")?;
        let state = state.apply(NavAction::Exit);
        write_selector(out, store.list_cases())?;
        return Ok(state);
    };

    let case = normalize(raw);
    let content = resolve(&case, step);
    write_step(out, case.display_title(), &content, &state.snapshot())?;
    Ok(state)
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Blank;
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "next" | "n" => return Input::Action(NavAction::Next),
        "previous" | "p" => return Input::Action(NavAction::Previous),
        "exit" => return Input::Action(NavAction::Exit),
        "quit" | "q" => return Input::Quit,
        _ => {}
    }

    if let Some(id) = keyword_argument(trimmed, "pick") {
        return Input::Action(NavAction::Pick(id.to_string()));
    }
    if let Some(id) = keyword_argument(trimmed, "case") {
        return Input::Action(NavAction::SelectCase(id.to_string()));
    }

    Input::Unknown(trimmed.to_string())
}

fn keyword_argument<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?.strip_prefix(' ')?.trim();
    if rest.is_empty() { None } else { Some(rest) }
}
