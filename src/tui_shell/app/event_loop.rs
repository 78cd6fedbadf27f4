use super::super::wizard::AuthMode;
use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        // Draw the loading state first, then block on the fetch.
        if app.needs_load {
            app.load_active_view();
            continue;
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.quit = true;
            return;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.view_mut().move_up();
            return;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.view_mut().move_down();
            return;
        }
        _ => {}
    }

    match app.controller.view() {
        session::View::Anonymous => match key.code {
            KeyCode::Char('l') | KeyCode::Enter => app.start_auth(AuthMode::Login),
            KeyCode::Char('r') => app.start_auth(AuthMode::Register),
            KeyCode::Esc => app.quit = true,
            _ => {}
        },

        session::View::ChecklistList => match key.code {
            KeyCode::Enter => app.open_selected_checklist(),
            KeyCode::Char('n') => app.start_new_checklist(),
            KeyCode::Char('d') | KeyCode::Delete => app.confirm_delete_selected(),
            KeyCode::Char('g') => app.reload(),
            KeyCode::Char('L') => app.logout(),
            _ => {}
        },

        session::View::ItemList => match key.code {
            KeyCode::Char(' ') => app.toggle_selected_item(),
            KeyCode::Char('n') => app.start_new_item(),
            KeyCode::Char('e') => app.start_rename_selected(),
            KeyCode::Char('d') | KeyCode::Delete => app.confirm_delete_selected(),
            KeyCode::Char('g') => app.reload(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.back_to_checklists(),
            KeyCode::Char('L') => app.logout(),
            _ => {}
        },
    }
}
