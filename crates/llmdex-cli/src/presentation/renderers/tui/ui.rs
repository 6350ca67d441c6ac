use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app::{App, Mode};
use super::views::{DetailPaneView, ModelListView, PickerView, QueryBarView, StatusBarView};
use crate::session::SessionController;

/// Draw one frame: query bar, list | detail, status bar, and the picker
/// popup when it is open.
pub fn draw(frame: &mut Frame, app: &mut App, session: &SessionController) {
    app.sync(session);
    let features = app.features;

    let [top, body, bottom] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(StatusBarView::height(session)),
    ])
    .areas(frame.area());

    let [list, detail] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);

    let editing = match &app.mode {
        Mode::Search { .. } => Some(app.search_buffer.as_str()),
        _ => None,
    };
    frame.render_widget(QueryBarView::new(session, features, editing), top);
    frame.render_stateful_widget(ModelListView::new(session, features), list, &mut app.table);
    frame.render_widget(DetailPaneView::new(session, features), detail);
    frame.render_widget(StatusBarView::new(session, features), bottom);

    if let Mode::Picker(picker) = &mut app.mode {
        let area = PickerView::area(frame.area(), picker.len());
        frame.render_stateful_widget(
            PickerView::new(&picker.providers, features),
            area,
            &mut picker.state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::presentation::guard::RenderFeatures;
    use crate::session::{Command, Movement};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use llmdex_engine::{CatalogueStore, QueryState};
    use llmdex_testing::fixtures::sample_entries;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn session() -> SessionController {
        SessionController::new(
            CatalogueStore::new(sample_entries()),
            QueryState::default(),
            Box::new(MemoryClipboard::default()),
        )
    }

    fn render(app: &mut App, session: &SessionController) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal.draw(|f| draw(f, app, session)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_layout_shows_list_detail_and_status() {
        let session = session();
        let mut app = App::new(RenderFeatures::FULL);
        let screen = render(&mut app, &session);

        let first = &sample_entries()[0];
        assert!(screen.contains(&format!("Models ({})", sample_entries().len())));
        assert!(screen.contains("Detail"));
        assert!(screen.contains("Capabilities"));
        assert!(screen.contains(&first.model_id));
        assert!(screen.contains("? help"));
        assert_eq!(app.table.selected(), Some(0));
    }

    #[test]
    fn test_reduced_features_use_ascii() {
        let session = session();
        let mut app = App::new(RenderFeatures::REDUCED);
        let screen = render(&mut app, &session);

        assert!(screen.contains("+-"));
        assert!(screen.contains("> "));
        assert!(!screen.contains('╭'));
        assert!(!screen.contains('▶'));
    }

    #[test]
    fn test_selection_moves_highlight() {
        let mut session = session();
        session.dispatch(Command::Select(Movement::To(2)));
        let mut app = App::new(RenderFeatures::FULL);
        let screen = render(&mut app, &session);

        assert_eq!(app.table.selected(), Some(2));
        assert!(screen.contains(&sample_entries()[2].model_id));
    }

    #[test]
    fn test_empty_view_has_no_detail() {
        let mut session = session();
        session.dispatch(Command::Search("zzzzzzzzzz".to_string()));
        let mut app = App::new(RenderFeatures::FULL);
        let screen = render(&mut app, &session);

        assert!(screen.contains("Models (0)"));
        assert!(screen.contains("No model selected"));
        assert_eq!(app.table.selected(), None);
    }

    #[test]
    fn test_help_bar_lists_keys() {
        let mut session = session();
        session.dispatch(Command::ToggleHelp);
        let mut app = App::new(RenderFeatures::FULL);
        let screen = render(&mut app, &session);
        assert!(screen.contains("[/]search"));
        assert!(screen.contains("[p]provider"));
    }

    #[test]
    fn test_picker_popup() {
        let mut session = session();
        let mut app = App::new(RenderFeatures::FULL);
        app.handle_key(
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE),
            &mut session,
        );
        let screen = render(&mut app, &session);
        assert!(screen.contains("Provider"));
        assert!(screen.contains("All providers"));
    }
}
