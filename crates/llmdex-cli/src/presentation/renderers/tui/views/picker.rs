use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Clear, List, ListItem, StatefulWidget, Widget},
};

use llmdex_engine::ProviderSummary;

use super::{block, highlight, marker};
use crate::presentation::guard::RenderFeatures;

/// Provider picker popup.
pub struct PickerView<'a> {
    providers: &'a [ProviderSummary],
    features: RenderFeatures,
}

impl<'a> PickerView<'a> {
    pub fn new(providers: &'a [ProviderSummary], features: RenderFeatures) -> Self {
        Self {
            providers,
            features,
        }
    }

    /// Centered popup area inside `area`.
    pub fn area(area: Rect, rows: usize) -> Rect {
        let width = area.width.min(48);
        let height = area.height.min(rows.saturating_add(2).min(u16::MAX as usize) as u16);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl StatefulWidget for PickerView<'_> {
    type State = ratatui::widgets::ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let mut items = vec![ListItem::new("All providers")];
        items.extend(
            self.providers
                .iter()
                .map(|p| ListItem::new(format!("{} ({}) [{}]", p.name, p.id, p.model_count))),
        );

        Clear.render(area, buf);
        let list = List::new(items)
            .block(block(self.features, " Provider ".to_string()))
            .highlight_style(highlight(self.features))
            .highlight_symbol(marker(self.features));
        StatefulWidget::render(list, area, buf, state);
    }
}
