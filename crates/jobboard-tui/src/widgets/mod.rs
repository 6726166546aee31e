//! Ratatui widgets for the jobboard TUI.

pub mod command_bar;
pub mod filter_bar;
pub mod help;
pub mod job_detail;
pub mod job_list;
pub mod status_line;
pub mod tab_bar;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
